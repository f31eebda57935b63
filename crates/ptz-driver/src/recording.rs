//! 异步录制钩子（Async Recording Hook）
//!
//! 基于有界 Channel 的网关调用录制，用于审计和回归比对。
//!
//! # 设计原则
//!
//! - **Bounded Queue**: 使用 `bounded(10_000)` 防止 OOM
//! - **非阻塞**: 使用 `try_send`，队列满时丢弃而非阻塞控制器
//! - **丢弃监控**: 提供 `dropped_calls` 计数器
//!
//! # 使用示例
//!
//! ```rust
//! use ptz_driver::recording::AsyncRecordingHook;
//! use ptz_driver::hooks::CallCallback;
//! use std::sync::Arc;
//!
//! let (hook, rx) = AsyncRecordingHook::new();
//! let dropped = hook.dropped_calls().clone();
//! let callback = Arc::new(hook) as Arc<dyn CallCallback>;
//!
//! std::thread::spawn(move || {
//!     while let Ok(call) = rx.recv() {
//!         // 处理调用记录...
//!         let _ = call;
//!     }
//! });
//!
//! println!("丢弃 {} 条", dropped.load(std::sync::atomic::Ordering::Relaxed));
//! # drop(callback);
//! ```

use crate::hooks::CallCallback;
use crate::{DriverError, GatewayCall};
use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// 默认队列容量
const DEFAULT_CAPACITY: usize = 10_000;

/// 带时间戳的调用记录
#[derive(Debug, Clone)]
pub struct TimestampedCall {
    /// 调用返回时刻
    pub at: Instant,

    pub call: GatewayCall,

    /// 是否成功
    pub succeeded: bool,
}

/// 异步录制钩子
pub struct AsyncRecordingHook {
    tx: Sender<TimestampedCall>,

    /// 丢弃计数器（队列满）
    dropped_calls: Arc<AtomicU64>,

    /// 录制计数器（每次成功入队时递增）
    call_counter: Arc<AtomicU64>,
}

impl AsyncRecordingHook {
    /// 创建新的录制钩子（容量 10,000 条）
    #[must_use]
    pub fn new() -> (Self, Receiver<TimestampedCall>) {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> (Self, Receiver<TimestampedCall>) {
        let (tx, rx) = bounded(capacity);

        let hook = Self {
            tx,
            dropped_calls: Arc::new(AtomicU64::new(0)),
            call_counter: Arc::new(AtomicU64::new(0)),
        };

        (hook, rx)
    }

    /// 丢弃计数器（直接持有 Arc 引用即可跨线程监控）
    #[must_use]
    pub fn dropped_calls(&self) -> &Arc<AtomicU64> {
        &self.dropped_calls
    }

    #[must_use]
    pub fn call_counter(&self) -> &Arc<AtomicU64> {
        &self.call_counter
    }

    fn record(&self, call: &GatewayCall, succeeded: bool) {
        let entry = TimestampedCall {
            at: Instant::now(),
            call: *call,
            succeeded,
        };
        if self.tx.try_send(entry).is_err() {
            self.dropped_calls.fetch_add(1, Ordering::Relaxed);
        } else {
            self.call_counter.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl CallCallback for AsyncRecordingHook {
    fn on_call_sent(&self, call: &GatewayCall) {
        self.record(call, true);
    }

    fn on_call_failed(&self, call: &GatewayCall, _error: &DriverError) {
        self.record(call, false);
    }
}
