//! 保持等待与取消
//!
//! 脉冲协议（START → 保持 → STOP）中唯一的挂起点。
//!
//! - 没有停止令牌时：普通阻塞睡眠，精确等待 `duration`（`spin_sleep`，低抖动）
//! - 附加停止令牌时：等待 `duration` 或令牌被触发，先到者为准；
//!   被触发后控制器立即发送 STOP，而不是等满整个时长
//!
//! # 使用示例
//!
//! ```rust
//! use ptz_client::StopToken;
//!
//! let token = StopToken::new();
//! let remote = token.clone();
//!
//! // 在另一个线程（如急停按钮处理）中
//! remote.trigger();
//! ```

use crossbeam_channel::{Receiver, Sender, bounded};
use std::time::{Duration, Instant};

/// 脉冲结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseOutcome {
    /// 保持了完整时长
    Completed,
    /// 保持被停止令牌提前结束
    Interrupted {
        /// 实际保持时长
        held: Duration,
    },
}

impl PulseOutcome {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, PulseOutcome::Interrupted { .. })
    }
}

/// 停止令牌
///
/// 可克隆、可跨线程传递。一次 `trigger()` 结束一次正在进行的保持。
/// 没有保持在进行时的触发，会在下一次脉冲开始前被丢弃。
#[derive(Debug, Clone)]
pub struct StopToken {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl StopToken {
    pub fn new() -> Self {
        let (tx, rx) = bounded(1);
        Self { tx, rx }
    }

    /// 请求结束当前保持
    ///
    /// 非阻塞；已有未消费的请求时合并为一次。
    pub fn trigger(&self) {
        let _ = self.tx.try_send(());
    }

    /// 丢弃未消费的请求
    pub(crate) fn clear(&self) {
        while self.rx.try_recv().is_ok() {}
    }

    /// 等待 `duration` 或触发；返回是否被触发
    fn wait(&self, duration: Duration) -> bool {
        self.rx.recv_timeout(duration).is_ok()
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

/// 执行一次保持
pub(crate) fn hold(duration: Duration, stop: Option<&StopToken>) -> PulseOutcome {
    match stop {
        None => {
            spin_sleep::sleep(duration);
            PulseOutcome::Completed
        },
        Some(token) => {
            let start = Instant::now();
            if token.wait(duration) {
                PulseOutcome::Interrupted {
                    held: start.elapsed(),
                }
            } else {
                PulseOutcome::Completed
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hold_without_token_waits_full_duration() {
        let start = Instant::now();
        let outcome = hold(Duration::from_millis(50), None);
        assert_eq!(outcome, PulseOutcome::Completed);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_hold_with_idle_token_waits_full_duration() {
        let token = StopToken::new();
        let start = Instant::now();
        let outcome = hold(Duration::from_millis(50), Some(&token));
        assert_eq!(outcome, PulseOutcome::Completed);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_trigger_interrupts_hold() {
        let token = StopToken::new();
        let remote = token.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            remote.trigger();
        });

        let start = Instant::now();
        let outcome = hold(Duration::from_secs(10), Some(&token));
        handle.join().unwrap();

        assert!(outcome.is_interrupted());
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_clear_discards_stale_trigger() {
        let token = StopToken::new();
        token.trigger();
        token.trigger(); // 合并
        token.clear();

        let outcome = hold(Duration::from_millis(20), Some(&token));
        assert_eq!(outcome, PulseOutcome::Completed);
    }
}
