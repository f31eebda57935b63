//! 钩子系统（Hook System）
//!
//! 在网关调用完成后触发自定义回调，用于录制、审计、调试输出。
//!
//! # 设计原则
//!
//! - **非阻塞**: 回调运行在调用者线程上，位于 START 与保持等待之间，必须尽快返回
//! - **不碰网关**: 回调禁止再调用网关，否则会覆盖设备错误码
//! - **类型安全**: 使用 `dyn CallCallback` trait object，支持多种回调类型
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use ptz_driver::hooks::{CallCallback, HookedGateway};
//! use ptz_driver::recording::AsyncRecordingHook;
//! use ptz_driver::MockGateway;
//! use std::sync::Arc;
//!
//! let (hook, rx) = AsyncRecordingHook::new();
//! let gateway = HookedGateway::new(MockGateway::new());
//! gateway.add_callback(Arc::new(hook) as Arc<dyn CallCallback>);
//! # drop(rx);
//! ```

use crate::{Channel, ControlGateway, DriverError, GatewayCall, SessionHandle};
use parking_lot::RwLock;
use ptz_protocol::{Action, Speed};
use std::sync::Arc;
use tracing::{debug, trace};

/// 调用回调 Trait
pub trait CallCallback: Send + Sync {
    /// 网关调用成功后调用
    fn on_call_sent(&self, call: &GatewayCall);

    /// 网关调用失败后调用（可选）
    ///
    /// 默认为空操作。
    fn on_call_failed(&self, call: &GatewayCall, error: &DriverError) {
        let _ = (call, error);
    }
}

/// 钩子管理器
///
/// 回调列表本身不是线程安全的，需要外部同步（`HookedGateway` 内部使用 `RwLock`）。
#[derive(Default)]
pub struct HookManager {
    callbacks: Vec<Arc<dyn CallCallback>>,
}

impl HookManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn add_callback(&mut self, callback: Arc<dyn CallCallback>) {
        self.callbacks.push(callback);
    }

    /// 移除所有回调
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// 触发所有成功回调
    pub fn trigger_sent(&self, call: &GatewayCall) {
        for callback in self.callbacks.iter() {
            callback.on_call_sent(call);
        }
    }

    /// 触发所有失败回调
    pub fn trigger_failed(&self, call: &GatewayCall, error: &DriverError) {
        for callback in self.callbacks.iter() {
            callback.on_call_failed(call, error);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// 带钩子的网关装饰器
///
/// 把调用透传给内部网关，并在调用返回后触发钩子。
/// `last_error_code()` 直接透传，不经过钩子。
pub struct HookedGateway<G> {
    inner: G,
    hooks: RwLock<HookManager>,
}

impl<G: ControlGateway> HookedGateway<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            hooks: RwLock::new(HookManager::new()),
        }
    }

    pub fn add_callback(&self, callback: Arc<dyn CallCallback>) {
        let mut hooks = self.hooks.write();
        hooks.add_callback(callback);
        debug!("Gateway hook registered ({} total)", hooks.len());
    }

    pub fn clear_callbacks(&self) {
        self.hooks.write().clear();
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    fn notify(&self, call: &GatewayCall, result: &Result<(), DriverError>) {
        let hooks = self.hooks.read();
        match result {
            Ok(()) => {
                trace!("Gateway call {} ok ({} hooks)", call, hooks.len());
                hooks.trigger_sent(call);
            },
            Err(e) => {
                debug!("Gateway call {} failed: {} ({} hooks)", call, e, hooks.len());
                hooks.trigger_failed(call, e);
            },
        }
    }
}

impl<G: ControlGateway> ControlGateway for HookedGateway<G> {
    fn control_with_speed(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
        speed: Speed,
    ) -> Result<(), DriverError> {
        let result = self
            .inner
            .control_with_speed(session, channel, command, action, speed);
        let call = GatewayCall::with_speed(session, channel, command, action, speed);
        self.notify(&call, &result);
        result
    }

    fn control(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
    ) -> Result<(), DriverError> {
        let result = self.inner.control(session, channel, command, action);
        let call = GatewayCall::speedless(session, channel, command, action);
        self.notify(&call, &result);
        result
    }

    fn last_error_code(&self) -> i32 {
        self.inner.last_error_code()
    }
}
