//! 驱动层模块
//!
//! 本模块定义控制器与设备之间的边界（控制网关），包括：
//! - `ControlGateway` trait：把 (会话, 通道, 命令码, 动作[, 速度]) 元组发送到设备
//! - 会话句柄与通道号类型
//! - 钩子系统：在每次网关调用后触发自定义回调
//! - 异步录制钩子：基于有界 Channel 的调用录制
//! - Mock 网关（`mock` feature）：记录调用、模拟失败与错误码
//!
//! # 使用场景
//!
//! 真实设备的适配器（原生 SDK 绑定）由集成方实现 `ControlGateway`；
//! 大多数用户应该使用 `ptz-client` 提供的控制器接口。

mod error;
pub mod gateway;
pub mod hooks;
pub mod recording;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::DriverError;
pub use gateway::{Channel, ControlGateway, GatewayCall, SessionHandle};
pub use hooks::{CallCallback, HookManager, HookedGateway};
pub use recording::{AsyncRecordingHook, TimestampedCall};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGateway;
