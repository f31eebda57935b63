//! 控制网关契约
//!
//! 网关是控制器依赖的唯一外部边界：它把命令元组发送到设备，
//! 报告成功/失败，并在失败后提供设备原生错误码。
//!
//! # 错误码时序
//!
//! `last_error_code()` 必须在失败调用之后、任何其他网关调用之前立即查询，
//! 否则错误码可能被后续调用覆盖（与原生 SDK 的 `GetLastError` 语义一致）。

use crate::DriverError;
use ptz_protocol::{Action, Speed};

/// 登录会话句柄
///
/// 由外部会话组件分配的不透明整数。必须 `>= 0` 才可用；
/// 控制器在任何网关调用之前拒绝负值句柄。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub i32);

impl SessionHandle {
    pub fn new(handle: i32) -> Self {
        SessionHandle(handle)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// 句柄是否可用（非负）
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl From<i32> for SessionHandle {
    fn from(handle: i32) -> Self {
        SessionHandle(handle)
    }
}

impl std::fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 通道号
///
/// 多通道设备上的物理云台编号。核心不做校验，交给网关/设备判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel(pub i32);

impl Channel {
    pub fn new(channel: i32) -> Self {
        Channel(channel)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Channel {
    fn from(channel: i32) -> Self {
        Channel(channel)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 控制网关 Trait
///
/// 语义：
/// - `control_with_speed()`: 带速度的控制（移动命令族）
/// - `control()`: 无速度的控制（相机参数、辅助设备命令族）
/// - `last_error_code()`: 最近一次失败的设备原生错误码
///
/// 实现者需要自行保证并发安全（`Send + Sync`），核心不对网关加锁。
pub trait ControlGateway: Send + Sync {
    /// 发送带速度的控制命令
    fn control_with_speed(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
        speed: Speed,
    ) -> Result<(), DriverError>;

    /// 发送无速度的控制命令
    fn control(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
    ) -> Result<(), DriverError>;

    /// 获取最近一次失败的设备原生错误码
    fn last_error_code(&self) -> i32;
}

/// 一次网关调用的记录
///
/// `speed` 为 `None` 表示走的是无速度的 `control()`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayCall {
    pub session: SessionHandle,
    pub channel: Channel,
    pub command: u32,
    pub action: Action,
    pub speed: Option<Speed>,
}

impl GatewayCall {
    pub fn with_speed(
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
        speed: Speed,
    ) -> Self {
        Self {
            session,
            channel,
            command,
            action,
            speed: Some(speed),
        }
    }

    pub fn speedless(session: SessionHandle, channel: Channel, command: u32, action: Action) -> Self {
        Self {
            session,
            channel,
            command,
            action,
            speed: None,
        }
    }
}

impl std::fmt::Display for GatewayCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.speed {
            Some(speed) => write!(
                f,
                "({}, {}, speed {}) @ session {} channel {}",
                self.command, self.action, speed, self.session, self.channel
            ),
            None => write!(
                f,
                "({}, {}) @ session {} channel {}",
                self.command, self.action, self.session, self.channel
            ),
        }
    }
}
