//! 错误类型体系
//!
//! 三类错误全部返回给直接调用者，不在内部重试，也不会让控制器进入不可用状态：
//!
//! - `InvalidSession`: 会话句柄为负（本地检测，任何网关调用之前）
//! - `InvalidSpeed`: 速度超出 1-7（本地检测，仅移动命令族）
//! - `GatewayFailure`: 网关报告失败，携带通道、命令码和设备原生错误码
//!
//! # 示例
//!
//! ```rust
//! use ptz_client::PtzError;
//!
//! fn handle_error(err: PtzError) {
//!     if err.is_local() {
//!         eprintln!("参数错误（未发送到设备）: {}", err);
//!     } else if let Some(code) = err.error_code() {
//!         eprintln!("设备错误码 {}: {}", code, err);
//!     }
//! }
//! ```

use ptz_driver::Channel;
use ptz_protocol::{Action, ProtocolError};
use thiserror::Error;

/// 云台控制错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PtzError {
    // ==================== Local Errors（不会到达设备） ====================
    /// 无效的登录句柄
    #[error(
        "{operation} ({operation_zh}) rejected: invalid session handle {session} [channel: {channel}]"
    )]
    InvalidSession {
        /// 操作名称（英文）
        operation: String,
        /// 操作名称（中文）
        operation_zh: String,
        channel: Channel,
        /// 句柄值
        session: i32,
    },

    /// 速度超出范围
    #[error(
        "{operation} ({operation_zh}) rejected: speed {speed} out of range {min}-{max} [channel: {channel}]"
    )]
    InvalidSpeed {
        operation: String,
        operation_zh: String,
        channel: Channel,
        /// 越界值
        speed: u8,
        min: u8,
        max: u8,
    },

    /// 其他协议层错误
    #[error("Protocol error: {0}")]
    Protocol(ProtocolError),

    // ==================== Device Errors ====================
    /// 网关报告失败
    #[error(
        "{operation} ({operation_zh}) failed at {action} [channel: {channel}, cmd: {command}, error code: {error_code}]"
    )]
    GatewayFailure {
        /// 操作名称（英文）
        operation: String,
        /// 操作名称（中文）
        operation_zh: String,
        /// 失败的是哪一半（START / STOP）
        action: Action,
        channel: Channel,
        command: u32,
        /// 设备原生错误码
        error_code: i32,
    },
}

impl PtzError {
    /// 是否为本地检测的错误（没有任何命令到达设备）
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidSession { .. } | Self::InvalidSpeed { .. } | Self::Protocol(_)
        )
    }

    /// 失败的操作名称（英文）
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::InvalidSession { operation, .. }
            | Self::InvalidSpeed { operation, .. }
            | Self::GatewayFailure { operation, .. } => Some(operation),
            Self::Protocol(_) => None,
        }
    }

    /// 设备原生错误码
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::GatewayFailure { error_code, .. } => Some(*error_code),
            _ => None,
        }
    }

    /// 失败的命令码
    pub fn command(&self) -> Option<u32> {
        match self {
            Self::GatewayFailure { command, .. } => Some(*command),
            _ => None,
        }
    }

    /// 失败是否发生在 STOP 阶段
    ///
    /// 此时设备可能仍处于动作中，核心不会再次尝试停止。
    pub fn left_device_started(&self) -> bool {
        matches!(
            self,
            Self::GatewayFailure {
                action: Action::Stop,
                ..
            }
        )
    }
}

impl From<ProtocolError> for PtzError {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PtzError>;
