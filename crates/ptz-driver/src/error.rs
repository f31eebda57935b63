//! 驱动层错误类型定义

use thiserror::Error;

/// 驱动层错误类型
///
/// 只表示"网关报告失败"这一事实；设备原生错误码需要紧接着通过
/// `ControlGateway::last_error_code()` 获取。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// 设备拒绝了命令（原生 SDK 返回 FALSE）
    #[error("Device rejected the command")]
    Rejected,

    /// 网关不可用（SDK 未初始化、连接断开等）
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}
