//! 客户端接口模块
//!
//! 本模块提供云台（PTZ）设备的用户友好接口，包括：
//! - `MovementController`：八方向定时移动、左右自动扫描
//! - `CameraController`：变焦、聚焦、光圈的定时调整
//! - `AuxiliaryController`：灯光、雨刷、风扇、加热器、辅助开关
//!
//! # 设计
//!
//! 三个控制器都只持有注入的 `ControlGateway`、会话句柄和通道号，
//! 无其他状态。定时操作统一为脉冲协议：
//!
//! ```text
//! (code, START[, speed]) → 阻塞保持 duration → (code, STOP[, speed])
//! ```
//!
//! 保持期间调用线程被阻塞；附加 [`StopToken`] 后可从其他线程提前结束保持。
//!
//! # 使用场景
//!
//! 这是大多数用户应该使用的模块。
//! 如果需要拦截或录制每一次网关调用，参见 `ptz-driver` 的钩子系统。

pub mod auxiliary;
pub mod camera;
mod dispatch;
pub mod error;
pub mod hold;
pub mod movement;

// 重新导出常用类型
pub use auxiliary::AuxiliaryController;
pub use camera::CameraController;
pub use dispatch::SpeedlessCommand;
pub use error::{PtzError, Result};
pub use hold::{PulseOutcome, StopToken};
pub use movement::MovementController;
