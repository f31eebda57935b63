//! PTZ SDK - 云台命令分发与定时动作
//!
//! 把方向移动、相机参数调整和辅助设备开关翻译为对设备控制网关的
//! 精确调用序列（命令码 + START/STOP + 可选速度），并负责
//! START 与 STOP 之间的阻塞保持。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **协议层** (`protocol`): 命令码目录、动作、速度域
//! - **驱动层** (`driver`): 控制网关 trait、调用钩子、录制、Mock 网关
//! - **客户端层** (`client`): 移动 / 相机 / 辅助设备三个控制器
//! - **控制层** (`control`): 单通道串行化、TOML 配置
//!
//! # 快速开始
//!
//! ```rust,ignore
//! use ptz_sdk::prelude::*;
//! use std::time::Duration;
//!
//! ptz_sdk::init_logger!();
//!
//! let movement = MovementController::new(gateway, SessionHandle(0), Channel(1));
//! movement.right(7, Duration::from_secs(2))?;
//! ```

pub use ptz_client as client;
pub use ptz_control as control;
pub use ptz_driver as driver;
pub use ptz_protocol as protocol;

pub mod logging;
pub mod prelude;

// 协议层
pub use protocol::{
    Action, AuxCommand, CameraCommand, Direction, MoveCommand, ProtocolError, PtzCommand, Speed,
    SwitchState,
};

// 驱动层
pub use driver::{Channel, ControlGateway, DriverError, GatewayCall, SessionHandle};

// 客户端层（推荐入口）
pub use client::{
    AuxiliaryController, CameraController, MovementController, PtzError, PulseOutcome, StopToken,
};

// 控制层
pub use control::{ConfigError, PtzChannel, PtzConfig};
