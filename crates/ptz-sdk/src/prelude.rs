//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use ptz_sdk::prelude::*;
//! ```

// 客户端层（推荐使用）
pub use crate::client::{
    AuxiliaryController, CameraController, MovementController, PulseOutcome, StopToken,
};

// 控制层
pub use crate::control::{PtzChannel, PtzConfig};

// 命令目录
pub use crate::protocol::{Action, AuxCommand, CameraCommand, Direction, Speed, SwitchState};

// 驱动层（常用 Trait 与句柄）
pub use crate::driver::{Channel, ControlGateway, SessionHandle};

// 错误类型
pub use crate::client::PtzError;
pub use crate::control::ConfigError;
pub use crate::driver::DriverError;
pub use crate::protocol::ProtocolError;
