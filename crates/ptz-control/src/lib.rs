//! 通道级控制与配置
//!
//! - [`PtzConfig`]：通道号、默认速度、默认保持时长（TOML）
//! - [`PtzChannel`]：同一通道上的三个控制器，整操作串行化，可随时急停

pub mod channel;
pub mod config;

pub use channel::{ChannelControllers, PtzChannel};
pub use config::{CameraSettings, ConfigError, DeviceSettings, MotionSettings, PtzConfig};
