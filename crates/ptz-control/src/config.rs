//! # 云台配置
//!
//! 通道号、默认速度和默认保持时长，以 TOML 文件保存：
//!
//! ```toml
//! [device]
//! channel = 1
//!
//! [motion]
//! default_speed = 4
//! default_hold_ms = 1000
//!
//! [camera]
//! default_hold_ms = 500
//! ```
//!
//! 缺失的段或字段使用默认值。加载时会校验：速度必须在 1-7 之间，
//! 保持时长必须大于零。

use ptz_driver::Channel;
use ptz_protocol::{DEFAULT_SPEED, ProtocolError, Speed};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读写配置文件失败
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 默认速度越界
    #[error("Invalid motion.default_speed: {0}")]
    InvalidSpeed(#[from] ProtocolError),

    /// 保持时长为零
    #[error("{field} must be greater than zero")]
    ZeroHold { field: &'static str },
}

/// 云台配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PtzConfig {
    /// 设备设置
    pub device: DeviceSettings,

    /// 移动设置
    pub motion: MotionSettings,

    /// 相机参数设置
    pub camera: CameraSettings,
}

impl PtzConfig {
    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PtzConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 保存配置到文件
    ///
    /// 无效的配置不会被写入。
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.validate()?;
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion.speed()?;

        if self.motion.default_hold_ms == 0 {
            return Err(ConfigError::ZeroHold {
                field: "motion.default_hold_ms",
            });
        }
        if self.camera.default_hold_ms == 0 {
            return Err(ConfigError::ZeroHold {
                field: "camera.default_hold_ms",
            });
        }
        Ok(())
    }
}

/// 设备设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// 视频通道号
    pub channel: i32,
}

impl DeviceSettings {
    pub fn channel(&self) -> Channel {
        Channel(self.channel)
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self { channel: 1 }
    }
}

/// 移动设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// 默认速度（1-7）
    pub default_speed: u8,

    /// 默认保持时长（ms）
    pub default_hold_ms: u64,
}

impl MotionSettings {
    pub fn speed(&self) -> Result<Speed, ProtocolError> {
        Speed::new(self.default_speed)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.default_hold_ms)
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
            default_hold_ms: 1000,
        }
    }
}

/// 相机参数设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// 默认保持时长（ms）
    pub default_hold_ms: u64,
}

impl CameraSettings {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.default_hold_ms)
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            default_hold_ms: 500,
        }
    }
}
