//! # PTZ Protocol
//!
//! 云台控制命令目录（无硬件依赖）
//!
//! ## 模块
//!
//! - `ids`: 命令码常量定义（来自设备协议命令表，必须逐位一致）
//! - `commands`: 类型化命令族（移动 / 相机参数 / 辅助设备）与动作动词
//! - `speed`: 速度域（1-7）及校验
//!
//! ## 命令族
//!
//! | 命令族 | 码值范围 | 是否带速度 |
//! |---|---|---|
//! | 移动（含自动扫描） | 21-29 | 是 |
//! | 相机参数（变焦/聚焦/光圈） | 11-16 | 否 |
//! | 辅助设备（灯光/雨刷/风扇/加热器/辅助开关） | 2-7 | 否 |
//!
//! 同一个命令码的含义完全由动作动词（`Action::Start` / `Action::Stop`）决定。

pub mod commands;
pub mod ids;
pub mod speed;

pub use commands::*;
pub use ids::*;
pub use speed::*;

use thiserror::Error;

/// 协议层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Speed out of range: {speed} (valid range: {min}-{max})")]
    InvalidSpeed { speed: u8, min: u8, max: u8 },

    #[error("Unknown PTZ command code: {code}")]
    UnknownCommand { code: u32 },

    #[error("Invalid action verb: {value}")]
    InvalidAction { value: u32 },
}
