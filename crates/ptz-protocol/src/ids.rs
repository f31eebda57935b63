//! 命令码常量定义
//!
//! 码值是设备协议规定的线上常量，不允许重新编号。

// ============================================================================
// 云台移动命令
// ============================================================================

/// 云台上仰
pub const TILT_UP: u32 = 21;
/// 云台下俯
pub const TILT_DOWN: u32 = 22;
/// 云台左转
pub const PAN_LEFT: u32 = 23;
/// 云台右转
pub const PAN_RIGHT: u32 = 24;

/// 云台上仰和左转
pub const UP_LEFT: u32 = 25;
/// 云台上仰和右转
pub const UP_RIGHT: u32 = 26;
/// 云台下俯和左转
pub const DOWN_LEFT: u32 = 27;
/// 云台下俯和右转
pub const DOWN_RIGHT: u32 = 28;

/// 云台左右自动扫描
pub const PAN_AUTO: u32 = 29;

// ============================================================================
// 相机参数命令
// ============================================================================

/// 焦距变大（倍率变大）
pub const ZOOM_IN: u32 = 11;
/// 焦距变小（倍率变小）
pub const ZOOM_OUT: u32 = 12;

/// 焦点前调
pub const FOCUS_NEAR: u32 = 13;
/// 焦点后调
pub const FOCUS_FAR: u32 = 14;

/// 光圈扩大
pub const IRIS_OPEN: u32 = 15;
/// 光圈缩小
pub const IRIS_CLOSE: u32 = 16;

// ============================================================================
// 辅助设备命令
// ============================================================================

/// 接通灯光电源
pub const LIGHT_PWRON: u32 = 2;
/// 接通雨刷开关
pub const WIPER_PWRON: u32 = 3;
/// 接通风扇开关
pub const FAN_PWRON: u32 = 4;
/// 接通加热器开关
pub const HEATER_PWRON: u32 = 5;
/// 接通辅助设备开关 1
pub const AUX_PWRON1: u32 = 6;
/// 接通辅助设备开关 2
pub const AUX_PWRON2: u32 = 7;

// ============================================================================
// 动作动词
// ============================================================================

/// 开始动作
pub const PTZ_START: u32 = 0;
/// 停止动作
pub const PTZ_STOP: u32 = 1;

/// 命令族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandFamily {
    /// 云台移动（带速度）
    Movement,
    /// 相机参数（无速度）
    Camera,
    /// 辅助设备（无速度）
    Auxiliary,
}

impl CommandFamily {
    /// 根据命令码判断所属命令族
    ///
    /// 不在任何命令族码值范围内时返回 `None`。
    pub fn classify(code: u32) -> Option<Self> {
        match code {
            TILT_UP..=PAN_AUTO => Some(CommandFamily::Movement),
            ZOOM_IN..=IRIS_CLOSE => Some(CommandFamily::Camera),
            LIGHT_PWRON..=AUX_PWRON2 => Some(CommandFamily::Auxiliary),
            _ => None,
        }
    }
}
