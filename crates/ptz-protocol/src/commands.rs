//! 类型化命令族
//!
//! 每个命令族一个 `#[repr(u32)]` 枚举，判别值即线上命令码。
//! 带速度的移动族与无速度的相机/辅助族在类型上分开，避免误用。

use crate::ProtocolError;
use crate::ids::*;
use num_enum::IntoPrimitive;

/// 动作动词
///
/// 与命令码正交：同一个命令码在 `Start` / `Stop` 下含义不同。
/// 对辅助设备而言，`Start` 表示接通电源，`Stop` 表示断开电源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Action {
    /// 开始动作 / 接通
    Start = 0,
    /// 停止动作 / 断开
    Stop = 1,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "START",
            Action::Stop => "STOP",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for Action {
    type Error = ProtocolError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            PTZ_START => Ok(Action::Start),
            PTZ_STOP => Ok(Action::Stop),
            _ => Err(ProtocolError::InvalidAction { value }),
        }
    }
}

// ============================================================================
// 云台移动命令族
// ============================================================================

/// 云台移动命令（带速度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum MoveCommand {
    TiltUp = 21,
    TiltDown = 22,
    PanLeft = 23,
    PanRight = 24,
    UpLeft = 25,
    UpRight = 26,
    DownLeft = 27,
    DownRight = 28,
    /// 左右自动扫描（持续模式，需要显式停止）
    PanAuto = 29,
}

impl MoveCommand {
    /// 线上命令码
    pub fn code(self) -> u32 {
        self.into()
    }

    /// 英文标签
    pub fn label(&self) -> &'static str {
        match self {
            MoveCommand::TiltUp => "tilt up",
            MoveCommand::TiltDown => "tilt down",
            MoveCommand::PanLeft => "pan left",
            MoveCommand::PanRight => "pan right",
            MoveCommand::UpLeft => "up left",
            MoveCommand::UpRight => "up right",
            MoveCommand::DownLeft => "down left",
            MoveCommand::DownRight => "down right",
            MoveCommand::PanAuto => "auto scan",
        }
    }

    /// 中文标签
    pub fn label_zh(&self) -> &'static str {
        match self {
            MoveCommand::TiltUp => "云台上仰",
            MoveCommand::TiltDown => "云台下俯",
            MoveCommand::PanLeft => "云台左转",
            MoveCommand::PanRight => "云台右转",
            MoveCommand::UpLeft => "云台上仰并左转",
            MoveCommand::UpRight => "云台上仰并右转",
            MoveCommand::DownLeft => "云台下俯并左转",
            MoveCommand::DownRight => "云台下俯并右转",
            MoveCommand::PanAuto => "自动扫描",
        }
    }
}

impl TryFrom<u32> for MoveCommand {
    type Error = ProtocolError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            TILT_UP => Ok(MoveCommand::TiltUp),
            TILT_DOWN => Ok(MoveCommand::TiltDown),
            PAN_LEFT => Ok(MoveCommand::PanLeft),
            PAN_RIGHT => Ok(MoveCommand::PanRight),
            UP_LEFT => Ok(MoveCommand::UpLeft),
            UP_RIGHT => Ok(MoveCommand::UpRight),
            DOWN_LEFT => Ok(MoveCommand::DownLeft),
            DOWN_RIGHT => Ok(MoveCommand::DownRight),
            PAN_AUTO => Ok(MoveCommand::PanAuto),
            _ => Err(ProtocolError::UnknownCommand { code }),
        }
    }
}

/// 方向意图
///
/// 八个方向各自对应一个固定的移动命令码；自动扫描不属于方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// 解析为移动命令
    pub fn command(self) -> MoveCommand {
        match self {
            Direction::Up => MoveCommand::TiltUp,
            Direction::Down => MoveCommand::TiltDown,
            Direction::Left => MoveCommand::PanLeft,
            Direction::Right => MoveCommand::PanRight,
            Direction::UpLeft => MoveCommand::UpLeft,
            Direction::UpRight => MoveCommand::UpRight,
            Direction::DownLeft => MoveCommand::DownLeft,
            Direction::DownRight => MoveCommand::DownRight,
        }
    }
}

impl From<Direction> for MoveCommand {
    fn from(direction: Direction) -> Self {
        direction.command()
    }
}

// ============================================================================
// 相机参数命令族
// ============================================================================

/// 相机参数命令（无速度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum CameraCommand {
    ZoomIn = 11,
    ZoomOut = 12,
    FocusNear = 13,
    FocusFar = 14,
    IrisOpen = 15,
    IrisClose = 16,
}

impl CameraCommand {
    pub const ALL: [CameraCommand; 6] = [
        CameraCommand::ZoomIn,
        CameraCommand::ZoomOut,
        CameraCommand::FocusNear,
        CameraCommand::FocusFar,
        CameraCommand::IrisOpen,
        CameraCommand::IrisClose,
    ];

    pub fn code(self) -> u32 {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CameraCommand::ZoomIn => "zoom in",
            CameraCommand::ZoomOut => "zoom out",
            CameraCommand::FocusNear => "focus near",
            CameraCommand::FocusFar => "focus far",
            CameraCommand::IrisOpen => "iris open",
            CameraCommand::IrisClose => "iris close",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            CameraCommand::ZoomIn => "焦距放大",
            CameraCommand::ZoomOut => "焦距缩小",
            CameraCommand::FocusNear => "焦点前调",
            CameraCommand::FocusFar => "焦点后调",
            CameraCommand::IrisOpen => "光圈扩大",
            CameraCommand::IrisClose => "光圈缩小",
        }
    }
}

impl TryFrom<u32> for CameraCommand {
    type Error = ProtocolError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            ZOOM_IN => Ok(CameraCommand::ZoomIn),
            ZOOM_OUT => Ok(CameraCommand::ZoomOut),
            FOCUS_NEAR => Ok(CameraCommand::FocusNear),
            FOCUS_FAR => Ok(CameraCommand::FocusFar),
            IRIS_OPEN => Ok(CameraCommand::IrisOpen),
            IRIS_CLOSE => Ok(CameraCommand::IrisClose),
            _ => Err(ProtocolError::UnknownCommand { code }),
        }
    }
}

// ============================================================================
// 辅助设备命令族
// ============================================================================

/// 辅助设备电源命令（无速度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum AuxCommand {
    Light = 2,
    Wiper = 3,
    Fan = 4,
    Heater = 5,
    Aux1 = 6,
    Aux2 = 7,
}

impl AuxCommand {
    pub const ALL: [AuxCommand; 6] = [
        AuxCommand::Light,
        AuxCommand::Wiper,
        AuxCommand::Fan,
        AuxCommand::Heater,
        AuxCommand::Aux1,
        AuxCommand::Aux2,
    ];

    pub fn code(self) -> u32 {
        self.into()
    }

    /// 设备名称（英文）
    pub fn label(&self) -> &'static str {
        match self {
            AuxCommand::Light => "light",
            AuxCommand::Wiper => "wiper",
            AuxCommand::Fan => "fan",
            AuxCommand::Heater => "heater",
            AuxCommand::Aux1 => "aux device 1",
            AuxCommand::Aux2 => "aux device 2",
        }
    }

    /// 设备名称（中文）
    pub fn label_zh(&self) -> &'static str {
        match self {
            AuxCommand::Light => "灯光",
            AuxCommand::Wiper => "雨刷",
            AuxCommand::Fan => "风扇",
            AuxCommand::Heater => "加热器",
            AuxCommand::Aux1 => "辅助设备1",
            AuxCommand::Aux2 => "辅助设备2",
        }
    }
}

impl TryFrom<u32> for AuxCommand {
    type Error = ProtocolError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            LIGHT_PWRON => Ok(AuxCommand::Light),
            WIPER_PWRON => Ok(AuxCommand::Wiper),
            FAN_PWRON => Ok(AuxCommand::Fan),
            HEATER_PWRON => Ok(AuxCommand::Heater),
            AUX_PWRON1 => Ok(AuxCommand::Aux1),
            AUX_PWRON2 => Ok(AuxCommand::Aux2),
            _ => Err(ProtocolError::UnknownCommand { code }),
        }
    }
}

/// 开关状态
///
/// 固定映射：`On` → `Action::Start`，`Off` → `Action::Stop`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn action(self) -> Action {
        match self {
            SwitchState::On => Action::Start,
            SwitchState::Off => Action::Stop,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwitchState::On => "turn on",
            SwitchState::Off => "turn off",
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            SwitchState::On => "开启",
            SwitchState::Off => "关闭",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { SwitchState::On } else { SwitchState::Off }
    }
}

// ============================================================================
// 命令族联合
// ============================================================================

/// 任意命令族的命令
///
/// 主要用于录制、诊断等只拿到原始命令码的场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PtzCommand {
    Move(MoveCommand),
    Camera(CameraCommand),
    Aux(AuxCommand),
}

impl PtzCommand {
    pub fn code(&self) -> u32 {
        match self {
            PtzCommand::Move(cmd) => cmd.code(),
            PtzCommand::Camera(cmd) => cmd.code(),
            PtzCommand::Aux(cmd) => cmd.code(),
        }
    }

    pub fn family(&self) -> CommandFamily {
        match self {
            PtzCommand::Move(_) => CommandFamily::Movement,
            PtzCommand::Camera(_) => CommandFamily::Camera,
            PtzCommand::Aux(_) => CommandFamily::Auxiliary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PtzCommand::Move(cmd) => cmd.label(),
            PtzCommand::Camera(cmd) => cmd.label(),
            PtzCommand::Aux(cmd) => cmd.label(),
        }
    }

    pub fn label_zh(&self) -> &'static str {
        match self {
            PtzCommand::Move(cmd) => cmd.label_zh(),
            PtzCommand::Camera(cmd) => cmd.label_zh(),
            PtzCommand::Aux(cmd) => cmd.label_zh(),
        }
    }

    /// 是否为带速度的命令族
    pub fn carries_speed(&self) -> bool {
        matches!(self, PtzCommand::Move(_))
    }
}

impl TryFrom<u32> for PtzCommand {
    type Error = ProtocolError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match CommandFamily::classify(code) {
            Some(CommandFamily::Movement) => MoveCommand::try_from(code).map(PtzCommand::Move),
            Some(CommandFamily::Camera) => CameraCommand::try_from(code).map(PtzCommand::Camera),
            Some(CommandFamily::Auxiliary) => AuxCommand::try_from(code).map(PtzCommand::Aux),
            None => Err(ProtocolError::UnknownCommand { code }),
        }
    }
}

impl From<MoveCommand> for PtzCommand {
    fn from(cmd: MoveCommand) -> Self {
        PtzCommand::Move(cmd)
    }
}

impl From<CameraCommand> for PtzCommand {
    fn from(cmd: CameraCommand) -> Self {
        PtzCommand::Camera(cmd)
    }
}

impl From<AuxCommand> for PtzCommand {
    fn from(cmd: AuxCommand) -> Self {
        PtzCommand::Aux(cmd)
    }
}
