//! 速度域
//!
//! 移动命令与自动扫描使用 1-7 级速度；相机参数和辅助设备命令不带速度。

use crate::ProtocolError;

/// 最小速度
pub const MIN_SPEED: u8 = 1;
/// 最大速度
pub const MAX_SPEED: u8 = 7;
/// 默认速度
///
/// 仅用于协议要求带速度、但调用者没有提供速度的 `STOP` 调用（自动扫描停止）。
pub const DEFAULT_SPEED: u8 = 4;

/// 已校验的云台速度（1-7）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(MIN_SPEED);
    pub const MAX: Speed = Speed(MAX_SPEED);
    pub const DEFAULT: Speed = Speed(DEFAULT_SPEED);

    /// 校验并创建速度
    ///
    /// # 错误
    ///
    /// 超出 `[MIN_SPEED, MAX_SPEED]` 时返回 `ProtocolError::InvalidSpeed`，
    /// 携带越界值和有效范围。
    pub fn new(speed: u8) -> Result<Self, ProtocolError> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ProtocolError::InvalidSpeed {
                speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(Speed(speed))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 线上参数值
    pub fn as_u32(self) -> u32 {
        self.0 as u32
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::DEFAULT
    }
}

impl TryFrom<u8> for Speed {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Speed::new(value)
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speed_bounds() {
        assert_eq!(Speed::new(1).unwrap(), Speed::MIN);
        assert_eq!(Speed::new(7).unwrap(), Speed::MAX);
        assert_eq!(Speed::default().get(), 4);
    }

    #[test]
    fn test_speed_out_of_range() {
        let err = Speed::new(0).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::InvalidSpeed {
                speed: 0,
                min: 1,
                max: 7
            }
        );
        assert!(Speed::new(8).is_err());
        assert!(Speed::new(u8::MAX).is_err());
    }

    proptest! {
        #[test]
        fn prop_speed_domain(s in any::<u8>()) {
            let result = Speed::new(s);
            if (1..=7).contains(&s) {
                prop_assert_eq!(result.unwrap().get(), s);
            } else {
                let is_invalid_speed = matches!(
                    result,
                    Err(ProtocolError::InvalidSpeed { speed, min: 1, max: 7 }) if speed == s
                );
                prop_assert!(is_invalid_speed);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_speed() {
        assert!(serde_json::from_str::<Speed>("5").is_ok());
        assert!(serde_json::from_str::<Speed>("9").is_err());
    }
}
