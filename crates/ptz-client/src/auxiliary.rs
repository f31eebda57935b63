//! AuxiliaryController - 辅助设备控制器
//!
//! 灯光、雨刷、风扇、加热器和两路通用辅助开关的电源控制。
//!
//! 与另外两个控制器不同，这里没有脉冲：每次开关只发送一次
//! `(code, action)`，不保持、不发送第二次调用。
//!
//! 映射固定为：开启 → `Action::Start`，关闭 → `Action::Stop`。

use crate::dispatch::{Dispatcher, OperationLabel};
use crate::error::Result;
use ptz_driver::{Channel, ControlGateway, SessionHandle};
use ptz_protocol::{AuxCommand, SwitchState};
use std::sync::Arc;
use tracing::info;

/// 辅助设备控制器
#[derive(Clone)]
pub struct AuxiliaryController {
    dispatcher: Dispatcher,
}

impl AuxiliaryController {
    pub fn new(gateway: Arc<dyn ControlGateway>, session: SessionHandle, channel: Channel) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, session, channel),
        }
    }

    pub fn session(&self) -> SessionHandle {
        self.dispatcher.session()
    }

    pub fn channel(&self) -> Channel {
        self.dispatcher.channel()
    }

    pub fn light_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Light, SwitchState::On)
    }

    pub fn light_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Light, SwitchState::Off)
    }

    pub fn wiper_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Wiper, SwitchState::On)
    }

    pub fn wiper_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Wiper, SwitchState::Off)
    }

    pub fn fan_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Fan, SwitchState::On)
    }

    pub fn fan_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Fan, SwitchState::Off)
    }

    pub fn heater_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Heater, SwitchState::On)
    }

    pub fn heater_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Heater, SwitchState::Off)
    }

    pub fn aux_device1_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Aux1, SwitchState::On)
    }

    pub fn aux_device1_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Aux1, SwitchState::Off)
    }

    pub fn aux_device2_on(&self) -> Result<()> {
        self.switch_device(AuxCommand::Aux2, SwitchState::On)
    }

    pub fn aux_device2_off(&self) -> Result<()> {
        self.switch_device(AuxCommand::Aux2, SwitchState::Off)
    }

    /// 切换辅助设备电源
    ///
    /// # 参数
    ///
    /// - `device`: 辅助设备
    /// - `state`: 目标状态（可由 `bool` 转换：`true` = 开启）
    pub fn switch_device(&self, device: AuxCommand, state: impl Into<SwitchState>) -> Result<()> {
        let state = state.into();
        let label = OperationLabel::new(
            format!("{} {}", state.label(), device.label()),
            format!("{}{}", state.label_zh(), device.label_zh()),
        );

        self.dispatcher.send(device, state.action(), &label)?;

        info!("{} (channel {})", label.en, self.channel());
        Ok(())
    }
}
