//! MovementController - 云台移动控制器
//!
//! 方向移动使用定时脉冲协议：
//!
//! ```text
//! 校验速度 → (code, START, speed) → 保持 duration → (code, STOP, speed)
//! ```
//!
//! - 速度越界：返回 `InvalidSpeed`，不发送任何命令
//! - START 失败：立即返回，不保持、不发送 STOP（不做补偿停止）
//! - STOP 失败：返回错误，设备可能仍在转动（不重试）
//!
//! 自动扫描是持续模式，不是脉冲：`auto_scan()` 只发送 START，
//! `stop_auto_scan()` 单独发送 STOP。
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use ptz_client::MovementController;
//! use std::time::Duration;
//!
//! let movement = MovementController::new(gateway, session, channel);
//! movement.right(5, Duration::from_secs(2))?;
//! movement.auto_scan(3)?;
//! movement.stop_auto_scan()?;
//! ```

use crate::dispatch::{Dispatcher, OperationLabel};
use crate::error::Result;
use crate::hold::{PulseOutcome, StopToken, hold};
use ptz_driver::{Channel, ControlGateway, SessionHandle};
use ptz_protocol::{Action, Direction, MoveCommand, Speed};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 云台移动控制器
///
/// 每个实例绑定一个 (会话, 通道)。除此之外无状态，可以随意创建和丢弃。
/// 同一通道上的并发操作不做互斥，需要由调用者串行化。
#[derive(Clone)]
pub struct MovementController {
    dispatcher: Dispatcher,
    stop: Option<StopToken>,
}

impl MovementController {
    pub fn new(gateway: Arc<dyn ControlGateway>, session: SessionHandle, channel: Channel) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, session, channel),
            stop: None,
        }
    }

    /// 附加停止令牌，使保持可以被提前结束
    pub fn with_stop_token(mut self, token: StopToken) -> Self {
        self.stop = Some(token);
        self
    }

    pub fn session(&self) -> SessionHandle {
        self.dispatcher.session()
    }

    pub fn channel(&self) -> Channel {
        self.dispatcher.channel()
    }

    /// 云台上仰
    pub fn up(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::Up, speed, duration)
            .map(|_| ())
    }

    /// 云台下俯
    pub fn down(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::Down, speed, duration)
            .map(|_| ())
    }

    /// 云台左转
    pub fn left(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::Left, speed, duration)
            .map(|_| ())
    }

    /// 云台右转
    pub fn right(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::Right, speed, duration)
            .map(|_| ())
    }

    /// 云台上仰并左转
    pub fn up_left(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::UpLeft, speed, duration)
            .map(|_| ())
    }

    /// 云台上仰并右转
    pub fn up_right(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::UpRight, speed, duration)
            .map(|_| ())
    }

    /// 云台下俯并左转
    pub fn down_left(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::DownLeft, speed, duration)
            .map(|_| ())
    }

    /// 云台下俯并右转
    pub fn down_right(&self, speed: u8, duration: Duration) -> Result<()> {
        self.move_direction(Direction::DownRight, speed, duration)
            .map(|_| ())
    }

    /// 按方向执行一次定时移动
    ///
    /// # 参数
    ///
    /// - `direction`: 移动方向
    /// - `speed`: 速度（1-7）
    /// - `duration`: 保持时长
    ///
    /// # 返回
    ///
    /// - `Ok(PulseOutcome::Completed)`: 保持了完整时长
    /// - `Ok(PulseOutcome::Interrupted { .. })`: 停止令牌提前结束了保持，STOP 已发送
    ///
    /// # 错误
    ///
    /// - `PtzError::InvalidSpeed`: 速度越界（未发送任何命令）
    /// - `PtzError::InvalidSession`: 会话句柄为负（未发送任何命令）
    /// - `PtzError::GatewayFailure`: START 或 STOP 失败
    pub fn move_direction(
        &self,
        direction: Direction,
        speed: u8,
        duration: Duration,
    ) -> Result<PulseOutcome> {
        let command = direction.command();
        let label = OperationLabel::new(command.label(), command.label_zh());
        let speed = self.dispatcher.check_speed(speed, &label)?;

        if let Some(token) = &self.stop {
            token.clear();
        }

        self.dispatcher
            .send_with_speed(command, Action::Start, speed, &label)?;

        let outcome = hold(duration, self.stop.as_ref());
        if let PulseOutcome::Interrupted { held } = outcome {
            warn!(
                "{} interrupted after {:?} (channel {}), stopping now",
                label.en,
                held,
                self.channel()
            );
        }

        self.dispatcher
            .send_with_speed(command, Action::Stop, speed, &label)?;

        info!(
            "{} done (channel {}, speed {}, {:?})",
            label.en,
            self.channel(),
            speed,
            duration
        );
        Ok(outcome)
    }

    /// 启动左右自动扫描
    ///
    /// 持续模式：发送 START 后立即返回，不保持、不自动停止。
    pub fn auto_scan(&self, speed: u8) -> Result<()> {
        let label = OperationLabel::new("start auto scan", "启动自动扫描");
        let speed = self.dispatcher.check_speed(speed, &label)?;

        self.dispatcher
            .send_with_speed(MoveCommand::PanAuto, Action::Start, speed, &label)?;

        info!(
            "Auto scan started (channel {}, speed {})",
            self.channel(),
            speed
        );
        Ok(())
    }

    /// 停止自动扫描
    ///
    /// STOP 总是使用默认速度（4），与启动扫描时的速度无关。
    /// 设备对此命令码不要求停止速度与启动速度一致；保持该行为，不要"修正"。
    pub fn stop_auto_scan(&self) -> Result<()> {
        let label = OperationLabel::new("stop auto scan", "停止自动扫描");

        self.dispatcher.send_with_speed(
            MoveCommand::PanAuto,
            Action::Stop,
            Speed::DEFAULT,
            &label,
        )?;

        info!("Auto scan stopped (channel {})", self.channel());
        Ok(())
    }
}
