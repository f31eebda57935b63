//! PtzChannel - 单通道串行化控制
//!
//! 控制器本身不做互斥：两个线程在同一通道上同时发起脉冲，
//! START/STOP 会交错到达设备。`PtzChannel` 用一把锁串行化整个操作
//! （START → 保持 → STOP），并提供一个不需要拿锁的停止令牌。
//!
//! # 设计
//!
//! - 锁粒度是"一次操作"，不是"一次网关调用"
//! - `stop_token()` 只结束当前正在进行的保持；操作开始前的触发会被丢弃
//! - 需要把多个操作作为一个整体执行时，使用 [`PtzChannel::exclusive`]
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use ptz_control::{PtzChannel, PtzConfig};
//! use ptz_protocol::Direction;
//!
//! let config = PtzConfig::load_from_file("ptz.toml")?;
//! let channel = PtzChannel::from_config(gateway, session, &config)?;
//!
//! // 急停按钮
//! let estop = channel.stop_token();
//! std::thread::spawn(move || estop.trigger());
//!
//! channel.nudge(Direction::Left)?;
//! ```

use crate::config::{ConfigError, PtzConfig};
use parking_lot::Mutex;
use ptz_client::{
    AuxiliaryController, CameraController, MovementController, PulseOutcome, Result, StopToken,
};
use ptz_driver::{Channel, ControlGateway, SessionHandle};
use ptz_protocol::{AuxCommand, CameraCommand, Direction, Speed, SwitchState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 同一通道上的三个控制器
///
/// 共享同一个停止令牌。只能通过 [`PtzChannel::exclusive`] 在持锁状态下访问。
pub struct ChannelControllers {
    pub movement: MovementController,
    pub camera: CameraController,
    pub auxiliary: AuxiliaryController,
}

/// 单通道串行化控制
pub struct PtzChannel {
    controllers: Mutex<ChannelControllers>,
    stop: StopToken,
    session: SessionHandle,
    channel: Channel,
    motion_speed: Speed,
    motion_hold: Duration,
    camera_hold: Duration,
}

impl PtzChannel {
    /// 使用默认速度和默认保持时长创建
    pub fn new(gateway: Arc<dyn ControlGateway>, session: SessionHandle, channel: Channel) -> Self {
        let defaults = PtzConfig::default();
        Self::build(
            gateway,
            session,
            channel,
            Speed::DEFAULT,
            defaults.motion.hold(),
            defaults.camera.hold(),
        )
    }

    /// 按配置创建
    ///
    /// 通道号取自 `[device]`，默认速度和保持时长取自 `[motion]` / `[camera]`。
    pub fn from_config(
        gateway: Arc<dyn ControlGateway>,
        session: SessionHandle,
        config: &PtzConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            gateway,
            session,
            config.device.channel(),
            config.motion.speed()?,
            config.motion.hold(),
            config.camera.hold(),
        ))
    }

    fn build(
        gateway: Arc<dyn ControlGateway>,
        session: SessionHandle,
        channel: Channel,
        motion_speed: Speed,
        motion_hold: Duration,
        camera_hold: Duration,
    ) -> Self {
        let stop = StopToken::new();
        let controllers = ChannelControllers {
            movement: MovementController::new(gateway.clone(), session, channel)
                .with_stop_token(stop.clone()),
            camera: CameraController::new(gateway.clone(), session, channel)
                .with_stop_token(stop.clone()),
            auxiliary: AuxiliaryController::new(gateway, session, channel),
        };

        debug!(
            "PtzChannel created: session={} channel={} speed={} hold={:?}/{:?}",
            session, channel, motion_speed, motion_hold, camera_hold
        );

        Self {
            controllers: Mutex::new(controllers),
            stop,
            session,
            channel,
            motion_speed,
            motion_hold,
            camera_hold,
        }
    }

    pub fn session(&self) -> SessionHandle {
        self.session
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// 停止令牌（不需要拿锁，可在任意线程触发）
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// 结束当前正在进行的保持
    pub fn stop(&self) {
        info!("Stop requested on channel {}", self.channel);
        self.stop.trigger();
    }

    /// 在持锁状态下执行一组操作
    pub fn exclusive<R>(&self, f: impl FnOnce(&ChannelControllers) -> R) -> R {
        let guard = self.controllers.lock();
        f(&guard)
    }

    /// 定时方向移动
    pub fn move_direction(
        &self,
        direction: Direction,
        speed: u8,
        duration: Duration,
    ) -> Result<PulseOutcome> {
        self.exclusive(|c| c.movement.move_direction(direction, speed, duration))
    }

    /// 以配置的默认速度和保持时长移动
    pub fn nudge(&self, direction: Direction) -> Result<PulseOutcome> {
        self.move_direction(direction, self.motion_speed.get(), self.motion_hold)
    }

    pub fn auto_scan(&self, speed: u8) -> Result<()> {
        self.exclusive(|c| c.movement.auto_scan(speed))
    }

    pub fn stop_auto_scan(&self) -> Result<()> {
        self.exclusive(|c| c.movement.stop_auto_scan())
    }

    /// 定时相机参数调整
    pub fn adjust(&self, command: CameraCommand, duration: Duration) -> Result<PulseOutcome> {
        self.exclusive(|c| c.camera.adjust(command, duration))
    }

    /// 以配置的默认保持时长调整
    pub fn adjust_default(&self, command: CameraCommand) -> Result<PulseOutcome> {
        self.adjust(command, self.camera_hold)
    }

    /// 切换辅助设备电源
    pub fn switch_device(&self, device: AuxCommand, state: impl Into<SwitchState>) -> Result<()> {
        let state = state.into();
        self.exclusive(|c| c.auxiliary.switch_device(device, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptz_client::PtzError;
    use ptz_driver::{GatewayCall, MockGateway};
    use ptz_protocol::Action;
    use std::thread;
    use std::time::Instant;

    fn setup() -> (Arc<MockGateway>, PtzChannel) {
        let mock = Arc::new(MockGateway::new());
        let channel = PtzChannel::new(mock.clone(), SessionHandle(0), Channel(1));
        (mock, channel)
    }

    #[test]
    fn test_concurrent_operations_do_not_interleave() {
        let (mock, channel) = setup();
        let channel = Arc::new(channel);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let channel = channel.clone();
                thread::spawn(move || {
                    if i % 2 == 0 {
                        channel
                            .move_direction(Direction::Right, 5, Duration::from_millis(30))
                            .unwrap();
                    } else {
                        channel
                            .adjust(CameraCommand::ZoomIn, Duration::from_millis(30))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let calls = mock.calls();
        assert_eq!(calls.len(), 8);
        for pair in calls.chunks(2) {
            assert_eq!(pair[0].command, pair[1].command);
            assert_eq!(pair[0].action, Action::Start);
            assert_eq!(pair[1].action, Action::Stop);
        }
    }

    #[test]
    fn test_stop_token_interrupts_long_hold() {
        let (mock, channel) = setup();
        let token = channel.stop_token();

        let trigger = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            token.trigger();
        });

        let start = Instant::now();
        let outcome = channel
            .adjust(CameraCommand::FocusFar, Duration::from_secs(10))
            .unwrap();
        trigger.join().unwrap();

        assert!(outcome.is_interrupted());
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_stale_stop_is_discarded() {
        let (_mock, channel) = setup();
        channel.stop();

        let outcome = channel
            .move_direction(Direction::Up, 2, Duration::from_millis(20))
            .unwrap();
        assert_eq!(outcome, PulseOutcome::Completed);
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let mock = Arc::new(MockGateway::new());
        let config = PtzConfig::from_toml_str(
            "[device]\nchannel = 5\n[motion]\ndefault_speed = 6\ndefault_hold_ms = 10\n",
        )
        .unwrap();
        let channel = PtzChannel::from_config(mock.clone(), SessionHandle(2), &config).unwrap();
        assert_eq!(channel.channel(), Channel(5));

        channel.nudge(Direction::DownLeft).unwrap();
        let speed = Speed::new(6).unwrap();
        assert_eq!(
            mock.calls(),
            vec![
                GatewayCall::with_speed(SessionHandle(2), Channel(5), 27, Action::Start, speed),
                GatewayCall::with_speed(SessionHandle(2), Channel(5), 27, Action::Stop, speed),
            ]
        );
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mock = Arc::new(MockGateway::new());
        let mut config = PtzConfig::default();
        config.motion.default_speed = 9;
        assert!(PtzChannel::from_config(mock, SessionHandle(0), &config).is_err());
    }

    #[test]
    fn test_exclusive_sequence() {
        let (mock, channel) = setup();
        channel
            .exclusive(|c| -> Result<()> {
                c.auxiliary.light_on()?;
                c.movement.auto_scan(3)?;
                c.movement.stop_auto_scan()?;
                c.auxiliary.light_off()
            })
            .unwrap();

        let codes: Vec<_> = mock.calls().iter().map(|c| (c.command, c.action)).collect();
        assert_eq!(
            codes,
            vec![
                (2, Action::Start),
                (29, Action::Start),
                (29, Action::Stop),
                (2, Action::Stop)
            ]
        );
    }

    #[test]
    fn test_errors_pass_through() {
        let (mock, channel) = setup();
        mock.fail_all(7);
        let err = channel.switch_device(AuxCommand::Wiper, true).unwrap_err();
        assert_eq!(err.error_code(), Some(7));

        let err = channel
            .move_direction(Direction::Left, 0, Duration::from_millis(1))
            .unwrap_err();
        assert!(matches!(err, PtzError::InvalidSpeed { speed: 0, .. }));
    }
}
