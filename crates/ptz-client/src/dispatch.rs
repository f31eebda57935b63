//! Dispatcher - 内部命令发送器
//!
//! 三个控制器共享的底层发送逻辑：
//! - 会话句柄检查（负值在任何网关调用之前被拒绝）
//! - 带速度 / 无速度两条发送路径，类型上分开
//! - 失败时立即读取设备错误码，封装为 `GatewayFailure`
//!
//! 带速度的路径只接受 `MoveCommand`；无速度的路径只接受实现了
//! `SpeedlessCommand` 的命令族（相机参数、辅助设备），避免误用。

use crate::error::{PtzError, Result};
use ptz_driver::{Channel, ControlGateway, SessionHandle};
use ptz_protocol::{Action, AuxCommand, CameraCommand, MAX_SPEED, MIN_SPEED, MoveCommand, Speed};
use std::sync::Arc;
use tracing::{debug, warn};

mod sealed {
    pub trait Sealed {}
    impl Sealed for ptz_protocol::CameraCommand {}
    impl Sealed for ptz_protocol::AuxCommand {}
}

/// 无速度命令族（相机参数、辅助设备）
pub trait SpeedlessCommand: sealed::Sealed + Copy {
    fn code(self) -> u32;
}

impl SpeedlessCommand for CameraCommand {
    fn code(self) -> u32 {
        CameraCommand::code(self)
    }
}

impl SpeedlessCommand for AuxCommand {
    fn code(self) -> u32 {
        AuxCommand::code(self)
    }
}

/// 操作标签（用于错误信息和日志）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperationLabel {
    pub en: String,
    pub zh: String,
}

impl OperationLabel {
    pub(crate) fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }
}

/// 内部命令发送器
///
/// 持有 (会话, 通道) 和注入的网关；除此之外无状态。
#[derive(Clone)]
pub(crate) struct Dispatcher {
    gateway: Arc<dyn ControlGateway>,
    session: SessionHandle,
    channel: Channel,
}

impl Dispatcher {
    pub(crate) fn new(
        gateway: Arc<dyn ControlGateway>,
        session: SessionHandle,
        channel: Channel,
    ) -> Self {
        Dispatcher {
            gateway,
            session,
            channel,
        }
    }

    pub(crate) fn session(&self) -> SessionHandle {
        self.session
    }

    pub(crate) fn channel(&self) -> Channel {
        self.channel
    }

    /// 会话句柄检查
    pub(crate) fn check_session(&self, label: &OperationLabel) -> Result<()> {
        if !self.session.is_valid() {
            return Err(PtzError::InvalidSession {
                operation: label.en.clone(),
                operation_zh: label.zh.clone(),
                channel: self.channel,
                session: self.session.get(),
            });
        }
        Ok(())
    }

    /// 速度校验（在会话检查和任何网关调用之前）
    pub(crate) fn check_speed(&self, speed: u8, label: &OperationLabel) -> Result<Speed> {
        Speed::new(speed).map_err(|_| PtzError::InvalidSpeed {
            operation: label.en.clone(),
            operation_zh: label.zh.clone(),
            channel: self.channel,
            speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        })
    }

    /// 带速度的控制（移动命令族）
    pub(crate) fn send_with_speed(
        &self,
        command: MoveCommand,
        action: Action,
        speed: Speed,
        label: &OperationLabel,
    ) -> Result<()> {
        self.check_session(label)?;

        debug!(
            "PTZ control: channel={} cmd={} action={} speed={}",
            self.channel,
            command.code(),
            action,
            speed
        );

        self.gateway
            .control_with_speed(self.session, self.channel, command.code(), action, speed)
            .map_err(|e| {
                // 错误码必须在任何其他网关调用之前读取
                let error_code = self.gateway.last_error_code();
                warn!(
                    "PTZ control failed: {} [channel={} cmd={} action={} error_code={}]: {}",
                    label.en,
                    self.channel,
                    command.code(),
                    action,
                    error_code,
                    e
                );
                self.failure(command.code(), action, error_code, label)
            })
    }

    /// 无速度的控制（相机参数、辅助设备命令族）
    pub(crate) fn send<C: SpeedlessCommand>(
        &self,
        command: C,
        action: Action,
        label: &OperationLabel,
    ) -> Result<()> {
        self.check_session(label)?;

        let code = command.code();
        debug!(
            "PTZ control: channel={} cmd={} action={}",
            self.channel, code, action
        );

        self.gateway
            .control(self.session, self.channel, code, action)
            .map_err(|e| {
                let error_code = self.gateway.last_error_code();
                warn!(
                    "PTZ control failed: {} [channel={} cmd={} action={} error_code={}]: {}",
                    label.en, self.channel, code, action, error_code, e
                );
                self.failure(code, action, error_code, label)
            })
    }

    fn failure(
        &self,
        command: u32,
        action: Action,
        error_code: i32,
        label: &OperationLabel,
    ) -> PtzError {
        PtzError::GatewayFailure {
            operation: label.en.clone(),
            operation_zh: label.zh.clone(),
            action,
            channel: self.channel,
            command,
            error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptz_driver::MockGateway;

    fn label() -> OperationLabel {
        OperationLabel::new("zoom in", "焦距放大")
    }

    #[test]
    fn test_invalid_session_makes_no_call() {
        let mock = Arc::new(MockGateway::new());
        let dispatcher = Dispatcher::new(mock.clone(), SessionHandle(-1), Channel(1));

        let expected = PtzError::InvalidSession {
            operation: "zoom in".to_string(),
            operation_zh: "焦距放大".to_string(),
            channel: Channel(1),
            session: -1,
        };

        let err = dispatcher
            .send(CameraCommand::ZoomIn, Action::Start, &label())
            .unwrap_err();
        assert_eq!(err, expected);

        let err = dispatcher
            .send_with_speed(MoveCommand::TiltUp, Action::Start, Speed::MIN, &label())
            .unwrap_err();
        assert_eq!(err, expected);

        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_check_speed_carries_label() {
        let mock = Arc::new(MockGateway::new());
        let dispatcher = Dispatcher::new(mock.clone(), SessionHandle(0), Channel(4));

        assert_eq!(dispatcher.check_speed(7, &label()).unwrap(), Speed::MAX);

        let err = dispatcher.check_speed(8, &label()).unwrap_err();
        assert_eq!(
            err,
            PtzError::InvalidSpeed {
                operation: "zoom in".to_string(),
                operation_zh: "焦距放大".to_string(),
                channel: Channel(4),
                speed: 8,
                min: 1,
                max: 7,
            }
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_failure_carries_device_error_code() {
        let mock = Arc::new(MockGateway::new());
        mock.fail_all(47);
        let dispatcher = Dispatcher::new(mock.clone(), SessionHandle(0), Channel(3));

        let err = dispatcher
            .send(CameraCommand::ZoomIn, Action::Start, &label())
            .unwrap_err();
        match err {
            PtzError::GatewayFailure {
                operation,
                action,
                channel,
                command,
                error_code,
                ..
            } => {
                assert_eq!(operation, "zoom in");
                assert_eq!(action, Action::Start);
                assert_eq!(channel, Channel(3));
                assert_eq!(command, 11);
                assert_eq!(error_code, 47);
            },
            other => panic!("Expected GatewayFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_speed_paths_are_distinct() {
        let mock = Arc::new(MockGateway::new());
        let dispatcher = Dispatcher::new(mock.clone(), SessionHandle(0), Channel(1));

        dispatcher
            .send_with_speed(MoveCommand::PanLeft, Action::Start, Speed::DEFAULT, &label())
            .unwrap();
        dispatcher
            .send(AuxCommand::Wiper, Action::Start, &label())
            .unwrap();

        let calls = mock.calls();
        assert_eq!(calls[0].speed, Some(Speed::DEFAULT));
        assert_eq!(calls[1].speed, None);
        assert_eq!(calls[1].command, 3);
    }
}
