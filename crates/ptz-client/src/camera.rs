//! CameraController - 相机参数控制器
//!
//! 变焦、聚焦、光圈调整共用一个无速度的脉冲协议：
//! `(code, START)` → 保持 → `(code, STOP)`。
//! 任一步失败都会终止，并以操作名称（如"焦点前调"）报告 `GatewayFailure`。

use crate::dispatch::{Dispatcher, OperationLabel};
use crate::error::Result;
use crate::hold::{PulseOutcome, StopToken, hold};
use ptz_driver::{Channel, ControlGateway, SessionHandle};
use ptz_protocol::{Action, CameraCommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 相机参数控制器
#[derive(Clone)]
pub struct CameraController {
    dispatcher: Dispatcher,
    stop: Option<StopToken>,
}

impl CameraController {
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

    /// 焦距放大（拉近）
    pub fn zoom_in(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::ZoomIn, duration).map(|_| ())
    }

    /// 焦距缩小（拉远）
    pub fn zoom_out(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::ZoomOut, duration).map(|_| ())
    }

    /// 焦点前调（聚焦近处）
    pub fn focus_near(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::FocusNear, duration).map(|_| ())
    }

    /// 焦点后调（聚焦远处）
    pub fn focus_far(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::FocusFar, duration).map(|_| ())
    }

    /// 光圈扩大（变亮）
    pub fn iris_open(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::IrisOpen, duration).map(|_| ())
    }

    /// 光圈缩小（变暗）
    pub fn iris_close(&self, duration: Duration) -> Result<()> {
        self.adjust(CameraCommand::IrisClose, duration).map(|_| ())
    }

    /// 执行一次相机参数调整
    pub fn adjust(&self, command: CameraCommand, duration: Duration) -> Result<PulseOutcome> {
        let label = OperationLabel::new(command.label(), command.label_zh());

        if let Some(token) = &self.stop {
            token.clear();
        }

        self.dispatcher.send(command, Action::Start, &label)?;

        let outcome = hold(duration, self.stop.as_ref());
        if let PulseOutcome::Interrupted { held } = outcome {
            warn!(
                "{} interrupted after {:?} (channel {}), stopping now",
                label.en,
                held,
                self.channel()
            );
        }

        self.dispatcher.send(command, Action::Stop, &label)?;

        info!(
            "{} done (channel {}, {:?})",
            label.en,
            self.channel(),
            duration
        );
        Ok(outcome)
    }
}
