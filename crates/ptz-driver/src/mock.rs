//! Mock 网关
//!
//! 用于测试的模拟控制网关：记录每一次调用（含时间戳），
//! 可以让第 n 次调用、某个 (命令码, 动作) 组合或全部调用失败，并设置对应的设备错误码。

use crate::{Channel, ControlGateway, DriverError, GatewayCall, SessionHandle};
use parking_lot::Mutex;
use ptz_protocol::{Action, Speed};
use std::time::Instant;

/// 失败规则
#[derive(Debug, Clone, Copy)]
enum FailureRule {
    /// 第 n 次调用失败（从 1 开始计数）
    NthCall { index: usize, error_code: i32 },
    /// 匹配的 (命令码, 动作) 失败
    Command {
        command: u32,
        action: Action,
        error_code: i32,
    },
    /// 所有调用失败
    All { error_code: i32 },
}

impl FailureRule {
    fn matches(&self, index: usize, call: &GatewayCall) -> Option<i32> {
        match *self {
            FailureRule::NthCall {
                index: n,
                error_code,
            } if n == index => Some(error_code),
            FailureRule::Command {
                command,
                action,
                error_code,
            } if command == call.command && action == call.action => Some(error_code),
            FailureRule::All { error_code } => Some(error_code),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<(Instant, GatewayCall)>,
    rules: Vec<FailureRule>,
    last_error: i32,
}

/// 模拟控制网关
#[derive(Debug, Default)]
pub struct MockGateway {
    state: Mutex<MockState>,
}

impl MockGateway {
    /// 创建总是成功的模拟网关
    pub fn new() -> Self {
        Self::default()
    }

    /// 让第 `index` 次调用（从 1 开始）失败
    pub fn fail_call(&self, index: usize, error_code: i32) {
        self.state
            .lock()
            .rules
            .push(FailureRule::NthCall { index, error_code });
    }

    /// 让匹配 (命令码, 动作) 的调用失败
    pub fn fail_on(&self, command: u32, action: Action, error_code: i32) {
        self.state.lock().rules.push(FailureRule::Command {
            command,
            action,
            error_code,
        });
    }

    /// 让所有调用失败
    pub fn fail_all(&self, error_code: i32) {
        self.state.lock().rules.push(FailureRule::All { error_code });
    }

    /// 清除失败规则（保留调用记录）
    pub fn clear_failures(&self) {
        self.state.lock().rules.clear();
    }

    /// 清除调用记录
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// 已记录的调用（按发生顺序）
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().calls.iter().map(|(_, c)| *c).collect()
    }

    /// 已记录调用的时间戳
    pub fn call_times(&self) -> Vec<Instant> {
        self.state.lock().calls.iter().map(|(t, _)| *t).collect()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    fn record(&self, call: GatewayCall) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        state.calls.push((Instant::now(), call));
        let index = state.calls.len();

        let failure = state.rules.iter().find_map(|rule| rule.matches(index, &call));
        match failure {
            Some(error_code) => {
                state.last_error = error_code;
                Err(DriverError::Rejected)
            },
            None => Ok(()),
        }
    }
}

impl ControlGateway for MockGateway {
    fn control_with_speed(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
        speed: Speed,
    ) -> Result<(), DriverError> {
        self.record(GatewayCall::with_speed(
            session, channel, command, action, speed,
        ))
    }

    fn control(
        &self,
        session: SessionHandle,
        channel: Channel,
        command: u32,
        action: Action,
    ) -> Result<(), DriverError> {
        self.record(GatewayCall::speedless(session, channel, command, action))
    }

    fn last_error_code(&self) -> i32 {
        self.state.lock().last_error
    }
}
