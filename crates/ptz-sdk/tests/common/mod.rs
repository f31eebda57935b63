//! 集成测试公共工具
//!
//! 每个测试构建自己的 Mock 网关，避免测试之间共享调用记录。

#![allow(dead_code)]

use ptz_sdk::driver::MockGateway;
use ptz_sdk::prelude::*;
use std::sync::Arc;

pub const SESSION: SessionHandle = SessionHandle(0);
pub const CHANNEL: Channel = Channel(1);

pub fn mock_gateway() -> Arc<MockGateway> {
    Arc::new(MockGateway::new())
}

pub fn movement(gateway: &Arc<MockGateway>) -> MovementController {
    MovementController::new(gateway.clone(), SESSION, CHANNEL)
}

pub fn camera(gateway: &Arc<MockGateway>) -> CameraController {
    CameraController::new(gateway.clone(), SESSION, CHANNEL)
}

pub fn auxiliary(gateway: &Arc<MockGateway>) -> AuxiliaryController {
    AuxiliaryController::new(gateway.clone(), SESSION, CHANNEL)
}

/// 调用记录的 (命令码, 动作, 速度) 视图
pub fn tuples(gateway: &MockGateway) -> Vec<(u32, Action, Option<u8>)> {
    gateway
        .calls()
        .iter()
        .map(|c| (c.command, c.action, c.speed.map(Speed::get)))
        .collect()
}
