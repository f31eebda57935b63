//! 端到端调用序列测试
//!
//! 通过 Mock 网关验证每个控制器发出的精确调用序列、时序和错误。

mod common;

use common::*;
use ptz_sdk::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn test_right_full_speed_two_seconds() {
    let gateway = mock_gateway();
    let movement = movement(&gateway);

    let result = movement.right(7, Duration::from_secs(2));
    assert!(result.is_ok());

    assert_eq!(
        tuples(&gateway),
        vec![(24, Action::Start, Some(7)), (24, Action::Stop, Some(7))]
    );
    let times = gateway.call_times();
    assert!(times[1].duration_since(times[0]) >= Duration::from_secs(2));
}

#[test]
fn test_focus_near_stop_fails() {
    let gateway = mock_gateway();
    gateway.fail_call(2, 10);
    let camera = camera(&gateway);

    let err = camera.focus_near(Duration::from_secs(1)).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("焦点前调"));
    assert!(msg.contains("focus near"));
    assert!(msg.contains("10"));
    assert_eq!(err.error_code(), Some(10));
    assert!(matches!(err, PtzError::GatewayFailure { action: Action::Stop, .. }));

    assert_eq!(
        tuples(&gateway),
        vec![(13, Action::Start, None), (13, Action::Stop, None)]
    );
}

#[test]
fn test_light_on_off_without_delay() {
    let gateway = mock_gateway();
    let aux = auxiliary(&gateway);

    let start = Instant::now();
    aux.light_on().unwrap();
    aux.light_off().unwrap();
    assert!(start.elapsed() < Duration::from_millis(500));

    assert_eq!(
        tuples(&gateway),
        vec![(2, Action::Start, None), (2, Action::Stop, None)]
    );
}

#[test]
fn test_every_movement_pair_matches() {
    for direction in Direction::ALL {
        for speed in 1..=7u8 {
            let gateway = mock_gateway();
            movement(&gateway)
                .move_direction(direction, speed, Duration::ZERO)
                .unwrap();

            let code = direction.command().code();
            assert_eq!(
                tuples(&gateway),
                vec![
                    (code, Action::Start, Some(speed)),
                    (code, Action::Stop, Some(speed))
                ]
            );
        }
    }
}

#[test]
fn test_every_camera_pair_is_speedless() {
    for command in CameraCommand::ALL {
        let gateway = mock_gateway();
        camera(&gateway).adjust(command, Duration::ZERO).unwrap();

        assert_eq!(
            tuples(&gateway),
            vec![
                (command.code(), Action::Start, None),
                (command.code(), Action::Stop, None)
            ]
        );
    }
}

#[test]
fn test_auto_scan_stop_ignores_start_speed() {
    for speed in 1..=7u8 {
        let gateway = mock_gateway();
        let movement = movement(&gateway);
        movement.auto_scan(speed).unwrap();
        movement.stop_auto_scan().unwrap();

        assert_eq!(
            tuples(&gateway),
            vec![(29, Action::Start, Some(speed)), (29, Action::Stop, Some(4))]
        );
    }
}

#[test]
fn test_start_failure_never_sends_stop() {
    let gateway = mock_gateway();
    gateway.fail_call(1, 3);

    let err = movement(&gateway)
        .down_right(5, Duration::from_secs(3))
        .unwrap_err();
    assert!(matches!(err, PtzError::GatewayFailure { action: Action::Start, .. }));
    assert_eq!(tuples(&gateway), vec![(28, Action::Start, Some(5))]);

    gateway.clear_calls();
    gateway.fail_call(1, 3);
    assert!(camera(&gateway).iris_close(Duration::from_secs(3)).is_err());
    assert_eq!(tuples(&gateway), vec![(16, Action::Start, None)]);
}

#[test]
fn test_negative_session_blocks_every_operation() {
    let gateway = mock_gateway();
    let session = SessionHandle(-1);
    let movement = MovementController::new(gateway.clone(), session, CHANNEL);
    let camera = CameraController::new(gateway.clone(), session, CHANNEL);
    let aux = AuxiliaryController::new(gateway.clone(), session, CHANNEL);

    assert!(movement.up(4, Duration::ZERO).is_err());
    assert!(movement.auto_scan(4).is_err());
    assert!(movement.stop_auto_scan().is_err());
    assert!(camera.zoom_out(Duration::ZERO).is_err());
    assert!(aux.wiper_on().is_err());
    assert!(aux.aux_device2_off().is_err());

    assert_eq!(gateway.call_count(), 0);
}

#[test]
fn test_controllers_remain_usable_after_failure() {
    let gateway = mock_gateway();
    let aux = auxiliary(&gateway);

    gateway.fail_all(99);
    assert!(aux.fan_on().is_err());

    gateway.clear_failures();
    assert!(aux.fan_on().is_ok());
    assert_eq!(gateway.call_count(), 2);
}
