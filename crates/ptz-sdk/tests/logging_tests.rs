//! 日志初始化测试
//!
//! 全局订阅者只能安装一次，测试需要串行执行。

use serial_test::serial;

#[test]
#[serial]
fn test_second_init_is_rejected() {
    let _ = ptz_sdk::init_logger!("debug");
    assert!(tracing::dispatcher::has_been_set());

    // 已安装的订阅者不会被覆盖
    assert!(!ptz_sdk::init_logger!());
    assert!(!ptz_sdk::logging::try_init("trace"));
}

#[test]
#[serial]
fn test_log_records_are_bridged() {
    let _ = ptz_sdk::init_logger!();

    // LogTracer 安装后 log 的全局级别不再是 Off
    assert_ne!(log::max_level(), log::LevelFilter::Off);
    assert!(log::log_enabled!(log::Level::Error));
}
