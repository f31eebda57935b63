//! 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 输出，过滤规则取自 `RUST_LOG`，
//! 未设置时使用给定的默认规则；同时把 `log` crate 的记录桥接到 tracing。
//!
//! ```rust,ignore
//! ptz_sdk::init_logger!();          // 默认 info
//! ptz_sdk::init_logger!("debug");   // 自定义默认规则
//! ```

use tracing_subscriber::EnvFilter;

/// 默认过滤规则
pub const DEFAULT_FILTER: &str = "info";

/// 安装全局日志订阅者
///
/// 已安装过时返回 `false`，不会覆盖已有订阅者。
pub fn try_init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    // log → tracing 桥接
    let _ = tracing_log::LogTracer::init();
    true
}

/// 初始化日志
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::logging::try_init($crate::logging::DEFAULT_FILTER)
    };
    ($filter:expr) => {
        $crate::logging::try_init($filter)
    };
}
