//! 日志初始化
//!
//! 默认 info 级别，verbose 时为 debug；设置 RUST_LOG 时以其为准

use tracing_subscriber::EnvFilter;

/// 初始化全局日志（重复调用无副作用）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
