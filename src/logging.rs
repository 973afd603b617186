use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化全局 tracing subscriber
///
/// `RUST_LOG` 已设置时优先使用；否则 `-v` 为 debug，默认 info。
/// 日志输出到 stderr，stdout 留给进度显示。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // 测试中可能被多次调用
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
