use buildinfo_base::result::{BuildInfoResult, Context};
use buildinfo_logic::runner::BuildInfoRunner;
use buildinfo_real_adapter::{RealAdapter, version_store};
use std::env;
use tracing::info;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;

const LOG_LEVEL_VARIABLE: &str = "BUILDINFO_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

pub fn run_cli() -> BuildInfoResult<()> {
    if let Err(err) = enable_ansi_support::enable_ansi_support() {
        eprintln!("Failed to enable ANSI support: {err}");
    }

    let level = log_level(env::var(LOG_LEVEL_VARIABLE).ok().as_deref())?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::ENTER)
        .with_writer(std::io::stderr)
        .with_filter(level);

    let registry = tracing_subscriber::registry().with(fmt_layer);

    tracing::subscriber::set_global_default(registry)
        .context("setting default logging subscriber failed")?;
    info!("Using log level '{level}'");
    let runner = BuildInfoRunner::with_store(RealAdapter::new(), version_store().clone());
    runner.run();
    Ok(())
}

fn log_level(value: Option<&str>) -> BuildInfoResult<LevelFilter> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value.parse::<LevelFilter>().with_context(|| {
            format!("Invalid log level '{value}' in environment variable {LOG_LEVEL_VARIABLE}")
        }),
    }
}
