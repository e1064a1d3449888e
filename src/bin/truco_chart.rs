use rs_truco::chart::TerminalRenderer;
use rs_truco::{ChartConfig, PipelineError, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PipelineError> {
    // The chart owns stdout, so logs go to stderr and stay quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ChartConfig::default();
    let mut renderer = TerminalRenderer::new(config.x_title.clone(), config.y_title.clone());
    run(&config, &mut renderer)
}
