use std::process::ExitCode;

use anyhow::{Context, Result};
use bench_charts::render::native::NativeRenderer;
use bench_charts::render::ChartStyle;
use bench_charts::report;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let requests = report::default_report().context("building benchmark datasets")?;
    let renderer = NativeRenderer::new(ChartStyle::default());
    report::render_report(&renderer, &requests)
}
