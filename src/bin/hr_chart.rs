use anyhow::Context;
use chrono::prelude::*;
use hr_chart::cli::{parse_cli, PlotArgs};
use hr_chart::{AxisFormatter, ChartScreen};
use std::fmt::Display;
use tracing::{info, warn};

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hr_chart={}", level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run<Tz: TimeZone>(args: &PlotArgs, fmt: AxisFormatter<Tz>) -> anyhow::Result<()>
where
    Tz::Offset: Display,
{
    let mut screen = ChartScreen::new(fmt);
    let soft_errors = screen
        .load_file(&args.csvin)
        .context("loading aborted")?;
    let chart = screen.chart();
    for s in soft_errors.iter().chain(chart.soft_errors.iter()) {
        warn!("{}", s);
    }
    info!(
        "{} records, {} rows with problems",
        screen.records().len(),
        soft_errors.len() + chart.soft_errors.len()
    );
    match chart.axis_minimum {
        Some(min) => info!("axis minimum {}", min),
        None => warn!("no records to plot"),
    }
    chart
        .plot_svg(screen.formatter(), &args.svgout, args.size)
        .with_context(|| format!("could not write {}", args.svgout.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = parse_cli();
    setup_logging(args.verbose);
    info!(
        "read data from {} and plot to {}",
        args.csvin.display(),
        args.svgout.display()
    );
    if args.utc {
        run(&args, AxisFormatter::utc())
    } else {
        run(&args, AxisFormatter::local())
    }
}
