use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use infodump::collectors::{collect_report, render_report};
use infodump::config::{apply_overrides, Overrides, ReportConfig};
use infodump::logging::init_tracing;
use infodump::output::{OutputSink, PlainSink, StyledSink};

#[derive(Parser, Debug)]
#[command(name = "infodump", version, about = "System information diagnostic tool")]
struct Cli {
    /// Path to search for largest files
    #[arg(long, env = "INFODUMP_PATH")]
    path: Option<PathBuf>,
    /// Number of largest files to display
    #[arg(long, env = "INFODUMP_LARGEST")]
    largest: Option<usize>,
    /// Number of top CPU processes to display
    #[arg(long, env = "INFODUMP_CPU")]
    cpu: Option<usize>,
    /// Disable colorful output
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
    /// Disable lm-sensors temperature output
    #[arg(long, action = ArgAction::SetTrue)]
    no_temp: bool,
    /// Disable Nvidia GPU temperature output
    #[arg(long, action = ArgAction::SetTrue)]
    no_nvidia: bool,
    /// Emit the whole report as one JSON document
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;
    let cfg = apply_overrides(
        ReportConfig::default(),
        &Overrides {
            path: cli.path,
            largest: cli.largest,
            cpu: cli.cpu,
            no_color: cli.no_color,
            no_temp: cli.no_temp,
            no_nvidia: cli.no_nvidia,
            json: cli.json,
        },
    );
    let report = collect_report(&cfg);
    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let sink: Box<dyn OutputSink> = if cfg.color {
            Box::new(StyledSink)
        } else {
            Box::new(PlainSink)
        };
        render_report(&report, &cfg, sink.as_ref());
    }
    Ok(())
}
