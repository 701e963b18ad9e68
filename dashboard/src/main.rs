use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use finmedia_preprocessing::{DashboardConfig, Dataset};
use finmedia_signals::{build_report, ReportSettings};
use tracing::{info, warn};

mod output;
mod selector;

use output::DashboardRenderer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV of cleaned articles with VADER title sentiment
    #[arg(long)]
    data: Option<PathBuf>,

    /// Media source to analyze (defaults to the first source in the file)
    #[arg(long)]
    media: Option<String>,

    /// Print the available media sources and exit
    #[arg(long)]
    list_media: bool,

    /// Pick media sources from a menu until quit
    #[arg(long, conflicts_with_all = ["media", "json"])]
    interactive: bool,

    /// Number of keywords in the top keywords chart
    #[arg(long)]
    top_n: Option<usize>,

    /// Emit the report as JSON instead of the text dashboard
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply_to(&self, config: &mut DashboardConfig) {
        if let Some(ref data) = self.data {
            config.data_path = data.clone();
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = DashboardConfig::from_env_or_default();
    args.apply_to(&mut config);
    config.validate()?;

    info!("Starting FinMedia sentiment dashboard v{}", finmedia_preprocessing::VERSION);
    info!("Data: {:?}", config.data_path);

    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("Failed to load dataset from {:?}", config.data_path))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_media {
        for media in dataset.media_sources() {
            writeln!(out, "{}", media)?;
        }
        return Ok(());
    }

    let settings = ReportSettings::from(&config);
    let renderer = DashboardRenderer::new(config.preview_rows);

    if args.interactive {
        let stdin = io::stdin();
        selector::run_interactive(&dataset, &settings, &renderer, stdin.lock(), &mut out)?;
        return Ok(());
    }

    let media = match args.media {
        Some(ref media) => media.as_str(),
        None => dataset.default_media()?,
    };
    if !dataset.contains_media(media) {
        warn!("Media source {:?} not present in dataset", media);
    }

    let report = build_report(&dataset, media, &settings)?;
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        renderer.render(&report, &mut out)?;
    }

    info!("Dashboard rendered for {} ({} articles)", report.media, report.article_count);
    Ok(())
}
