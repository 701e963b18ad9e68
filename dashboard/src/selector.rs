use std::io::{BufRead, Write};

use anyhow::Result;
use finmedia_preprocessing::Dataset;
use finmedia_signals::{build_report, ReportSettings};
use tracing::{debug, info, warn};

use crate::output::DashboardRenderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    Media(&'a str),
    Quit,
    Invalid(String),
}

/// Resolve a line of user input against the offered media sources.
///
/// Accepts a 1-based menu number or an exact source name.
pub fn parse_selection<'a>(input: &str, sources: &[&'a str]) -> Selection<'a> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Selection::Quit;
    }
    if input.is_empty() {
        return Selection::Invalid("Please choose a media source".to_string());
    }

    if let Ok(index) = input.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| sources.get(i).copied()) {
            Some(media) => Selection::Media(media),
            None => Selection::Invalid(format!("No media source numbered {}", index)),
        };
    }

    match sources.iter().copied().find(|s| *s == input) {
        Some(media) => Selection::Media(media),
        None => Selection::Invalid(format!("Unknown media source: {}", input)),
    }
}

/// Media selector loop: every pick rebuilds the whole report.
pub fn run_interactive<R: BufRead, W: Write>(
    dataset: &Dataset,
    settings: &ReportSettings,
    renderer: &DashboardRenderer,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let sources = dataset.media_sources();
    let mut rendered = 0;
    let mut lines = input.lines();

    loop {
        print_menu(&sources, out)?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_selection(&line, &sources) {
            Selection::Quit => break,
            Selection::Invalid(message) => {
                writeln!(out, "{}", message)?;
            }
            Selection::Media(media) => {
                debug!("Selected media source: {}", media);
                match build_report(dataset, media, settings) {
                    Ok(report) => {
                        renderer.render(&report, out)?;
                        rendered += 1;
                    }
                    Err(e) => {
                        warn!("Failed to build report for {}: {}", media, e);
                        writeln!(out, "Cannot analyze {}: {}", media, e)?;
                    }
                }
            }
        }
    }

    info!("Interactive session rendered {} reports", rendered);
    Ok(rendered)
}

fn print_menu<W: Write>(sources: &[&str], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nSelect Media Source:")?;
    for (i, source) in sources.iter().enumerate() {
        writeln!(out, "  {:>3}. {}", i + 1, source)?;
    }
    write!(out, "Enter number or name (q to quit): ")?;
    out.flush()
}
