use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::logging::init_tracing;
use crate::models::MovieLog;
use crate::render::{EntryJson, entries_json, render_list, render_stats, render_timeline, timeline_json};
use crate::source::{DEFAULT_SOURCE, load_document, open_source};
use crate::stats::{DEFAULT_TOP_N, Distribution, compute_stats};
use crate::views::{ranked, timeline, watchlist, watchlist_sections};

#[derive(Parser)]
#[command(name = "movie-log")]
#[command(version)]
#[command(about = "Browse a plain-text movie checklist: timeline, rankings, watchlist and stats", long_about = None)]
pub struct Cli {
    /// Movie log file path or http(s) URL
    #[arg(long, global = true, env = "MOVIE_LOG_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Timeout in seconds when fetching the log over HTTP
    #[arg(long, global = true, env = "MOVIE_LOG_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Diagnostics level (overridden by RUST_LOG)
    #[arg(long, global = true, env = "MOVIE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every movie, newest first, with year dividers
    All {
        /// Leave out the CURRENT marker at the top
        #[arg(long)]
        no_current: bool,
    },
    /// Show watched movies ranked by rating
    Ranked,
    /// Show movies not watched yet
    Watchlist {
        /// One flat list instead of year sections
        #[arg(long)]
        flat: bool,
    },
    /// Show statistics about the movie log
    Stats {
        /// Number of movies in the top list
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let source = open_source(&cli.source, Duration::from_secs(cli.timeout))?;
    let text = load_document(source.as_ref());
    let log = MovieLog::parse(&text);
    debug!(entries = log.entries.len(), sections = log.sections.len(), "parsed movie log");

    print!("{}", render_command(command, &log, cli.json)?);
    Ok(())
}

#[derive(Serialize)]
struct StatsReport<'a> {
    watched_count: usize,
    unwatched_count: usize,
    average_rating: f64,
    top: Vec<EntryJson<'a>>,
    distribution: &'a Distribution,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// Render one subcommand's view of an already parsed log
pub fn render_command(command: &Commands, log: &MovieLog, json: bool) -> Result<String> {
    match command {
        Commands::All { no_current } => {
            let rows = timeline(&log.sections, !no_current);
            if json { to_json(&timeline_json(&rows)) } else { Ok(render_timeline(&rows)) }
        }
        Commands::Ranked => {
            let ranked = ranked(&log.entries);
            if json {
                to_json(&entries_json(&ranked))
            } else if ranked.is_empty() {
                Ok("No rated movies yet\n".to_string())
            } else {
                Ok(render_list(&ranked))
            }
        }
        Commands::Watchlist { flat: true } => {
            let pending = watchlist(&log.entries);
            if json {
                to_json(&entries_json(&pending))
            } else if pending.is_empty() {
                Ok("Watchlist is empty\n".to_string())
            } else {
                Ok(render_list(&pending))
            }
        }
        Commands::Watchlist { flat: false } => {
            let sections = watchlist_sections(&log.sections);
            let rows = timeline(&sections, true);
            if json { to_json(&timeline_json(&rows)) } else { Ok(render_timeline(&rows)) }
        }
        Commands::Stats { top } => {
            let stats = compute_stats(&log.entries);
            if json {
                to_json(&StatsReport {
                    watched_count: stats.watched_count,
                    unwatched_count: stats.unwatched_count,
                    average_rating: stats.average_rating,
                    top: entries_json(&stats.top(*top)),
                    distribution: &stats.distribution,
                })
            } else {
                Ok(render_stats(&stats, *top))
            }
        }
    }
}
