//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `newsdesk_core` linkage with deterministic output.
//! - Optionally run a search over an article JSON file.
//! - Start core file logging when `--log-dir` is given.

use clap::Parser;
use newsdesk_core::{default_log_level, init_logging, ArticleCatalog, FilterController};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "newsdesk_cli")]
#[command(version, about = "Search a newsdesk article collection")]
struct Args {
    /// Article JSON file to search
    articles: Option<PathBuf>,

    /// Search query; multiple words are joined with single spaces
    query: Vec<String>,

    /// Absolute directory for rotating core log files
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with --log-dir (defaults to debug/info by build)
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("newsdesk_core ping={}", newsdesk_core::ping());
    println!("newsdesk_core version={}", newsdesk_core::core_version());

    let Some(path) = args.articles.as_deref() else {
        return ExitCode::SUCCESS;
    };
    match search(path, &args.query.join(" ")) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Result rows, newest first, followed by the match summary.
fn search(path: &Path, query: &str) -> Result<Vec<String>, newsdesk_core::CatalogError> {
    let catalog = ArticleCatalog::from_path(path)?;
    let mut controller = FilterController::new(catalog.articles().to_vec());
    controller.set_search_query(query);

    let mut lines: Vec<String> = controller
        .sorted_filtered()
        .into_iter()
        .map(|article| {
            format!(
                "{} [{} / {}] importance={} {}",
                article.date.format("%Y-%m-%d"),
                article.topic,
                article.sub_topic,
                article.importance,
                article.title
            )
        })
        .collect();

    let stats = controller.stats();
    lines.push(format!(
        "matched {}/{} ({}%)",
        stats.filtered_articles,
        stats.total_articles,
        stats.match_percent()
    ));
    Ok(lines)
}
