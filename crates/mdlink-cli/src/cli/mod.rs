//! CLI for mdlink.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mdlink_core::config;
use mdlink_core::TitleFetchOptions;
use std::path::PathBuf;

use commands::{run_detect, run_linkify, run_scan, run_title};

/// Top-level CLI for mdlink.
#[derive(Debug, Parser)]
#[command(name = "mdlink")]
#[command(about = "mdlink: detect URLs in markdown and turn them into titled links", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/mdlink/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the fetch settings in the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct FetchArgs {
    /// Request timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// User-Agent header to send.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Fetch up to N pages concurrently.
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl FetchArgs {
    /// Applies the overrides on top of `base` and validates the result.
    pub fn apply(&self, base: TitleFetchOptions) -> Result<TitleFetchOptions> {
        let mut opts = base;
        if let Some(ms) = self.timeout_ms {
            opts = opts.with_timeout_ms(ms);
        }
        if let Some(ua) = &self.user_agent {
            opts = opts.with_user_agent(ua.clone());
        }
        if let Some(n) = self.jobs {
            opts = opts.with_max_concurrent(n);
        }
        opts.validate()?;
        Ok(opts)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Report the URL at a cursor position in a markdown file and fetch its title.
    Detect {
        /// Markdown file to inspect.
        path: PathBuf,

        /// Zero-based line index of the cursor.
        #[arg(long)]
        line: usize,

        /// Zero-based character offset of the cursor within the line.
        #[arg(long)]
        column: usize,

        /// Only classify the URL; do not fetch its title.
        #[arg(long)]
        no_fetch: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// List valid and malformed URLs in a block of text (stdin if no file).
    Scan {
        /// File to scan; reads stdin when omitted.
        path: Option<PathBuf>,

        /// Also fetch titles for the valid URLs and print a markdown report.
        #[arg(long)]
        titles: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Fetch page titles for one or more URLs.
    Title {
        /// URLs to resolve.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print results as JSON instead of a markdown report.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Rewrite bare URLs in a markdown file into `[title](url)` links.
    Linkify {
        /// Markdown file to rewrite.
        path: PathBuf,

        /// Write the result back to the file instead of stdout.
        #[arg(long)]
        in_place: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Detect {
                path,
                line,
                column,
                no_fetch,
                fetch,
            } => {
                let opts = if no_fetch {
                    None
                } else {
                    Some(fetch.apply(cfg.fetch_options())?)
                };
                run_detect(&path, line, column, cfg.fence_tracking, opts).await?;
            }
            CliCommand::Scan {
                path,
                titles,
                fetch,
            } => {
                let opts = if titles {
                    Some(fetch.apply(cfg.fetch_options())?)
                } else {
                    None
                };
                run_scan(path.as_deref(), opts).await?;
            }
            CliCommand::Title { urls, json, fetch } => {
                let opts = fetch.apply(cfg.fetch_options())?;
                run_title(&urls, json, &opts).await?;
            }
            CliCommand::Linkify {
                path,
                in_place,
                fetch,
            } => {
                let opts = fetch.apply(cfg.fetch_options())?;
                run_linkify(&path, in_place, cfg.fence_tracking, &opts).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
