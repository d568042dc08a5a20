//! meridian CLI - Compare world market index sessions on a shared 24-hour timeline.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "meridian")]
#[command(about = "Compare world market index sessions on a shared 24-hour timeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Base URL of the remote quote API
    #[arg(long, env = "MERIDIAN_API_BASE", global = true)]
    api_base: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, env = "MERIDIAN_TIMEOUT", default_value = "15", global = true)]
    timeout: u64,

    /// Maximum symbols resolved concurrently
    #[arg(long, default_value = "8", global = true)]
    concurrency: usize,

    /// Index table to use instead of the built-in one (JSON)
    #[arg(long, env = "MERIDIAN_CATALOG", global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chart configuration as JSON
    Render {
        /// Display mode (line, candle)
        #[arg(short, long, default_value = "line")]
        mode: String,

        /// Bar interval (5min, 15min, 30min, 1h, 4h, 1day, 1week, 1month)
        #[arg(short, long, default_value = "1day")]
        interval: String,

        /// Date to render (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Data provider (demo, remote)
        #[arg(short, long, default_value = "demo")]
        provider: String,

        /// Toggle an index code in the overlay (repeatable)
        #[arg(short, long = "select")]
        select: Vec<String>,

        /// Overlay every index of a region (oceania, asia, europe, americas)
        #[arg(short, long)]
        region: Option<String>,

        /// Overlay every index in the catalog
        #[arg(long)]
        all: bool,

        /// Press the region cycle N times (Oceania, Asia, Europe, Americas, ...)
        #[arg(long, value_name = "N", conflicts_with_all = ["all", "region"])]
        cycle: Option<usize>,

        /// Index shown in candle mode. Defaults to the first catalog entry.
        #[arg(long)]
        index: Option<String>,

        /// Draw market-hours annotations
        #[arg(long)]
        market_hours: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List catalog indices
    List {
        /// Filter by region (oceania, asia, europe, americas)
        #[arg(short, long)]
        region: Option<String>,

        /// Print the market-hours summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show index details and its session on the reference timeline
    Info {
        /// Index code (e.g., ^AXJO, ^FTSE)
        code: String,

        /// Session date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print the resolved bars of one index as JSON
    Series {
        /// Index code
        code: String,

        /// Bar interval
        #[arg(short, long, default_value = "1day")]
        interval: String,

        /// Date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Data provider (demo, remote)
        #[arg(short, long, default_value = "demo")]
        provider: String,

        /// Print candle tooltips with the change since the first close instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        text: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check the remote quote API
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings {
        api_base: cli.api_base,
        timeout_secs: cli.timeout,
        concurrency: cli.concurrency,
        catalog: cli.catalog,
        quiet: cli.quiet,
    };

    match command {
        Commands::Render {
            mode,
            interval,
            date,
            provider,
            select,
            region,
            all,
            cycle,
            index,
            market_hours,
            pretty,
        } => {
            let args = commands::render::RenderArgs {
                mode: &mode,
                interval: &interval,
                date: date.as_deref(),
                provider: &provider,
                select,
                region: region.as_deref(),
                all,
                cycle,
                index,
                market_hours,
                pretty,
            };
            commands::render::render(&settings, args).await
        }
        Commands::List { region, json } => {
            commands::list::list_indices(&settings, region.as_deref(), json)
        }
        Commands::Info { code, date } => commands::info::show_info(&settings, &code, date.as_deref()),
        Commands::Series {
            code,
            interval,
            date,
            provider,
            text,
            pretty,
        } => {
            let output = if text {
                commands::series::Output::Text
            } else {
                commands::series::Output::Json { pretty }
            };
            commands::series::print_series(
                &settings,
                &code,
                &interval,
                date.as_deref(),
                &provider,
                output,
            )
            .await
        }
        Commands::Ping => commands::ping::ping(&settings).await,
    }
}
