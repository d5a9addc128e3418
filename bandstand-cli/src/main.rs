mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bandstand")]
#[command(about = "Tour calendar, merch store and ticket booking for the band site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with tour dates highlighted
    Calendar {
        /// Months to navigate from the starting position (negative = back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Start at this year instead of the current month (needs --month)
        #[arg(long)]
        year: Option<i32>,

        /// Start at this month, 1-12 (needs --year)
        #[arg(long)]
        month: Option<u32>,
    },
    /// List the tour schedule
    Tour {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the merch catalog
    Merch {
        /// Only show one category (apparel, accessories, media)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one in-memory shopping session
    Shop {
        /// Product references to add, in order (see `bandstand merch`)
        #[arg(required = true)]
        refs: Vec<String>,

        /// Remove this cart line (1-based) after adding everything
        #[arg(long)]
        drop: Option<usize>,

        /// Skip the toast notification delays
        #[arg(long)]
        fast: bool,
    },
    /// Book tickets for a show (simulated)
    Book {
        /// Show date, YYYY-MM-DD
        date: String,
    },
    /// Play the featured track (simulated)
    Play {
        /// How long to let it run, in seconds
        #[arg(long, default_value_t = 5)]
        seconds: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calendar {
            offset,
            year,
            month,
        } => commands::calendar::run(year, month, offset),
        Commands::Tour { json } => commands::tour::run(json),
        Commands::Merch { category, json } => commands::merch::run(category.as_deref(), json),
        Commands::Shop { refs, drop, fast } => commands::shop::run(refs, drop, fast).await,
        Commands::Book { date } => commands::book::run(&date).await,
        Commands::Play { seconds } => commands::play::run(seconds).await,
    }
}
