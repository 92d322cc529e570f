use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use nationsim_core::{
    derive_nation_id, load_all, rank_by_hdi, run_global_turn, FsStore, GovernmentType,
    NationRecord, RecordStore, TurnConfig,
};
use std::path::PathBuf;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Nation world simulation: found nations, run turns, rank the world", long_about = None)]
struct Args {
    /// Directory holding one <id>.json file per nation
    #[arg(long, default_value = "nations")]
    data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Advance every nation by one turn and report the outcome
    Turn {
        /// Max concurrent nation updates (0 = one per core)
        #[arg(long, default_value_t = 0)]
        concurrency: usize,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Found a new nation with baseline statistics
    Found {
        #[arg(long)]
        name: String,
        #[arg(long)]
        capital: String,
        /// Government type (Democracy, Monarchy, Dictatorship, or anything else)
        #[arg(long)]
        government: String,
        #[arg(long)]
        motto: Option<String>,
        /// Handle of the founding player
        #[arg(long)]
        owner: Option<String>,
    },
    /// Print every nation ranked by HDI
    Ranking,
    /// Print one nation's panel
    Show { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let store = FsStore::open(&args.data_dir)
        .with_context(|| format!("cannot open record store at {}", args.data_dir.display()))?;

    match args.command {
        Command::Turn { concurrency, json } => run_turn(&store, concurrency, json),
        Command::Found {
            name,
            capital,
            government,
            motto,
            owner,
        } => found_nation(&store, &name, &capital, government, motto, owner),
        Command::Ranking => print_ranking(&store),
        Command::Show { id } => show_nation(&store, &id),
    }
}

fn run_turn(store: &FsStore, concurrency: usize, json: bool) -> Result<()> {
    let config = TurnConfig {
        concurrency,
        ..TurnConfig::default()
    };

    let summary = run_global_turn(store, &config).context("global turn aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Turn complete: {} processed, {} skipped, {} failed",
            summary.processed,
            summary.skipped,
            summary.failed.len()
        );
        for failure in &summary.failed {
            println!("  failed {}: {}", failure.id, failure.reason);
        }
    }
    Ok(())
}

fn found_nation(
    store: &FsStore,
    name: &str,
    capital: &str,
    government: String,
    motto: Option<String>,
    owner: Option<String>,
) -> Result<()> {
    let id = derive_nation_id(name);
    if id.is_empty() {
        bail!("nation name '{name}' does not yield a usable identifier");
    }
    if store.read(&id)?.is_some() {
        bail!("nation '{id}' already exists");
    }

    let mut nation =
        NationRecord::founded(name, capital, GovernmentType::from(government), Utc::now());
    nation.motto = motto;
    nation.owner = owner;

    store.write(&id, &nation)?;
    println!("Founded nation '{}' ({})", nation.name, nation.id);
    Ok(())
}

fn print_ranking(store: &FsStore) -> Result<()> {
    let nations = rank_by_hdi(load_all(store)?);
    print!("{}", render::ranking_table(&nations));
    Ok(())
}

fn show_nation(store: &FsStore, id: &str) -> Result<()> {
    match store.read(id)? {
        Some(nation) => {
            print!("{}", render::nation_panel(&nation));
            Ok(())
        }
        None => bail!("nation '{id}' not found"),
    }
}
