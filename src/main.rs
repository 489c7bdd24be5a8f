use clap::{Parser, Subcommand};
use std::path::PathBuf;

use planboard::core::store::{
    AppStore, ListRepository, PrayerRepository, StoreConfig, TableRepository, ViewKind,
};

#[derive(Parser)]
#[command(name = "planboard")]
#[command(about = "Inspect the seeded planner state")]
struct Cli {
    /// TOML file with store settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start in this view (table, schedule, goals, daily, notes, lists)
    #[arg(long)]
    view: Option<String>,

    /// Selected city
    #[arg(long)]
    city: Option<String>,

    /// Selected week
    #[arg(long)]
    week: Option<i64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print table row, column and cell counts
    Stats {
        /// Append this many rows first
        #[arg(long, default_value_t = 0)]
        add_rows: usize,
    },
    /// Print the whole state as JSON
    Dump,
    /// Print list items grouped under their parents
    Lists,
    /// Print prayer times
    Prayers {
        /// Override a time before printing, e.g. fajr=05:30
        #[arg(long, value_name = "PRAYER=HH:MM")]
        set: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    let mut store = AppStore::new(&config);

    if let Some(view) = &args.view {
        store.set_current_view(view.parse::<ViewKind>()?);
    }
    if let Some(city) = &args.city {
        store.set_selected_city(city);
    }
    if let Some(week) = args.week {
        store.set_selected_week(week);
    }

    match args.command {
        Command::Stats { add_rows } => {
            for _ in 0..add_rows {
                store.add_table_row();
            }
            let stats = store.table_stats();
            println!("Rows:    {}", stats.total_rows);
            println!("Columns: {}", stats.total_columns);
            println!("Cells:   {}", stats.total_cells);
        }
        Command::Dump => {
            println!("{}", store.snapshot_json()?);
        }
        Command::Lists => {
            for group in store.list_groups() {
                match group.parent {
                    Some(parent) => println!("{} [{}] {}", parent.category, parent.status, parent.item),
                    None => println!("(no parent)"),
                }
                for child in group.children {
                    println!("  {} [{}] {}", child.category, child.status, child.item);
                }
            }
        }
        Command::Prayers { set } => {
            for assignment in &set {
                let (prayer, time) = assignment
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("Expected PRAYER=HH:MM, got {}", assignment))?;
                store.update_prayer_time_by_name(prayer.trim(), time.trim())?;
            }
            println!("{} (week {})", store.selected_city(), store.selected_week());
            for (_, prayer) in store.prayer_times().iter() {
                println!("  {} {:<8} {}", prayer.short_code, prayer.name, prayer.time);
            }
        }
    }

    Ok(())
}
