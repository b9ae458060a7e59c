//! bloom CLI - cycle tracking and prediction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bloom_core::{month_name, CycleConfig, Day, IntervalId, MoodOption, MOOD_OPTIONS};
use bloom_cycle::{CalendarCell, CycleTracker};
use bloom_storage::JsonStorage;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bloom")]
#[command(about = "Cycle tracking with next-period, ovulation and fertile window prediction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage directory for bloom data
    #[arg(short, long, default_value = ".bloom")]
    storage: PathBuf,

    /// Cycle configuration file (JSON); defaults to <storage>/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a period
    Log {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        end: String,
    },
    /// Delete a logged period
    Delete {
        /// Period ID
        id: String,
    },
    /// List logged periods
    List,
    /// Show cycle statistics and predictions
    Predict,
    /// Show the cycle phase for a day
    Phase {
        /// Day to classify (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a month calendar
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long)]
        month: Option<String>,
        /// Day to highlight as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Record a mood for a day
    Mood {
        /// Mood key or emoji, e.g. `calm` or 😌
        mood: String,
        /// Day the mood is for (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },
    /// List logged moods
    Moods,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), &cli.storage)?;
    let storage = JsonStorage::new(&cli.storage).await?;
    let mut tracker = CycleTracker::load(storage, config).await?;

    match cli.command {
        Commands::Log { start, end } => {
            let period = tracker
                .add_period(Day::parse(&start)?, Day::parse(&end)?)
                .await?;
            println!(
                "Logged period: {} | {} - {}",
                period.id(),
                period.start_date(),
                period.end_date()
            );
        }
        Commands::Delete { id } => {
            let id: IntervalId = id.parse().map_err(|_| anyhow::anyhow!("Invalid period ID"))?;
            let removed = tracker.delete_period(id).await?;
            println!(
                "Deleted period: {} | {} - {}",
                removed.id(),
                removed.start_date(),
                removed.end_date()
            );
        }
        Commands::List => {
            println!("Periods ({})", tracker.periods().len());
            for period in tracker.periods() {
                println!(
                    "  {} | {} - {} | {} days",
                    period.id(),
                    period.start_date(),
                    period.end_date(),
                    period.length_days()
                );
            }
        }
        Commands::Predict => {
            let prediction = tracker.prediction();
            if let Some(warning) = &prediction.warning {
                println!("Note: {}", warning);
            }
            println!("Next period:         {}", display_date(prediction.next_period_start_date));
            println!("Predicted ovulation: {}", display_date(prediction.ovulation_date));
            match prediction.fertile_window {
                Some(window) => println!(
                    "Fertile window:      {} - {}",
                    display_date(Some(window.start)),
                    display_date(Some(window.end))
                ),
                None => println!("Fertile window:      N/A"),
            }
            println!("Avg. cycle length:   {} days", prediction.average_cycle_length);
            println!("Avg. period length:  {} days", prediction.average_period_length);
        }
        Commands::Phase { date } => {
            let day = day_or_today(date.as_deref())?;
            let phase = tracker.phase_on(day);
            debug!("Phase for {}: {:?}", day, phase);
            println!("{}", phase);
        }
        Commands::Calendar { month, today } => {
            let today = day_or_today(today.as_deref())?;
            let (year, month) = match month {
                Some(text) => {
                    let first = Day::parse(&format!("{text}-01"))
                        .with_context(|| format!("Invalid month {text:?}, expected YYYY-MM"))?;
                    (first.year(), first.month())
                }
                None => (today.year(), today.month()),
            };
            let grid = tracker.month_grid(year, month, today)?;
            print_calendar(year, month, &grid);
        }
        Commands::Mood { mood, date, note } => {
            let option = MoodOption::lookup(&mood).ok_or_else(|| {
                let keys: Vec<&str> = MOOD_OPTIONS.iter().map(|o| o.key).collect();
                anyhow::anyhow!("Unknown mood {:?}; choose one of: {}", mood, keys.join(", "))
            })?;
            let day = day_or_today(date.as_deref())?;
            let log = tracker.set_mood(day, option.emoji, note).await?;
            println!("Mood for {}: {} {}", log.date, log.mood, option.label);
        }
        Commands::Moods => {
            println!("Moods ({})", tracker.moods().len());
            for log in tracker.moods() {
                match &log.note {
                    Some(note) => println!("  {} | {} | {}", log.date, log.mood, note),
                    None => println!("  {} | {}", log.date, log.mood),
                }
            }
        }
    }

    Ok(())
}

/// Explicit `--config` must exist; the default location is optional.
fn load_config(explicit: Option<&Path>, storage: &Path) -> Result<CycleConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (storage.join("config.json"), false),
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CycleConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config {}", path.display()))
        }
    };

    let config: CycleConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!("Using config from {}", path.display());
    Ok(config)
}

fn day_or_today(text: Option<&str>) -> Result<Day> {
    Ok(match text {
        Some(text) => Day::parse(text)?,
        None => Day::today(),
    })
}

fn display_date(day: Option<Day>) -> String {
    match day {
        Some(day) => format!(
            "{} {}, {}",
            month_name(day.month()).unwrap_or("?"),
            day.day(),
            day.year()
        ),
        None => "N/A".to_string(),
    }
}

fn print_calendar(year: i32, month: u32, grid: &[CalendarCell]) {
    println!("{} {}", month_name(month).unwrap_or("?"), year);
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid.chunks(7) {
        let row: Vec<String> = week.iter().map(format_cell).collect();
        println!("{}", row.join(""));
    }
    println!("P = period, O = ovulation, F = fertile, * = today, ~ = mood logged");
}

fn format_cell(cell: &CalendarCell) -> String {
    if !cell.is_current_month {
        return "   . ".to_string();
    }
    let marker = if cell.flags.is_period_day {
        'P'
    } else if cell.flags.is_ovulation_day {
        'O'
    } else if cell.flags.is_fertile_day {
        'F'
    } else {
        ' '
    };
    let today = if cell.is_today { '*' } else { ' ' };
    let mood = if cell.mood.is_some() { '~' } else { ' ' };
    format!("{}{:>2}{}{}", today, cell.date.day(), marker, mood)
}
