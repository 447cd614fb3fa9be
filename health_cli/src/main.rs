use clap::{Args, Parser, Subcommand};
use health_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthlog")]
#[command(about = "Daily sleep, exercise and BMI tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's values and show a recommendation
    Add(AddArgs),

    /// Show entries, series and weekly averages (default)
    List,

    /// Delete the entry for a day (1-based, as listed)
    Delete {
        day: u32,
    },

    /// Re-enter a day's values; the entry moves to the end of the list
    Edit(EditArgs),

    /// Export all entries as CSV
    Export {
        /// Output file (defaults to the configured file in the data directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Hours slept
    #[arg(long, value_parser = parse_amount)]
    sleep: f64,

    /// Minutes of exercise
    #[arg(long, value_parser = parse_amount)]
    exercise: f64,

    /// Diet (e.g. vegan, vegetarian, omnivore)
    #[arg(long)]
    diet: String,

    /// Ethnicity (used for a regional food tip)
    #[arg(long)]
    ethnicity: String,

    /// Height in centimeters
    #[arg(long)]
    height: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<String>,
}

#[derive(Args)]
struct EditArgs {
    day: u32,

    #[arg(long, value_parser = parse_amount)]
    sleep: Option<f64>,

    #[arg(long, value_parser = parse_amount)]
    exercise: Option<f64>,

    #[arg(long)]
    diet: Option<String>,

    #[arg(long)]
    ethnicity: Option<String>,

    /// New height in centimeters (blank clears it)
    #[arg(long)]
    height: Option<String>,

    /// New weight in kilograms (blank clears it)
    #[arg(long)]
    weight: Option<String>,
}

fn main() -> Result<()> {
    health_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    let store = EntryStore::load(JsonFileStorage::in_dir(&data_dir));
    let mut tracker = HealthTracker::new(store, TerminalPresenter);

    match cli.command {
        Some(Commands::Add(args)) => cmd_add(&mut tracker, args),
        Some(Commands::List) | None => {
            tracker.refresh();
            Ok(())
        }
        Some(Commands::Delete { day }) => cmd_delete(&mut tracker, day),
        Some(Commands::Edit(args)) => cmd_edit(&mut tracker, args),
        Some(Commands::Export { output }) => {
            let path = output.unwrap_or_else(|| config.default_export_path(&data_dir));
            cmd_export(&mut tracker, path)
        }
        Some(Commands::Clear { yes }) => cmd_clear(&mut tracker, yes),
    }
}

type Tracker = HealthTracker<JsonFileStorage, TerminalPresenter>;

fn cmd_add(tracker: &mut Tracker, args: AddArgs) -> Result<()> {
    let input = EntryInput {
        sleep_hours: args.sleep,
        exercise_minutes: args.exercise,
        diet: args.diet,
        ethnicity: args.ethnicity,
        height_cm: args.height.as_deref().and_then(parse_measurement),
        weight_kg: args.weight.as_deref().and_then(parse_measurement),
    };

    tracker.submit(input)?;
    println!("\n✓ Entry saved!");
    Ok(())
}

fn cmd_delete(tracker: &mut Tracker, day: u32) -> Result<()> {
    let index = day_index(day, tracker.entries().len())?;
    tracker.delete(index)?;
    println!("\n✓ Deleted day {}", day);
    Ok(())
}

fn cmd_edit(tracker: &mut Tracker, args: EditArgs) -> Result<()> {
    let index = day_index(args.day, tracker.entries().len())?;

    // The entry is removed here and only comes back through `submit`
    let mut values = tracker.edit(index)?;

    if let Some(sleep) = args.sleep {
        values.sleep_hours = sleep;
    }
    if let Some(exercise) = args.exercise {
        values.exercise_minutes = exercise;
    }
    if let Some(diet) = args.diet {
        values.diet = diet;
    }
    if let Some(ethnicity) = args.ethnicity {
        values.ethnicity = ethnicity;
    }
    if let Some(height) = args.height {
        values.height_cm = parse_measurement(&height);
    }
    if let Some(weight) = args.weight {
        values.weight_kg = parse_measurement(&weight);
    }

    tracker.submit(values)?;
    println!("\n✓ Day {} updated (now day {})", args.day, tracker.entries().len());
    Ok(())
}

fn cmd_export(tracker: &mut Tracker, path: PathBuf) -> Result<()> {
    if let Some(path) = tracker.export(&path)? {
        println!(
            "✓ Exported {} entries to {}",
            tracker.entries().len(),
            path.display()
        );
    }
    Ok(())
}

fn cmd_clear(tracker: &mut Tracker, yes: bool) -> Result<()> {
    let mut prompt_error = None;
    let cleared = tracker.clear(|prompt| {
        if yes {
            return true;
        }
        match prompt_yes_no(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                prompt_error = Some(e);
                false
            }
        }
    })?;

    if let Some(e) = prompt_error {
        return Err(e.into());
    }
    if !cleared {
        println!("Nothing cleared.");
    }
    Ok(())
}

/// Convert a listed day number (starting at 1) to a position
fn day_index(day: u32, len: usize) -> Result<usize> {
    let day_usize = day as usize;
    if day_usize == 0 || day_usize > len {
        return Err(Error::DayOutOfRange { day, len });
    }
    Ok(day_usize - 1)
}

/// Sleep and exercise amounts must be finite numbers
fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    parse_measurement(s).ok_or_else(|| format!("'{}' is not a finite number", s.trim()))
}

fn prompt_yes_no(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Renders views as plain text on stdout
struct TerminalPresenter;

const BAR_WIDTH: f64 = 30.0;

impl Presenter for TerminalPresenter {
    fn render_list(&mut self, entries: &[Entry]) {
        println!("── Entries ──────────────────────────────");
        if entries.is_empty() {
            println!("  No entries yet.");
        }
        for (i, day) in entries.iter().enumerate() {
            let bmi = day
                .bmi
                .map(|b| format!("{:.1}", b))
                .unwrap_or_else(|| "N/A".into());
            println!(
                "  Day {}: Sleep {} hrs, Exercise {} mins, Diet: {}, Ethnicity: {}, BMI: {}",
                i + 1,
                day.sleep_hours,
                day.exercise_minutes,
                day.diet,
                day.ethnicity,
                bmi
            );
        }
        println!();
    }

    fn render_charts(&mut self, sleep: &ChartSeries, exercise: &ChartSeries) {
        for series in [sleep, exercise] {
            if series.is_empty() {
                continue;
            }
            println!("── {} ", series.label);
            let max = series.values().fold(0.0_f64, f64::max);
            for (label, value) in &series.points {
                let width = if max > 0.0 {
                    (value / max * BAR_WIDTH).round().max(0.0) as usize
                } else {
                    0
                };
                println!("  {:>7} {} {}", label, "█".repeat(width), value);
            }
            println!();
        }
    }

    fn render_averages(&mut self, averages: &WeeklyAverages) {
        match averages {
            WeeklyAverages::NoData => println!("No data yet."),
            WeeklyAverages::Available {
                avg_sleep,
                avg_exercise,
                ..
            } => {
                println!("🛌 Average Sleep (last 7 days): {:.1} hrs", avg_sleep);
                println!("🏃 Average Exercise (last 7 days): {:.1} mins", avg_exercise);
            }
        }
    }

    fn render_recommendation(&mut self, recommendation: &Recommendation) {
        println!();
        print!("{}", recommendation);
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}
