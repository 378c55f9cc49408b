use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordgrid::{PuzzleValidator, Schedule, Submission, WordList};

/// Serve and score the daily letter-grid puzzle over stdin and stdout.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// JSON schedule of daily puzzles; the built-in schedule is used when absent.
    #[arg(long, env = "WORDGRID_SCHEDULE", global = true)]
    schedule: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the day's letter bank, shuffled.
    Letters {
        /// Puzzle date; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Score a placement read as JSON from INPUT, or stdin when INPUT is absent or `-`.
    Submit {
        /// Word list with one accepted word per line.
        #[arg(long, env = "WORDGRID_DICTIONARY")]
        dictionary: PathBuf,
        /// Puzzle date; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        input: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct LettersResponse {
    letters: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let schedule = load_schedule(cli.schedule.as_deref())?;

    match cli.command {
        Command::Letters { date } => {
            let date = date.unwrap_or_else(today);
            match schedule.daily_letters(date, &mut rand::thread_rng()) {
                Ok(letters) => respond(&LettersResponse { letters }),
                Err(e) => fail(e),
            }
        }
        Command::Submit { dictionary, date, input } => {
            let dictionary = load_dictionary(&dictionary)?;
            let date = date.unwrap_or_else(today);

            let raw = read_input(input.as_deref())?;
            let submission: Submission = match serde_json::from_str(&raw) {
                Ok(submission) => submission,
                Err(e) => return fail(e),
            };

            let validator = PuzzleValidator::new(&dictionary, &schedule);
            match validator.validate(&submission, date) {
                Ok(verdict) => respond(&verdict),
                Err(e) => fail(e),
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn load_schedule(path: Option<&Path>) -> anyhow::Result<Schedule> {
    let Some(path) = path else {
        tracing::debug!("using built-in schedule");
        return Ok(Schedule::builtin());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule {}", path.display()))?;
    let schedule = Schedule::from_json(&json)
        .with_context(|| format!("failed to parse schedule {}", path.display()))?;
    tracing::info!(days = schedule.len(), path = %path.display(), "schedule loaded");
    Ok(schedule)
}

fn load_dictionary(path: &Path) -> anyhow::Result<WordList> {
    let file = File::open(path).with_context(|| format!("failed to open dictionary {}", path.display()))?;
    let words = WordList::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    if words.is_empty() {
        tracing::warn!(path = %path.display(), "dictionary is empty; every word will be refused");
    }
    Ok(words)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    let mut raw = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            File::open(path)
                .with_context(|| format!("failed to open submission {}", path.display()))?
                .read_to_string(&mut raw)?;
        }
        _ => {
            io::stdin().read_to_string(&mut raw).context("failed to read submission from stdin")?;
        }
    }
    Ok(raw)
}

fn respond(body: &impl Serialize) -> anyhow::Result<ExitCode> {
    println!("{}", serde_json::to_string(body)?);
    Ok(ExitCode::SUCCESS)
}

/// Report a request-level failure the way clients expect: a JSON body holding only the message.
fn fail(error: impl std::fmt::Display) -> anyhow::Result<ExitCode> {
    tracing::warn!(%error, "request refused");
    respond(&ErrorResponse { error: error.to_string() })?;
    Ok(ExitCode::FAILURE)
}
