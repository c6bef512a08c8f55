mod config;
mod models;
mod notes;
mod state;
mod store;
mod telemetry;
mod tui;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use config::Config;
use models::{sample_topics, JsonOutput};
use notes::TopicFilter;
use state::{AppState, Theme};

#[derive(Parser)]
#[command(name = "dsa-companion")]
#[command(about = "A terminal revision companion for data structures and algorithms")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Start the interactive UI in light mode
    #[arg(long, global = true)]
    light: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive terminal UI (default)
    Tui,

    /// List the sample topics and their questions
    Topics,

    /// Filter the note topic list by a case-insensitive substring
    Search {
        /// Text to look for; empty shows everything
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Debug, Serialize)]
struct SearchResult<'a> {
    query: &'a str,
    visible: Vec<&'a str>,
    hidden: Vec<&'a str>,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run(cli) {
        match serde_json::to_string(&JsonOutput::<()>::err(e.to_string())) {
            Ok(out) if json => println!("{}", out),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

impl Commands {
    // The interactive UI owns the terminal and logs to a file instead.
    fn logs_to_stderr(&self) -> bool {
        !matches!(self, Commands::Tui)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Commands::Tui);
    if command.logs_to_stderr() {
        telemetry::init_stderr();
    }
    let config = Config::load()?;

    match command {
        Commands::Tui => {
            let log_path = config.log_path();
            if let Err(e) = telemetry::init_file(&log_path) {
                // Keep going without logs rather than refuse to start.
                eprintln!("Warning: could not open log file {}: {}", log_path.display(), e);
            }
            let config_path = config::config_path();
            info!(
                path = %config_path.display(),
                from_file = config_path.exists(),
                "config loaded"
            );

            let mut state = AppState::from_config(&config);
            if cli.light {
                state.theme = Theme::Light;
            }
            debug!(
                theme = state.theme.label(),
                policy = state.store.policy().as_str(),
                "starting UI"
            );
            tui::run(state)?;
        }

        Commands::Topics => {
            let topics = sample_topics();

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&topics))?);
            } else {
                println!("{:<5} {:<30} QUESTIONS", "ID", "CATEGORY");
                println!("{}", "-".repeat(50));
                for topic in &topics {
                    println!(
                        "{:<5} {:<30} {}",
                        topic.id,
                        truncate(&topic.category, 28),
                        topic.questions.len()
                    );
                    for q in &topic.questions {
                        println!(
                            "      - {} [{}] time {} / space {}",
                            q.title,
                            q.difficulty,
                            q.time_complexity_label(),
                            q.space_complexity_label()
                        );
                    }
                }
            }
        }

        Commands::Search { query } => {
            if config.note_topics.is_empty() {
                warn!("no note topics configured");
            }
            let mut filter = TopicFilter::new(config.note_topics.clone());
            filter.apply(&query);

            let result = SearchResult {
                query: &query,
                visible: filter.visible().collect(),
                hidden: filter
                    .entries()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !filter.is_visible(*i))
                    .map(|(_, e)| e.as_str())
                    .collect(),
            };

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&result))?);
            } else if result.visible.is_empty() {
                println!("No topics match '{}'.", query);
            } else {
                for entry in &result.visible {
                    println!("{}", entry);
                }
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
