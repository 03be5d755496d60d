mod config;
mod handlers;
mod matcher;
mod report;
mod stats;
mod transcript;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use config::Config;
use matcher::{ActivationGate, RuleSet, Session};
use stats::{PassRecord, Stats};

/// Match voice commands from a transcribed CSV.
#[derive(Parser)]
#[command(name = "rex-commands", version, about = "Match voice commands from a transcript CSV")]
struct Cli {
    /// Path to the transcription CSV (start_time, end_time, text)
    #[arg(short, long = "in", value_name = "FILE")]
    infile: PathBuf,

    /// Override the configured activation phrase
    #[arg(long, value_name = "PHRASE")]
    activation_phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = Config::load_or_init();
    if let Some(phrase) = cli.activation_phrase {
        config.activation_phrase = phrase;
    }
    log::info!("Activation phrase: {:?}", config.activation_phrase);

    let segments = transcript::read_file(&cli.infile)?;
    log::info!(
        "Loaded {} segments from {}",
        segments.len(),
        cli.infile.display()
    );

    let gate = ActivationGate::new(&config.activation_phrase)?;
    let mut session = Session::new(gate, RuleSet::builtin(), handlers::default_registry());

    let mut pass = PassRecord::new(&cli.infile.display().to_string());
    for segment in &segments {
        let outcome = session.process(segment)?;
        pass.note(&outcome);
        report::print(segment, &outcome);
    }

    log::info!(
        "Pass complete: {} matched, {} no match, {} activated, {} ignored",
        pass.matched,
        pass.no_match,
        pass.activated,
        pass.ignored
    );

    let mut stats = Stats::load();
    stats.record_pass(pass);
    if let Err(e) = stats.save() {
        log::warn!("Failed to save stats: {e}");
    }

    Ok(())
}
