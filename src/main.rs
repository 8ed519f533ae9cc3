mod app;

use app::{QuizApp, SAMPLE_WORDS, list_name_from_path};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vocab_quiz::QuizConfig;
use vocab_quiz::wordlist::read_word_file;

#[derive(Parser)]
#[command(name = "vocab-quiz", version, about = "Multiple-choice vocabulary quiz")]
struct Cli {
    /// Word list to load at startup (plain text or .json)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Config file path (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible sessions, overrides the config file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vocab_quiz=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = QuizConfig::load_or_default(cli.config.as_deref());
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let (input, list_name) = match &cli.words {
        Some(path) => match read_word_file(path) {
            Ok(text) => (text, list_name_from_path(path)),
            Err(e) => {
                warn!(path = %path.display(), "can't preload word list: {e}");
                (SAMPLE_WORDS.to_string(), "Polish Vocabulary".to_string())
            }
        },
        None => (SAMPLE_WORDS.to_string(), "Polish Vocabulary".to_string()),
    };

    info!(deck_limit = config.deck_limit, seed = ?config.seed, "starting quiz");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    eframe::run_native(
        "Vocabulary Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config, input, list_name)))),
    )
}
