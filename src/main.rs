//! Hangman Duel - CLI
//!
//! Two-player hangman with TUI and simple line modes, plus word bank and
//! theme management commands.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use hangman_duel::{
    commands::{add_word, delete_word, edit_word, run_simple, run_toggle},
    config::{DEFAULT_DATA_FILE, Settings},
    logging::{self, LogTarget},
    output::print_word_bank,
    storage::JsonFileStore,
    theme::load_theme,
    wordbank::WordBank,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "hangman_duel",
    about = "Two-player hangman with an editable word bank",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file holding the word bank and theme
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Manage the word bank
    Words {
        #[command(subcommand)]
        action: Option<WordsCommand>,
    },

    /// Show or toggle the light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Subcommand)]
enum WordsCommand {
    /// List all words (default)
    List,

    /// Add a word
    Add { word: String },

    /// Replace the word at a position (1-based)
    Edit {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        position: u32,
        word: String,
    },

    /// Delete the word at a position (1-based)
    Delete {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        position: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the saved theme (default)
    Show,

    /// Switch between light and dark
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        data_path: cli.data,
        verbosity: cli.verbose,
        log_file: cli.log_file,
        ..Settings::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the alternate screen
    let target = match (&command, settings.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Discard,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(settings.verbosity, target)?;
    debug!(data = %settings.data_path.display(), "settings resolved");

    let mut store = settings
        .open_store()
        .with_context(|| format!("opening {}", settings.data_path.display()))?;

    match command {
        Commands::Play => run_play_command(store, &settings),
        Commands::Simple => run_simple_command(&mut store, &settings),
        Commands::Words { action } => {
            run_words_command(&mut store, action.unwrap_or(WordsCommand::List))
        }
        Commands::Theme { action } => {
            run_theme_command(&mut store, action.unwrap_or(ThemeCommand::Show))
        }
    }
}

fn load_bank(store: &mut JsonFileStore) -> Result<WordBank> {
    WordBank::load(store).context("loading word bank")
}

fn run_play_command(mut store: JsonFileStore, settings: &Settings) -> Result<()> {
    use hangman_duel::game::GameSession;
    use hangman_duel::interactive::{App, run_tui};

    let bank = load_bank(&mut store)?;
    let theme = load_theme(&store)?;
    let app = App::new(
        store,
        bank,
        GameSession::new(settings.rules),
        theme,
        rand::rng(),
    );
    run_tui(app)
}

fn run_simple_command(store: &mut JsonFileStore, settings: &Settings) -> Result<()> {
    let bank = load_bank(store)?;
    run_simple(&bank, settings.rules, &mut rand::rng())
}

fn run_words_command(store: &mut JsonFileStore, action: WordsCommand) -> Result<()> {
    let mut bank = load_bank(store)?;

    match action {
        WordsCommand::List => print_word_bank(&bank),
        WordsCommand::Add { word } => {
            let added = add_word(&mut bank, store, &word)?;
            println!("{} Added {}", "✓".green(), added.to_string().bold());
        }
        WordsCommand::Edit { position, word } => {
            let edited = edit_word(&mut bank, store, position as usize, &word)?;
            println!(
                "{} Word {position} is now {}",
                "✓".green(),
                edited.to_string().bold()
            );
        }
        WordsCommand::Delete { position, yes } => {
            let removed = delete_word(&mut bank, store, position as usize, |word| {
                yes || confirm_delete(word.as_str())
            })?;
            match removed {
                Some(word) => println!("{} Deleted {}", "✓".green(), word.to_string().bold()),
                None => println!("Delete cancelled"),
            }
        }
    }

    Ok(())
}

/// Ask on stdin; anything but y/yes declines
fn confirm_delete(word: &str) -> bool {
    print!("Are you sure you want to delete this word ({word})? (y/n): ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_) => matches!(input.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn run_theme_command(store: &mut JsonFileStore, action: ThemeCommand) -> Result<()> {
    let theme = match action {
        ThemeCommand::Show => load_theme(&*store)?,
        ThemeCommand::Toggle => run_toggle(store)?,
    };
    println!("{} {theme}", theme.icon());
    Ok(())
}
