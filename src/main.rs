//! # Binary: hp-board
//!
//! ## Responsibility
//! Entry point for the terminal HP board. Loads configuration, generates and
//! sorts the board, then runs the interactive event loop (or prints both
//! arrangements with `--print`).
//!
//! ## Usage
//! ```bash
//! cargo run --                          # random board
//! cargo run -- --seed 42                # reproducible board
//! cargo run -- --config board.toml      # custom grid / HP range
//! cargo run -- --seed 42 --print        # plain-text output, no UI
//! ```
//!
//! ## Environment Variables
//!
//! - `LOG_FORMAT=json` — structured JSON log output
//! - `RUST_LOG=debug` — log level filter (default: info)
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use hp_board::config::{loader, BoardConfig};
use hp_board::generator::board_rng;
use hp_board::tui::app::App;
use hp_board::tui::events::{apply_event, poll_event, InputEvent};
use hp_board::tui::ui;
use hp_board::{init_tracing, Board, BoardError, LogTarget};

/// Input poll interval. The screen only changes on input, so this just bounds
/// how long a quit takes to be noticed.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal board of random HP values with a sorted/unsorted toggle.
#[derive(Debug, Parser)]
#[command(name = "hp-board", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible board (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the unsorted and sorted arrangements as text and exit.
    #[arg(long)]
    print: bool,
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Sets up the terminal for TUI rendering.
fn setup_terminal() -> Result<Term, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Term) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<BoardConfig, BoardError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_from_file(path)?,
        None => BoardConfig::default(),
    };
    if cli.seed.is_some() {
        config.hp.seed = cli.seed;
    }
    Ok(config)
}

fn build_board(config: &BoardConfig) -> Board {
    info!(seed = ?config.hp.seed, "generating board");
    let mut rng = board_rng(config.hp.seed);
    Board::generate(&mut rng, config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print {
        if let Err(e) = init_tracing(config.observability.log_format, LogTarget::Stderr) {
            eprintln!("hp-board: logging disabled: {e}");
        }
        print_board(build_board(&config));
        return Ok(());
    }

    // Reported before the alternate screen hides stderr.
    if let Err(e) = init_tracing(
        config.observability.log_format,
        LogTarget::File(&config.observability.log_file),
    ) {
        eprintln!("hp-board: logging disabled: {e}");
    }

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            event::DisableMouseCapture
        );
        default_hook(info);
    }));

    let mut app = App::new(build_board(&config));
    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("hp-board error: {e}");
        std::process::exit(1);
    }

    info!(toggles = app.toggle_count, "hp-board exiting");
    Ok(())
}

/// Prints both arrangements to stdout.
fn print_board(mut board: Board) {
    println!("{}:\n{}\n", board.mode().name(), board.to_text());
    board.toggle();
    println!("{}:\n{}", board.mode().name(), board.to_text());
}

/// Runs the event loop until the user quits.
fn run(terminal: &mut Term, app: &mut App) -> Result<(), BoardError> {
    let size = terminal.size()?;
    apply_event(app, InputEvent::Resize(size.width, size.height));

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let event = poll_event(TICK_RATE);
        apply_event(app, event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
