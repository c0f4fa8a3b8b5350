mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod store;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::FileGateway;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::TaskStateStore;

#[derive(Parser)]
#[command(name = "grind")]
#[command(about = "A terminal-based daily checklist tracker with day modes and a focus timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .grind directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .grind directory
            let grind_dir = FileGateway::init_local()?;
            println!("Initialized grind directory: {}", grind_dir.display());
            println!();
            println!("Grind will now use this local directory for checklist storage.");
            println!("Run 'grind' to start tracking your day.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Locate (and create if needed) the storage directory
    let gateway = FileGateway::discover()?;
    eprintln!("Using grind directory: {}", gateway.dir().display());

    // Hydrate the store and restore the last viewed mode
    let store = TaskStateStore::load(gateway.clone());
    let mut app = AppState::new(store, gateway);
    app.restore_last_mode();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events, timing out so timer completions get drained
        if event::poll(timer::POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Drain timer completions
        app.tick();
    }
}
