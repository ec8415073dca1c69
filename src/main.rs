//! Emoji Story Decoder
//!
//! Guess the movie from its emojis, right in your terminal.

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use movie_guesser::config::{Config, CONFIG_FILE};
use movie_guesser::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use tracing::{error, info};

fn main() -> movie_guesser::Result<()> {
    let config = Config::load(CONFIG_FILE).context("could not load settings")?;
    movie_guesser::logging::init_tracing(&config.logging)?;
    info!(version = movie_guesser::VERSION, policy = ?config.advance.policy, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config);

    // Main loop
    let result = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        error!(%err, "terminal error");
    }
    result?;

    let stats = app.session.stats();
    println!("\n╔════════════════════════════════════════════╗");
    println!("║  Thanks for playing Emoji Story Decoder!   ║");
    println!("╚════════════════════════════════════════════╝");
    println!(
        "  Score {} | Solved {} | Skipped {} | Best streak {}\n",
        app.session.score(),
        stats.puzzles_solved,
        stats.puzzles_skipped,
        stats.best_streak
    );

    Ok(())
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> std::io::Result<()> {
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}
