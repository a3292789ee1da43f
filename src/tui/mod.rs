//! Terminal front end for wordgrid.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::audio::ProcessAudio;
use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use wordgrid_core::GameSession;

/// Builds the random source: seeded when configured, OS entropy otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(seed = ?config.seed(), words = config.words().len(), "Starting wordgrid TUI");

    let mut rng = rng_for(*config.seed());
    let mut session = GameSession::with_word_list(config.words().clone(), &mut rng);
    if *config.audio().enabled() {
        session.attach_audio(Box::new(ProcessAudio::from_config(config.audio())));
    }
    let mut app = App::new(session, rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = app.session().score(), "Game finished");
    res
}

/// Redraws every 100 ms or on input until the player quits.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        app.tick();

        let mut cells = Vec::new();
        terminal.draw(|frame| cells = ui::draw(frame, app))?;
        app.set_cell_areas(cells);

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(&event);
        }
    }
    Ok(())
}
