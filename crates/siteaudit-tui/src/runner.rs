//! Main TUI runner - entry point and event loop

use siteaudit_app::config::Settings;
use siteaudit_app::{signals, Engine};
use siteaudit_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// When `initial_url` is given it is placed in the form and submitted
/// before the first frame.
pub async fn run(settings: Settings, initial_url: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(engine.msg_sender());

    if let Some(url) = initial_url {
        info!("Submitting initial URL from command line");
        engine.submit_url(url);
    }

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let result = run_loop(&mut term, &mut engine);
    ratatui::restore();

    info!("TUI exited after {} scan(s)", engine.state.scans_started);
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Scan results and signals arrive through the channel
        engine.drain_pending();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events (Tick on timeout)
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
