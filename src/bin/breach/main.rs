//! Breach entrypoint: wires the generated puzzle, the stdout renderer and the
//! terminal input decoder into one session and reports how it ended.

mod banner;
mod summary;

use anyhow::Result;
use breach::{
    config::AppConfig, init_logging, init_tracing, log_debug, log_file_path,
    terminal_restore::TerminalRestoreGuard, AnsiRenderer, BreachPuzzle, PuzzleModel, Session,
    SessionState, Theme, TtyInput,
};
use std::io::{self, Write};

use crate::banner::build_banner;
use crate::summary::{format_summary, SessionSummary};

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_logging(&config);
    init_tracing(&config);
    log_debug("=== Breach Started ===");
    log_debug(&format!("Log file: {:?}", log_file_path()));

    let theme = Theme::from_no_color(config.no_color);
    let puzzle = BreachPuzzle::generate(
        config.grid_size,
        config.sequence_count,
        config.sequence_length,
        config.seed,
    );
    log_debug(&format!(
        "puzzle: grid {}x{}, {} targets of length {}, buffer {}",
        puzzle.grid_size(),
        puzzle.grid_size(),
        puzzle.targets().len(),
        config.sequence_length,
        config.buffer_size
    ));

    let mut stdout = io::stdout();
    if !config.no_banner {
        stdout.write_all(build_banner(theme).as_bytes())?;
        stdout.flush()?;
    }

    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.hide_cursor(&mut stdout)?;

    let renderer = AnsiRenderer::new(stdout, theme);
    let mut session = Session::new(puzzle, renderer, TtyInput::new(), config.buffer_size);
    let state = match session.run() {
        Ok(state) => state,
        Err(err) => {
            log_debug(&format!("session aborted: {err:#}"));
            return Err(err);
        }
    };
    terminal_guard.restore();

    if state == SessionState::Cancelled {
        log_debug("=== Breach Cancelled ===");
        return Ok(());
    }

    let summary = SessionSummary::new(
        state,
        &session.match_results(),
        session.buffer().len(),
        session.buffer().capacity(),
    );
    let output = format_summary(&summary, theme);
    if !output.is_empty() {
        println!("{output}");
    }
    log_debug(&format!("=== Breach Exiting ({state:?}) ==="));
    Ok(())
}
