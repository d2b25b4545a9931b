//! Interactive session loop.
//!
//! Render state, show the menu, read one command, apply it, report. Repeats
//! until the player picks option 0 or input ends.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::core::{Outcome, Session};
use crate::input::MenuReader;
use crate::term::{render_json, GameView, TerminalRenderer};

/// Build a session from resolved configuration.
pub fn session_from_config(config: &SessionConfig) -> Session {
    match config.seed {
        Some(seed) => Session::new(seed, config.variant),
        None => Session::from_time(config.variant),
    }
}

/// Drive `session` from `input` until quit or end of input.
///
/// Returns the number of commands that changed state.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    renderer: &mut TerminalRenderer<W>,
    config: &SessionConfig,
) -> Result<u32> {
    let view = GameView;
    let mut reader = MenuReader::new(input);

    loop {
        if config.json {
            renderer.write_line(&render_json(&session.snapshot())?)?;
        } else {
            renderer.draw(&view.state(&session.snapshot()))?;
        }
        renderer.draw(&view.menu(session.variant()))?;

        let option = match reader.next_option() {
            None => {
                info!("input closed, ending session");
                break;
            }
            Some(Ok(option)) => option,
            Some(Err(e)) if !e.is_recoverable() => return Err(e.into()),
            Some(Err(e)) => {
                debug!(error = %e, "discarding input");
                renderer.draw(&view.error(&e))?;
                continue;
            }
        };

        match session.apply(option) {
            Ok(outcome) => {
                renderer.draw(&view.outcome(&outcome))?;
                if outcome == Outcome::Quit {
                    break;
                }
            }
            Err(e) => renderer.draw(&view.error(&e))?,
        }
    }

    info!(turns = session.turn(), "session finished");
    Ok(session.turn())
}
