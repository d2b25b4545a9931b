//! GameView: maps session state into text frames.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt;

use crate::core::{Outcome, SessionSnapshot};
use crate::frame::{Line, Span, TextFrame};
use crate::types::{Piece, Variant};

const RULE: &str = "----------------------------------------";

/// Builds the frames printed around each prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Queue front-to-back, reserve top-to-base.
    pub fn state(&self, snapshot: &SessionSnapshot) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.blank();
        frame.push_text(RULE);
        frame.push_text(format!("Current state (turn {}):", snapshot.turn));
        frame.blank();

        let mut queue_line: Line = vec![Span::plain("Piece queue:\t")];
        push_pieces(&mut queue_line, snapshot.queue.iter());
        frame.push_line(queue_line);

        let mut reserve_line: Line = vec![Span::plain("Reserve (top -> base): ")];
        if snapshot.reserve_is_empty() {
            reserve_line.push(Span::plain("(empty)"));
        } else {
            push_pieces(&mut reserve_line, snapshot.reserve.iter());
        }
        frame.push_line(reserve_line);

        frame.push_text(RULE);
        frame
    }

    /// The options offered by `variant`, followed by the prompt.
    pub fn menu(&self, variant: Variant) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.blank();
        frame.push_text("Available options:");
        for option in variant.options() {
            frame.push_text(format!("{} - {}", option.code(), option.label()));
        }
        frame.blank();
        frame.push_text("Choose an option: ");
        frame.set_prompt(true);
        frame
    }

    pub fn outcome(&self, outcome: &Outcome) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.blank();
        let line = match outcome {
            Outcome::Played(piece) => piece_message("Action: you played ", piece, ""),
            Outcome::Reserved(piece) => {
                piece_message("Action: piece ", piece, " sent to the reserve.")
            }
            Outcome::UsedReserve(piece) => {
                piece_message("Action: you used the reserved piece ", piece, "")
            }
            Outcome::SwappedFront => vec![Span::plain(
                "Action: swapped the queue front with the reserve top.",
            )],
            Outcome::SwappedTriple => vec![Span::plain(
                "Action: swapped the first 3 queued pieces with the 3 reserved.",
            )],
            Outcome::Quit => vec![Span::plain("Ending the session. Thanks for playing!")],
        };
        frame.push_line(line);
        frame
    }

    pub fn error(&self, err: &dyn fmt::Display) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.blank();
        frame.push_text(format!("[ERROR] {}", err));
        frame
    }
}

fn push_pieces<'a>(line: &mut Line, pieces: impl Iterator<Item = &'a Piece>) {
    for piece in pieces {
        line.push(Span::piece(piece.to_string(), piece.kind));
        line.push(Span::plain(" "));
    }
}

fn piece_message(before: &str, piece: &Piece, after: &str) -> Line {
    let mut line = vec![
        Span::plain(before),
        Span::piece(piece.to_string(), piece.kind),
    ];
    if !after.is_empty() {
        line.push(Span::plain(after));
    }
    line
}

/// Snapshot as a single JSON line.
pub fn render_json(snapshot: &SessionSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}
