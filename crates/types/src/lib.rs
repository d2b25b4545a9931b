//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values, usable from the core containers, the input
//! parser and the terminal view alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Visible lookahead window of upcoming pieces |
//! | `STACK_CAPACITY` | 3 | Reserve slots |
//! | `TRIPLE_SWAP_LEN` | 3 | Pieces exchanged by a triple swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{MenuOption, Piece, PieceKind, Variant, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 4);
//! assert_eq!(piece.to_string(), "[T 4]");
//!
//! assert_eq!(PieceKind::from_index(3), PieceKind::L);
//! assert_eq!(MenuOption::from_code(5), Some(MenuOption::SwapTriple));
//! assert!(!Variant::Basic.allows(MenuOption::SwapTriple));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use serde::Serialize;

/// Number of upcoming pieces kept in the queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of slots in the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of queue/stack pairs exchanged by a triple swap.
pub const TRIPLE_SWAP_LEN: usize = 3;

/// The four piece shapes handed out by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator index order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Map an index to a kind, wrapping modulo the number of kinds.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    /// Single uppercase letter used on screen.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A piece: a shape plus the sequential id it was created with.
///
/// Pieces are immutable once generated. Ids come from a single
/// `PieceGenerator` per session and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Commands offered by the session menu.
///
/// The numeric codes are the ones the player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MenuOption {
    /// End the session
    Quit,
    /// Play the piece at the front of the queue
    Play,
    /// Move the front piece into the reserve
    Reserve,
    /// Play the piece on top of the reserve
    UseReserve,
    /// Swap the queue front with the reserve top
    SwapFront,
    /// Swap the first three queued pieces with the three reserved ones
    SwapTriple,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [MenuOption; 6] = [
        MenuOption::Play,
        MenuOption::Reserve,
        MenuOption::UseReserve,
        MenuOption::SwapFront,
        MenuOption::SwapTriple,
        MenuOption::Quit,
    ];

    /// Look up an option by the number typed at the prompt.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuOption;
    ///
    /// assert_eq!(MenuOption::from_code(0), Some(MenuOption::Quit));
    /// assert_eq!(MenuOption::from_code(2), Some(MenuOption::Reserve));
    /// assert_eq!(MenuOption::from_code(6), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MenuOption::Quit),
            1 => Some(MenuOption::Play),
            2 => Some(MenuOption::Reserve),
            3 => Some(MenuOption::UseReserve),
            4 => Some(MenuOption::SwapFront),
            5 => Some(MenuOption::SwapTriple),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            MenuOption::Quit => 0,
            MenuOption::Play => 1,
            MenuOption::Reserve => 2,
            MenuOption::UseReserve => 3,
            MenuOption::SwapFront => 4,
            MenuOption::SwapTriple => 5,
        }
    }

    /// Menu label shown next to the code.
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Quit => "Quit",
            MenuOption::Play => "Play the front piece",
            MenuOption::Reserve => "Send the front piece to the reserve",
            MenuOption::UseReserve => "Use the reserved piece",
            MenuOption::SwapFront => "Swap the queue front with the reserve top",
            MenuOption::SwapTriple => "Swap the first 3 queued pieces with the 3 reserved",
        }
    }
}

/// Which menu the session exposes.
///
/// - **Basic**: options 0-3 (play, reserve, use reserve)
/// - **Advanced**: options 0-5 (adds both exchanges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Basic,
    #[default]
    Advanced,
}

impl Variant {
    /// Parse variant from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Variant::Basic),
            "advanced" => Some(Variant::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Advanced => "advanced",
        }
    }

    /// Whether this variant's menu offers `option`.
    pub fn allows(&self, option: MenuOption) -> bool {
        match self {
            Variant::Basic => option.code() <= MenuOption::UseReserve.code(),
            Variant::Advanced => true,
        }
    }

    /// Options offered by this variant, in menu order.
    pub fn options(&self) -> impl Iterator<Item = MenuOption> + '_ {
        MenuOption::ALL.into_iter().filter(move |o| self.allows(*o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_match_game_rules() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(STACK_CAPACITY, 3);
        assert_eq!(TRIPLE_SWAP_LEN, STACK_CAPACITY);
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
        assert_eq!(Piece::new(PieceKind::L, 42).to_string(), "[L 42]");
    }

    #[test]
    fn test_kind_index_roundtrip_covers_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(PieceKind::from_index(i as u32), *kind);
        }
        assert_eq!(PieceKind::from_index(4), PieceKind::I);
        assert_eq!(PieceKind::from_index(7), PieceKind::L);
    }

    #[test]
    fn test_menu_codes() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::from_code(option.code()), Some(option));
        }
        assert_eq!(MenuOption::from_code(9), None);
    }

    #[test]
    fn test_variant_options() {
        let basic: Vec<_> = Variant::Basic.options().collect();
        assert_eq!(
            basic,
            vec![
                MenuOption::Play,
                MenuOption::Reserve,
                MenuOption::UseReserve,
                MenuOption::Quit
            ]
        );
        assert_eq!(Variant::Advanced.options().count(), 6);
        assert_eq!(Variant::from_str(" Basic "), Some(Variant::Basic));
        assert_eq!(Variant::from_str("expert"), None);
    }
}
