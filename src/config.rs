//! Session configuration.
//!
//! Settings are resolved in three layers, later ones winning:
//!
//! 1. Defaults: wall-clock seed, advanced menu, colors on, text output.
//! 2. Environment variables:
//!    - `TETRIS_RESERVE_SEED`: fixed RNG seed (u32)
//!    - `TETRIS_RESERVE_VARIANT`: `basic` or `advanced`
//!    - `TETRIS_RESERVE_NO_COLOR`: set to "1" or "true" to disable colors
//!    - `TETRIS_RESERVE_JSON`: set to "1" or "true" to print JSON snapshots
//! 3. Command-line flags (see [`Cli`]).

use std::env;

use clap::{Parser, ValueEnum};
use tracing::warn;

use crate::types::Variant;

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tetris-reserve", about = "Piece queue and reserve stack simulator")]
pub struct Cli {
    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u32>,

    /// Menu variant
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Disable colored piece labels
    #[arg(long)]
    pub no_color: bool,

    /// Print the state as one JSON line per turn instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Basic,
    Advanced,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Basic => Variant::Basic,
            VariantArg::Advanced => Variant::Advanced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// `None` seeds from the wall clock.
    pub seed: Option<u32>,
    pub variant: Variant,
    pub color: bool,
    pub json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            variant: Variant::Advanced,
            color: true,
            json: false,
        }
    }
}

impl SessionConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("TETRIS_RESERVE_SEED") {
            match raw.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring invalid TETRIS_RESERVE_SEED"),
            }
        }
        if let Some(raw) = lookup("TETRIS_RESERVE_VARIANT") {
            match Variant::from_str(&raw) {
                Some(variant) => config.variant = variant,
                None => warn!(value = %raw, "ignoring invalid TETRIS_RESERVE_VARIANT"),
            }
        }
        if lookup("TETRIS_RESERVE_NO_COLOR").is_some_and(|v| is_truthy(&v)) {
            config.color = false;
        }
        if lookup("TETRIS_RESERVE_JSON").is_some_and(|v| is_truthy(&v)) {
            config.json = true;
        }

        config
    }

    /// Apply command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(variant) = cli.variant {
            self.variant = variant.into();
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.json {
            self.json = true;
        }
        self
    }
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}
