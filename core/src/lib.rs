#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod layout;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
    Won,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitPrize,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitPrize => true,
            Won => true,
        }
    }
}

/// Result of a primary click, with the cells the click uncovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub revealed: Vec<CellIndex>,
}

impl RevealReport {
    pub fn new(outcome: RevealOutcome, revealed: Vec<CellIndex>) -> Self {
        Self { outcome, revealed }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverCheck {
    NotOver,
    Won,
}
