use serde::{Deserialize, Serialize};

use crate::*;

/// Per-cell state, serialized as the integer tag used by saved games and peers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum CellState {
    Revealed = 0,
    Hidden = 1,
    Prize = 2,
    Flagged = 4,
}

impl CellState {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Revealed),
            1 => Some(Self::Hidden),
            2 => Some(Self::Prize),
            4 => Some(Self::Flagged),
            _ => None,
        }
    }

    /// Counted towards the label of revealed neighbors.
    pub const fn holds_prize(self) -> bool {
        matches!(self, Self::Prize | Self::Flagged)
    }

    /// Still keeps the game from being won.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Hidden | Self::Prize)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.tag()
    }
}

impl TryFrom<u8> for CellState {
    type Error = GameError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_tag(tag).ok_or(GameError::MalformedState(StateDefect::UnknownTag {
            index: 0,
            tag,
        }))
    }
}

/// Parses a full state list, rejecting it as a whole if any tag is unknown.
pub fn states_from_tags(tags: &[u8]) -> Result<alloc::vec::Vec<CellState>> {
    tags.iter()
        .enumerate()
        .map(|(index, &tag)| {
            CellState::from_tag(tag)
                .ok_or(GameError::MalformedState(StateDefect::UnknownTag { index, tag }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_saved_game_format() {
        assert_eq!(CellState::Revealed.tag(), 0);
        assert_eq!(CellState::Hidden.tag(), 1);
        assert_eq!(CellState::Prize.tag(), 2);
        assert_eq!(CellState::Flagged.tag(), 4);
        assert_eq!(CellState::from_tag(3), None);
    }

    #[test]
    fn unknown_tag_reports_its_position() {
        assert_eq!(
            states_from_tags(&[0, 1, 7]),
            Err(GameError::MalformedState(StateDefect::UnknownTag {
                index: 2,
                tag: 7
            }))
        );
    }
}
