use cookie_search_core::{CellIndex, CellState, states_from_tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::*;

/// Command token of a full new-game grid broadcast.
pub const NEW_GAME_COMMAND: &str = "n";
/// Command token of a single cell update.
pub const CELL_UPDATE_COMMAND: &str = "p";

/// Message as it travels over the shared channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeerMessage {
    pub command: String,
    pub payload: Value,
}

impl PeerMessage {
    pub fn new(command: impl Into<String>, payload: Value) -> Self {
        Self {
            command: command.into(),
            payload,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PeerCommand {
    /// The sharer started a new game, here is the whole grid.
    NewGame(Vec<CellState>),
    /// One cell changed on the sender's grid.
    CellUpdate { index: CellIndex, state: CellState },
}

impl PeerCommand {
    pub fn decode(message: &PeerMessage) -> Result<Self> {
        match message.command.as_str() {
            NEW_GAME_COMMAND => {
                let tags: Vec<u8> = serde_json::from_value(message.payload.clone())
                    .map_err(|err| malformed(NEW_GAME_COMMAND, err))?;
                let states = states_from_tags(&tags)
                    .map_err(|err| malformed(NEW_GAME_COMMAND, err))?;
                Ok(Self::NewGame(states))
            }
            CELL_UPDATE_COMMAND => {
                // senders json-encode this pair a second time, accept both shapes
                let pair = match &message.payload {
                    Value::String(text) => serde_json::from_str(text)
                        .map_err(|err| malformed(CELL_UPDATE_COMMAND, err))?,
                    other => other.clone(),
                };
                let (index, tag): (CellIndex, u8) = serde_json::from_value(pair)
                    .map_err(|err| malformed(CELL_UPDATE_COMMAND, err))?;
                let state = CellState::from_tag(tag).ok_or_else(|| {
                    malformed(CELL_UPDATE_COMMAND, format!("unknown state tag {}", tag))
                })?;
                Ok(Self::CellUpdate { index, state })
            }
            other => Err(ProtocolError::UnknownCommand(other.to_string())),
        }
    }

    pub fn encode(&self) -> PeerMessage {
        match self {
            Self::NewGame(states) => {
                let tags: Vec<u8> = states.iter().map(|state| state.tag()).collect();
                PeerMessage::new(NEW_GAME_COMMAND, Value::from(tags))
            }
            Self::CellUpdate { index, state } => PeerMessage::new(
                CELL_UPDATE_COMMAND,
                Value::String(format!("[{}, {}]", index, state.tag())),
            ),
        }
    }
}

fn malformed(command: &'static str, reason: impl ToString) -> ProtocolError {
    ProtocolError::MalformedPayload {
        command,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_update_is_sent_as_encoded_pair() {
        let message = PeerCommand::CellUpdate {
            index: 12,
            state: CellState::Revealed,
        }
        .encode();

        assert_eq!(message.command, "p");
        assert_eq!(message.payload, json!("[12, 0]"));
        assert_eq!(
            message.to_json().unwrap(),
            r#"{"command":"p","payload":"[12, 0]"}"#
        );
    }

    #[test]
    fn cell_update_accepts_plain_array() {
        let message = PeerMessage::new("p", json!([3, 4]));

        assert_eq!(
            PeerCommand::decode(&message).unwrap(),
            PeerCommand::CellUpdate {
                index: 3,
                state: CellState::Flagged
            }
        );
    }

    #[test]
    fn new_game_decodes_state_list() {
        let message = PeerMessage::from_json(r#"{"command":"n","payload":[1,2,0,4]}"#).unwrap();

        assert_eq!(
            PeerCommand::decode(&message).unwrap(),
            PeerCommand::NewGame(vec![
                CellState::Hidden,
                CellState::Prize,
                CellState::Revealed,
                CellState::Flagged
            ])
        );
        assert_eq!(
            PeerCommand::decode(&message).unwrap().encode().payload,
            json!([1, 2, 0, 4])
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let message = PeerMessage::new("x", json!(null));

        assert!(matches!(
            PeerCommand::decode(&message),
            Err(ProtocolError::UnknownCommand(command)) if command == "x"
        ));
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        for message in [
            PeerMessage::new("p", json!("[1, 2, 3]")),
            PeerMessage::new("p", json!("not json")),
            PeerMessage::new("p", json!([5, 3])),
            PeerMessage::new("p", json!({"index": 5})),
            PeerMessage::new("n", json!([1, "two"])),
            PeerMessage::new("n", json!([1, 9])),
        ] {
            assert!(
                matches!(
                    PeerCommand::decode(&message),
                    Err(ProtocolError::MalformedPayload { .. })
                ),
                "{:?}",
                message
            );
        }
    }
}
