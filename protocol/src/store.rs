use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::*;

pub const DOTLIST_KEY: &str = "dotlist";
pub const ALL_SCORES_KEY: &str = "all_scores";
pub const GAME_TIME_KEY: &str = "current_gametime";
pub const LEVEL_KEY: &str = "current_level";

/// String key-value metadata the host keeps between sessions.
pub trait MetadataStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

impl<S: BuildHasher> MetadataStore for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

impl MetadataStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }
}

/// Everything a session persists: the grid, the scores and the running clock.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub dots: Vec<u8>,
    pub scores: Vec<String>,
    pub game_time: u64,
    pub level: u32,
}

impl SavedSession {
    pub fn write_to(&self, store: &mut impl MetadataStore) -> Result<()> {
        let dotlist = self
            .dots
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        store.set(DOTLIST_KEY, dotlist);
        store.set(ALL_SCORES_KEY, serde_json::to_string(&self.scores)?);
        store.set(GAME_TIME_KEY, self.game_time.to_string());
        store.set(LEVEL_KEY, self.level.to_string());
        Ok(())
    }

    /// `None` when the store holds no grid, i.e. there is no previous session.
    pub fn read_from(store: &impl MetadataStore) -> Result<Option<Self>> {
        let Some(dotlist) = store.get(DOTLIST_KEY) else {
            return Ok(None);
        };

        let dots = dotlist
            .split_whitespace()
            .map(str::parse::<u8>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| ProtocolError::MalformedMetadata { key: DOTLIST_KEY })?;

        let scores = read_json(store, ALL_SCORES_KEY)?.unwrap_or_default();
        let game_time = read_json(store, GAME_TIME_KEY)?.unwrap_or(0);
        let level = read_json(store, LEVEL_KEY)?.unwrap_or(0);

        Ok(Some(Self {
            dots,
            scores,
            game_time,
            level,
        }))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    store: &impl MetadataStore,
    key: &'static str,
) -> Result<Option<T>> {
    match store.get(key) {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|_| ProtocolError::MalformedMetadata { key }),
        None => {
            log::debug!("No {:?} in metadata, using default", key);
            Ok(None)
        }
    }
}
