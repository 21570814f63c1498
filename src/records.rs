//! Typed view of the RPG Maker 2000/2003 documents, limited to the fields that hold text.
//!
//! Field names follow liblcf, so JSON dumps made with its naming deserialize directly. Every
//! field is optional in the dump.

use crate::types::EventCommand;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub name: String,
    pub title: String,
    pub skill_name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Class {
    pub name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub using_message1: String,
    pub using_message2: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Enemy {
    pub name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct State {
    pub name: String,
    pub message_actor: String,
    pub message_enemy: String,
    pub message_already: String,
    pub message_affected: String,
    pub message_recovery: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct BattleCommand {
    pub name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CommonEvent {
    pub name: String,
    pub event_commands: Vec<EventCommand>,
}

/// Contents of `RPG_RT.ldb`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    pub actors: Vec<Actor>,
    pub classes: Vec<Class>,
    pub skills: Vec<Skill>,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub states: Vec<State>,
    pub battle_commands: Vec<BattleCommand>,
    /// Vocabulary, keyed by liblcf field name, e.g. `escape_success`.
    pub terms: IndexMap<String, String>,
    pub common_events: Vec<CommonEvent>,
}

impl Database {
    /// Returns the term called `key`, or an empty string if the dump doesn't have it.
    #[must_use]
    pub fn term(&self, key: &str) -> &str {
        self.terms.get(key).map_or("", String::as_str)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EventPage {
    pub event_commands: Vec<EventCommand>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct MapEvent {
    #[serde(alias = "ID")]
    pub id: i32,
    pub name: String,
    pub pages: Vec<EventPage>,
}

/// Contents of a `MapXXXX.lmu`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Map {
    pub events: Vec<MapEvent>,
}
