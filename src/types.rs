use crate::constants::{CHOICE_MARKER, KEY_SEPARATOR};
use bitflags::bitflags;
use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{fmt, io, path::PathBuf};
use strum_macros::EnumIs;
use thiserror::Error;

pub(crate) type Comments<'a> = SmallVec<[&'a str; 4]>;
pub type ChoiceOptions<'a> = SmallVec<[&'a str; 4]>;

/// One translatable unit, before grouping.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Source text, written to `msgid`.
    pub original: String,
    /// Target text, written to `msgstr`.
    pub translation: String,
    /// Origin tag, written to `msgctxt`.
    pub context: String,
    /// Developer comment, written as `#.` lines. Not part of the identity.
    pub info: String,
}

impl Entry {
    #[must_use]
    pub fn new(
        context: impl Into<String>,
        original: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            translation: String::new(),
            context: context.into(),
            info: info.into(),
        }
    }

    /// Returns the identity key: context and original text joined by [`KEY_SEPARATOR`].
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(
            self.context.len() + KEY_SEPARATOR.len_utf8() + self.original.len(),
        );

        key.push_str(&self.context);
        key.push(KEY_SEPARATOR);
        key.push_str(&self.original);
        key
    }
}

/// 10110 - First line of a message window.
///
/// 20110 - Continuation line of the message window.
///
/// 10140 - Start of a choice block.
///
/// 20140 - One choice branch. Branch with empty text is the cancel branch.
///
/// 20141 - End of a choice block.
///
/// Every other code is [`CommandCode::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIs,
    FromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(from = "u16", into = "u16")]
#[repr(u16)]
pub enum CommandCode {
    ShowMessage = 10110,
    ShowMessage2 = 20110,
    ShowChoice = 10140,
    ShowChoiceOption = 20140,
    ShowChoiceEnd = 20141,
    #[num_enum(default)]
    Other = 0,
}

/// A single event command, reduced to what text extraction needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCommand {
    pub code: CommandCode,
    #[serde(default)]
    pub indent: u32,
    #[serde(default)]
    pub string: String,
}

impl EventCommand {
    #[must_use]
    pub fn new(code: CommandCode, indent: u32, string: impl Into<String>) -> Self {
        Self {
            code,
            indent,
            string: string.into(),
        }
    }
}

/// Where a command list lives. Used to build [`Entry::info`] strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `id` is the 1-based position of the common event in the database.
    CommonEvent { id: usize },
    /// `id` is the map event ID, `page` is the 1-based page position.
    MapEvent { id: i32, page: usize },
}

impl Location {
    /// Describes the command at 1-based `line`.
    #[must_use]
    pub fn describe(self, line: usize) -> String {
        LocationLine {
            location: self,
            line,
            choice: false,
        }
        .to_string()
    }

    /// Describes the choice block started by the command at 1-based `line`.
    #[must_use]
    pub fn describe_choice(self, line: usize) -> String {
        LocationLine {
            location: self,
            line,
            choice: true,
        }
        .to_string()
    }
}

struct LocationLine {
    location: Location,
    line: usize,
    choice: bool,
}

impl fmt::Display for LocationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Location::CommonEvent { id } => {
                write!(f, "Common Event {id}, Line {}", self.line)?;
            }
            Location::MapEvent { id, page } => {
                write!(f, "Event {id}, Page {page}, Line {}", self.line)?;
            }
        }

        if self.choice {
            f.write_str(CHOICE_MARKER)?;
        }

        Ok(())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Selects which documents [`crate::Dumper`] processes.
    pub struct FileFlags: u8 {
        /// `RPG_RT.ldb` dump.
        const Database = 1 << 0;

        /// `MapXXXX.lmu` dumps.
        const Maps = 1 << 1;
    }
}

impl Default for FileFlags {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: IO error occurred: {1}")]
    Io(PathBuf, io::Error),
    #[error("{0}: Parsing JSON data failed with: {1}")]
    JsonParse(PathBuf, serde_json::Error),
}
