//! Library for extracting RPG Maker 2000/2003 game text into gettext `.po` catalogs, and for reading the catalogs back.

mod catalog;
mod constants;
mod functions;
mod gather;
mod processors;

pub mod events;
pub mod po;
pub mod records;
pub mod source;
pub mod types;

pub use catalog::Catalog;
pub use constants::{EVENT_CONTEXT, HEADER, KEY_SEPARATOR, TERM_CONTEXT};
pub use functions::{
    decode_bytes, detect_encoding, encoding_from_label, parse_ini_encoding,
    read_to_string_without_bom, DEFAULT_ENCODING,
};
pub use processors::{catalog_filename, read_catalog, Dumper, DumperBuilder};
pub use types::{CommandCode, Entry, Error, EventCommand, FileFlags, Location};
