use const_format::formatcp;

pub(crate) mod localization {
    pub const PARSED_FILE_MSG: &str = "Parsed file.";
    pub const WROTE_FILE_MSG: &str = "Wrote file.";
    pub const SKIPPED_FILE_MSG: &str =
        "Not a database or map dump, or disabled by file flags. Skipping it.";
    pub const UNKNOWN_ENCODING_MSG: &str =
        "Unknown encoding in the ini file, falling back to the default one";
}

pub const MSGCTXT: &str = "msgctxt";
pub const MSGID: &str = "msgid";
pub const MSGSTR: &str = "msgstr";

/// Prefix of the extracted-comment lines, which hold [`crate::Entry::info`].
pub const COMMENT_PREFIX: &str = "#. ";

/// Literal two-character marker that ends every folded segment but the last.
pub const LINE_MARKER: &str = r"\n";

/// Joins context and source text into an identity key. Never occurs in game text.
pub const KEY_SEPARATOR: char = '\u{1}';

pub const PROJECT_ID_VERSION: &str = "GAME_NAME 1.0";
pub const LANGUAGE_TEAM: &str = "YOUR NAME <mail@your.address>";
pub const CREATED_BY: &str = env!("CARGO_PKG_NAME");

pub const HEADER: &str = formatcp!(
    "{MSGID} \"\"\n\
     {MSGSTR} \"\"\n\
     \"Project-Id-Version: {PROJECT_ID_VERSION}\\n\"\n\
     \"Language-Team: {LANGUAGE_TEAM}\\n\"\n\
     \"Language: \\n\"\n\
     \"MIME-Version: 1.0\\n\"\n\
     \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
     \"Content-Transfer-Encoding: 8bit\\n\"\n\
     \"X-CreatedBy: {CREATED_BY}\"\n"
);

pub const EVENT_CONTEXT: &str = "event";
pub const TERM_CONTEXT: &str = "term";
pub const CHOICE_MARKER: &str = " (Choice)";

pub const DATABASE_FILE: &str = "rpg_rt.ldb";
pub const INI_FILE: &str = "rpg_rt.ini";
pub const MAP_EXTENSION: &str = ".lmu";
pub const DUMP_EXTENSION: &str = ".json";
pub const CATALOG_EXTENSION: &str = "po";

pub const DATABASE_DUMP_FILE: &str = formatcp!("{DATABASE_FILE}{DUMP_EXTENSION}");
pub const MAP_DUMP_SUFFIX: &str = formatcp!("{MAP_EXTENSION}{DUMP_EXTENSION}");

pub const BYTES_TYPE_KEY: &str = "__type";
pub const BYTES_TYPE_VALUE: &str = "bytes";
pub const BYTES_DATA_KEY: &str = "data";

pub const EASYRPG_SECTION: &str = "[EasyRPG]";
pub const ENCODING_KEY: &str = "Encoding";
