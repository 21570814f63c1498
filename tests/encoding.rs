use encoding_rs::{SHIFT_JIS, UTF_8, WINDOWS_1251, WINDOWS_1252};
use lcftrans_po_lib::{
    decode_bytes, detect_encoding, encoding_from_label, parse_ini_encoding,
    read_to_string_without_bom,
    source::{GameDataSource, JsonSource},
    CommandCode, Error, DEFAULT_ENCODING,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs::write;
use tempfile::tempdir;

fn bytes_object(bytes: &[u8]) -> Value {
    json!({ "__type": "bytes", "data": bytes })
}

#[test]
fn code_pages_and_labels_resolve() {
    assert_eq!(encoding_from_label("932"), Some(SHIFT_JIS));
    assert_eq!(encoding_from_label(" 1251 "), Some(WINDOWS_1251));
    assert_eq!(encoding_from_label("65001"), Some(UTF_8));
    assert_eq!(encoding_from_label("Shift_JIS"), Some(SHIFT_JIS));
    assert_eq!(encoding_from_label("utf-8"), Some(UTF_8));
    assert_eq!(encoding_from_label("klingon"), None);
}

#[test]
fn default_encoding_is_windows_1252() {
    assert_eq!(DEFAULT_ENCODING, WINDOWS_1252);
}

#[test]
fn ini_encoding_is_read_from_easyrpg_section() {
    let ini = "[RPG_RT]\nGameTitle=Test\nEncoding=932\n\n[EasyRPG]\nEncoding=1251\n";

    assert_eq!(parse_ini_encoding(ini), Some(WINDOWS_1251));
}

#[test]
fn ini_section_and_key_are_case_insensitive() {
    assert_eq!(
        parse_ini_encoding("[easyrpg]\r\nencoding = 932\r\n"),
        Some(SHIFT_JIS)
    );
}

#[test]
fn ini_without_encoding_yields_none() {
    assert_eq!(parse_ini_encoding(""), None);
    assert_eq!(parse_ini_encoding("[RPG_RT]\nEncoding=932\n"), None);
    assert_eq!(parse_ini_encoding("[EasyRPG]\nEncoding=klingon\n"), None);
}

#[test]
fn detect_encoding_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("RPG_RT.ini");
    write(&path, "[EasyRPG]\nEncoding=932\n").unwrap();

    assert_eq!(detect_encoding(&path).unwrap(), Some(SHIFT_JIS));
}

#[test]
fn detect_encoding_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("RPG_RT.ini");

    assert!(matches!(
        detect_encoding(&path),
        Err(Error::Io(error_path, _)) if error_path == path
    ));
}

#[test]
fn legacy_bytes_are_decoded() {
    let (bytes, _, _) = SHIFT_JIS.encode("はい");

    assert_eq!(decode_bytes(&bytes, SHIFT_JIS), "はい");
    assert_eq!(decode_bytes(&[0x43, 0x61, 0x66, 0xE9], WINDOWS_1252), "Café");
}

#[test]
fn bom_is_stripped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("RPG_RT.po");
    write(&path, b"\xEF\xBB\xBFmsgid \"\"").unwrap();

    assert_eq!(read_to_string_without_bom(&path).unwrap(), "msgid \"\"");
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("RPG_RT.po");
    write(&path, b"\xFF\xFE\x00").unwrap();

    assert_eq!(
        read_to_string_without_bom(&path).unwrap_err().kind(),
        std::io::ErrorKind::InvalidData
    );
}

#[test]
fn byte_objects_are_replaced_recursively() {
    let source = JsonSource::new(WINDOWS_1252);
    let mut value = json!({
        "actors": [{ "name": bytes_object(&[0x43, 0x61, 0x66, 0xE9]) }],
        "terms": { "yes": "Oui" },
        "nested": [[bytes_object(b"deep")]],
        "not_bytes": { "__type": "other", "data": [1, 2] },
    });

    source.decode_strings(&mut value);

    assert_eq!(
        value,
        json!({
            "actors": [{ "name": "Café" }],
            "terms": { "yes": "Oui" },
            "nested": [["deep"]],
            "not_bytes": { "__type": "other", "data": [1, 2] },
        })
    );
}

#[test]
fn database_dump_is_loaded_with_source_encoding() {
    let (title, _, _) = SHIFT_JIS.encode("はい");
    let dir = tempdir().unwrap();
    let path = dir.path().join("RPG_RT.ldb.json");
    let dump = json!({
        "actors": [{ "name": bytes_object(&title), "unknown_field": 1 }],
        "terms": { "yes": bytes_object(&title) },
        "common_events": [{
            "name": "Intro",
            "event_commands": [
                { "code": 10110, "indent": 0, "string": "Hello" },
                { "code": 12010, "indent": 1 },
            ],
        }],
    });
    write(&path, dump.to_string()).unwrap();

    let database = JsonSource::new(SHIFT_JIS).load_database(&path).unwrap();

    assert_eq!(database.actors[0].name, "はい");
    assert_eq!(database.term("yes"), "はい");
    assert_eq!(database.term("no"), "");

    let commands = &database.common_events[0].event_commands;
    assert_eq!(commands[0].code, CommandCode::ShowMessage);
    assert_eq!(commands[1].code, CommandCode::Other);
    assert_eq!(commands[1].string, "");
}

#[test]
fn map_dump_accepts_uppercase_event_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Map0001.lmu.json");
    write(&path, r#"{"events": [{"ID": 3, "pages": [{}]}]}"#).unwrap();

    let map = JsonSource::default().load_map(&path).unwrap();

    assert_eq!(map.events[0].id, 3);
    assert_eq!(map.events[0].pages.len(), 1);
}

#[test]
fn malformed_dump_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Map0001.lmu.json");
    write(&path, "{ not json").unwrap();

    assert!(matches!(
        JsonSource::default().load_map(&path),
        Err(Error::JsonParse(error_path, _)) if error_path == path
    ));
}
