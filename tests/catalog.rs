use lcftrans_po_lib::{Catalog, Entry, HEADER, KEY_SEPARATOR};
use pretty_assertions::assert_eq;

fn entry(context: &str, original: &str, info: &str) -> Entry {
    Entry::new(context, original, info)
}

/// Strips the header and the blank line after it.
fn body(catalog: &Catalog) -> String {
    catalog.to_string()[HEADER.len() + 1..].to_owned()
}

#[test]
fn add_admits_non_empty_original() {
    let mut catalog = Catalog::new();

    assert!(catalog.add(entry("term", "Yes", "Term: Yes")));
    assert_eq!(catalog.entries(), &[entry("term", "Yes", "Term: Yes")]);
}

#[test]
fn add_rejects_empty_original() {
    let mut catalog = Catalog::new();

    assert!(!catalog.add(entry("term", "", "Term: Yes")));
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn entries_keep_raw_duplicates() {
    let mut catalog = Catalog::new();
    catalog.add(entry("term", "Yes", "a"));
    catalog.add(entry("term", "Yes", "b"));

    assert_eq!(catalog.len(), 2);
}

#[test]
fn key_joins_context_and_original() {
    let key = entry("actor.name", "Alex", "").key();

    assert_eq!(key, format!("actor.name{KEY_SEPARATOR}Alex"));
    assert_ne!(KEY_SEPARATOR, '\u{1f}');
}

#[test]
fn header_comes_first_followed_by_blank_line() {
    let text = Catalog::new().to_string();

    assert_eq!(
        text,
        "msgid \"\"\n\
         msgstr \"\"\n\
         \"Project-Id-Version: GAME_NAME 1.0\\n\"\n\
         \"Language-Team: YOUR NAME <mail@your.address>\\n\"\n\
         \"Language: \\n\"\n\
         \"MIME-Version: 1.0\\n\"\n\
         \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
         \"Content-Transfer-Encoding: 8bit\\n\"\n\
         \"X-CreatedBy: lcftrans-po-lib\"\n\
         \n"
    );
}

#[test]
fn same_key_groups_comments_in_order() {
    let mut catalog = Catalog::new();
    catalog.add(entry("term", "Yes", "Term: Yes"));
    catalog.add(Entry {
        translation: "ignored".to_owned(),
        ..entry("term", "Yes", "Term: Also yes")
    });

    assert_eq!(
        body(&catalog),
        "#. Term: Yes\n\
         #. Term: Also yes\n\
         msgctxt \"term\"\n\
         msgid \"Yes\"\n\
         msgstr \"\"\n\
         \n"
    );
}

#[test]
fn first_entry_supplies_translation() {
    let mut catalog = Catalog::new();
    catalog.add(Entry {
        translation: "Oui".to_owned(),
        ..entry("term", "Yes", "")
    });
    catalog.add(Entry {
        translation: "Si".to_owned(),
        ..entry("term", "Yes", "")
    });

    assert_eq!(
        body(&catalog),
        "msgctxt \"term\"\nmsgid \"Yes\"\nmsgstr \"Oui\"\n\n"
    );
}

#[test]
fn records_follow_first_encounter_order() {
    let mut catalog = Catalog::new();
    catalog.add(entry("term", "K1", "first"));
    catalog.add(entry("term", "K1", "second"));
    catalog.add(entry("term", "K2", "third"));
    catalog.add(entry("term", "K1", "fourth"));

    let text = body(&catalog);
    let k1 = text.find("msgid \"K1\"").unwrap();
    let k2 = text.find("msgid \"K2\"").unwrap();

    assert!(k1 < k2);
    assert_eq!(text.matches("msgid ").count(), 2);
    assert_eq!(
        text,
        "#. first\n\
         #. second\n\
         #. fourth\n\
         msgctxt \"term\"\n\
         msgid \"K1\"\n\
         msgstr \"\"\n\
         \n\
         #. third\n\
         msgctxt \"term\"\n\
         msgid \"K2\"\n\
         msgstr \"\"\n\
         \n"
    );
}

#[test]
fn different_context_is_a_different_record() {
    let mut catalog = Catalog::new();
    catalog.add(entry("actor.name", "Alex", ""));
    catalog.add(entry("cls.name", "Alex", ""));

    assert_eq!(body(&catalog).matches("msgid \"Alex\"").count(), 2);
}

#[test]
fn multi_line_info_is_prefixed_per_line() {
    let mut catalog = Catalog::new();
    catalog.add(entry(
        "skill.using_message1",
        "%S casts",
        "Skill 1: Using message 1\n%S: Source name",
    ));

    assert_eq!(
        body(&catalog),
        "#. Skill 1: Using message 1\n\
         #. %S: Source name\n\
         msgctxt \"skill.using_message1\"\n\
         msgid \"%S casts\"\n\
         msgstr \"\"\n\
         \n"
    );
}

#[test]
fn empty_context_omits_msgctxt() {
    let mut catalog = Catalog::new();
    catalog.add(entry("", "Hello", ""));

    assert_eq!(body(&catalog), "msgid \"Hello\"\nmsgstr \"\"\n\n");
}

#[test]
fn serialize_writes_display_output() {
    let mut catalog = Catalog::new();
    catalog.add(entry("event", "Hello\nworld", "Common Event 1, Line 1"));

    let mut buffer = Vec::new();
    catalog.serialize(&mut buffer).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), catalog.to_string());
    assert!(catalog.to_string().ends_with(
        "#. Common Event 1, Line 1\n\
         msgctxt \"event\"\n\
         msgid \"\"\n\
         \"Hello\\n\"\n\
         \"world\"\n\
         msgstr \"\"\n\
         \n"
    ));
}
