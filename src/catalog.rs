use crate::{
    constants::{COMMENT_PREFIX, HEADER, MSGCTXT, MSGID, MSGSTR},
    po::write_field,
    types::{Comments, Entry, Error},
};
use indexmap::IndexMap;
use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// One output record: the entry that first used the key, and the comments of every entry sharing it.
struct Record<'a> {
    entry: &'a Entry,
    comments: Comments<'a>,
}

/// Ordered, deduplicating collection of [`Entry`] values, built from a single source document.
///
/// Raw entries are kept as added. Grouping happens on output: entries with the same context and
/// original text become one record, placed where the key was first seen.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry`. Entries with empty original text are rejected, and `false` is returned.
    pub fn add(&mut self, entry: Entry) -> bool {
        if entry.original.is_empty() {
            return false;
        }

        self.entries.push(entry);
        true
    }

    /// Returns the raw, ungrouped entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn records(&self) -> impl Iterator<Item = Record<'_>> {
        let mut records: IndexMap<String, Record> =
            IndexMap::with_capacity(self.entries.len());

        for entry in &self.entries {
            let record = records.entry(entry.key()).or_insert_with(|| Record {
                entry,
                comments: Comments::new(),
            });

            if !entry.info.is_empty() {
                record.comments.push(&entry.info);
            }
        }

        records.into_values()
    }

    /// Writes the catalog text to `sink`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `sink`.
    pub fn serialize<W: Write>(&self, mut sink: W) -> io::Result<()> {
        write!(sink, "{self}")?;
        sink.flush()
    }

    /// Writes the catalog text to a new file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] - if the file can't be created or written.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();

        let file =
            File::create(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;

        self.serialize(BufWriter::new(file))
            .map_err(|e| Error::Io(path.to_path_buf(), e))
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        writeln!(f)?;

        for Record { entry, comments } in self.records() {
            for line in comments.iter().flat_map(|info| info.lines()) {
                writeln!(f, "{COMMENT_PREFIX}{line}")?;
            }

            if !entry.context.is_empty() {
                writeln!(f, "{MSGCTXT} \"{}\"", entry.context)?;
            }

            write_field(f, MSGID, &entry.original)?;
            write_field(f, MSGSTR, &entry.translation)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
