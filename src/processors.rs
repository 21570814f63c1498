use crate::{
    constants::{
        localization::{PARSED_FILE_MSG, SKIPPED_FILE_MSG, WROTE_FILE_MSG},
        CATALOG_EXTENSION, DATABASE_DUMP_FILE, INI_FILE, MAP_DUMP_SUFFIX,
    },
    functions::{detect_encoding, read_to_string_without_bom, DEFAULT_ENCODING},
    po::decode,
    source::{GameDataSource, JsonSource},
    types::{Error, FileFlags},
    Catalog,
};
use encoding_rs::Encoding;
use log::{debug, info};
use std::{
    fs::{create_dir_all, read_dir, DirEntry},
    path::{Path, PathBuf},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Database,
    Map,
}

impl DocumentKind {
    fn from_filename(filename: &str) -> Option<Self> {
        let lowercase = filename.to_lowercase();

        if lowercase == DATABASE_DUMP_FILE {
            Some(Self::Database)
        } else if lowercase.ends_with(MAP_DUMP_SUFFIX) {
            Some(Self::Map)
        } else {
            None
        }
    }

    fn flag(self) -> FileFlags {
        match self {
            Self::Database => FileFlags::Database,
            Self::Map => FileFlags::Maps,
        }
    }
}

/// Returns the `.po` file name for a dump: `RPG_RT.ldb.json` becomes `RPG_RT.po`.
#[must_use]
pub fn catalog_filename(dump_filename: &str) -> PathBuf {
    let stem = Path::new(dump_filename)
        .file_stem()
        .map(Path::new)
        .and_then(Path::file_stem)
        .unwrap_or_default();

    PathBuf::from(stem).with_extension(CATALOG_EXTENSION)
}

/// Reads a `.po` file back into a [`Catalog`].
///
/// # Errors
///
/// - [`Error::Io`] - if the file can't be read or isn't UTF-8.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Error> {
    let path = path.as_ref();
    let content = read_to_string_without_bom(path)
        .map_err(|e| Error::Io(path.to_path_buf(), e))?;

    Ok(decode(&content))
}

/// A struct used for dumping game text into `.po` catalogs.
///
/// One catalog is written per document: `RPG_RT.po` for the database and `MapXXXX.po` for
/// every map.
///
/// # Fields
///
/// - `file_flags`: Indicates which documents should be processed. Use [`Dumper::set_files`] to set. See [`FileFlags`] for more info.
/// - `encoding`: Encoding of the game text. Use [`Dumper::set_encoding`] to set. Detected from `RPG_RT.ini` if not set.
///
/// # Example
///
/// ```no_run
/// use lcftrans_po_lib::{Dumper, FileFlags};
///
/// let mut dumper = Dumper::new();
/// dumper.set_files(FileFlags::Maps);
/// dumper.dump("C:/Game", "C:/Game/translation").unwrap();
/// ```
#[derive(Debug, Default, Clone)]
pub struct Dumper {
    file_flags: FileFlags,
    encoding: Option<&'static Encoding>,
}

impl Dumper {
    /// Creates a new [`Dumper`] instance with default values.
    ///
    /// By default, all documents are processed and the encoding is detected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file flags to determine which documents will be processed.
    pub fn set_files(&mut self, flags: FileFlags) {
        self.file_flags = flags;
    }

    /// Forces the game text encoding instead of detecting it from `RPG_RT.ini`.
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Returns the encoding to decode the game in `source_path` with.
    ///
    /// The forced encoding wins, then the one named in `RPG_RT.ini` (matched case-insensitively),
    /// then Windows-1252.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] - if the directory or the ini file can't be read.
    pub fn resolve_encoding<P: AsRef<Path>>(
        &self,
        source_path: P,
    ) -> Result<&'static Encoding, Error> {
        if let Some(encoding) = self.encoding {
            return Ok(encoding);
        }

        let source_path = source_path.as_ref();

        for entry in read_dir(source_path)
            .map_err(|e| Error::Io(source_path.to_path_buf(), e))?
            .flatten()
        {
            if entry.file_name().to_string_lossy().to_lowercase() == INI_FILE {
                if let Some(encoding) = detect_encoding(entry.path())? {
                    return Ok(encoding);
                }

                break;
            }
        }

        Ok(DEFAULT_ENCODING)
    }

    /// Dumps JSON documents from `source_path` into `.po` catalogs in `output_path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] - if any I/O operation fails.
    /// - [`Error::JsonParse`] - if a document isn't valid.
    pub fn dump<P: AsRef<Path>>(
        &self,
        source_path: P,
        output_path: P,
    ) -> Result<(), Error> {
        let source =
            JsonSource::new(self.resolve_encoding(source_path.as_ref())?);
        self.dump_with(&source, source_path, output_path)
    }

    /// Same as [`Dumper::dump`], but loads documents through any [`GameDataSource`].
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] - if any I/O operation fails.
    /// - Any error returned by `source`.
    pub fn dump_with<S: GameDataSource, P: AsRef<Path>>(
        &self,
        source: &S,
        source_path: P,
        output_path: P,
    ) -> Result<(), Error> {
        if self.file_flags.is_empty() {
            return Ok(());
        }

        let source_path = source_path.as_ref();
        let output_path = output_path.as_ref();

        create_dir_all(output_path)
            .map_err(|e| Error::Io(output_path.to_path_buf(), e))?;

        let mut entries: Vec<DirEntry> = read_dir(source_path)
            .map_err(|e| Error::Io(source_path.to_path_buf(), e))?
            .flatten()
            .collect();
        entries.sort_by_key(DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            let filename = entry.file_name().to_string_lossy().into_owned();

            let Some(kind) = DocumentKind::from_filename(&filename)
                .filter(|kind| self.file_flags.contains(kind.flag()))
            else {
                debug!("{filename}: {SKIPPED_FILE_MSG}");
                continue;
            };

            let catalog = match kind {
                DocumentKind::Database => {
                    Catalog::from_database(&source.load_database(&path)?)
                }
                DocumentKind::Map => Catalog::from_map(&source.load_map(&path)?),
            };

            info!("{filename}: {PARSED_FILE_MSG}");

            let output_file = output_path.join(catalog_filename(&filename));
            catalog.write_to_file(&output_file)?;

            info!("{}: {WROTE_FILE_MSG}", output_file.display());
        }

        Ok(())
    }
}

/// A builder struct for [`Dumper`].
///
/// # Example
///
/// ```
/// use lcftrans_po_lib::{DumperBuilder, FileFlags};
///
/// let dumper = DumperBuilder::new()
///     .with_files(FileFlags::Database)
///     .encoding(encoding_rs::SHIFT_JIS)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DumperBuilder {
    dumper: Dumper,
}

impl DumperBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file flags to determine which documents will be processed. See [`FileFlags`] for more info.
    #[must_use]
    pub fn with_files(mut self, flags: FileFlags) -> Self {
        self.dumper.set_files(flags);
        self
    }

    /// Forces the game text encoding.
    #[must_use]
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.dumper.set_encoding(encoding);
        self
    }

    #[must_use]
    pub fn build(self) -> Dumper {
        self.dumper
    }
}
