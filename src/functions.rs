use crate::{
    constants::{localization::UNKNOWN_ENCODING_MSG, EASYRPG_SECTION, ENCODING_KEY},
    types::Error,
};
use encoding_rs::Encoding;
use log::warn;
use phf::phf_map;
use std::{borrow::Cow, fs::read, io, path::Path};

/// Windows code pages RPG Maker games are commonly released in.
static CODE_PAGES: phf::Map<&'static str, &'static Encoding> = phf_map! {
    "874" => &encoding_rs::WINDOWS_874_INIT,
    "932" => &encoding_rs::SHIFT_JIS_INIT,
    "936" => &encoding_rs::GBK_INIT,
    "949" => &encoding_rs::EUC_KR_INIT,
    "950" => &encoding_rs::BIG5_INIT,
    "1250" => &encoding_rs::WINDOWS_1250_INIT,
    "1251" => &encoding_rs::WINDOWS_1251_INIT,
    "1252" => &encoding_rs::WINDOWS_1252_INIT,
    "1253" => &encoding_rs::WINDOWS_1253_INIT,
    "1254" => &encoding_rs::WINDOWS_1254_INIT,
    "1255" => &encoding_rs::WINDOWS_1255_INIT,
    "1256" => &encoding_rs::WINDOWS_1256_INIT,
    "1257" => &encoding_rs::WINDOWS_1257_INIT,
    "1258" => &encoding_rs::WINDOWS_1258_INIT,
    "65001" => &encoding_rs::UTF_8_INIT,
};

/// Encoding used when neither the caller nor the ini file names one.
pub static DEFAULT_ENCODING: &Encoding = &encoding_rs::WINDOWS_1252_INIT;

/// Resolves an encoding from a code page number (`932`) or an encoding label (`Shift_JIS`).
#[must_use]
pub fn encoding_from_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();

    CODE_PAGES
        .get(label)
        .copied()
        .or_else(|| Encoding::for_label(label.as_bytes()))
}

/// Reads `Encoding=` from the `[EasyRPG]` section of ini file contents.
#[must_use]
pub fn parse_ini_encoding(content: &str) -> Option<&'static Encoding> {
    let mut in_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            in_section = line.eq_ignore_ascii_case(EASYRPG_SECTION);
            continue;
        }

        if !in_section {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        if !key.trim().eq_ignore_ascii_case(ENCODING_KEY) {
            continue;
        }

        let encoding = encoding_from_label(value);

        if encoding.is_none() {
            warn!("{UNKNOWN_ENCODING_MSG}: {value}");
        }

        return encoding;
    }

    None
}

/// Detects the game text encoding from `RPG_RT.ini`.
///
/// # Errors
///
/// - [`Error::Io`] - if the file can't be read.
pub fn detect_encoding<P: AsRef<Path>>(
    ini_path: P,
) -> Result<Option<&'static Encoding>, Error> {
    let ini_path = ini_path.as_ref();
    let bytes = read(ini_path).map_err(|e| Error::Io(ini_path.to_path_buf(), e))?;

    // Keys and code page numbers are ASCII, so a lossy decode is enough.
    Ok(parse_ini_encoding(&String::from_utf8_lossy(&bytes)))
}

/// Decodes legacy game bytes. Malformed sequences become replacement characters.
#[must_use]
pub fn decode_bytes<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    encoding.decode_without_bom_handling(bytes).0
}

/// This function is similar to [`std::fs::read_to_string`], but it doesn't include Byte Order Mark, if there's any.
///
/// # Errors
///
/// Returns an I/O error if the file can't be read or isn't valid UTF-8.
pub fn read_to_string_without_bom<P: AsRef<Path>>(
    file_path: P,
) -> io::Result<String> {
    const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

    let mut bytes = read(file_path)?;

    if bytes.starts_with(&BOM) {
        bytes.drain(..BOM.len());
    }

    String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
