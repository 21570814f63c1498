use crate::{
    constants::{BYTES_DATA_KEY, BYTES_TYPE_KEY, BYTES_TYPE_VALUE},
    functions::{decode_bytes, DEFAULT_ENCODING},
    records::{Database, Map},
    types::Error,
};
use encoding_rs::Encoding;
use serde::de::DeserializeOwned;
use serde_json::{from_slice, from_value, Value};
use std::{fs::read, path::Path};

/// Provides decoded game documents. Implementations own all binary parsing and text decoding.
pub trait GameDataSource {
    /// Loads the database document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the document can't be read or parsed.
    fn load_database(&self, path: &Path) -> Result<Database, Error>;

    /// Loads the map document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the document can't be read or parsed.
    fn load_map(&self, path: &Path) -> Result<Map, Error>;
}

/// Reads JSON dumps of `RPG_RT.ldb` and `MapXXXX.lmu`.
///
/// Strings may be stored either as JSON strings, or as raw game bytes in the
/// `{"__type": "bytes", "data": [...]}` form, which are decoded with [`JsonSource::encoding`].
#[derive(Debug, Clone, Copy)]
pub struct JsonSource {
    pub encoding: &'static Encoding,
}

impl Default for JsonSource {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING,
        }
    }
}

impl JsonSource {
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Replaces byte objects with decoded strings, recursively.
    pub fn decode_strings(&self, value: &mut Value) {
        match value {
            Value::Array(array) => {
                for value in array {
                    self.decode_strings(value);
                }
            }
            Value::Object(object) => {
                if let Some(string) = self.bytes_object_to_string(object) {
                    *value = Value::String(string);
                    return;
                }

                for (_, value) in object.iter_mut() {
                    self.decode_strings(value);
                }
            }
            _ => {}
        }
    }

    fn bytes_object_to_string(
        &self,
        object: &serde_json::Map<String, Value>,
    ) -> Option<String> {
        if object.get(BYTES_TYPE_KEY)?.as_str()? != BYTES_TYPE_VALUE {
            return None;
        }

        let bytes = object
            .get(BYTES_DATA_KEY)?
            .as_array()?
            .iter()
            .map(|byte| byte.as_u64().and_then(|b| u8::try_from(b).ok()))
            .collect::<Option<Vec<u8>>>()?;

        Some(decode_bytes(&bytes, self.encoding).into_owned())
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, Error> {
        let content = read(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;

        let mut value: Value = from_slice(&content)
            .map_err(|e| Error::JsonParse(path.to_path_buf(), e))?;
        self.decode_strings(&mut value);

        from_value(value).map_err(|e| Error::JsonParse(path.to_path_buf(), e))
    }
}

impl GameDataSource for JsonSource {
    fn load_database(&self, path: &Path) -> Result<Database, Error> {
        self.load(path)
    }

    fn load_map(&self, path: &Path) -> Result<Map, Error> {
        self.load(path)
    }
}
