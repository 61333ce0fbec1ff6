use serde::Serialize;
use serde_json::Value;

pub use crate::{collections::*, error::*, values::*};

pub trait ToJson {
    /// Converts the value to its structural form, as nested JSON data.
    ///
    /// The result is in-memory data, not JSON text; encoding it is the
    /// caller's concern.
    fn to_json(&self) -> Result<Value>;

    /// Converts the value to the canonical bytes of its structural form.
    ///
    /// This is a convenience method, and automatically derived from `to_json`.
    fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_json()?)?)
    }

    /// Fingerprints the structural form using the blake3 algorithm.
    ///
    /// This is a convenience method, and automatically derived from `to_json`.
    fn fingerprint(&self) -> Result<Fingerprint> {
        Ok(Fingerprint::digest::<blake3::Hasher>(&self.to_json_bytes()?))
    }
}

impl<T: Serialize> ToJson for T {
    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub trait FromHex
where
    Self: Sized,
{
    fn from_hex(hex: &str) -> Result<Self>;
}

pub trait ToHex {
    fn to_hex(&self) -> String;
}
