use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{CorporateActionDetails, TransactionDetails};
use crate::serialization::polymorphic::DISCRIMINATOR;
use crate::serialization::registry::Polymorphic;
use crate::CodecError;

/// Single JSON entry point for request and response payloads.
///
/// Naming, enumerant spelling and null omission are carried by the derived
/// serde impls of the domain types; the facade adds the read-side rule that a
/// `null` member is the same as an absent one. Whole-buffer and streaming
/// forms share one code path.
///
/// The value holds no state and is freely shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct PayloadSerializer {
    _initialized: (),
}

impl PayloadSerializer {
    /// Build both polymorphic registries up front so a broken family fails here.
    pub fn new() -> Result<Self, CodecError> {
        TransactionDetails::registry()?;
        CorporateActionDetails::registry()?;
        Ok(Self { _initialized: () })
    }

    pub fn serialize<T>(&self, value: &T) -> Result<String, CodecError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_string(value).map_err(CodecError::Encode)
    }

    pub fn serialize_to_vec<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    pub fn serialize_to_writer<W, T>(&self, writer: W, value: &T) -> Result<(), CodecError>
    where
        W: Write,
        T: Serialize + ?Sized,
    {
        serde_json::to_writer(writer, value).map_err(encode_failure)
    }

    pub fn serialize_to_writer_pretty<W, T>(&self, writer: W, value: &T) -> Result<(), CodecError>
    where
        W: Write,
        T: Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(writer, value).map_err(encode_failure)
    }

    pub fn deserialize<T>(&self, text: &str) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        let tree = serde_json::from_str(text).map_err(CodecError::Decode)?;
        self.from_tree(tree)
    }

    pub fn deserialize_slice<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        let tree = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;
        self.from_tree(tree)
    }

    pub fn deserialize_reader<R, T>(&self, reader: R) -> Result<T, CodecError>
    where
        R: Read,
        T: DeserializeOwned,
    {
        let tree = serde_json::from_reader(reader).map_err(|error| {
            if error.is_io() {
                CodecError::Io(error.into())
            } else {
                CodecError::Decode(error)
            }
        })?;
        self.from_tree(tree)
    }

    fn from_tree<T>(&self, mut tree: Value) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        prune_null_members(&mut tree);
        serde_json::from_value(tree).map_err(CodecError::Decode)
    }
}

fn encode_failure(error: serde_json::Error) -> CodecError {
    if error.is_io() {
        CodecError::Io(error.into())
    } else {
        CodecError::Encode(error)
    }
}

/// Drop every object member whose value is `null`, except the discriminator.
/// Array elements are kept.
fn prune_null_members(value: &mut Value) {
    match value {
        Value::Object(members) => {
            members.retain(|name, member| !member.is_null() || name == DISCRIMINATOR);
            members.values_mut().for_each(prune_null_members);
        }
        Value::Array(elements) => elements.iter_mut().for_each(prune_null_members),
        _ => {}
    }
}
