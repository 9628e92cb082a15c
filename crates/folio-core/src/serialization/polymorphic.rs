//! Read side of the polymorphic families.
//!
//! The incoming object is buffered into a [`Value`] first so the `type` member
//! can sit anywhere in it. The common header and the selected variant are then
//! both populated from that same tree with their derived `Deserialize` impls.
//!
//! Writing needs no help from this module: each family serializes through the
//! derived impl of its concrete payload, which carries the discriminator.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::serialization::registry::Polymorphic;
use crate::DecodeError;

/// Member name carrying the discriminator.
pub const DISCRIMINATOR: &str = "type";

/// Decode a header `H` and family variant `P` from one buffered object.
pub fn decode<H, P>(tree: &Value) -> Result<(H, P), DecodeError>
where
    H: DeserializeOwned,
    P: Polymorphic,
{
    let object = tree.as_object().ok_or(DecodeError::NotAnObject {
        family: P::FAMILY,
        found: json_kind(tree),
    })?;
    let discriminator = object
        .get(DISCRIMINATOR)
        .ok_or(DecodeError::MissingDiscriminator { family: P::FAMILY })?;

    let variant = P::registry()?.resolve(discriminator)?;
    let details = variant.decode(tree)?;
    let header = H::deserialize(tree)?;

    Ok((header, details))
}

/// `Deserialize` helper for family types: buffer, then [`decode`].
pub fn deserialize<'de, H, P, D>(deserializer: D) -> Result<(H, P), D::Error>
where
    H: DeserializeOwned,
    P: Polymorphic,
    D: Deserializer<'de>,
{
    let tree = Value::deserialize(deserializer)?;
    decode(&tree).map_err(D::Error::custom)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
