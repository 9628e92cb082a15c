//! Discriminator tables for polymorphic families.
//!
//! A family is a sum type (for example [`TransactionDetails`]) whose variants
//! each wrap a concrete payload struct. The family lists its variants once in
//! [`Polymorphic::descriptors`]; the registry default-constructs each of them,
//! asks the result for its discriminator, and indexes the variant by the
//! discriminator's wire spelling. Adding a variant means adding it to the sum
//! type and to that list, nothing else.
//!
//! [`TransactionDetails`]: crate::domain::TransactionDetails

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::serialization::naming::wire_name;
use crate::{DecodeError, RegistryBuildError};

/// A closed family of payload variants selected by a `type` discriminator.
pub trait Polymorphic: Sized + 'static {
    /// Human readable family name used in diagnostics.
    const FAMILY: &'static str;

    /// Discriminator enumerant. Must serialize as a JSON string.
    type Kind: Serialize + Copy + Debug;

    fn kind(&self) -> Self::Kind;

    /// Every concrete variant of the family.
    fn descriptors() -> Vec<VariantDescriptor<Self>>;

    /// The lazily built, process-wide registry for this family.
    fn registry() -> Result<&'static TypeRegistry<Self>, RegistryBuildError>;
}

/// Constructor and decoder for one concrete variant.
pub struct VariantDescriptor<P> {
    type_name: &'static str,
    construct: fn() -> P,
    decode: fn(&Value) -> Result<P, serde_json::Error>,
}

impl<P> VariantDescriptor<P> {
    pub fn of<V>() -> Self
    where
        V: Default + DeserializeOwned + Into<P>,
    {
        let full = std::any::type_name::<V>();
        Self {
            type_name: full.rsplit("::").next().unwrap_or(full),
            construct: construct_default::<V, P>,
            decode: decode_from_tree::<V, P>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn construct(&self) -> P {
        (self.construct)()
    }

    /// Populate the variant field by field from an already parsed object.
    pub fn decode(&self, tree: &Value) -> Result<P, serde_json::Error> {
        (self.decode)(tree)
    }
}

impl<P> Debug for VariantDescriptor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantDescriptor")
            .field("type_name", &self.type_name)
            .finish()
    }
}

fn construct_default<V, P>() -> P
where
    V: Default + Into<P>,
{
    V::default().into()
}

fn decode_from_tree<V, P>(tree: &Value) -> Result<P, serde_json::Error>
where
    V: DeserializeOwned + Into<P>,
{
    V::deserialize(tree).map(Into::into)
}

/// Immutable discriminator table for one family.
#[derive(Debug)]
pub struct TypeRegistry<P> {
    variants: BTreeMap<String, VariantDescriptor<P>>,
}

impl<P: Polymorphic> TypeRegistry<P> {
    pub fn build() -> Result<Self, RegistryBuildError> {
        Self::from_descriptors(P::descriptors())
    }

    pub fn from_descriptors(
        descriptors: Vec<VariantDescriptor<P>>,
    ) -> Result<Self, RegistryBuildError> {
        let mut variants: BTreeMap<String, VariantDescriptor<P>> = BTreeMap::new();

        for descriptor in descriptors {
            let sample = descriptor.construct();
            let discriminator = wire_name(&sample.kind()).ok_or(
                RegistryBuildError::UnrepresentableDiscriminator {
                    family: P::FAMILY,
                    variant: descriptor.type_name,
                },
            )?;

            match variants.entry(discriminator) {
                Entry::Occupied(existing) => {
                    return Err(RegistryBuildError::DuplicateDiscriminator {
                        family: P::FAMILY,
                        discriminator: existing.key().clone(),
                        first: existing.get().type_name,
                        second: descriptor.type_name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }

        tracing::debug!(
            family = P::FAMILY,
            variants = variants.len(),
            "polymorphic registry built"
        );
        Ok(Self { variants })
    }

    /// Look up the variant named by a `type` value.
    pub fn resolve(&self, discriminator: &Value) -> Result<&VariantDescriptor<P>, DecodeError> {
        discriminator
            .as_str()
            .and_then(|name| self.variants.get(name))
            .ok_or_else(|| DecodeError::InvalidDiscriminator {
                family: P::FAMILY,
                value: discriminator.to_string(),
            })
    }

    pub fn discriminators(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
