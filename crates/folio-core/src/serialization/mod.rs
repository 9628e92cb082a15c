pub mod facade;
pub mod naming;
pub mod polymorphic;
pub mod registry;

pub use facade::PayloadSerializer;
pub use naming::wire_name;
pub use polymorphic::DISCRIMINATOR;
pub use registry::{Polymorphic, TypeRegistry, VariantDescriptor};
