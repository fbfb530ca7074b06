//! Value objects - immutable descriptors attached to entities

pub mod capability;
pub mod property;

pub use capability::{Capability, CapabilityKind, EffectFn, RequirementFn};
pub use property::Property;
