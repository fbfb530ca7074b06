extern crate self as beybldr_domain;

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod types;
pub mod value_objects;

// Re-export entities
pub use entities::{Beyblade, BeybladeConfig, DEFAULT_IMAGE_LINK};

pub use error::DomainError;
pub use events::{BeybladeEvent, EventSink};

// Re-export ID types
pub use ids::BeybladeId;

// Re-export vocabulary types
pub use types::{BeyType, SpinDirection};

// Re-export value objects
pub use value_objects::{Capability, CapabilityKind, EffectFn, Property, RequirementFn};
