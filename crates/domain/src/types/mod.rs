//! Vocabulary types - closed enumerations shared across the domain

pub mod bey_type;
pub mod spin_direction;

pub use bey_type::BeyType;
pub use spin_direction::SpinDirection;
