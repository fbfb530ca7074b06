//! Domain entities

pub mod beyblade;

pub use beyblade::{Beyblade, BeybladeConfig, DEFAULT_IMAGE_LINK};
