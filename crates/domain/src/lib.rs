//! Domain layer for Tenki
//!
//! Contains the area taxonomy, forecast snapshot entities, value objects,
//! and domain errors. This layer has no I/O dependencies and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod fallback;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
