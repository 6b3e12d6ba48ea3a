//! # Nimbus Core
//!
//! Core types, traits, and errors for the Nimbus weather relay service.
//! This crate provides the fundamental abstractions that connectors and
//! presentation layers implement; it performs no I/O of its own.

pub mod errors;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use errors::{CoreError, PresentationError, ProviderError};
pub use traits::{PresentationAdapter, WeatherProvider};
pub use types::{WeatherObservation, WeatherQuery};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
