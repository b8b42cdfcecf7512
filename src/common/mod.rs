//! Common utilities and abstractions for the player components

/// Reactive property system for fine-grained state updates
pub mod property;

pub use property::Property;
