//! # Conduit Core
//!
//! Core data types and errors for the Conduit interface broker.
//!
//! This crate defines the fundamental types shared by the broker and its
//! collaborators:
//!
//! - The package metadata model (packages, plug and slot declarations)
//! - The error hierarchy used throughout the broker
//! - Name validation for packages, interfaces, plugs and slots
//!
//! The `conduit_core` crate is deliberately minimal and focuses on defining
//! data and errors rather than behavior. The interface contract itself lives
//! in the `conduit_interfaces` crate.

pub mod error;
pub mod metadata;

// Re-export key items for convenience
pub use error::{Error, InterfaceError, MetadataError};
pub use metadata::{validate_name, PackageInfo, PlugInfo, SlotInfo};

/// A type alias for Result with our error types.
pub type Result<T, E = error::Error> = std::result::Result<T, E>;
