//! Error types for the Conduit interface broker.
//!
//! This module defines the error hierarchy used throughout the broker.
//! Every error here is recoverable: it describes bad input data that the
//! caller can surface and act upon. Contract violations (an interface asked
//! to operate on a plug or slot declaring a different interface name) are
//! caller bugs, not input errors, and are reported by panicking instead of
//! through this hierarchy.

use thiserror::Error;

/// Root error type for the Conduit broker.
#[derive(Debug, Error)]
pub enum Error {
    #[error("interface error: {0}")]
    Interface(#[from] InterfaceError),

    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

/// Errors produced by interface implementations.
#[derive(Debug, Error)]
pub enum InterfaceError {
    /// A plug or slot failed an interface's validation rules.
    ///
    /// The message is surfaced verbatim to whatever initiated the
    /// connection, so implementations should make it descriptive.
    #[error("{0}")]
    Validation(String),

    /// Attribute data needed to build a security policy snippet was
    /// malformed. An interface that simply has no policy to contribute for
    /// a backend returns no snippet instead of this error.
    #[error("cannot build security snippet: {0}")]
    Snippet(String),
}

/// Errors related to package metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A package, interface, plug or slot name does not conform to the
    /// naming rule (lowercase letters and digits, starting with a letter,
    /// with single dashes as separators).
    #[error("{0:?} is not a valid name")]
    InvalidName(String),
}

/// Result type used throughout the Conduit broker.
pub type Result<T, E = Error> = std::result::Result<T, E>;
