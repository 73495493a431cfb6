//! Package metadata model.
//!
//! This module defines the passive data holders describing a package and the
//! plugs and slots it declares. These values are populated by an external
//! metadata loader when a package's metadata is read, and are immutable
//! afterwards except for attribute annotations an interface may attach while
//! sanitizing a plug or slot.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::MetadataError;

lazy_static! {
    /// Shared naming rule for packages, interfaces, plugs and slots:
    /// lowercase letters and digits, starting with a letter, with single
    /// dashes as separators.
    static ref VALID_NAME: Regex = Regex::new("^[a-z](?:-?[a-z0-9])*$").unwrap();
}

/// Validate a package, interface, plug or slot name.
///
/// # Arguments
///
/// * `name` - The name to validate.
///
/// # Returns
///
/// * `Ok(())` if the name conforms to the naming rule.
/// * `Err(MetadataError::InvalidName)` otherwise.
pub fn validate_name(name: &str) -> Result<(), MetadataError> {
    if !VALID_NAME.is_match(name) {
        debug!("rejecting invalid name {:?}", name);
        return Err(MetadataError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// A package known to the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// The package name.
    pub name: String,
}

/// A plug declaration found in package metadata.
///
/// A plug is a named connection point through which the owning package
/// requests the capability named by `interface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlugInfo {
    /// The package that declares the plug.
    pub package: PackageInfo,

    /// The plug name, unique within the owning package.
    pub name: String,

    /// The name of the interface the plug declares.
    pub interface: String,

    /// Interface-specific attributes.
    #[serde(default)]
    pub attrs: Map<String, Value>,
}

/// A slot declaration found in package metadata.
///
/// A slot is a named connection point through which the owning package
/// provides the capability named by `interface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The package that declares the slot.
    pub package: PackageInfo,

    /// The slot name, unique within the owning package.
    pub name: String,

    /// The name of the interface the slot declares.
    pub interface: String,

    /// Interface-specific attributes.
    #[serde(default)]
    pub attrs: Map<String, Value>,
}
