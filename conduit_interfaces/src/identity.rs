//! Plug and slot identity.
//!
//! This module defines the broker-side view of the connection points a
//! package declares. Plugs and slots are constructed from package metadata
//! by an external loader and destroyed with the package; between those
//! points the only permitted mutation is attribute annotation during
//! sanitization.

use serde_json::Value;

use conduit_core::metadata::{PlugInfo, SlotInfo};

/// A named connection point requesting the capability defined by an
/// interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Plug {
    info: PlugInfo,
}

impl Plug {
    /// Create a plug from its metadata declaration.
    pub fn new(info: PlugInfo) -> Self {
        Self { info }
    }

    /// The plug name, unique within the owning package.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// The name of the interface the plug declares.
    pub fn interface(&self) -> &str {
        &self.info.interface
    }

    /// The name of the package that declares the plug.
    pub fn package_name(&self) -> &str {
        &self.info.package.name
    }

    /// Look up an interface-specific attribute.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.info.attrs.get(key)
    }

    /// Attach an interface-specific attribute.
    ///
    /// Interfaces may call this while sanitizing a plug to record derived
    /// or normalized attribute values.
    pub fn set_attr(&mut self, key: impl Into<String>, value: Value) {
        self.info.attrs.insert(key.into(), value);
    }

    /// The underlying metadata declaration.
    pub fn info(&self) -> &PlugInfo {
        &self.info
    }
}

impl From<PlugInfo> for Plug {
    fn from(info: PlugInfo) -> Self {
        Self::new(info)
    }
}

/// A named connection point providing the capability defined by an
/// interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    info: SlotInfo,
}

impl Slot {
    /// Create a slot from its metadata declaration.
    pub fn new(info: SlotInfo) -> Self {
        Self { info }
    }

    /// The slot name, unique within the owning package.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// The name of the interface the slot declares.
    pub fn interface(&self) -> &str {
        &self.info.interface
    }

    /// The name of the package that declares the slot.
    pub fn package_name(&self) -> &str {
        &self.info.package.name
    }

    /// Look up an interface-specific attribute.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.info.attrs.get(key)
    }

    /// Attach an interface-specific attribute.
    ///
    /// Interfaces may call this while sanitizing a slot to record derived
    /// or normalized attribute values.
    pub fn set_attr(&mut self, key: impl Into<String>, value: Value) {
        self.info.attrs.insert(key.into(), value);
    }

    /// The underlying metadata declaration.
    pub fn info(&self) -> &SlotInfo {
        &self.info
    }
}

impl From<SlotInfo> for Slot {
    fn from(info: SlotInfo) -> Self {
        Self::new(info)
    }
}
