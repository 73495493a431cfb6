//! Configurable interface for exercising the contract.
//!
//! This module provides [`TestInterface`], a stand-in implementation used to
//! verify the contract's default behaviors and override hooks without
//! depending on any real policy logic. Other crates use it wherever their
//! tests need an interface with predictable, configurable behavior.

use tracing::debug;

use conduit_core::error::{InterfaceError, Result};

use crate::identity::{Plug, Slot};
use crate::interface::{ensure_plug_identity, ensure_slot_identity, Interface};

/// A configurable interface with a fixed name and optional behavior hooks.
///
/// Each hook, when absent, falls back to the contract's documented default;
/// when present, its result is returned verbatim. Snippet generation has no
/// hook: it always follows the trait defaults, contributing nothing for any
/// backend.
#[derive(Debug, Clone, Default)]
pub struct TestInterface {
    /// The name of this interface.
    pub interface_name: &'static str,

    /// Custom plug validation, run after the identity check.
    pub sanitize_plug_callback: Option<fn(&mut Plug) -> Result<(), InterfaceError>>,

    /// Custom slot validation, run after the identity check.
    pub sanitize_slot_callback: Option<fn(&mut Slot) -> Result<(), InterfaceError>>,

    /// Custom auto-connect decision.
    pub auto_connect_callback: Option<fn() -> bool>,
}

impl Interface for TestInterface {
    fn name(&self) -> &str {
        self.interface_name
    }

    fn sanitize_plug(&self, plug: &mut Plug) -> Result<(), InterfaceError> {
        ensure_plug_identity(self.interface_name, plug);
        match self.sanitize_plug_callback {
            Some(callback) => {
                let result = callback(plug);
                if let Err(ref err) = result {
                    debug!("interface {:?} rejects plug {:?}: {}", self.interface_name, plug.name(), err);
                }
                result
            }
            None => Ok(()),
        }
    }

    fn sanitize_slot(&self, slot: &mut Slot) -> Result<(), InterfaceError> {
        ensure_slot_identity(self.interface_name, slot);
        match self.sanitize_slot_callback {
            Some(callback) => {
                let result = callback(slot);
                if let Err(ref err) = result {
                    debug!("interface {:?} rejects slot {:?}: {}", self.interface_name, slot.name(), err);
                }
                result
            }
            None => Ok(()),
        }
    }

    fn auto_connect(&self) -> bool {
        match self.auto_connect_callback {
            Some(callback) => callback(),
            None => false,
        }
    }
}
