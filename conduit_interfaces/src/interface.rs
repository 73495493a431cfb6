//! The interface contract.
//!
//! This module defines the core `Interface` trait that is implemented by
//! all concrete interface types, together with the identity checks every
//! implementation shares.

use std::fmt::Debug;

use tracing::trace;

use conduit_core::error::{InterfaceError, Result};

use crate::backend::{SecurityBackend, Snippet};
use crate::identity::{Plug, Slot};

/// Abort unless `plug` declares the interface named `interface_name`.
///
/// An interface asked to operate on a plug of another interface is a wiring
/// bug in the caller, not bad input data, so this check panics instead of
/// returning an error the caller might ignore. Implementations that
/// override [`Interface::sanitize_plug`] must call this before any custom
/// validation.
pub fn ensure_plug_identity(interface_name: &str, plug: &Plug) {
    if plug.interface() != interface_name {
        panic!("plug is not of interface {:?}", interface_name);
    }
}

/// Abort unless `slot` declares the interface named `interface_name`.
///
/// Symmetric counterpart of [`ensure_plug_identity`], with the same
/// fail-fast contract for [`Interface::sanitize_slot`] overrides.
pub fn ensure_slot_identity(interface_name: &str, slot: &Slot) {
    if slot.interface() != interface_name {
        panic!("slot is not of interface {:?}", interface_name);
    }
}

/// Core interface trait.
///
/// An interface is a named contract between a plug and a slot. The
/// connection manager treats every concrete interface uniformly through
/// this trait: it sanitizes each side before connecting, and once the pair
/// is connected it collects one policy snippet per security backend for
/// each of the two packages involved.
///
/// Interfaces hold no mutable state; a single value may be shared freely
/// across threads, and calls for different plug/slot pairs never interfere.
/// Two interfaces with the same name must behave identically within one
/// process.
///
/// # Examples
///
/// ```
/// use conduit_core::error::InterfaceError;
/// use conduit_interfaces::{Interface, Plug, SecurityBackend, Slot, Snippet};
///
/// #[derive(Debug)]
/// struct NetworkInterface;
///
/// impl Interface for NetworkInterface {
///     fn name(&self) -> &str {
///         "network"
///     }
///
///     fn connected_plug_snippet(
///         &self,
///         _plug: &Plug,
///         _slot: &Slot,
///         backend: &SecurityBackend,
///     ) -> Result<Option<Snippet>, InterfaceError> {
///         match backend {
///             SecurityBackend::Seccomp => Ok(Some(Snippet::from("socket\nconnect\n"))),
///             _ => Ok(None),
///         }
///     }
/// }
/// ```
pub trait Interface: Debug + Send + Sync {
    /// Returns the stable, unique name of this interface.
    ///
    /// The name is the only identity used for matching plugs to slots.
    fn name(&self) -> &str;

    /// Validates a plug that declares this interface.
    ///
    /// The plug must declare this interface by name; a mismatch aborts the
    /// operation (see [`ensure_plug_identity`]). Beyond the identity check,
    /// implementations may apply arbitrary attribute validation and may
    /// annotate the plug with derived attributes. The default accepts any
    /// identity-matching plug.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the plug is acceptable.
    /// * `Err(InterfaceError)` describing why the plug was rejected.
    fn sanitize_plug(&self, plug: &mut Plug) -> Result<(), InterfaceError> {
        ensure_plug_identity(self.name(), plug);
        trace!("interface {:?} accepts plug {:?}", self.name(), plug.name());
        Ok(())
    }

    /// Validates a slot that declares this interface.
    ///
    /// Symmetric counterpart of [`Interface::sanitize_plug`], with the same
    /// identity-check contract.
    fn sanitize_slot(&self, slot: &mut Slot) -> Result<(), InterfaceError> {
        ensure_slot_identity(self.name(), slot);
        trace!("interface {:?} accepts slot {:?}", self.name(), slot.name());
        Ok(())
    }

    /// Returns the policy snippet the plug-owning package should receive
    /// for `backend` once the given pair is connected.
    ///
    /// `Ok(None)` means this interface contributes nothing for that
    /// backend; backends unknown to the implementation must be answered
    /// this way rather than with an error, since policy backends evolve
    /// independently of interfaces. The default contributes nothing for any
    /// backend.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(snippet))` with a freshly allocated snippet owned by the
    ///   caller.
    /// * `Ok(None)` if there is no contribution for this backend.
    /// * `Err(InterfaceError)` only if attribute data needed to build the
    ///   snippet is malformed.
    fn connected_plug_snippet(
        &self,
        _plug: &Plug,
        _slot: &Slot,
        _backend: &SecurityBackend,
    ) -> Result<Option<Snippet>, InterfaceError> {
        Ok(None)
    }

    /// Returns the policy snippet the slot-owning package should receive
    /// for `backend` once the given pair is connected.
    ///
    /// Symmetric counterpart of [`Interface::connected_plug_snippet`]; the
    /// two sides of a connection generally need different grants.
    fn connected_slot_snippet(
        &self,
        _plug: &Plug,
        _slot: &Slot,
        _backend: &SecurityBackend,
    ) -> Result<Option<Snippet>, InterfaceError> {
        Ok(None)
    }

    /// Whether the connection manager may connect matching plug/slot pairs
    /// of this interface without explicit user action.
    ///
    /// Defaults to `false`: automatic security-relevant connections are
    /// opt-in per interface.
    fn auto_connect(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_core::metadata::{PackageInfo, PlugInfo, SlotInfo};
    use serde_json::json;

    /// An interface relying entirely on the trait defaults.
    #[derive(Debug)]
    struct BareInterface;

    impl Interface for BareInterface {
        fn name(&self) -> &str {
            "bare"
        }
    }

    /// An interface with custom validation and snippet generation.
    #[derive(Debug)]
    struct ValueFileInterface;

    impl Interface for ValueFileInterface {
        fn name(&self) -> &str {
            "value-file"
        }

        fn sanitize_slot(&self, slot: &mut Slot) -> Result<(), InterfaceError> {
            ensure_slot_identity(self.name(), slot);
            let path = slot
                .attr("path")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    InterfaceError::Validation("value-file slots must have a path attribute".into())
                })?
                .to_string();
            slot.set_attr("resolved-path", json!(path));
            Ok(())
        }

        fn connected_plug_snippet(
            &self,
            _plug: &Plug,
            slot: &Slot,
            backend: &SecurityBackend,
        ) -> Result<Option<Snippet>, InterfaceError> {
            match backend {
                SecurityBackend::AppArmor => {
                    let path = slot
                        .attr("resolved-path")
                        .and_then(|v| v.as_str())
                        .ok_or_else(|| InterfaceError::Snippet("slot has no resolved path".into()))?;
                    Ok(Some(Snippet::from(format!("{} rw,", path).into_bytes())))
                }
                _ => Ok(None),
            }
        }
    }

    fn plug(interface: &str) -> Plug {
        Plug::new(PlugInfo {
            package: PackageInfo {
                name: "consumer".to_string(),
            },
            name: "plug".to_string(),
            interface: interface.to_string(),
            attrs: serde_json::Map::new(),
        })
    }

    fn slot(interface: &str) -> Slot {
        Slot::new(SlotInfo {
            package: PackageInfo {
                name: "provider".to_string(),
            },
            name: "slot".to_string(),
            interface: interface.to_string(),
            attrs: serde_json::Map::new(),
        })
    }

    #[test]
    fn test_default_sanitization_accepts_matching_sides() {
        let iface = BareInterface;
        assert!(iface.sanitize_plug(&mut plug("bare")).is_ok());
        assert!(iface.sanitize_slot(&mut slot("bare")).is_ok());
    }

    #[test]
    #[should_panic(expected = "plug is not of interface \"bare\"")]
    fn test_default_sanitize_plug_checks_identity() {
        let _ = BareInterface.sanitize_plug(&mut plug("other-interface"));
    }

    #[test]
    #[should_panic(expected = "slot is not of interface \"bare\"")]
    fn test_default_sanitize_slot_checks_identity() {
        let _ = BareInterface.sanitize_slot(&mut slot("other-interface"));
    }

    #[test]
    fn test_default_snippets_are_empty_for_all_backends() {
        let iface = BareInterface;
        let plug = plug("bare");
        let slot = slot("bare");
        for backend in [
            SecurityBackend::AppArmor,
            SecurityBackend::Seccomp,
            SecurityBackend::DBus,
            SecurityBackend::Udev,
            SecurityBackend::Custom("foo".to_string()),
        ] {
            assert!(iface
                .connected_plug_snippet(&plug, &slot, &backend)
                .unwrap()
                .is_none());
            assert!(iface
                .connected_slot_snippet(&plug, &slot, &backend)
                .unwrap()
                .is_none());
        }
    }

    #[test]
    fn test_default_auto_connect_is_off() {
        assert!(!BareInterface.auto_connect());
    }

    #[test]
    fn test_custom_validation_rejects_with_description() {
        let iface = ValueFileInterface;
        let mut slot = slot("value-file");
        let err = iface.sanitize_slot(&mut slot).unwrap_err();
        assert_eq!(err.to_string(), "value-file slots must have a path attribute");
    }

    #[test]
    fn test_custom_snippet_uses_sanitized_attributes() {
        let iface = ValueFileInterface;
        let plug = plug("value-file");
        let mut slot = slot("value-file");
        slot.set_attr("path", json!("/sys/class/gpio/gpio13/value"));
        iface.sanitize_slot(&mut slot).unwrap();

        let snippet = iface
            .connected_plug_snippet(&plug, &slot, &SecurityBackend::AppArmor)
            .unwrap()
            .unwrap();
        assert_eq!(snippet.as_bytes(), b"/sys/class/gpio/gpio13/value rw,");

        // Other backends get no contribution
        assert!(iface
            .connected_plug_snippet(&plug, &slot, &SecurityBackend::DBus)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_snippet_failure_is_distinct_from_no_contribution() {
        let iface = ValueFileInterface;
        let plug = plug("value-file");
        // Slot never sanitized, so the snippet cannot be built
        let slot = slot("value-file");
        let err = iface
            .connected_plug_snippet(&plug, &slot, &SecurityBackend::AppArmor)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build security snippet: slot has no resolved path"
        );
    }

    #[test]
    fn test_read_only_operations_are_idempotent() {
        let iface = BareInterface;
        assert_eq!(iface.name(), iface.name());

        let mut p = plug("bare");
        assert!(iface.sanitize_plug(&mut p).is_ok());
        let before = p.clone();
        assert!(iface.sanitize_plug(&mut p).is_ok());
        assert_eq!(p, before);
    }
}
