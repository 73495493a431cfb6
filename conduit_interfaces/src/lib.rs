//! # Conduit Interfaces
//!
//! `conduit_interfaces` defines the interface contract of the Conduit
//! broker: the abstraction by which two independently-authored packages
//! declare compatible connection points, are validated for consistency, and
//! contribute security policy to the packages hosting them.
//!
//! Key concepts:
//!
//! 1. **Plug**: a named connection point a package exposes, requesting the
//!    capability defined by an interface.
//!
//! 2. **Slot**: a named connection point a package exposes, providing the
//!    capability defined by an interface.
//!
//! 3. **Interface**: the named contract both sides must declare to be
//!    connectable; also the polymorphic type producing security policy
//!    snippets for a connection.
//!
//! 4. **Security Backend**: a target policy system (confinement profiles,
//!    syscall filters, bus policy) an interface may contribute a snippet to.
//!
//! The connection manager that decides which plugs connect to which slots is
//! an external collaborator; it drives the [`Interface`] trait uniformly
//! over every concrete interface.

pub mod backend;
pub mod identity;
pub mod interface;
pub mod testing;

// Re-export key types and traits for convenience
pub use backend::{SecurityBackend, Snippet};
pub use identity::{Plug, Slot};
pub use interface::{ensure_plug_identity, ensure_slot_identity, Interface};
pub use testing::TestInterface;
