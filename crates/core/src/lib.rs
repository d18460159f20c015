//! Domain types and pure view-model derivation for the Folio site backend.
//!
//! This crate has no internal dependencies (no I/O, no async) so the content
//! client, the API layer, and any future build tooling can all share it. The
//! request path is a pure function of (immutable locale content, message
//! catalog, parsed route query).

pub mod content;
pub mod header;
pub mod home;
pub mod messages;
pub mod reveal;
pub mod route;
