//! Content-backend access for Folio.
//!
//! The headless backend is an external collaborator reached over HTTP. This
//! crate owns the seam: [`ContentSource`] abstracts "give me everything for
//! one locale", [`DeliveryClient`] implements it against the delivery API,
//! [`FixtureSource`] implements it in memory, and [`ContentSnapshot`]
//! performs the one-time startup fetch that the serving path reads from
//! forever after.

pub mod client;
pub mod snapshot;
pub mod source;
pub mod wire;

pub use client::{DeliveryClient, DeliveryConfig};
pub use snapshot::ContentSnapshot;
pub use source::{ContentError, ContentSource, FixtureSource};
