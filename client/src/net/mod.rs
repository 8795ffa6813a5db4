//! Networking modules for the remote threads service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the configured client every loader and form uses, `transport` is
//! the swappable HTTP seam beneath it, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
