//! Client-side state that outlives a single render but not a navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation state lives in `routing::navigation`; this module only holds
//! per-mount form state for the credential pages.

pub mod forms;
