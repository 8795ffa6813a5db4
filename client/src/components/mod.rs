//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `outlet` is the only stateful component; `layout` and `navbar` are static
//! chrome rendered around whatever the outlet resolves.

pub mod layout;
pub mod navbar;
pub mod outlet;
