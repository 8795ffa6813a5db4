//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages receive loader data as props and never fetch on render. Form pages
//! delegate validation and submission to `state::forms`.

pub mod config_error;
pub mod error;
pub mod home;
pub mod login;
pub mod not_found;
pub mod post;
pub mod register;
