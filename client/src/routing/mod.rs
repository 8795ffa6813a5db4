//! URL routing and fetch-before-render data loading.
//!
//! ARCHITECTURE
//! ============
//! `table` declares the route tree, `matcher` resolves a path to a route
//! chain, `loaders` fetch each route's data, and `navigation` sequences one
//! navigation at a time. None of these touch the DOM; the `RouterOutlet`
//! component is the only bridge into Leptos.

pub mod loaders;
pub mod matcher;
pub mod navigation;
pub mod table;
