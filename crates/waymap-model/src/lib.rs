#![forbid(unsafe_code)]

//! Static content-tree model for roadmap diagrams.
//!
//! This crate defines the hierarchical data that the layout and rendering
//! crates consume:
//!
//! - [`Persona`] - a complete learning path (the top-level static data unit)
//! - [`Section`] - a named grouping of main topics
//! - [`MainTopic`] - a center-column node with side-column children
//! - [`DetailNode`] - a leaf node rendered in the left or right column
//! - [`Resource`] - a categorized external link
//!
//! The tree is constructed once (typically deserialized from JSON) and never
//! mutated afterwards. Every `id` is unique across the whole tree and doubles
//! as the lookup key for selection and deep linking; [`Persona::validate`]
//! checks that invariant up front so downstream code never has to.
//!
//! [`SelectionState`] is the deep-link codec: it round-trips the ephemeral
//! persona/topic selection through a `key=value&key=value` fragment string.

pub mod state;
pub mod tree;

pub use state::SelectionState;
pub use tree::{
    DetailNode, MainTopic, ModelError, NodeIndex, NodeRef, Persona, Resource, ResourceBuckets,
    ResourceKind, Section, Side,
};
