//! Top-level module for the boundary-representation topology network.
//!
//! This module provides the core types for building and querying the entity
//! hierarchy:
//! - [`point::EntityId`] strong handles and [`kind::EntityKind`] rank tags
//! - The [`network::Network`] arena with type-validated reciprocal linking
//! - Closure computation with stamp-keyed cache invalidation
//! - Edge endpoint bookkeeping and the diagnostic dump
//!
//! Most users will interact with [`network::Network`] directly; the other
//! modules hold the supporting vocabulary types.

pub mod cache;
pub mod edge;
pub mod kind;
pub mod network;
pub mod point;
pub mod validation;

mod closure;
mod describe;
mod entity;

pub use kind::EntityKind;
pub use network::Network;
pub use point::EntityId;

#[cfg(test)]
mod tests;
