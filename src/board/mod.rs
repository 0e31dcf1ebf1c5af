//! Task board state management.
//!
//! This module implements the board state model, the drag-and-drop
//! reconciliation engine, and the edit/create form controller. All state is
//! transient and in memory; every mutation is a synchronous reaction to a
//! user gesture forwarded by a presentation layer. The module is layered:
//!
//! - Domain types and the reconciliation algorithm in [`domain`]
//! - Orchestration services and the form controller in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
