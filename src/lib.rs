//! TaskFlow: a single-user task board core.
//!
//! This crate provides the state model behind a three-stage task board:
//! items are created and edited through a form controller and moved between
//! stages by reconciling drag-and-drop gestures into new board arrangements.
//!
//! # Architecture
//!
//! The crate keeps domain logic free of infrastructure:
//!
//! - **Domain**: board, stage, and item types plus the pure reconciliation
//!   algorithm, with no presentation or I/O dependencies
//! - **Services**: the command surface a presentation layer drives, owning
//!   the board and an injected clock
//!
//! There is no persistence, no async runtime, and no ambient time: every
//! timestamp is read from a [`mockable::Clock`] passed in by the caller,
//! which keeps the whole crate deterministic under test.
//!
//! # Modules
//!
//! - [`board`]: board state model, drag reconciliation, and form lifecycle

pub mod board;
