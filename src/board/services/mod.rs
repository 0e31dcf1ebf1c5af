//! Application services driving the board on behalf of a presentation layer.
//!
//! Services own the injected clock and expose the command surface: gesture
//! reconciliation and item commands on [`BoardService`], and the edit/create
//! dialog lifecycle on [`TaskForm`].

mod commands;
mod form;

pub use commands::BoardService;
pub use form::{FormCommit, FormError, FormMode, TaskForm};
