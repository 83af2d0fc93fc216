//! Status reports built from to-do comments.
//!
//! Team members post comments such as:
//!
//! ```text
//! Update:
//! Status: yellow<br><br>Blocker: waiting on the client
//! ```
//!
//! [`extract`] turns one comment into `Key: Value` statements and decides what
//! each statement does to the report, [`aggregate`] folds a to-do's whole
//! comment thread into a [`Report`], and [`render`] formats it for the log.

pub mod aggregate;
pub mod extract;
pub mod render;

pub use aggregate::{aggregate_todo, Report, ReportState, TodoReport};
pub use extract::{classify, extract_updates, UpdateAction, UpdateStatement};
pub use render::render_todo;
