//! Set command and query handlers.

mod apply_action;
mod create_set;
mod finish_set;
mod get_set;

pub use apply_action::{ApplyActionCommand, ApplyActionHandler, ApplyActionResult};
pub use create_set::{CreateSetCommand, CreateSetHandler, CreateSetResult};
pub use finish_set::{FinishSetCommand, FinishSetHandler, FinishSetResult};
pub use get_set::{GetSetHandler, GetSetQuery};
