//! The task list: a pure state machine, the async actions that drive it
//! against a [`api::TaskGateway`], and the Dioxus view on top.

pub mod actions;
pub mod state;
mod view;

pub use actions::TaskListCell;
pub use state::{EditBuffer, TaskListState, Ticket};
pub use view::TaskList;
