//! View models
//!
//! Presentation data computed from [`AppState`](crate::state::AppState),
//! kept apart from the widgets so it can be tested without a terminal.

pub mod commit_list_view_model;
pub mod status_bar;

pub use commit_list_view_model::CommitListViewModel;
pub use status_bar::StatusBarViewModel;
