//! Reducers
//!
//! Pure functions from (state, action) to new state, run on the UI thread
//! only. The app reducer handles the view stack and fans out to one reducer
//! per state slice.

pub mod alert_reducer;
pub mod app_reducer;
pub mod commit_list_reducer;
pub mod docs_reducer;
pub mod live_update_reducer;
pub mod repo_input_reducer;
pub mod status_bar_reducer;

pub use app_reducer::reduce;
