use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod docs_middleware;
pub mod keyboard_middleware;
pub mod live_update_middleware;
pub mod navigation_middleware;
pub mod repo_input_middleware;
pub mod text_input_middleware;
pub mod view_context_middleware;

pub use docs_middleware::DocsMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use live_update_middleware::LiveUpdateMiddleware;
pub use navigation_middleware::NavigationMiddleware;
pub use repo_input_middleware::RepoInputMiddleware;
pub use text_input_middleware::TextInputMiddleware;
pub use view_context_middleware::ViewContextMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking operations
/// (file I/O, spawning onto the runtime) without affecting the UI render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
