//! Event types
//!
//! Events represent facts that have occurred and are broadcast to the
//! middleware chain. They are not forwarded to reducers.
//!
//! Events use past tense names:
//! - `Started` (not `Start`)
//! - `DocsGenerated` (not `GenerateDocs`)

/// Events that re-enter the middleware chain
#[derive(Debug, Clone)]
pub enum Event {
    /// The UI loop is running and the first frame has been drawn
    Started,

    /// A generate run succeeded for this repository
    DocsGenerated { repo_url: String, max_commits: u32 },
}
