use draft_analysis::{AsyncDraftSession, Settings};

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The draft session. Holds the cached card table; every request
    /// recomputes its view from it.
    pub session: AsyncDraftSession,

    pub settings: Settings,
}
