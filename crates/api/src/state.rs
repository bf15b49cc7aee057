/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is constructed once in `main` (or per test) and cloned into
/// every request; there is no process-global handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: orderdesk_db::DbPool,
}
