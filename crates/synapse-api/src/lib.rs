//! Synapse API crate - axum HTTP server, page and JSON route handlers.
//!
//! Serves the three server-rendered pages (landing, chat, history) and the
//! JSON endpoints behind them: canned replies, conversation filtering and
//! chat session control.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
