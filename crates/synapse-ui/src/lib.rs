//! Synapse UI crate - Server-rendered pages for the landing, chat and history views.
//!
//! Pages are plain HTML strings. Static assets (the landing page, the shared
//! stylesheet and the chat script) are embedded at compile time via
//! `include_str!`, so the server needs no asset directory.
//!
//! # Modules
//!
//! - [`landing`]: Static marketing page served from `/`
//! - [`chat_page`]: Chat page and the transcript fragment it polls
//! - [`history_page`]: Searchable, filterable conversation history
//!
//! # Usage
//!
//! ```rust,ignore
//! use synapse_ui::landing::LANDING_HTML;
//!
//! async fn landing() -> axum::response::Html<&'static str> {
//!     axum::response::Html(LANDING_HTML)
//! }
//! ```

pub mod chat_page;
pub mod history_page;
pub mod html;
pub mod landing;

pub use chat_page::{render_chat_page, render_sidebar_list, render_transcript};
pub use history_page::render_history_page;
pub use landing::LANDING_HTML;
