//! Confluence Cloud search client

pub mod client;
pub mod error;
pub mod types;

pub use client::ConfluenceClient;
pub use error::ConfluenceError;
pub use types::{SearchQuery, SearchResponse, SearchResult};

/// Maximum number of pages requested per search
pub const RESULT_LIMIT: u32 = 25;

/// Build the page-title search: `type=page and title~"<text>"`
///
/// The text is inserted as-is.
pub fn page_title_query(text: &str) -> SearchQuery {
    SearchQuery {
        cql: format!("type=page and title~\"{}\"", text),
        include_archived_spaces: false,
        limit: RESULT_LIMIT,
    }
}
