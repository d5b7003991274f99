//! Confluence page search for Alfred script filters
//!
//! One invocation runs one CQL title search against a Confluence Cloud site
//! and turns the hits into Alfred's script filter JSON.

pub mod alfred;
pub mod cli;
pub mod confluence;
pub mod error;

use alfred::Output;
use cli::SearchInput;
use confluence::ConfluenceClient;
use error::AppError;

/// Search for pages whose title contains the query and map them to items
pub async fn search_pages(input: &SearchInput) -> Result<Output, AppError> {
    tracing::info!(url = %input.base_url, username = %input.username, "Connecting to Confluence");
    let client = ConfluenceClient::new(&input.base_url, &input.username, &input.token)
        .map_err(AppError::Connect)?;

    let query = confluence::page_title_query(&input.query);
    let response = client.search(&query).await.map_err(AppError::Search)?;
    tracing::info!(results = response.results.len(), "Mapping search results");

    Ok(alfred::script_filter(&input.base_url, &response.results))
}
