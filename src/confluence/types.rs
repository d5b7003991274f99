//! Wire types for the Confluence search API

use serde::{Deserialize, Deserializer};

/// Parameters for a single `/search` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub cql: String,
    pub include_archived_spaces: bool,
    pub limit: u32,
}

impl SearchQuery {
    /// Query parameters in the order they are sent
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cql", self.cql.clone()),
            ("includeArchivedSpaces", self.include_archived_spaces.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Body of a `/search` response
///
/// Keys may be missing or `null`; either decodes to the field's empty value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub size: Option<u32>,
    pub total_size: Option<u32>,
    pub cql_query: Option<String>,
    pub search_duration: Option<u64>,
}

/// One hit from the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub content: Option<Content>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    /// Path relative to `<base>/wiki`, e.g. `/display/ABC/Page+Title`
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub entity_type: Option<String>,
    pub last_modified: Option<String>,
    pub friendly_last_modified: Option<String>,
}

impl SearchResult {
    /// Title of the underlying content, empty when the hit carries no content
    pub fn content_title(&self) -> &str {
        self.content.as_ref().map(|c| c.title.as_str()).unwrap_or_default()
    }

    /// Key of the space holding the content
    pub fn space_key(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.space.as_ref())
            .map(|s| s.key.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub space: Option<Space>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Space {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    pub name: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
