//! Command-line flags
//!
//! The connection flags fall back to environment variables so a workflow can
//! keep credentials in its configuration instead of the script line.

use clap::{ArgAction, CommandFactory, Parser};

use crate::error::AppError;

/// Command-line arguments accepted by the `confluence-alfred` binary
#[derive(Parser, Debug)]
#[command(
    name = "confluence-alfred",
    version,
    about = "Search Confluence pages and print Alfred script filter JSON"
)]
pub struct Args {
    #[arg(
        long,
        value_name = "TOKEN",
        env = "CONFLUENCE_TOKEN",
        hide_env_values = true,
        help = "API token (required)"
    )]
    pub token: Option<String>,
    #[arg(long, value_name = "URL", env = "CONFLUENCE_URL", help = "Base URL (required)")]
    pub url: Option<String>,
    #[arg(
        long,
        value_name = "USER",
        env = "CONFLUENCE_USERNAME",
        help = "Confluence username (required)"
    )]
    pub username: Option<String>,
    #[arg(long, value_name = "QUERY", help = "Search query to execute (required)")]
    pub query: Option<String>,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log more to stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

/// Validated inputs for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub token: String,
    pub base_url: String,
    pub username: String,
    pub query: String,
}

impl Args {
    /// Require all four inputs. Empty values count as missing.
    pub fn resolve(&self) -> Result<SearchInput, AppError> {
        let fields = [
            ("--token", &self.token),
            ("--url", &self.url),
            ("--username", &self.username),
            ("--query", &self.query),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().unwrap_or_default().is_empty())
            .map(|(flag, _)| *flag)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingInput(missing));
        }

        let take = |value: &Option<String>| value.clone().unwrap_or_default();
        Ok(SearchInput {
            token: take(&self.token),
            base_url: take(&self.url),
            username: take(&self.username),
            query: take(&self.query),
        })
    }
}

/// Help text shown when inputs are missing
pub fn usage() -> String {
    Args::command().render_help().to_string()
}
