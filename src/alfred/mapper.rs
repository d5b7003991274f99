//! Turns Confluence search hits into script filter items

use std::collections::BTreeMap;

use super::types::{Cache, Icon, Item, ItemType, Output};
use crate::confluence::SearchResult;

/// Prefix between the site URL and a result's relative URL
pub const PAGE_PATH: &str = "/wiki";

/// Icon bundled with the workflow
pub const ICON_PATH: &str = "icon.png";

/// How long Alfred may reuse results for the same query
pub const CACHE_SECONDS: u32 = 3600;

/// Absolute link to a result's page
pub fn page_url(base_url: &str, result: &SearchResult) -> String {
    format!("{}{}{}", base_url, PAGE_PATH, result.url)
}

/// Map one hit to an item. Never fails and never marks an item invalid.
pub fn page_item(base_url: &str, result: &SearchResult) -> Item {
    let url = page_url(base_url, result);
    let title = result.content_title().to_string();

    let mut text = BTreeMap::new();
    text.insert("copy".to_string(), url.clone());
    // Consumers read this key as spelled.
    text.insert("lagetype".to_string(), title.clone());

    Item {
        uid: result.id.clone(),
        title: title.clone(),
        subtitle: result.space_key().to_string(),
        arg: vec![url.clone()],
        icon: Some(Icon::path(ICON_PATH)),
        valid: true,
        match_text: title.clone(),
        autocomplete: title,
        item_type: Some(ItemType::Default),
        text,
        quicklookurl: url,
        ..Default::default()
    }
}

/// Build the full document, one item per hit in the order given
pub fn script_filter(base_url: &str, results: &[SearchResult]) -> Output {
    Output {
        items: results.iter().map(|r| page_item(base_url, r)).collect(),
        cache: Some(Cache { seconds: CACHE_SECONDS, loosereload: true }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confluence::types::{Content, Space};

    const BASE: &str = "https://example.atlassian.net";

    fn hit(id: &str, url: &str, title: &str, space: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            url: url.to_string(),
            content: Some(Content {
                title: title.to_string(),
                space: Some(Space { key: space.to_string(), ..Default::default() }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_item_fields() {
        let item = page_item(BASE, &hit("123", "/display/ABC/Page+Title", "Page Title", "ABC"));
        let url = "https://example.atlassian.net/wiki/display/ABC/Page+Title";

        assert_eq!(item.uid, "123");
        assert_eq!(item.title, "Page Title");
        assert_eq!(item.subtitle, "ABC");
        assert_eq!(item.arg, vec![url.to_string()]);
        assert_eq!(item.quicklookurl, url);
        assert!(item.valid);
        assert_eq!(item.match_text, "Page Title");
        assert_eq!(item.autocomplete, "Page Title");
        assert_eq!(item.item_type, Some(ItemType::Default));
        assert_eq!(item.icon, Some(Icon::path("icon.png")));
        assert_eq!(item.text.get("copy").map(String::as_str), Some(url));
        assert_eq!(item.text.get("lagetype").map(String::as_str), Some("Page Title"));
        assert!(item.mods.is_empty());
        assert!(item.action.is_none());
    }

    #[test]
    fn test_empty_fields_still_valid() {
        let item = page_item(BASE, &SearchResult { url: "/x".to_string(), ..Default::default() });
        assert!(item.valid);
        assert_eq!(item.title, "");
        assert_eq!(item.subtitle, "");
        assert_eq!(item.quicklookurl, "https://example.atlassian.net/wiki/x");
    }

    #[test]
    fn test_script_filter_preserves_order() {
        let results = vec![
            hit("3", "/c", "Gamma", "G"),
            hit("1", "/a", "Alpha", "A"),
            hit("2", "/b", "Beta", "B"),
        ];
        let output = script_filter(BASE, &results);

        let uids: Vec<&str> = output.items.iter().map(|i| i.uid.as_str()).collect();
        assert_eq!(uids, vec!["3", "1", "2"]);
        assert_eq!(output.cache, Some(Cache { seconds: 3600, loosereload: true }));
    }

    #[test]
    fn test_script_filter_no_results() {
        let output = script_filter(BASE, &[]);
        assert!(output.items.is_empty());
        assert_eq!(output.cache, Some(Cache { seconds: 3600, loosereload: true }));
        assert!(output.variables.is_empty());
        assert_eq!(output.rerun, None);
        assert!(!output.skipknowledge);
    }
}
