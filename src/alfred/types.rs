//! Alfred script filter JSON format
//!
//! See https://www.alfredapp.com/help/workflows/inputs/script-filter/json/.
//! Optional fields are left out of the output when unset.

use std::collections::BTreeMap;

use serde::Serialize;

/// Top-level script filter document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Output {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerun: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,
    #[serde(skip_serializing_if = "is_false")]
    pub skipknowledge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cache {
    pub seconds: u32,
    pub loosereload: bool,
}

/// A single selectable row in Alfred's result list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "is_false")]
    pub valid: bool,
    #[serde(rename = "match", skip_serializing_if = "String::is_empty")]
    pub match_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub autocomplete: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mods: BTreeMap<String, Mod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub text: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quicklookurl: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Default,
    File,
    #[serde(rename = "file:skipcheck")]
    FileSkipCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<IconType>,
    pub path: String,
}

impl Icon {
    pub fn path(path: impl Into<String>) -> Self {
        Self { icon_type: None, path: path.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    FileIcon,
    FileType,
}

/// Modifier key override (cmd, alt, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mod {
    pub valid: bool,
    pub arg: String,
    pub subtitle: String,
}

/// Universal action payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auto: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}
