//! Command bar input parsing and result filtering.
//!
//! `!url <address>` navigates, `!ws <terms>` searches the web, and anything
//! else filters the other tab groups and the hotkey reference.

use serde::Serialize;
use tessel_common::GroupId;
use tessel_config::{describe_hotkey, Hotkeys};
use tessel_tiling::TabGroupStore;

const URL_MARKER: &str = "!url";
const SEARCH_MARKER: &str = "!ws";

/// What the typed command bar text asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandBarInput {
    Url(String),
    WebSearch(String),
    Filter(String),
}

/// Classify raw command bar text. Markers may appear anywhere in the input
/// and are stripped from the remaining term.
pub fn parse(input: &str) -> CommandBarInput {
    let has_url = input.contains(URL_MARKER);
    let has_search = input.contains(SEARCH_MARKER);
    if !has_url && !has_search {
        return CommandBarInput::Filter(input.trim().to_string());
    }
    let term = input
        .replace(URL_MARKER, "")
        .replace(SEARCH_MARKER, "")
        .trim()
        .to_string();
    if has_url {
        CommandBarInput::Url(term)
    } else {
        CommandBarInput::WebSearch(term)
    }
}

/// DuckDuckGo results page for `term`.
pub fn web_search_url(term: &str) -> String {
    format!(
        "https://duckduckgo.com/?t=h_&q={}&ia=web",
        urlencoding::encode(term)
    )
}

/// A tab group other than the active one, offered for switching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherTab {
    pub group: GroupId,
    pub title: String,
    pub url: String,
    /// More than one pane in the group.
    pub is_group: bool,
}

/// One row of the hotkey reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotkeyItem {
    pub category: String,
    pub name: String,
    pub description: String,
    pub binding: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandBarResults {
    pub other_tabs: Vec<OtherTab>,
    pub hotkeys: Vec<HotkeyItem>,
}

fn matches(term: &str, fields: &[&str]) -> bool {
    term.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(term))
}

/// Filter other groups (by their active tab's title and url) and the
/// hotkey reference (by category, name, description, and binding).
pub fn filter(store: &TabGroupStore, hotkeys: &Hotkeys, term: &str) -> CommandBarResults {
    let term = term.trim().to_lowercase();
    let active = store.active_group_id();

    let other_tabs = store
        .groups()
        .filter(|group| Some(group.id()) != active)
        .filter_map(|group| {
            let tab = group.active_tab()?;
            if !matches(&term, &[tab.display_title(), tab.url.as_str()]) {
                return None;
            }
            Some(OtherTab {
                group: group.id().clone(),
                title: tab.display_title().to_string(),
                url: tab.url.clone(),
                is_group: group.len() > 1,
            })
        })
        .collect();

    let hotkeys = hotkeys
        .entries()
        .into_iter()
        .filter_map(|entry| {
            let described = describe_hotkey(entry.category, entry.action)?;
            let fields = [
                entry.category,
                described.name,
                described.description,
                entry.binding,
            ];
            if !matches(&term, &fields) {
                return None;
            }
            Some(HotkeyItem {
                category: entry.category.to_string(),
                name: described.name.to_string(),
                description: described.description.to_string(),
                binding: entry.binding.to_string(),
            })
        })
        .collect();

    CommandBarResults {
        other_tabs,
        hotkeys,
    }
}
