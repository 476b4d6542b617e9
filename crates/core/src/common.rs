//! Building blocks shared by every PokeAPI resource.

use serde::{Deserialize, Serialize};

/// Language code used to pick localized entries.
pub const ENGLISH: &str = "en";

/// A `{ name, url }` reference to another resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An unnamed `{ url }` reference to another resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ApiResource {
    #[serde(default)]
    pub url: String,
}

/// `{ type: { name } }` slot used by pokemon and pokemon-form resources.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(rename = "type", default)]
    pub type_: NamedResource,
}

/// Entries carrying a `language` reference.
pub trait Localized {
    fn language(&self) -> &NamedResource;

    fn is_english(&self) -> bool {
        self.language().name == ENGLISH
    }
}

/// Returns the first entry written in English, if any.
pub fn first_english<T: Localized>(entries: &[T]) -> Option<&T> {
    entries.iter().find(|entry| entry.is_english())
}

/// Extracts the type names from a list of type slots, preserving order.
pub fn type_names(slots: &[TypeSlot]) -> Vec<String> {
    slots.iter().map(|slot| slot.type_.name.clone()).collect()
}

/// Returns the id segment of a resource URL.
///
/// PokeAPI URLs end with a trailing slash (`.../evolution-chain/67/`), so the
/// id is the second-to-last `/`-separated segment.
pub fn resource_id(url: &str) -> Option<&str> {
    let mut segments = url.rsplit('/');
    segments.next()?;
    segments.next().filter(|id| !id.is_empty())
}

/// Renders a boolean flag the way the prompts expect it.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
