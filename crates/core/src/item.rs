//! `item/<name>` projection and prompt.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::ability::EffectEntry;
use crate::common::{first_english, ApiResource, Localized, NamedResource};
use crate::params::humanize;

const NO_EFFECT: &str = "No effect description available in English.";
const NO_SHORT_EFFECT: &str = "No short effect available in English.";
const NO_FLAVOR_TEXT: &str = "No flavor text available in English.";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemResource {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub cost: Option<u32>,
    pub fling_power: Option<u32>,
    pub fling_effect: Option<NamedResource>,
    #[serde(default)]
    pub attributes: Vec<NamedResource>,
    pub category: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<ItemFlavorText>,
    #[serde(default)]
    pub game_indices: Vec<GenerationGameIndex>,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    pub sprites: Option<ItemSprites>,
    #[serde(default)]
    pub held_by_pokemon: Vec<ItemHolderResource>,
    pub baby_trigger_for: Option<ApiResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemFlavorText {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: NamedResource,
}

impl Localized for ItemFlavorText {
    fn language(&self) -> &NamedResource {
        &self.language
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GenerationGameIndex {
    #[serde(default)]
    pub game_index: u32,
    pub generation: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LocalizedName {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: NamedResource,
}

impl Localized for LocalizedName {
    fn language(&self) -> &NamedResource {
        &self.language
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemSprites {
    pub default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemHolderResource {
    pub pokemon: Option<NamedResource>,
    #[serde(default)]
    pub version_details: Vec<ItemHolderVersionResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemHolderVersionResource {
    pub rarity: Option<u32>,
    pub version: Option<NamedResource>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HeldByVersion {
    pub rarity: Option<u32>,
    pub version: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HeldBy {
    pub pokemon: Option<String>,
    /// Only entries that name a version are kept.
    pub version_details: Vec<HeldByVersion>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub id: u32,
    pub name: String,
    pub cost: Option<u32>,
    pub fling_power: Option<u32>,
    pub fling_effect: Option<String>,
    pub attributes: Vec<String>,
    pub category: Option<String>,
    pub effect: String,
    pub short_effect: String,
    pub flavor_text: String,
    pub game_indices: Vec<u32>,
    pub generations: Vec<String>,
    pub names: Vec<String>,
    pub sprite: Option<String>,
    pub held_by_pokemon: Vec<HeldBy>,
    pub baby_trigger_for: Option<String>,
}

fn held_by(holder: &ItemHolderResource) -> HeldBy {
    HeldBy {
        pokemon: holder.pokemon.as_ref().map(|p| p.name.clone()),
        version_details: holder
            .version_details
            .iter()
            .filter_map(|detail| {
                detail.version.as_ref().map(|version| HeldByVersion {
                    rarity: detail.rarity,
                    version: version.name.clone(),
                })
            })
            .collect(),
    }
}

pub fn transform_item(resource: &ItemResource) -> ItemDetails {
    let effect_entry = first_english(&resource.effect_entries);

    ItemDetails {
        id: resource.id,
        name: resource.name.clone(),
        cost: resource.cost,
        fling_power: resource.fling_power,
        fling_effect: resource.fling_effect.as_ref().map(|e| e.name.clone()),
        attributes: resource
            .attributes
            .iter()
            .map(|attribute| attribute.name.clone())
            .collect(),
        category: resource.category.as_ref().map(|c| c.name.clone()),
        effect: effect_entry
            .map(|entry| entry.effect.clone())
            .unwrap_or_else(|| NO_EFFECT.to_string()),
        short_effect: effect_entry
            .map(|entry| entry.short_effect.clone())
            .unwrap_or_else(|| NO_SHORT_EFFECT.to_string()),
        flavor_text: first_english(&resource.flavor_text_entries)
            .map(|entry| entry.text.clone())
            .unwrap_or_else(|| NO_FLAVOR_TEXT.to_string()),
        game_indices: resource
            .game_indices
            .iter()
            .map(|index| index.game_index)
            .collect(),
        generations: resource
            .game_indices
            .iter()
            .filter_map(|index| index.generation.as_ref().map(|g| g.name.clone()))
            .collect(),
        names: resource
            .names
            .iter()
            .filter(|name| name.is_english())
            .map(|name| name.name.clone())
            .collect(),
        sprite: resource
            .sprites
            .as_ref()
            .and_then(|sprites| sprites.default.clone()),
        held_by_pokemon: resource.held_by_pokemon.iter().map(held_by).collect(),
        baby_trigger_for: resource
            .baby_trigger_for
            .as_ref()
            .map(|trigger| trigger.url.clone()),
    }
}

/// Renders a holder with the rarity and version of its first version entry.
pub fn format_held_by(holder: &HeldBy) -> String {
    let first = holder.version_details.first();
    format!(
        "{} (Rarity: {}, Version: {})",
        holder.pokemon.as_deref().unwrap_or("Unknown"),
        first
            .and_then(|detail| detail.rarity)
            .map(|rarity| rarity.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        first.map(|detail| detail.version.as_str()).unwrap_or("N/A"),
    )
}

pub fn format_item_prompt(details: &ItemDetails) -> String {
    let mut output = String::from("\n");

    let _ = writeln!(
        output,
        "You are a Pokémon item expert. Describe the item {} in detail. ALWAYS include the following information:",
        details.name
    );
    let _ = writeln!(output, "Name: {}", humanize(&details.name));
    let _ = writeln!(
        output,
        "Sprite: ![{} Sprite]({})",
        details.name,
        details.sprite.as_deref().unwrap_or("No sprite available")
    );
    let _ = writeln!(
        output,
        "Effect: {} *Note: The effect describes what the item does when used in battles or other contexts.*",
        details.effect
    );
    let _ = writeln!(
        output,
        "Short Effect: {} *Note: The short effect is a brief summary of the item's effect.*",
        details.short_effect
    );
    let _ = writeln!(
        output,
        "Flavor Text: {} *Note: The flavor text provides a description of the item as it appears in the game.*",
        details.flavor_text
    );
    let _ = writeln!(
        output,
        "Cost: {} *Note: The cost is the price of the item in Poké Dollars.*",
        details
            .cost
            .map(|cost| cost.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    let attributes = if details.attributes.is_empty() {
        "None".to_string()
    } else {
        details.attributes.join(", ")
    };
    let _ = writeln!(
        output,
        "Attributes: {attributes} *Note: Attributes provide additional information about the item, such as whether it can be used in battles or is a key item.*"
    );

    output.push('\n');
    let _ = writeln!(
        output,
        "*Note: The following information is optional and should only be included if specifically requested. Otherwise, do not include this information.*"
    );
    let held_by = if details.held_by_pokemon.is_empty() {
        "No Pokémon hold this item.".to_string()
    } else {
        details
            .held_by_pokemon
            .iter()
            .map(format_held_by)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(output, "Held By Pokémon: {held_by}");
    let _ = writeln!(
        output,
        "Baby Trigger For: {} *Note: This indicates if the item is used to trigger the baby form of a Pokémon.*",
        details.baby_trigger_for.as_deref().unwrap_or("N/A")
    );

    output
}
