//! `ability/<name>` projection and prompt.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::common::{first_english, Localized, NamedResource};

const NO_EFFECT: &str = "No effect description available in English.";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AbilityResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub pokemon: Vec<AbilityPokemon>,
}

/// Localized effect text, shared by abilities and items.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    #[serde(default)]
    pub language: NamedResource,
}

impl Localized for EffectEntry {
    fn language(&self) -> &NamedResource {
        &self.language
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AbilityPokemon {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub pokemon: NamedResource,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AbilityHolder {
    pub name: String,
    pub is_hidden: bool,
}

impl AbilityHolder {
    /// Name with a `(Hidden)` suffix for hidden abilities.
    pub fn label(&self) -> String {
        if self.is_hidden {
            format!("{} (Hidden)", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AbilityDetails {
    pub name: String,
    pub effect: String,
    pub pokemon: Vec<AbilityHolder>,
}

pub fn transform_ability(resource: &AbilityResource) -> AbilityDetails {
    AbilityDetails {
        name: resource.name.clone(),
        effect: first_english(&resource.effect_entries)
            .map(|entry| entry.effect.clone())
            .unwrap_or_else(|| NO_EFFECT.to_string()),
        pokemon: resource
            .pokemon
            .iter()
            .map(|holder| AbilityHolder {
                name: holder.pokemon.name.clone(),
                is_hidden: holder.is_hidden,
            })
            .collect(),
    }
}

pub fn format_ability_prompt(details: &AbilityDetails) -> String {
    let holders: Vec<String> = details.pokemon.iter().map(AbilityHolder::label).collect();

    let mut output = String::from("\n");
    let _ = writeln!(
        output,
        "You are a Pokémon expert. Describe the ability {} in detail. Include the following information:",
        details.name
    );
    let _ = writeln!(output, "Effect: {}", details.effect);
    let _ = writeln!(output, "Pokémon with this ability: {}", holders.join(", "));
    output
}
