//! `pokemon-form/<name>` resources.

use serde::{Deserialize, Serialize};

use crate::common::{type_names, TypeSlot};

const NO_SPRITE: &str = "No sprite available";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PokemonFormResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_battle_only: bool,
    #[serde(default)]
    pub is_mega: bool,
    #[serde(default)]
    pub sprites: FormSpritesResource,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FormSpritesResource {
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_male: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
    pub front_shiny_male: Option<String>,
}

/// Sprite URLs of an alternate form; each missing one is "No sprite available".
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FormSprites {
    pub front_default: String,
    pub front_female: String,
    pub front_male: String,
    pub front_shiny: String,
    pub front_shiny_female: String,
    pub front_shiny_male: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AlternateForm {
    pub name: String,
    pub is_default: bool,
    pub is_battle_only: bool,
    pub is_mega: bool,
    pub sprites: FormSprites,
    pub types: Vec<String>,
}

fn or_placeholder(url: &Option<String>) -> String {
    url.clone().unwrap_or_else(|| NO_SPRITE.to_string())
}

pub fn transform_form(resource: &PokemonFormResource) -> AlternateForm {
    let sprites = &resource.sprites;

    AlternateForm {
        name: resource.name.clone(),
        is_default: resource.is_default,
        is_battle_only: resource.is_battle_only,
        is_mega: resource.is_mega,
        sprites: FormSprites {
            front_default: or_placeholder(&sprites.front_default),
            front_female: or_placeholder(&sprites.front_female),
            front_male: or_placeholder(&sprites.front_male),
            front_shiny: or_placeholder(&sprites.front_shiny),
            front_shiny_female: or_placeholder(&sprites.front_shiny_female),
            front_shiny_male: or_placeholder(&sprites.front_shiny_male),
        },
        types: type_names(&resource.types),
    }
}
