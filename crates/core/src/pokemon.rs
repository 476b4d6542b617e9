//! `pokemon/<name>` and `pokemon-species/<name>` projections and the
//! Pokémon details prompt.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::common::{resource_id, type_names, yes_no, Localized, NamedResource, TypeSlot};
use crate::error::Error;
use crate::evolution::{EvolutionChain, EvolutionStep};
use crate::form::AlternateForm;
use crate::moves::MoveSlot;

const NO_SPRITE: &str = "No sprite available";
const NO_SHINY_SPRITE: &str = "No shiny sprite available";

/// `pokemon/<name>` resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PokemonResource {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: PokemonSpritesResource,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PokemonSpritesResource {
    pub front_default: Option<String>,
    pub front_male: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_male: Option<String>,
    pub front_shiny_female: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StatSlot {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AbilitySlot {
    #[serde(default)]
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// `pokemon-species/<name>` resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PokemonSpeciesResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    pub evolution_chain: Option<crate::common::ApiResource>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FlavorTextEntry {
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub language: NamedResource,
}

impl Localized for FlavorTextEntry {
    fn language(&self) -> &NamedResource {
        &self.language
    }
}

/// Front sprite URLs with their fallbacks already applied.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SpriteSet {
    pub default: String,
    pub male: String,
    pub female: String,
    pub shiny: String,
    pub shiny_male: String,
    pub shiny_female: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// Flat projection of a pokemon and its species record.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PokemonDetails {
    pub name: String,
    pub id: u32,
    pub sprites: SpriteSet,
    pub height: String,
    pub weight: String,
    pub stats: Vec<BaseStat>,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_baby: bool,
    pub flavor_texts: Vec<String>,
    pub egg_groups: Vec<String>,
    pub forms: Vec<String>,
}

impl PokemonDetails {
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|stat| stat.value).sum()
    }
}

/// Everything the Pokémon details prompt is rendered from.
#[derive(Debug, Serialize, Clone)]
pub struct PokemonReport {
    pub details: PokemonDetails,
    pub evolution: EvolutionChain,
    pub alternate_forms: Vec<AlternateForm>,
}

/// Formats a height in decimetres as metres, e.g. `7` -> `"0.7 meters"`.
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} meters", f64::from(decimetres) / 10.0)
}

/// Formats a weight in hectograms as kilograms, e.g. `690` -> `"69.0 kg"`.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

fn sprite_set(sprites: &PokemonSpritesResource) -> SpriteSet {
    let default = sprites
        .front_default
        .clone()
        .unwrap_or_else(|| NO_SPRITE.to_string());
    let shiny = sprites
        .front_shiny
        .clone()
        .unwrap_or_else(|| NO_SHINY_SPRITE.to_string());

    SpriteSet {
        male: sprites.front_male.clone().unwrap_or_else(|| default.clone()),
        female: sprites
            .front_female
            .clone()
            .unwrap_or_else(|| default.clone()),
        shiny_male: sprites
            .front_shiny_male
            .clone()
            .unwrap_or_else(|| shiny.clone()),
        shiny_female: sprites
            .front_shiny_female
            .clone()
            .unwrap_or_else(|| shiny.clone()),
        default,
        shiny,
    }
}

/// English flavor texts, de-duplicated in order of first appearance.
fn english_flavor_texts(entries: &[FlavorTextEntry]) -> Vec<String> {
    let mut texts: Vec<String> = Vec::new();
    for entry in entries.iter().filter(|entry| entry.is_english()) {
        if !texts.contains(&entry.flavor_text) {
            texts.push(entry.flavor_text.clone());
        }
    }
    texts
}

fn names(resources: &[NamedResource]) -> Vec<String> {
    resources.iter().map(|r| r.name.clone()).collect()
}

/// Names of the forms to look up for a species.
///
/// Prefers the forms listed by the species record and falls back to the
/// forms listed by the pokemon record when the species lists none.
pub fn form_names(pokemon: &PokemonResource, species: &PokemonSpeciesResource) -> Vec<String> {
    if species.forms.is_empty() {
        names(&pokemon.forms)
    } else {
        names(&species.forms)
    }
}

/// Projects the pokemon and species resources into [`PokemonDetails`].
pub fn transform_pokemon(
    pokemon: &PokemonResource,
    species: &PokemonSpeciesResource,
) -> PokemonDetails {
    PokemonDetails {
        name: pokemon.name.clone(),
        id: pokemon.id,
        sprites: sprite_set(&pokemon.sprites),
        height: format_height(pokemon.height),
        weight: format_weight(pokemon.weight),
        stats: pokemon
            .stats
            .iter()
            .map(|slot| BaseStat {
                name: slot.stat.name.clone(),
                value: slot.base_stat,
            })
            .collect(),
        types: type_names(&pokemon.types),
        abilities: pokemon
            .abilities
            .iter()
            .map(|slot| slot.ability.name.clone())
            .collect(),
        is_legendary: species.is_legendary,
        is_mythical: species.is_mythical,
        is_baby: species.is_baby,
        flavor_texts: english_flavor_texts(&species.flavor_text_entries),
        egg_groups: names(&species.egg_groups),
        forms: form_names(pokemon, species),
    }
}

/// Id of the evolution chain referenced by a species record.
pub fn evolution_chain_id(species: &PokemonSpeciesResource) -> Result<String, Error> {
    let url = species
        .evolution_chain
        .as_ref()
        .map(|chain| chain.url.as_str())
        .unwrap_or_default();

    resource_id(url)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingEvolutionChain {
            species: species.name.clone(),
            url: url.to_string(),
        })
}

fn or_na<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Renders one evolution step with its conditions.
pub fn format_evolution_step(step: &EvolutionStep) -> String {
    format!(
        "- {} (Trigger: {}, Min Level: {}, Item: {}, Time of Day: {}, Min Happiness: {}, Held Item: {})",
        step.species_name,
        step.trigger.as_deref().unwrap_or("Unknown"),
        or_na(&step.min_level),
        or_na(&step.item),
        or_na(&step.time_of_day),
        or_na(&step.min_happiness),
        or_na(&step.held_item),
    )
}

fn format_alternate_form(form: &AlternateForm) -> String {
    format!(
        "- {} (Default: {}, Battle Only: {}, Mega: {}, Type: {}) ![{} Sprite]({})",
        form.name,
        yes_no(form.is_default),
        yes_no(form.is_battle_only),
        yes_no(form.is_mega),
        form.types.join(", "),
        form.name,
        form.sprites.front_default,
    )
}

/// Renders the Pokémon details prompt.
pub fn format_pokemon_prompt(report: &PokemonReport) -> String {
    let details = &report.details;
    let name = &details.name;
    let sprites = &details.sprites;
    let mut output = String::from("\n");

    let _ = writeln!(
        output,
        "You are a professor who studies Pokémon. Give an analytical description of the Pokémon {name}. Always include the following details:"
    );
    let _ = writeln!(output, "Sprite: ![{name} Sprite]({})", sprites.default);
    let _ = writeln!(output, "ID: {}", details.id);
    let _ = writeln!(output, "Height: {}", details.height);
    let _ = writeln!(output, "Weight: {}", details.weight);
    let _ = writeln!(output, "Abilities: {}", details.abilities.join(", "));
    let _ = writeln!(
        output,
        "Type: {}  *Note: Pokémon can have multiple types, which affect their strengths and weaknesses in battles.*",
        details.types.join(", ")
    );
    let _ = writeln!(
        output,
        "History and Pokémon Descriptions: {} *Note: History and Pokémon descriptions are often poetic and hyperbolic and may not be literal. As a professor in Pokémon studies, you should consider the broader implications of these descriptions.*",
        details.flavor_texts.join("\n")
    );
    let _ = writeln!(output, "Base Stat Total: {}", details.base_stat_total());
    let stats: Vec<String> = details
        .stats
        .iter()
        .map(|stat| format!("{}: {}", stat.name, stat.value))
        .collect();
    let _ = writeln!(output, "Stats: {}", stats.join(", "));

    output.push('\n');
    let _ = writeln!(
        output,
        "Include the evolution chain of this Pokémon. If specific evolution conditions are known, include them in the description - especially if it requires a specific item, held item, time of day, or happiness level. If the Pokémon has multiple evolutions, list them all:"
    );
    let evolution = &report.evolution;
    if evolution.evolutions.is_empty() {
        let _ = writeln!(output, "{} has no known evolutions.", evolution.base_form);
    } else {
        let targets: Vec<&str> = evolution
            .evolutions
            .iter()
            .map(|step| step.species_name.as_str())
            .collect();
        let _ = writeln!(
            output,
            "{} evolves into {} based on the following conditions:",
            evolution.base_form,
            targets.join(", ")
        );
        for step in &evolution.evolutions {
            let _ = writeln!(output, "{}", format_evolution_step(step));
        }
    }

    output.push('\n');
    let _ = writeln!(
        output,
        "Include the additional information about the Pokémon, **only** if it is specifically requested. Otherwise do not include the additional information:"
    );
    let _ = writeln!(output, "Sprite (MALE): ![{name} Sprite (MALE)]({})", sprites.male);
    let _ = writeln!(
        output,
        "Sprite (FEMALE): ![{name} Sprite (FEMALE)]({})",
        sprites.female
    );
    let _ = writeln!(output, "Shiny Sprite: ![{name} Shiny Sprite]({})", sprites.shiny);
    let _ = writeln!(
        output,
        "Shiny Sprite (MALE): ![{name} Shiny Sprite (MALE)]({})",
        sprites.shiny_male
    );
    let _ = writeln!(
        output,
        "Shiny Sprite (FEMALE): ![{name} Shiny Sprite (FEMALE)]({})",
        sprites.shiny_female
    );
    let _ = writeln!(
        output,
        "Egg Groups Memberships: {} *Note: Egg groups are categories that determine which Pokémon can breed with each other. A Pokémon can belong to multiple egg groups.*",
        details.egg_groups.join(", ")
    );
    let _ = writeln!(
        output,
        "Legendary Status: {} *Note: Only a few Pokémon are classified as legendary. Do not discuss the legendary status of any Pokémon that is not classified as such.*",
        yes_no(details.is_legendary)
    );
    let _ = writeln!(
        output,
        "Mythical Status: {} *Note: Mythical Pokémon are extremely rare and often event-exclusive. Do not discuss the mythical status of any Pokémon that is not classified as such.*",
        yes_no(details.is_mythical)
    );
    let _ = writeln!(
        output,
        "Baby Status: {} *Note: Baby Pokémon are often pre-evolutions of other Pokémon and are typically smaller and less powerful. Do not discuss the baby status of any Pokémon that is not classified as such.*",
        yes_no(details.is_baby)
    );
    let _ = writeln!(
        output,
        "Alternate Forms: {} *Note: Some Pokémon have alternate forms that can change their appearance, stats, or abilities.*",
        details.forms.join(", ")
    );
    for form in &report.alternate_forms {
        let _ = writeln!(output, "{}", format_alternate_form(form));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::{transform_evolution_chain, EvolutionChainResource};
    use crate::form::{transform_form, PokemonFormResource};
    use serde_json::json;

    fn bulbasaur() -> PokemonResource {
        serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": {
                "front_default": "https://img/1.png",
                "front_female": null,
                "front_shiny": "https://img/shiny/1.png",
                "front_shiny_female": null
            },
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } },
                { "base_stat": 49, "effort": 0, "stat": { "name": "attack" } },
                { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack" } }
            ],
            "types": [
                { "slot": 1, "type": { "name": "grass" } },
                { "slot": 2, "type": { "name": "poison" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "chlorophyll" }, "is_hidden": true, "slot": 3 }
            ],
            "forms": [{ "name": "bulbasaur" }]
        }))
        .unwrap()
    }

    fn bulbasaur_species() -> PokemonSpeciesResource {
        serde_json::from_value(json!({
            "name": "bulbasaur",
            "is_legendary": false,
            "is_mythical": false,
            "is_baby": false,
            "flavor_text_entries": [
                { "flavor_text": "A strange seed was planted on its back at birth.", "language": { "name": "en" } },
                { "flavor_text": "Une étrange graine.", "language": { "name": "fr" } },
                { "flavor_text": "A strange seed was planted on its back at birth.", "language": { "name": "en" } },
                { "flavor_text": "It can go for days without eating.", "language": { "name": "en" } }
            ],
            "egg_groups": [{ "name": "monster" }, { "name": "plant" }],
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/1/" }
        }))
        .unwrap()
    }

    fn report() -> PokemonReport {
        let chain: EvolutionChainResource = serde_json::from_value(json!({
            "chain": {
                "species": { "name": "bulbasaur" },
                "evolves_to": [{
                    "species": { "name": "ivysaur" },
                    "evolution_details": [{ "trigger": { "name": "level-up" }, "min_level": 16, "time_of_day": "" }],
                    "evolves_to": []
                }]
            }
        }))
        .unwrap();
        let form: PokemonFormResource = serde_json::from_value(json!({
            "name": "bulbasaur",
            "is_default": true,
            "sprites": { "front_default": "https://img/form/1.png" },
            "types": [{ "type": { "name": "grass" } }]
        }))
        .unwrap();

        PokemonReport {
            details: transform_pokemon(&bulbasaur(), &bulbasaur_species()),
            evolution: transform_evolution_chain(&chain),
            alternate_forms: vec![transform_form(&form)],
        }
    }

    // ============================================================================
    // unit conversion tests
    // ============================================================================

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(7), "0.7 meters");
        assert_eq!(format_height(20), "2.0 meters");
        assert_eq!(format_height(0), "0.0 meters");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(690), "69.0 kg");
        assert_eq!(format_weight(69), "6.9 kg");
    }

    // ============================================================================
    // transform_pokemon tests
    // ============================================================================

    #[test]
    fn test_transform_pokemon_basic_fields() {
        let details = transform_pokemon(&bulbasaur(), &bulbasaur_species());

        assert_eq!(details.name, "bulbasaur");
        assert_eq!(details.id, 1);
        assert_eq!(details.height, "0.7 meters");
        assert_eq!(details.weight, "6.9 kg");
        assert_eq!(details.types, vec!["grass", "poison"]);
        assert_eq!(details.abilities, vec!["overgrow", "chlorophyll"]);
        assert_eq!(details.egg_groups, vec!["monster", "plant"]);
        assert_eq!(details.base_stat_total(), 159);
        assert_eq!(details.stats[2].name, "special-attack");
    }

    #[test]
    fn test_transform_pokemon_sprite_fallbacks() {
        let sprites = transform_pokemon(&bulbasaur(), &bulbasaur_species()).sprites;

        assert_eq!(sprites.default, "https://img/1.png");
        assert_eq!(sprites.male, "https://img/1.png");
        assert_eq!(sprites.female, "https://img/1.png");
        assert_eq!(sprites.shiny, "https://img/shiny/1.png");
        assert_eq!(sprites.shiny_male, "https://img/shiny/1.png");
        assert_eq!(sprites.shiny_female, "https://img/shiny/1.png");
    }

    #[test]
    fn test_transform_pokemon_missing_sprites() {
        let details = transform_pokemon(&PokemonResource::default(), &bulbasaur_species());

        assert_eq!(details.sprites.default, NO_SPRITE);
        assert_eq!(details.sprites.female, NO_SPRITE);
        assert_eq!(details.sprites.shiny, NO_SHINY_SPRITE);
        assert_eq!(details.sprites.shiny_male, NO_SHINY_SPRITE);
    }

    #[test]
    fn test_transform_pokemon_english_flavor_texts_deduplicated() {
        let details = transform_pokemon(&bulbasaur(), &bulbasaur_species());

        assert_eq!(
            details.flavor_texts,
            vec![
                "A strange seed was planted on its back at birth.",
                "It can go for days without eating."
            ]
        );
    }

    #[test]
    fn test_form_names_prefers_species() {
        let mut species = bulbasaur_species();
        assert_eq!(form_names(&bulbasaur(), &species), vec!["bulbasaur"]);

        species.forms = vec![NamedResource {
            name: "bulbasaur-special".to_string(),
            url: String::new(),
        }];
        assert_eq!(form_names(&bulbasaur(), &species), vec!["bulbasaur-special"]);
    }

    // ============================================================================
    // evolution_chain_id tests
    // ============================================================================

    #[test]
    fn test_evolution_chain_id() {
        assert_eq!(evolution_chain_id(&bulbasaur_species()).unwrap(), "1");
    }

    #[test]
    fn test_evolution_chain_id_missing() {
        let species = PokemonSpeciesResource {
            name: "missingno".to_string(),
            ..Default::default()
        };

        let err = evolution_chain_id(&species).unwrap_err();

        assert_eq!(
            err,
            Error::MissingEvolutionChain {
                species: "missingno".to_string(),
                url: String::new()
            }
        );
    }

    // ============================================================================
    // rendering tests
    // ============================================================================

    #[test]
    fn test_format_evolution_step_placeholders() {
        let step = EvolutionStep {
            species_name: "slowking".to_string(),
            trigger: None,
            min_level: None,
            item: None,
            time_of_day: None,
            min_happiness: None,
            held_item: Some("kings-rock".to_string()),
        };

        assert_eq!(
            format_evolution_step(&step),
            "- slowking (Trigger: Unknown, Min Level: N/A, Item: N/A, Time of Day: N/A, Min Happiness: N/A, Held Item: kings-rock)"
        );
    }

    #[test]
    fn test_format_pokemon_prompt_required_section() {
        let prompt = format_pokemon_prompt(&report());

        assert!(prompt.starts_with("\nYou are a professor who studies Pokémon."));
        assert!(prompt.contains("Sprite: ![bulbasaur Sprite](https://img/1.png)\n"));
        assert!(prompt.contains("ID: 1\n"));
        assert!(prompt.contains("Height: 0.7 meters\n"));
        assert!(prompt.contains("Weight: 6.9 kg\n"));
        assert!(prompt.contains("Abilities: overgrow, chlorophyll\n"));
        assert!(prompt.contains("Type: grass, poison  *Note:"));
        assert!(prompt.contains("Base Stat Total: 159\n"));
        assert!(prompt.contains("Stats: hp: 45, attack: 49, special-attack: 65\n"));
    }

    #[test]
    fn test_format_pokemon_prompt_evolution_section() {
        let prompt = format_pokemon_prompt(&report());

        assert!(prompt.contains("bulbasaur evolves into ivysaur based on the following conditions:\n"));
        assert!(prompt.contains(
            "- ivysaur (Trigger: level-up, Min Level: 16, Item: N/A, Time of Day: N/A, Min Happiness: N/A, Held Item: N/A)\n"
        ));
    }

    #[test]
    fn test_format_pokemon_prompt_no_evolutions() {
        let mut report = report();
        report.evolution.evolutions.clear();

        let prompt = format_pokemon_prompt(&report);

        assert!(prompt.contains("bulbasaur has no known evolutions.\n"));
        assert!(!prompt.contains("evolves into"));
    }

    #[test]
    fn test_format_pokemon_prompt_optional_section() {
        let prompt = format_pokemon_prompt(&report());

        assert!(prompt.contains("**only** if it is specifically requested"));
        assert!(prompt.contains("Shiny Sprite: ![bulbasaur Shiny Sprite](https://img/shiny/1.png)\n"));
        assert!(prompt.contains("Egg Groups Memberships: monster, plant *Note:"));
        assert!(prompt.contains("Legendary Status: No *Note:"));
        assert!(prompt.contains("Alternate Forms: bulbasaur *Note:"));
        assert!(prompt.contains(
            "- bulbasaur (Default: Yes, Battle Only: No, Mega: No, Type: grass) ![bulbasaur Sprite](https://img/form/1.png)\n"
        ));
    }
}
