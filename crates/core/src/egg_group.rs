//! `egg-group/<name>` projection and prompt.

use serde::{Deserialize, Serialize};

use crate::common::NamedResource;
use crate::params::humanize;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EggGroupResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EggGroupDetails {
    pub name: String,
    pub species: Vec<String>,
}

pub fn transform_egg_group(resource: &EggGroupResource) -> EggGroupDetails {
    EggGroupDetails {
        name: resource.name.clone(),
        species: resource
            .pokemon_species
            .iter()
            .map(|species| species.name.clone())
            .collect(),
    }
}

pub fn format_egg_group_prompt(details: &EggGroupDetails) -> String {
    format!(
        "\nYou are a Pokémon breeding expert. Describe the egg group {} in detail. Include the following information:\n\
         Egg Group Name: {}\n\
         Pokémon in this egg group:\n\
         {}\n\n",
        details.name,
        humanize(&details.name),
        details.species.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transform_egg_group() {
        let resource: EggGroupResource = serde_json::from_value(json!({
            "id": 2,
            "name": "water-1",
            "pokemon_species": [
                { "name": "squirtle", "url": "" },
                { "name": "psyduck", "url": "" }
            ]
        }))
        .unwrap();

        let details = transform_egg_group(&resource);

        assert_eq!(details.name, "water-1");
        assert_eq!(details.species, vec!["squirtle", "psyduck"]);
    }

    #[test]
    fn test_format_egg_group_prompt() {
        let details = EggGroupDetails {
            name: "water-1".to_string(),
            species: vec!["squirtle".to_string(), "psyduck".to_string()],
        };

        let prompt = format_egg_group_prompt(&details);

        assert!(prompt.contains("Describe the egg group water-1 in detail."));
        assert!(prompt.contains("Egg Group Name: Water 1\n"));
        assert!(prompt.contains("Pokémon in this egg group:\nsquirtle, psyduck\n"));
    }
}
