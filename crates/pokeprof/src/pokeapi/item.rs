use crate::prelude::{eprintln, *};
use pokeprof_core::item::{format_item_prompt, transform_item, ItemDetails, ItemResource};
use pokeprof_core::params::normalize;

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching item: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let details = item_data(&client, &options.name).await?;

    print_output(&details, format_item_prompt, options.json)
}

/// Fetches an item and projects it into [`ItemDetails`]
pub async fn item_data<F: Fetch>(fetcher: &F, item_name: &str) -> Result<ItemDetails> {
    let name = normalize(item_name);
    log::info!("Building item details for {name}");

    let resource: ItemResource = fetch_resource(fetcher, &format!("item/{name}")).await?;

    Ok(transform_item(&resource))
}

pub async fn item_prompt<F: Fetch>(fetcher: &F, item_name: &str) -> Result<String> {
    Ok(format_item_prompt(&item_data(fetcher, item_name).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokeapi::testing::FixtureFetcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_item_prompt() {
        let fetcher = FixtureFetcher::new().with_json(
            "item/master-ball",
            json!({
                "id": 1,
                "name": "master-ball",
                "cost": 0,
                "attributes": [{ "name": "countable" }],
                "effect_entries": [{
                    "effect": "Catches a wild Pokémon every time.",
                    "short_effect": "Catches a wild Pokémon every time.",
                    "language": { "name": "en" }
                }],
                "sprites": { "default": "https://img/items/master-ball.png" },
                "held_by_pokemon": [],
                "baby_trigger_for": null
            }),
        );

        let prompt = item_prompt(&fetcher, "Master Ball").await.unwrap();

        assert_eq!(fetcher.requests(), vec!["item/master-ball"]);
        assert!(prompt.contains("Name: Master Ball\n"));
        assert!(prompt.contains("Cost: 0 *Note:"));
        assert!(prompt.contains("Flavor Text: No flavor text available in English."));
        assert!(prompt.contains("Held By Pokémon: No Pokémon hold this item.\n"));
    }
}
