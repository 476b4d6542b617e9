use crate::prelude::{eprintln, *};
use pokeprof_core::egg_group::{
    format_egg_group_prompt, transform_egg_group, EggGroupDetails, EggGroupResource,
};
use pokeprof_core::params::normalize;

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching egg group: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let details = egg_group_data(&client, &options.name).await?;

    print_output(&details, format_egg_group_prompt, options.json)
}

pub async fn egg_group_data<F: Fetch>(fetcher: &F, egg_group_name: &str) -> Result<EggGroupDetails> {
    let name = normalize(egg_group_name);
    log::info!("Building egg group details for {name}");

    let resource: EggGroupResource = fetch_resource(fetcher, &format!("egg-group/{name}")).await?;

    Ok(transform_egg_group(&resource))
}

pub async fn egg_group_prompt<F: Fetch>(fetcher: &F, egg_group_name: &str) -> Result<String> {
    Ok(format_egg_group_prompt(
        &egg_group_data(fetcher, egg_group_name).await?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokeapi::testing::FixtureFetcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_egg_group_prompt() {
        let fetcher = FixtureFetcher::new().with_json(
            "egg-group/water-1",
            json!({
                "name": "water-1",
                "pokemon_species": [{ "name": "squirtle" }, { "name": "lapras" }]
            }),
        );

        let prompt = egg_group_prompt(&fetcher, "Water 1").await.unwrap();

        assert_eq!(fetcher.requests(), vec!["egg-group/water-1"]);
        assert!(prompt.contains("Egg Group Name: Water 1\n"));
        assert!(prompt.contains("squirtle, lapras"));
    }
}
