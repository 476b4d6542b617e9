use crate::prelude::{eprintln, *};
use pokeprof_core::ability::{
    format_ability_prompt, transform_ability, AbilityDetails, AbilityResource,
};
use pokeprof_core::params::normalize;

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching ability: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let details = ability_data(&client, &options.name).await?;

    print_output(&details, format_ability_prompt, options.json)
}

/// Fetches an ability and projects it into [`AbilityDetails`]
pub async fn ability_data<F: Fetch>(fetcher: &F, ability_name: &str) -> Result<AbilityDetails> {
    let name = normalize(ability_name);
    log::info!("Building ability details for {name}");

    let resource: AbilityResource = fetch_resource(fetcher, &format!("ability/{name}")).await?;

    Ok(transform_ability(&resource))
}

pub async fn ability_prompt<F: Fetch>(fetcher: &F, ability_name: &str) -> Result<String> {
    Ok(format_ability_prompt(&ability_data(fetcher, ability_name).await?))
}
