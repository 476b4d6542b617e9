use crate::prelude::{eprintln, *};
use pokeprof_core::location::{
    format_location_prompt, group_locations, LocationAreaEncounter, LocationsByVersion,
};
use pokeprof_core::params::normalize;

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching encounter locations for: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let locations = location_data(&client, &options.name).await?;

    print_output(
        &locations,
        |locations| format_location_prompt(&options.name, locations),
        options.json,
    )
}

/// Fetches the encounter list of a Pokémon and groups it by game version
pub async fn location_data<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<LocationsByVersion> {
    let name = normalize(pokemon_name);
    log::info!("Building encounter locations for {name}");

    let encounters: Vec<LocationAreaEncounter> =
        fetch_resource(fetcher, &format!("pokemon/{name}/encounters")).await?;

    Ok(group_locations(&encounters))
}

pub async fn location_prompt<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<String> {
    let locations = location_data(fetcher, pokemon_name).await?;
    Ok(format_location_prompt(pokemon_name, &locations))
}
