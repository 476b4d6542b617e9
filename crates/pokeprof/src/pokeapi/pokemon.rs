use crate::prelude::{eprintln, *};
use futures::future::try_join_all;
use pokeprof_core::evolution::{transform_evolution_chain, EvolutionChainResource};
use pokeprof_core::form::{transform_form, PokemonFormResource};
use pokeprof_core::params::normalize;
use pokeprof_core::pokemon::{
    evolution_chain_id, format_pokemon_prompt, transform_pokemon, PokemonReport, PokemonResource,
    PokemonSpeciesResource,
};

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching Pokémon details for: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let report = pokemon_report(&client, &options.name).await?;

    print_output(&report, format_pokemon_prompt, options.json)
}

/// Fetches a Pokémon, its species, evolution chain and forms.
///
/// Requests go out in that order; the first failure aborts the lookup.
/// Form lookups run concurrently but keep the species' form order.
pub async fn pokemon_report<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<PokemonReport> {
    let name = normalize(pokemon_name);
    log::info!("Building Pokémon details for {name}");

    let pokemon: PokemonResource = fetch_resource(fetcher, &format!("pokemon/{name}")).await?;
    let species: PokemonSpeciesResource =
        fetch_resource(fetcher, &format!("pokemon-species/{name}")).await?;

    let details = transform_pokemon(&pokemon, &species);

    let chain_id = evolution_chain_id(&species).map_err(Error::from)?;
    let chain: EvolutionChainResource =
        fetch_resource(fetcher, &format!("evolution-chain/{chain_id}")).await?;

    let forms: Vec<PokemonFormResource> =
        try_join_all(details.forms.iter().map(|form| async move {
            let path = format!("pokemon-form/{}", normalize(form));
            fetch_resource::<PokemonFormResource, F>(fetcher, &path).await
        }))
        .await?;

    Ok(PokemonReport {
        details,
        evolution: transform_evolution_chain(&chain),
        alternate_forms: forms.iter().map(transform_form).collect(),
    })
}

/// Renders the Pokémon details prompt
pub async fn pokemon_prompt<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<String> {
    let report = pokemon_report(fetcher, pokemon_name).await?;
    Ok(format_pokemon_prompt(&report))
}
