use crate::prelude::{eprintln, *};
use pokeprof_core::moves::{format_movelist_prompt, group_moves, VersionGroupedMoves};
use pokeprof_core::params::normalize;
use pokeprof_core::pokemon::PokemonResource;

use super::{fetch_resource, print_output, Fetch, LookupOptions, PokeApiClient};

pub async fn run(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching movelist for: {}", options.name);
    }

    let client = PokeApiClient::from_global(&global)?;
    let moves = movelist_data(&client, &options.name).await?;

    print_output(
        &moves,
        |moves| format_movelist_prompt(&options.name, moves),
        options.json,
    )
}

/// Fetches a Pokémon and groups its learnable moves by version group
pub async fn movelist_data<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<VersionGroupedMoves> {
    let name = normalize(pokemon_name);
    log::info!("Building movelist for {name}");

    let pokemon: PokemonResource = fetch_resource(fetcher, &format!("pokemon/{name}")).await?;

    Ok(group_moves(&pokemon.moves))
}

pub async fn movelist_prompt<F: Fetch>(fetcher: &F, pokemon_name: &str) -> Result<String> {
    let moves = movelist_data(fetcher, pokemon_name).await?;
    Ok(format_movelist_prompt(pokemon_name, &moves))
}
