use crate::prelude::*;
use clap::Parser;

mod error;
mod mcp;
mod pokeapi;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Look up Pokémon data from PokeAPI and render it as prompts, or serve the lookups over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokeAPI base URL
    #[clap(long, env = "POKEAPI_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "POKEPROF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pokémon details, evolution chain and alternate forms
    Pokemon(crate::pokeapi::LookupOptions),

    /// Ability effect and the Pokémon that can have it
    Ability(crate::pokeapi::LookupOptions),

    /// Wild encounter locations of a Pokémon, by game version
    Location(crate::pokeapi::LookupOptions),

    /// Learnable moves of a Pokémon, by version group
    Moves(crate::pokeapi::LookupOptions),

    /// Item effects, cost and holders
    Item(crate::pokeapi::LookupOptions),

    /// Members of an egg group
    EggGroup(crate::pokeapi::LookupOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Pokemon(options) => crate::pokeapi::pokemon::run(options, app.global).await,
        SubCommands::Ability(options) => crate::pokeapi::ability::run(options, app.global).await,
        SubCommands::Location(options) => crate::pokeapi::location::run(options, app.global).await,
        SubCommands::Moves(options) => crate::pokeapi::moves::run(options, app.global).await,
        SubCommands::Item(options) => crate::pokeapi::item::run(options, app.global).await,
        SubCommands::EggGroup(options) => crate::pokeapi::egg_group::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
