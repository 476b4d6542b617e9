use crate::pokeapi::{self, Fetch};
use crate::prelude::{eprintln, *};
use serde_json::json;

use super::{CallToolResult, Content, JsonRpcError, Tool};

/// One PokeAPI lookup exposed as an MCP tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    PokemonDetails,
    AbilityDetails,
    PokemonLocation,
    PokemonMovelist,
    Item,
    EggGroup,
}

impl Lookup {
    pub const ALL: [Lookup; 6] = [
        Lookup::PokemonDetails,
        Lookup::AbilityDetails,
        Lookup::PokemonLocation,
        Lookup::PokemonMovelist,
        Lookup::Item,
        Lookup::EggGroup,
    ];

    pub fn tool_name(self) -> &'static str {
        match self {
            Lookup::PokemonDetails => "get_pokemon_details",
            Lookup::AbilityDetails => "get_ability_details",
            Lookup::PokemonLocation => "get_pokemon_location",
            Lookup::PokemonMovelist => "get_pokemon_movelist",
            Lookup::Item => "get_item",
            Lookup::EggGroup => "get_egg_groups",
        }
    }

    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lookup| lookup.tool_name() == name)
    }

    /// Name of the single string argument the tool takes
    pub fn argument(self) -> &'static str {
        match self {
            Lookup::PokemonDetails | Lookup::PokemonLocation | Lookup::PokemonMovelist => {
                "pokemon_name"
            }
            Lookup::AbilityDetails => "ability_name",
            Lookup::Item => "item_name",
            Lookup::EggGroup => "egg_group_name",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Lookup::PokemonDetails => "Fetches detailed information about a Pokémon, including sprites, stats, abilities, flavor text, evolution chain and alternate forms. Alternate forms come from the species record, or from the Pokémon record when the species lists none; each form costs one extra request. Returns a prompt for describing the Pokémon.",
            Lookup::AbilityDetails => "Fetches details about a specific Pokémon ability, including its effect and the Pokémon that can have it (hidden abilities are marked).",
            Lookup::PokemonLocation => "Retrieves the locations where a Pokémon can be found in the wild, organized by game version.",
            Lookup::PokemonMovelist => "Fetches the movelist of a Pokémon as markdown tables, one per version group, sorted by learn method, level and name.",
            Lookup::Item => "Retrieves details about a specific item, including its effects, cost, attributes and the Pokémon that hold it.",
            Lookup::EggGroup => "Fetches the members of an egg group. Possible values include \"monster\", \"water-1\", \"field\", \"ground\", etc.",
        }
    }

    fn argument_description(self) -> &'static str {
        match self {
            Lookup::PokemonDetails | Lookup::PokemonLocation | Lookup::PokemonMovelist => {
                "Name of the Pokémon (case-insensitive, e.g., 'Tapu Lele')"
            }
            Lookup::AbilityDetails => "Name of the ability (case-insensitive, e.g., 'Solar Power')",
            Lookup::Item => "Name of the item (case-insensitive, e.g., 'Master Ball')",
            Lookup::EggGroup => "Name of the egg group (case-insensitive, e.g., 'water-1')",
        }
    }

    pub fn tool(self) -> Tool {
        Tool {
            name: self.tool_name().to_string(),
            description: self.description().to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    self.argument(): {
                        "type": "string",
                        "description": self.argument_description()
                    }
                },
                "required": [self.argument()]
            }),
        }
    }

    /// Runs the pipeline and returns its rendered text
    pub async fn prompt<F: Fetch>(self, fetcher: &F, name: &str) -> Result<String> {
        match self {
            Lookup::PokemonDetails => pokeapi::pokemon::pokemon_prompt(fetcher, name).await,
            Lookup::AbilityDetails => pokeapi::ability::ability_prompt(fetcher, name).await,
            Lookup::PokemonLocation => pokeapi::location::location_prompt(fetcher, name).await,
            Lookup::PokemonMovelist => pokeapi::moves::movelist_prompt(fetcher, name).await,
            Lookup::Item => pokeapi::item::item_prompt(fetcher, name).await,
            Lookup::EggGroup => pokeapi::egg_group::egg_group_prompt(fetcher, name).await,
        }
    }
}

pub async fn handle_lookup(
    lookup: Lookup,
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let client = pokeapi::PokeApiClient::from_global(global).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })?;

    call_lookup(lookup, arguments, &client, global).await
}

pub async fn call_lookup<F: Fetch>(
    lookup: Lookup,
    arguments: Option<serde_json::Value>,
    fetcher: &F,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let name = arguments
        .as_ref()
        .and_then(|args| args.get(lookup.argument()))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| JsonRpcError {
            code: -32602,
            message: format!(
                "Invalid arguments: missing string argument '{}'",
                lookup.argument()
            ),
            data: None,
        })?;

    if global.verbose {
        eprintln!("Calling {}: {}={}", lookup.tool_name(), lookup.argument(), name);
    }

    let text = lookup
        .prompt(fetcher, name)
        .await
        .map_err(|e| JsonRpcError {
            code: -32603,
            message: format!("Tool execution error: {e}"),
            data: None,
        })?;

    let result = CallToolResult {
        content: vec![Content::Text { text }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
