//! Core library for pokeprof
//!
//! This crate implements the **Functional Core** of the pokeprof application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`pokeprof_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokeprof`**: HTTP fetching, CLI and MCP server (the Imperative Shell)
//!
//! Every function here takes already-decoded PokeAPI resources and returns
//! either a flat projection or the rendered prompt text. Nothing in this crate
//! knows where the data came from, so everything is tested with fixture data.
//!
//! # Pipeline shape
//!
//! Each module follows the same three steps:
//!
//! 1. **Resource types**: `Deserialize` structs mirroring the upstream JSON,
//!    where every field has an explicit default for when it is absent.
//! 2. **`transform_*`**: projects resources into a flat `*Details` struct.
//! 3. **`format_*_prompt`**: renders the projection into the prompt template.
//!
//! # Module Organization
//!
//! - [`params`]: Name normalization and display casing
//! - [`common`]: Shared reference types and English-entry lookup
//! - [`pokemon`]: Pokémon + species details (uses [`evolution`] and [`form`])
//! - [`evolution`]: Evolution chain flattening
//! - [`form`]: Alternate forms
//! - [`ability`]: Ability details
//! - [`location`]: Encounter locations grouped by game version
//! - [`moves`]: Movelist grouped by version group
//! - [`item`]: Item details
//! - [`egg_group`]: Egg group membership
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokeprof_core::moves::{format_movelist_prompt, group_moves};
//! use pokeprof_core::pokemon::PokemonResource;
//!
//! let pokemon: PokemonResource = serde_json::from_value(fixture)?;
//! let moves = group_moves(&pokemon.moves);
//! let prompt = format_movelist_prompt("Bulbasaur", &moves);
//! ```

pub mod ability;
pub mod common;
pub mod egg_group;
pub mod error;
pub mod evolution;
pub mod form;
pub mod item;
pub mod location;
pub mod moves;
pub mod params;
pub mod pokemon;

pub use error::Error;
