//! Movelist grouping by version group and its markdown rendering.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::common::NamedResource;
use crate::params::{humanize, title_case};

/// Entry of the `moves` list on a `pokemon/<name>` resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MoveSlot {
    #[serde(rename = "move", default)]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveVersionDetail>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MoveVersionDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    #[serde(default)]
    pub move_learn_method: NamedResource,
    #[serde(default)]
    pub version_group: NamedResource,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// Display name, e.g. `"Razor Leaf"`.
    pub name: String,
    /// Raw learn-method identifier, e.g. `"level-up"`.
    pub learn_method: String,
    /// `None` when upstream reports level 0, i.e. not learned by level.
    pub level_learned_at: Option<u32>,
}

/// Moves keyed by version-group identifier, iterated in ascending key order.
pub type VersionGroupedMoves = BTreeMap<String, Vec<MoveEntry>>;

/// Sorts moves by learn method, then level (absent counts as 0), then name.
pub fn sort_moves(moves: &mut [MoveEntry]) {
    moves.sort_by(|a, b| {
        a.learn_method
            .cmp(&b.learn_method)
            .then_with(|| {
                a.level_learned_at
                    .unwrap_or(0)
                    .cmp(&b.level_learned_at.unwrap_or(0))
            })
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Groups every move/version-group pair by version group, each group sorted.
pub fn group_moves(moves: &[MoveSlot]) -> VersionGroupedMoves {
    let mut grouped = VersionGroupedMoves::new();

    for slot in moves {
        let name = humanize(&slot.move_.name);

        for detail in &slot.version_group_details {
            grouped
                .entry(detail.version_group.name.clone())
                .or_default()
                .push(MoveEntry {
                    name: name.clone(),
                    learn_method: detail.move_learn_method.name.clone(),
                    level_learned_at: Some(detail.level_learned_at).filter(|level| *level > 0),
                });
        }
    }

    for entries in grouped.values_mut() {
        sort_moves(entries);
    }

    grouped
}

/// Renders one markdown table for a version group.
pub fn format_move_table(version_group: &str, moves: &[MoveEntry]) -> String {
    let mut table = format!("### {}\n\n", humanize(version_group));
    table.push_str("| Move | Learn Method | Level |\n");
    table.push_str("|------|-------------|-------|\n");

    for entry in moves {
        let level = entry
            .level_learned_at
            .map(|level| level.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            table,
            "| {} | {} | {} |",
            entry.name,
            humanize(&entry.learn_method),
            level
        );
    }

    table
}

/// Renders the movelist prompt.
///
/// With no moves at all this is a short plain sentence rather than a prompt.
pub fn format_movelist_prompt(pokemon_name: &str, moves: &VersionGroupedMoves) -> String {
    if moves.is_empty() {
        return format!("No move data available for {pokemon_name}.");
    }

    let tables: Vec<String> = moves
        .iter()
        .map(|(version_group, entries)| format_move_table(version_group, entries))
        .collect();

    format!(
        "\nProvide information about the moves that {} can learn across different game versions. If there is a specific game version asked about, include only the moves available in that version. If no game version is specified, provide all moves across all versions.\n{}\n\n",
        title_case(pokemon_name),
        tables.join("\n")
    )
}
