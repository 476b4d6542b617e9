//! `pokemon/<name>/encounters` grouping by game version.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::common::NamedResource;
use crate::params::{humanize, title_case};

/// One element of the encounters list.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LocationAreaEncounter {
    #[serde(default)]
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct VersionEncounterDetail {
    #[serde(default)]
    pub version: NamedResource,
}

/// Location display names keyed by version identifier.
///
/// Locations keep the order in which they were first seen; duplicates are
/// dropped.
pub type LocationsByVersion = BTreeMap<String, Vec<String>>;

pub fn group_locations(encounters: &[LocationAreaEncounter]) -> LocationsByVersion {
    let mut grouped = LocationsByVersion::new();

    for encounter in encounters {
        let location = humanize(&encounter.location_area.name);

        for detail in &encounter.version_details {
            let locations = grouped.entry(detail.version.name.clone()).or_default();
            if !locations.contains(&location) {
                locations.push(location.clone());
            }
        }
    }

    grouped
}

/// Renders the location prompt for the name exactly as the caller typed it.
pub fn format_location_prompt(pokemon_name: &str, locations: &LocationsByVersion) -> String {
    let mut output = String::from("\n");
    let _ = writeln!(
        output,
        "You are a Pokémon researcher. Provide information on where the Pokémon {pokemon_name} can be found in the wild."
    );

    if locations.is_empty() {
        let _ = writeln!(
            output,
            "Unfortunately, no location data is available for this Pokémon in the database."
        );
        return output;
    }

    let _ = writeln!(
        output,
        "The Pokémon can be found in these locations across various games:"
    );
    output.push('\n');
    for (version, names) in locations {
        let _ = writeln!(output, "- {}: {}", title_case(version), names.join(", "));
    }
    output.push('\n');
    let _ = writeln!(
        output,
        "Based on this information, describe where players might encounter this Pokémon in the wild. Do not summarize locational data. Offer all locations for every region and game."
    );

    output
}
