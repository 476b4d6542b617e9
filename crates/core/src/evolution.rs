//! Evolution chain resources and their flattening into ordered steps.

use serde::{Deserialize, Serialize};

use crate::common::NamedResource;

/// `evolution-chain/<id>` resource.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EvolutionChainResource {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub chain: ChainNode,
}

/// One node of the evolution tree.
///
/// Deserialized nodes own their children, so a chain is always a finite tree.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ChainNode {
    pub species: Option<NamedResource>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainNode>,
}

/// Conditions under which a species evolves into the node that holds it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub min_level: Option<u32>,
    pub item: Option<NamedResource>,
    pub time_of_day: Option<String>,
    pub min_happiness: Option<u32>,
    pub held_item: Option<NamedResource>,
}

/// A single evolution, flattened out of the chain.
///
/// Conditions missing upstream stay `None`; placeholders are a rendering
/// concern.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EvolutionStep {
    pub species_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_happiness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_item: Option<String>,
}

/// Base species plus every evolution reachable from it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EvolutionChain {
    pub base_form: String,
    pub evolutions: Vec<EvolutionStep>,
}

fn species_name(node: &ChainNode) -> String {
    node.species
        .as_ref()
        .map(|species| species.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn named(resource: &Option<NamedResource>) -> Option<String> {
    resource.as_ref().map(|r| r.name.clone())
}

impl EvolutionStep {
    /// Builds the step for `node` from its first evolution detail.
    ///
    /// A node without details yields a step with no conditions at all.
    pub fn from_node(node: &ChainNode) -> Self {
        let species_name = species_name(node);

        let Some(detail) = node.evolution_details.first() else {
            return Self {
                species_name,
                trigger: None,
                min_level: None,
                item: None,
                time_of_day: None,
                min_happiness: None,
                held_item: None,
            };
        };

        Self {
            species_name,
            trigger: named(&detail.trigger),
            min_level: detail.min_level,
            item: named(&detail.item),
            time_of_day: detail
                .time_of_day
                .clone()
                .filter(|time| !time.is_empty()),
            min_happiness: detail.min_happiness,
            held_item: named(&detail.held_item),
        }
    }

    /// Number of evolution conditions present on this step.
    pub fn condition_count(&self) -> usize {
        [
            self.trigger.is_some(),
            self.min_level.is_some(),
            self.item.is_some(),
            self.time_of_day.is_some(),
            self.min_happiness.is_some(),
            self.held_item.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Flattens the evolutions below `node` into a single ordered list.
///
/// Depth-first pre-order: each child is emitted before its own descendants,
/// and siblings keep their upstream order. Branches are not distinguished in
/// the output. The root itself is not a step.
pub fn flatten(node: &ChainNode) -> Vec<EvolutionStep> {
    let mut steps = Vec::new();
    collect_steps(node, &mut steps);
    steps
}

fn collect_steps(node: &ChainNode, steps: &mut Vec<EvolutionStep>) {
    for child in &node.evolves_to {
        steps.push(EvolutionStep::from_node(child));
        collect_steps(child, steps);
    }
}

/// Summarizes an evolution-chain resource.
pub fn transform_evolution_chain(resource: &EvolutionChainResource) -> EvolutionChain {
    EvolutionChain {
        base_form: species_name(&resource.chain),
        evolutions: flatten(&resource.chain),
    }
}
