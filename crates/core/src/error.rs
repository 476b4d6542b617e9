/// Errors detectable without talking to the upstream API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Species {species} does not reference an evolution chain (url: {url:?})")]
    MissingEvolutionChain { species: String, url: String },
}
