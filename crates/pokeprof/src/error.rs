#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// PokeAPI answered with a non-success status.
    #[error("Error fetching data from PokeAPI ({path}): HTTP {status}")]
    Upstream { status: u16, path: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error(transparent)]
    Core(#[from] pokeprof_core::Error),
}

impl Error {
    /// Status code of an upstream failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
