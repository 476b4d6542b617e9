use crate::prelude::{println, *};
use serde::de::DeserializeOwned;
use std::future::Future;

pub mod ability;
pub mod egg_group;
pub mod item;
pub mod location;
pub mod moves;
pub mod pokemon;

#[cfg(test)]
pub mod testing;

/// Options shared by every lookup subcommand
#[derive(Debug, clap::Args, Clone)]
pub struct LookupOptions {
    /// Name to look up, case-insensitive, spaces allowed (e.g., "Tapu Lele")
    pub name: String,

    /// Output the extracted data as JSON instead of the prompt
    #[arg(long)]
    pub json: bool,
}

/// PokeAPI configuration from environment variables
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: String,
}

impl PokeApiConfig {
    /// Public PokeAPI v2 endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";

    /// Uses POKEAPI_BASE_URL with default fallback
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("POKEAPI_BASE_URL")
                .map(|url| trim_base_url(&url))
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = trim_base_url(&url);
        }
        self
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Source of decoded PokeAPI resources.
pub trait Fetch: Send + Sync {
    /// GET `<base>/<path>` and decode the body as JSON.
    ///
    /// Fails with [`Error::Upstream`] on any non-success status.
    fn get_json(&self, path: &str) -> impl Future<Output = Result<serde_json::Value>> + Send;
}

/// HTTP client for the PokeAPI REST endpoints. No caching, no retries.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    config: PokeApiConfig,
}

impl PokeApiClient {
    pub fn new(config: PokeApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pokeprof/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Client configured from the environment plus the global CLI flags
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        Self::new(PokeApiConfig::from_env().with_overrides(global.base_url.clone()))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }
}

impl Fetch for PokeApiClient {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {url} failed with {status}");
            return Err(Error::Upstream {
                status: status.as_u16(),
                path: path.to_string(),
            }
            .into());
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| {
                Error::Decode {
                    path: path.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }
}

/// Fetches `path` and decodes it into a typed resource
pub async fn fetch_resource<T, F>(fetcher: &F, path: &str) -> Result<T>
where
    T: DeserializeOwned,
    F: Fetch,
{
    let value = fetcher.get_json(path).await?;

    serde_json::from_value(value).map_err(|e| {
        Error::Decode {
            path: path.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Prints either the rendered prompt or the JSON projection
pub fn print_output<T: serde::Serialize>(
    data: &T,
    prompt: impl FnOnce(&T) -> String,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        println!("{}", prompt(data));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_replaces_base_url() {
        let config = PokeApiConfig {
            base_url: PokeApiConfig::DEFAULT_BASE_URL.to_string(),
        }
        .with_overrides(Some("http://localhost:8000/api/v2/".to_string()));

        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
    }

    #[test]
    fn test_with_overrides_none_keeps_base_url() {
        let config = PokeApiConfig {
            base_url: PokeApiConfig::DEFAULT_BASE_URL.to_string(),
        }
        .with_overrides(None);

        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_client_url_joins_path() {
        let client = PokeApiClient::new(PokeApiConfig {
            base_url: "https://pokeapi.co/api/v2".to_string(),
        })
        .unwrap();

        assert_eq!(
            client.url("pokemon/tapu-lele"),
            "https://pokeapi.co/api/v2/pokemon/tapu-lele"
        );
    }

    #[tokio::test]
    async fn test_fetch_resource_decode_error() {
        let fetcher = testing::FixtureFetcher::new()
            .with_json("pokemon/bad", serde_json::json!({ "id": "not-a-number" }));

        let err = fetch_resource::<pokeprof_core::pokemon::PokemonResource, _>(&fetcher, "pokemon/bad")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Decode { path, .. }) if path == "pokemon/bad"
        ));
    }

    #[tokio::test]
    async fn test_fetch_resource_upstream_status() {
        let fetcher = testing::FixtureFetcher::new().with_status("item/nope", 404);

        let err = fetch_resource::<serde_json::Value, _>(&fetcher, "item/nope")
            .await
            .unwrap_err();

        assert_eq!(err.downcast_ref::<Error>().and_then(Error::status), Some(404));
    }
}
