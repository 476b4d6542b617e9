#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Serve the PokeAPI lookups as Model Context Protocol tools")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Answer newline-delimited JSON-RPC on stdin/stdout (for local MCP hosts)
    #[clap(name = "stdio")]
    Stdio,

    /// Serve the PokeAPI tools over HTTP (`POST /message`, `GET /sse`)
    #[clap(name = "sse")]
    Sse(SseOptions),
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port the PokeAPI tool server listens on
    #[arg(short, long, env = "POKEPROF_MCP_PORT", default_value = "8765")]
    pub port: u16,

    /// Interface the PokeAPI tool server binds to
    #[arg(long, env = "POKEPROF_MCP_HOST", default_value = "127.0.0.1")]
    pub host: String,
}
