use std::io;
use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::input::{TokenReader, load_network, read_network};
use metro_server::network::MetroGraph;
use metro_server::shell::Shell;
use metro_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "metro_server=info";

fn main() -> ExitCode {
    // stdout belongs to the shell
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Network and shell commands share standard input when no file is given
    let mut tokens = TokenReader::new(io::stdin().lock());

    let graph = match &config.network_path {
        Some(path) => load_network(path),
        None => {
            info!("Reading metro network from standard input");
            read_network(&mut tokens)
        }
    };
    let graph = match graph {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "Failed to load metro network");
            return ExitCode::FAILURE;
        }
    };

    let result = match config.listen {
        Some(addr) => serve(graph, addr),
        None => Shell::new(&graph, &mut tokens, io::stdout().lock())
            .run()
            .map_err(io::Error::other),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Metro server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

/// Serve the HTTP API until the process is stopped.
fn serve(graph: MetroGraph, addr: SocketAddr) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let app = create_router(AppState::new(graph));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!(%addr, "Metro server listening");
        info!("  GET /health");
        info!("  GET /stations");
        info!("  GET /stations/:name");
        info!("  GET /stations/:name/nearest-intersection");
        info!("  GET /routes?from=&to=");
        info!("  GET /intersections");
        info!("  GET /terminals");
        info!("  GET /lines/:name/terminals");

        axum::serve(listener, app).await
    })
}
