//! Command line entry point.

use std::error::Error;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;
use tokio::net::lookup_host;

use simple_httpd::{DocumentRoot, HttpServer, ServerConfig};

/// Serve files from a directory over HTTP/1.1.
#[derive(Debug, Parser)]
#[command(name = "simple-httpd", version, about)]
struct Args {
    /// Host or IP address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "HTTPD_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "HTTPD_PORT")]
    port: u16,

    /// Directory to serve (defaults to the current directory)
    #[arg(short, long, env = "HTTPD_ROOT")]
    root: Option<PathBuf>,

    /// Length of the pending-connection queue
    #[arg(long, default_value_t = 5, env = "HTTPD_BACKLOG")]
    backlog: u32,

    /// Maximum request bytes read per connection
    #[arg(long, default_value = "1024", env = "HTTPD_READ_BUFFER_SIZE")]
    read_buffer_size: NonZeroUsize,

    /// Close connections that send nothing within this many seconds
    #[arg(long, env = "HTTPD_READ_TIMEOUT_SECS")]
    read_timeout_secs: Option<u64>,

    /// Maximum number of connections handled at once
    #[arg(long, env = "HTTPD_MAX_CONNECTIONS")]
    max_connections: Option<NonZeroUsize>,
}

impl Args {
    async fn into_config(self) -> Result<ServerConfig, Box<dyn Error>> {
        let root = match self.root {
            Some(path) => DocumentRoot::new(path)?,
            None => DocumentRoot::current_dir()?,
        };

        let addr = lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("cannot resolve {}", self.host)))?;

        let mut config = ServerConfig::new(root);
        config.addr = addr;
        config.backlog = self.backlog;
        config.read_buffer_size = self.read_buffer_size;
        config.read_timeout = self.read_timeout_secs.map(Duration::from_secs);
        config.max_connections = self.max_connections;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config().await?;
    info!("Starting server on {addr}", addr = config.addr);

    HttpServer::new(config).start().await?;

    Ok(())
}
