//! Server configuration.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::server::document_root::DocumentRoot;

/// Default number of request bytes read per connection.
pub const DEFAULT_READ_BUFFER_SIZE: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => panic!("buffer size must be non-zero"),
};

/// Default bind address.
pub const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory files are served from.
    pub root: DocumentRoot,
    /// Length of the pending-connection queue passed to `listen`.
    pub backlog: u32,
    /// Maximum number of request bytes read per connection.
    pub read_buffer_size: NonZeroUsize,
    /// Deadline for the first read. `None` waits indefinitely.
    pub read_timeout: Option<Duration>,
    /// Cap on concurrently handled connections. `None` is unbounded.
    pub max_connections: Option<NonZeroUsize>,
}

impl ServerConfig {
    /// Configuration serving `root` on 127.0.0.1:8080.
    pub fn new(root: DocumentRoot) -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            root,
            backlog: 5,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            read_timeout: None,
            max_connections: None,
        }
    }
}
