//! Connection handling and the accept loop.

use std::future::Future;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tokio::signal;
use log::{debug, info, error};

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::document_root::DocumentRoot;
use crate::server::error::Error;
use crate::server::handler::{bad_request, serve_request};
use crate::server::response::{HttpResponse, StatusCode};

/// How a connection ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// The peer closed the connection without sending anything.
    Closed,
    /// A response with this status was written in full.
    Responded(StatusCode),
}

/// A static file HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    root: Arc<DocumentRoot>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let root = Arc::new(config.root.clone());
        Self { config, root }
    }

    /// The directory files are served from.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Bind the listening socket.
    ///
    /// Sets `SO_REUSEADDR` and listens with the configured backlog. Must be
    /// called from within a tokio runtime.
    pub fn bind(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr;
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(self.config.backlog)?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Start the server and serve until Ctrl+C.
    ///
    /// Only a failure to set up the listening socket is returned as an error.
    pub async fn start(&self) -> Result<(), Error> {
        info!("Serving files from {root}", root = self.root().display());
        let listener = self.bind()?;

        self.serve(listener, async {
            match signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
    }

    /// Accept connections on `listener` until `shutdown` completes.
    ///
    /// Every connection runs in its own task. A failing or panicking task is
    /// logged and never stops the loop.
    pub async fn serve(&self, listener: TcpListener, shutdown: impl Future<Output = ()>) -> Result<(), Error> {
        let semaphore = self.config.max_connections.map(|n| Arc::new(Semaphore::new(n.get())));
        let mut tasks = JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            // With a connection cap, wait for a free slot before accepting
            let permit = match &semaphore {
                Some(semaphore) => tokio::select! {
                    _ = &mut shutdown => break,
                    permit = semaphore.clone().acquire_owned() => permit.ok(),
                },
                None => None,
            };

            tokio::select! {
                _ = &mut shutdown => break,

                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    Self::log_task_result(joined);
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => self.spawn_connection(socket, addr, permit, &mut tasks),
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        info!("Shutting down server...");
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    fn spawn_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        permit: Option<OwnedSemaphorePermit>,
        tasks: &mut JoinSet<()>,
    ) {
        debug!("New connection from {addr}");
        let root = self.root.clone();
        let read_buffer_size = self.config.read_buffer_size;
        let read_timeout = self.config.read_timeout;

        tasks.spawn(async move {
            // Held until the connection is done
            let _permit = permit;

            match Self::handle_connection(&mut socket, &root, read_buffer_size, read_timeout).await {
                Ok(ConnectionOutcome::Closed) => debug!("{addr} closed without sending a request"),
                Ok(ConnectionOutcome::Responded(_)) => {}
                Err(e) => error!("Error handling connection from {addr}: {e}"),
            }
        });
    }

    fn log_task_result(joined: Result<(), JoinError>) {
        if let Err(e) = joined {
            error!("Connection task failed: {e}");
        }
    }

    /// Wait for in-flight connections, for at most 30 seconds.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(joined) = tasks.join_next().await {
                Self::log_task_result(joined);
            }
        })
        .await;

        if drained.is_err() {
            error!("Gave up on {len} connections after {shutdown_timeout:?}", len = tasks.len());
            tasks.abort_all();
        }

        info!("Server shutdown complete");
    }

    /// Serve one request on `socket`.
    ///
    /// Reads at most `read_buffer_size` bytes once. An empty read ends the
    /// connection without a response. An unparsable request line is answered
    /// with 400 before the parse error is returned.
    pub async fn handle_connection<S>(
        socket: &mut S,
        root: &DocumentRoot,
        read_buffer_size: NonZeroUsize,
        read_timeout: Option<Duration>,
    ) -> Result<ConnectionOutcome, Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut buf = vec![0; read_buffer_size.get()];

        // Read data from the socket
        let n = match read_timeout {
            Some(limit) => tokio::time::timeout(limit, socket.read(&mut buf))
                .await
                .map_err(|_| Error::Timeout(limit))??,
            None => socket.read(&mut buf).await?,
        };
        if n == 0 {
            return Ok(ConnectionOutcome::Closed);
        }

        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                Self::send(socket, &bad_request()).await?;
                return Err(Error::ParseError(e));
            }
        };

        let response = serve_request(&request, root).await;
        info!(
            "{method} {path} {status}",
            method = request.method,
            path = request.path,
            status = response.status.as_u16()
        );

        Self::send(socket, &response).await?;
        Ok(ConnectionOutcome::Responded(response.status))
    }

    async fn send<S>(socket: &mut S, response: &HttpResponse) -> Result<(), Error>
    where
        S: AsyncWrite + Unpin,
    {
        socket.write_all(&response.to_bytes()).await?;
        socket.shutdown().await?;
        Ok(())
    }
}
