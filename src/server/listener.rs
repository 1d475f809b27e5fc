use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::rc::Rc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::controller::ControllerHandle;
use crate::http::connection::Connection;

/// Live connections, keyed by a monotonically assigned id.
///
/// Keying by id rather than socket identity keeps the table stable when the
/// OS recycles descriptors.
type ConnectionTable = Rc<RefCell<HashMap<u64, JoinHandle<()>>>>;

#[derive(Debug)]
pub enum ServerError {
    /// The recorder controller handle was already dead at construction
    DeadController,
    /// `start` was called while the server is listening
    AlreadyListening,
    /// The listener could not be bound
    Bind(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::DeadController => write!(f, "recorder controller is gone"),
            ServerError::AlreadyListening => write!(f, "control server is already listening"),
            ServerError::Bind(e) => write!(f, "could not bind control server: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind(e) => Some(e),
            _ => None,
        }
    }
}

struct Listening {
    local_addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    accept_task: JoinHandle<()>,
    connections: ConnectionTable,
}

/// The control HTTP service.
///
/// Owns the listening socket and the set of live connections; the recorder
/// is only borrowed per request through the [`ControllerHandle`]. The whole
/// service is single-threaded: `start` spawns local tasks, so it must be
/// called on a current-thread runtime inside a [`tokio::task::LocalSet`].
/// That is what lets controller implementations go without locks.
pub struct ControlServer {
    controller: ControllerHandle,
    listening: Option<Listening>,
}

impl ControlServer {
    /// Creates a stopped server.
    ///
    /// Fails if the controller handle no longer upgrades.
    pub fn new(controller: ControllerHandle) -> Result<Self, ServerError> {
        if !controller.is_alive() {
            error!("recorder controller handle is dead");
            return Err(ServerError::DeadController);
        }

        Ok(Self {
            controller,
            listening: None,
        })
    }

    /// Binds `0.0.0.0:<port>` and starts accepting clients.
    ///
    /// Returns the bound address, so callers may pass port 0 and discover
    /// the actual port. On failure the server remains stopped.
    pub async fn start(&mut self, port: u16) -> Result<SocketAddr, ServerError> {
        if self.listening.is_some() {
            return Err(ServerError::AlreadyListening);
        }

        let listener = match TcpListener::bind(("0.0.0.0", port)).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(port, error = %e, "could not bind control server");
                return Err(ServerError::Bind(e));
            }
        };
        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;
        info!(%local_addr, "control server listening");

        let (shutdown, shutdown_rx) = watch::channel(false);
        let connections: ConnectionTable = Rc::new(RefCell::new(HashMap::new()));
        let accept_task = tokio::task::spawn_local(accept_loop(
            listener,
            shutdown_rx,
            Rc::clone(&connections),
            self.controller.clone(),
        ));

        self.listening = Some(Listening {
            local_addr,
            shutdown,
            accept_task,
            connections,
        });
        Ok(local_addr)
    }

    /// Closes the listener and drops all live connections.
    ///
    /// Safe to call while stopped.
    pub fn stop(&mut self) {
        let Some(listening) = self.listening.take() else {
            return;
        };

        let _ = listening.shutdown.send(true);
        listening.accept_task.abort();

        for (_, task) in listening.connections.borrow_mut().drain() {
            task.abort();
        }

        info!("control server stopped");
    }

    pub fn is_listening(&self) -> bool {
        self.listening.is_some()
    }

    /// The bound address while listening.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listening.as_ref().map(|l| l.local_addr)
    }
}

impl Drop for ControlServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn accept_loop(
    listener: TcpListener,
    mut shutdown: watch::Receiver<bool>,
    connections: ConnectionTable,
    controller: ControllerHandle,
) {
    let mut next_id: u64 = 0;

    loop {
        tokio::select! {
            res = listener.accept() => match res {
                Ok((stream, peer)) => {
                    let id = next_id;
                    next_id += 1;
                    debug!(%peer, id, "accepted control connection");

                    let table = Rc::clone(&connections);
                    let conn = Connection::new(stream, controller.clone());
                    let task = tokio::task::spawn_local(async move {
                        if let Err(e) = conn.serve().await {
                            warn!(%peer, error = %e, "connection failed");
                        }
                        if table.borrow_mut().remove(&id).is_none() {
                            warn!(id, "connection missing from table");
                        }
                    });
                    connections.borrow_mut().insert(id, task);
                }
                Err(e) => {
                    error!(error = %e, "accept failed");
                }
            },
            _ = shutdown.changed() => break,
        }
    }
}
