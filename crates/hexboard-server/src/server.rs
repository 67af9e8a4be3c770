//! WebSocket server and connection handling.

use dashmap::DashMap;
use futures_util::{SinkExt, StreamExt};
use hexboard_core::{Board, BoardError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Server state shared across all connections.
pub struct ServerState {
    /// Board currently served; replaced as a whole, never edited in place
    board: RwLock<Arc<Board>>,
    /// Mapping from client ID to their message sender
    pub clients: DashMap<Uuid, mpsc::UnboundedSender<String>>,
}

impl ServerState {
    pub fn new(board: Board) -> Self {
        Self {
            board: RwLock::new(Arc::new(board)),
            clients: DashMap::new(),
        }
    }

    /// The current board snapshot.
    pub async fn board(&self) -> Arc<Board> {
        Arc::clone(&*self.board.read().await)
    }

    /// Add a client and return the receiving end of its message channel.
    pub fn register(&self, client_id: Uuid) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.clients.insert(client_id, tx);
        info!("client registered, total clients: {}", self.clients.len());
        rx
    }

    pub fn unregister(&self, client_id: Uuid) {
        if self.clients.remove(&client_id).is_some() {
            info!("client unregistered, total clients: {}", self.clients.len());
        }
    }

    /// Send a payload to every client. Clients whose channel has closed are
    /// dropped. Returns how many clients received it.
    pub fn broadcast(&self, payload: &str) -> usize {
        let mut closed = Vec::new();
        let mut delivered = 0;

        for client in self.clients.iter() {
            if client.value().send(payload.to_owned()).is_ok() {
                delivered += 1;
            } else {
                closed.push(*client.key());
            }
        }

        for client_id in closed {
            warn!("error sending board to client {}", client_id);
            self.unregister(client_id);
        }

        delivered
    }

    /// Publish the outcome of a generation cycle.
    ///
    /// A new board replaces the snapshot and goes out to every client. On a
    /// failed cycle the previous board stays in place. Returns whether the
    /// snapshot changed.
    pub async fn publish(&self, generated: Result<Board, BoardError>) -> bool {
        let board = match generated {
            Ok(board) => board,
            Err(e) => {
                warn!("board generation failed, keeping previous board: {}", e);
                return false;
            }
        };

        let payload = match board.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                error!("error serializing board: {}", e);
                return false;
            }
        };

        *self.board.write().await = Arc::new(board);
        let delivered = self.broadcast(&payload);
        info!("board updated, sent to {} clients", delivered);
        true
    }
}

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr, state: Arc<ServerState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Hexboard server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, state).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    state: Arc<ServerState>,
) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    info!("Connected: {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    let client_id = Uuid::new_v4();
    let mut rx = state.register(client_id);

    // New clients get the current board right away
    let initial = state.board().await.to_json()?;
    if let Err(e) = ws_sender.send(Message::Text(initial)).await {
        state.unregister(client_id);
        return Err(e.into());
    }

    // Spawn task to forward messages from channel to WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if ws_sender.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    });

    // Clients have nothing to say; read until they leave
    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Close(_)) => break,
            Err(e) => {
                warn!("WebSocket error from {}: {}", addr, e);
                break;
            }
            _ => {}
        }
    }

    state.unregister(client_id);
    send_task.abort();

    info!("Disconnected: {}", addr);
    Ok(())
}
