//! One-shot datagram exchange against a single server.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use bytes::{Bytes, BytesMut};
use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;

use crate::error::QueryError;
use crate::protocol::constants::MAX_DATAGRAM_SIZE;

/// UDP socket bound for one top-level query.
///
/// Both exchanges of a query go through the same socket so that any
/// session or firewall state keyed to the source port stays consistent.
/// Sockets are never pooled; the socket is released when this is dropped,
/// on every exit path.
pub struct QuerySocket {
    socket: UdpSocket,
    target: SocketAddr,
}

impl QuerySocket {
    /// Resolves `host:port` and binds a fresh ephemeral socket.
    pub async fn open(host: &str, port: u16) -> Result<Self, QueryError> {
        let target = lookup_host((host, port))
            .await?
            .next()
            .ok_or_else(|| QueryError::Resolve(format!("{host}:{port}")))?;
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        Ok(Self { socket, target })
    }

    /// Sends one request datagram and waits for one reply.
    ///
    /// Returns the reply bytes together with the time elapsed between the
    /// send and the receive. A missed `deadline` is reported as
    /// [`QueryError::Timeout`], distinct from other I/O failures. No
    /// retransmission is attempted at this layer.
    pub async fn exchange(
        &self,
        payload: &[u8],
        deadline: Duration,
    ) -> Result<(Bytes, Duration), QueryError> {
        let started = Instant::now();
        self.socket.send_to(payload, self.target).await?;

        let mut buf = BytesMut::zeroed(MAX_DATAGRAM_SIZE);
        let (len, _peer) = timeout(deadline, self.socket.recv_from(&mut buf))
            .await
            .map_err(|_| QueryError::Timeout)??;
        buf.truncate(len);
        Ok((buf.freeze(), started.elapsed()))
    }

    /// The resolved server address this socket talks to.
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}
