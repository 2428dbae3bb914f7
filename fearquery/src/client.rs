//! Two-phase query orchestration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::QueryError;
use crate::protocol::constants::{DETAILS_REQUEST, PLAYERS_REQUEST};
use crate::protocol::details::decode_details;
use crate::protocol::players::decode_players;
use crate::status::ServerStatus;
use crate::transport::QuerySocket;

/// Queries one server for its status and, when it reports players, its roster.
///
/// Runs the two exchanges strictly in sequence on one socket: details first
/// with the full `timeout`, then the roster with half of it. Never fails:
/// a phase-one transport problem comes back as an offline [`ServerStatus`]
/// with `error` set, and a phase-two problem leaves the phase-one result
/// standing with an empty roster.
pub async fn query(host: &str, port: u16, timeout: Duration) -> ServerStatus {
    let mut status = ServerStatus::default();

    let socket = match QuerySocket::open(host, port).await {
        Ok(socket) => socket,
        Err(err) => {
            status.error = err.to_string();
            return status;
        }
    };

    let (reply, elapsed) = match socket.exchange(&DETAILS_REQUEST, timeout).await {
        Ok(reply) => reply,
        Err(QueryError::Timeout) => {
            status.error = "timeout receiving details".to_string();
            return status;
        }
        Err(err) => {
            status.error = err.to_string();
            return status;
        }
    };

    // Any reply at all counts as online, even one that fails to parse.
    status.online = true;
    status.ping_ms = elapsed.as_millis() as i64;
    debug!(server = %socket.target(), len = reply.len(), "details reply received");

    let details = decode_details(&reply);
    apply_details(&mut status, &details);

    if status.current_players > 0 {
        query_players(&socket, timeout / 2, &mut status).await;
    }

    status
}

/// Derives the status fields from the decoded key/value pairs.
fn apply_details(status: &mut ServerStatus, details: &HashMap<String, String>) {
    status.server_name = text_field(details, "hostname");
    status.map = text_field(details, "mapname");
    status.game_version = details
        .get("gamever")
        .or_else(|| details.get("version"))
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());
    status.game_type = text_field(details, "gametype");
    status.max_players = counter_field(details, "maxplayers");
    status.current_players = counter_field(details, "numplayers");
}

fn text_field(details: &HashMap<String, String>, key: &str) -> String {
    details
        .get(key)
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Counters that are missing or fail to parse read as zero rather than as an
/// error; downstream consumers treat a malformed but reachable server as
/// online with unknown stats.
fn counter_field(details: &HashMap<String, String>, key: &str) -> u32 {
    details.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Second exchange for the roster. Failures here are tolerated; some servers
/// never answer the player query.
async fn query_players(socket: &QuerySocket, deadline: Duration, status: &mut ServerStatus) {
    match socket.exchange(&PLAYERS_REQUEST, deadline).await {
        Ok((reply, _)) => {
            status.player_list = decode_players(&reply);
        }
        Err(QueryError::Timeout) => {
            warn!(server = %socket.target(), "player query timed out");
        }
        Err(err) => {
            warn!(server = %socket.target(), "player query failed: {err}");
        }
    }
}
