//! Snapshot data model returned by a query.

use std::collections::HashMap;
use std::fmt;

/// Per-player fields keyed by the field names the server's own roster schema
/// declared for this response. The field set varies per query and per server.
pub type PlayerRecord = HashMap<String, String>;

/// Snapshot of one server produced by a single query invocation.
///
/// Constructed at the start of a query, populated while it runs, and handed
/// back as a plain value; nothing is shared or cached between queries.
#[derive(Debug, Clone)]
pub struct ServerStatus {
    /// Whether any reply arrived for the first exchange, independent of
    /// whether its contents parsed.
    pub online: bool,
    pub server_name: String,
    pub map: String,
    pub game_version: String,
    pub game_type: String,
    pub max_players: u32,
    pub current_players: u32,
    /// Milliseconds from the first send to the first receive, `-1` when no
    /// reply arrived.
    pub ping_ms: i64,
    /// Empty unless a failure occurred.
    pub error: String,
    pub player_list: Vec<PlayerRecord>,
}

impl Default for ServerStatus {
    fn default() -> Self {
        Self {
            online: false,
            server_name: String::new(),
            map: String::new(),
            game_version: String::new(),
            game_type: String::new(),
            max_players: 0,
            current_players: 0,
            ping_ms: -1,
            error: String::new(),
            player_list: Vec::new(),
        }
    }
}

impl ServerStatus {
    /// Display name of one roster entry: `playername`, falling back to
    /// `name`, else `"Unknown"`.
    fn player_name(record: &PlayerRecord) -> &str {
        record
            .get("playername")
            .or_else(|| record.get("name"))
            .map(String::as_str)
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.online {
            return write!(f, "Offline");
        }

        write!(
            f,
            "{}/{} players on {}",
            self.current_players, self.max_players, self.map
        )?;

        if self.ping_ms > 0 {
            write!(f, " (ping: {}ms)", self.ping_ms)?;
        }

        if !self.player_list.is_empty() {
            let names: Vec<&str> = self.player_list.iter().map(Self::player_name).collect();
            write!(f, "\nPlayers: {}", names.join(", "))?;
        }

        Ok(())
    }
}
