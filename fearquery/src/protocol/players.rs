//! Decoder for the player roster reply.

use crate::protocol::constants::PLAYERS_PREAMBLE;
use crate::protocol::read_cstring;
use crate::status::PlayerRecord;

/// Parses a player-list reply into per-player records.
///
/// The reply carries a declared player count, then the field-name schema the
/// server chose for this response (ended by an empty name), then one value
/// per schema field per player. The roster never exceeds the declared count
/// but may fall short when the buffer truncates; a record that collected at
/// least one complete field is kept. Never errors.
pub fn decode_players(data: &[u8]) -> Vec<PlayerRecord> {
    let mut roster = Vec::new();

    if data.len() < 6 || data[..PLAYERS_PREAMBLE.len()] != PLAYERS_PREAMBLE {
        return roster;
    }

    let mut pos = PLAYERS_PREAMBLE.len();

    // Some servers pad the preamble with one extra null.
    if data.get(pos) == Some(&0x00) {
        pos += 1;
    }

    let Some(&declared) = data.get(pos) else {
        return roster;
    };
    pos += 1;

    let mut schema = Vec::new();
    while pos < data.len() && data[pos] != 0x00 {
        let Some(name) = read_cstring(data, &mut pos) else {
            break;
        };
        schema.push(name);
    }

    // Second null of the double-null schema terminator.
    if data.get(pos) == Some(&0x00) {
        pos += 1;
    }

    for _ in 0..declared {
        if pos >= data.len() {
            break;
        }
        let mut record = PlayerRecord::new();
        for field in &schema {
            let Some(value) = read_cstring(data, &mut pos) else {
                break;
            };
            record.insert(field.clone(), value);
        }
        if !record.is_empty() {
            roster.push(record);
        }
    }

    roster
}
