//! Decoder for the details ("full status") reply.

use std::collections::HashMap;

use crate::protocol::constants::DETAILS_PREAMBLE;
use crate::protocol::read_cstring;

/// Parses a details reply into its key/value pairs.
///
/// Keys are lower-cased before insertion and a later duplicate overwrites an
/// earlier one; empty keys are skipped. An immediate null where the next key
/// would start is the server's own end-of-list marker. Input that is too
/// short, carries the wrong preamble, or truncates mid-pair yields whatever
/// pairs were already complete, never an error.
pub fn decode_details(data: &[u8]) -> HashMap<String, String> {
    let mut pairs = HashMap::new();

    if data.len() < DETAILS_PREAMBLE.len() || data[..DETAILS_PREAMBLE.len()] != DETAILS_PREAMBLE {
        return pairs;
    }

    let mut pos = DETAILS_PREAMBLE.len();
    while pos < data.len() {
        let Some(key) = read_cstring(data, &mut pos) else {
            break;
        };
        let Some(value) = read_cstring(data, &mut pos) else {
            break;
        };

        if !key.is_empty() {
            pairs.insert(key.to_lowercase(), value);
        }

        if data.get(pos) == Some(&0x00) {
            break;
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(pairs: &[(&str, &str)]) -> Vec<u8> {
        let mut data = DETAILS_PREAMBLE.to_vec();
        for (key, value) in pairs {
            data.extend_from_slice(key.as_bytes());
            data.push(0x00);
            data.extend_from_slice(value.as_bytes());
            data.push(0x00);
        }
        data.push(0x00);
        data
    }

    #[test]
    fn well_formed_reply_decodes_all_pairs() {
        let data = reply(&[
            ("hostname", "MyServer"),
            ("mapname", "map1"),
            ("maxplayers", "64"),
            ("numplayers", "3"),
        ]);
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs["hostname"], "MyServer");
        assert_eq!(pairs["mapname"], "map1");
        assert_eq!(pairs["maxplayers"], "64");
        assert_eq!(pairs["numplayers"], "3");
    }

    #[test]
    fn short_buffer_decodes_to_empty_map() {
        assert!(decode_details(&[]).is_empty());
        assert!(decode_details(&[0x00, 0x43, 0x4F, 0x52]).is_empty());
    }

    #[test]
    fn wrong_preamble_decodes_to_empty_map() {
        let mut data = reply(&[("hostname", "MyServer")]);
        data[4] = 0x58;
        assert!(decode_details(&data).is_empty());
    }

    #[test]
    fn keys_are_lowercased_and_duplicates_overwrite() {
        let data = reply(&[("HostName", "First"), ("hostname", "Second")]);
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs["hostname"], "Second");
    }

    #[test]
    fn empty_keys_are_skipped() {
        let data = reply(&[("", "orphan"), ("mapname", "map1")]);
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs["mapname"], "map1");
    }

    #[test]
    fn truncation_mid_value_keeps_earlier_pairs() {
        let mut data = DETAILS_PREAMBLE.to_vec();
        data.extend_from_slice(b"hostname\0MyServer\0mapname\0map");
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs["hostname"], "MyServer");
    }

    #[test]
    fn truncation_mid_key_keeps_earlier_pairs() {
        let mut data = DETAILS_PREAMBLE.to_vec();
        data.extend_from_slice(b"hostname\0MyServer\0mapn");
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn end_marker_stops_before_trailing_bytes() {
        let mut data = reply(&[("hostname", "MyServer")]);
        data.extend_from_slice(b"garbage\0after\0");
        let pairs = decode_details(&data);
        assert_eq!(pairs.len(), 1);
        assert!(!pairs.contains_key("garbage"));
    }

    #[test]
    fn values_go_through_the_text_recoder() {
        let data = reply(&[("hostname", "\u{dc}berserver")]);
        assert_eq!(decode_details(&data)["hostname"], "Überserver");
    }
}
