//! Compensation for mislabeled server text encoding.

/// Decodes wire text that is nominally Latin-1 but frequently actual UTF-8.
///
/// The protocol declares a single-byte Western encoding, one byte per code
/// point, yet deployed servers routinely put UTF-8 into those fields.
/// Reading the bytes as Latin-1 and reinterpreting each resulting code point
/// as a raw byte reproduces the wire bytes exactly, so the recovery step is
/// a strict UTF-8 decode of the input; when that fails the Latin-1 reading
/// is kept unchanged. The fallback order is load-bearing: already-deployed
/// consumers see these strings as server names and map names.
pub fn recode(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_owned(),
        Err(_) => raw.iter().map(|&b| b as char).collect(),
    }
}
