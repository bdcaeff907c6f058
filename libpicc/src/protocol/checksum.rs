// libpicc/src/protocol/checksum.rs

/// Longitudinal redundancy check: XOR of every byte in `bytes`.
///
/// On the wire the LRC covers LEN through the last BODY byte; STX, the LRC
/// itself and ETX are excluded. Callers pass exactly that range.
pub fn lrc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}
