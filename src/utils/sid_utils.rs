//! Binary security identifier decoding.
//!
//! Directory services store SIDs as a packed structure:
//! revision (1 byte), sub-authority count (1 byte), a 48-bit big-endian
//! identifier authority, then `count` little-endian 32-bit sub-authorities.

use thiserror::Error;

const HEADER_LEN: usize = 8;
const MAX_SUB_AUTHORITIES: u8 = 15;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SidError {
    #[error("SID truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("SID declares {0} sub-authorities, at most 15 are allowed")]
    TooManySubAuthorities(u8),

    #[error("Invalid hex input: {0}")]
    InvalidHex(String),
}

/// Renders a binary SID as `S-{revision}-{authority}-{sub}...`.
pub fn decode_sid(data: &[u8]) -> Result<String, SidError> {
    if data.len() < HEADER_LEN {
        return Err(SidError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }

    let revision = data[0];
    let count = data[1];
    if count > MAX_SUB_AUTHORITIES {
        return Err(SidError::TooManySubAuthorities(count));
    }

    let expected = HEADER_LEN + usize::from(count) * 4;
    if data.len() < expected {
        return Err(SidError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let authority = data[2..HEADER_LEN]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    let mut sid = if authority >= 1 << 32 {
        format!("S-{}-0x{:012X}", revision, authority)
    } else {
        format!("S-{}-{}", revision, authority)
    };

    for chunk in data[HEADER_LEN..expected].chunks_exact(4) {
        let sub = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        sid.push('-');
        sid.push_str(&sub.to_string());
    }

    Ok(sid)
}

/// Decodes a hex string (as shown by LDAP tools) and renders the SID.
pub fn decode_sid_hex(input: &str) -> Result<String, SidError> {
    let bytes = hex::decode(input.trim()).map_err(|e| SidError::InvalidHex(e.to_string()))?;
    decode_sid(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    // S-1-5-32-544, BUILTIN\Administrators
    const ADMINISTRATORS: &str = "01020000000000052000000020020000";

    #[test]
    fn test_decode_well_known_sid() {
        assert_eq!(decode_sid_hex(ADMINISTRATORS).unwrap(), "S-1-5-32-544");
    }

    #[test]
    fn test_decode_domain_sid() {
        let mut data = vec![1u8, 5, 0, 0, 0, 0, 0, 5];
        for sub in [21u32, 1_004_336_348, 1_177_238_915, 682_003_330, 1_105] {
            data.extend_from_slice(&sub.to_le_bytes());
        }
        assert_eq!(
            decode_sid(&data).unwrap(),
            "S-1-5-21-1004336348-1177238915-682003330-1105"
        );
    }

    #[test]
    fn test_decode_large_authority_uses_hex() {
        let data = [1u8, 0, 0x01, 0, 0, 0, 0, 0];
        assert_eq!(decode_sid(&data).unwrap(), "S-1-0x010000000000");
    }

    #[test]
    fn test_truncated_sid() {
        let err = decode_sid(&[1, 2, 0, 0, 0, 0, 0, 5, 32, 0]).unwrap_err();
        assert_eq!(err, SidError::Truncated { expected: 16, actual: 10 });
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!(matches!(decode_sid_hex("zz"), Err(SidError::InvalidHex(_))));
    }
}
