//! Hexadecimal encoding of byte sequences.
//!
//! The encoder produces one of three shapes: contiguous digits, `0x`-led
//! digits, or digits grouped eight at a time with single spaces. The
//! decoder accepts any of them (and mixes of them) and rejects everything
//! else.

use data_encoding::{HEXLOWER_PERMISSIVE, HEXUPPER};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Literal prefix marking a string as hexadecimal.
pub const HEX_LEADER: &str = "0x";

/// Number of source bytes per space-separated group.
const GROUP_BYTES: usize = 4;

/// Formatting options for [`encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HexOptions {
    /// Insert a space after every eight hex digits.
    pub spaces: bool,
    /// Prepend [`HEX_LEADER`].
    pub leader: bool,
}

impl HexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spaces(mut self, spaces: bool) -> Self {
        self.spaces = spaces;
        self
    }

    pub fn with_leader(mut self, leader: bool) -> Self {
        self.leader = leader;
        self
    }
}

/// Encode `bytes` as uppercase hex digits, high nibble first.
///
/// ```
/// use bytekit_core::hex::{self, HexOptions};
///
/// assert_eq!(hex::encode(&[0xde, 0xad, 0xbe], HexOptions::new()), "DEADBE");
/// assert_eq!(
///     hex::encode(&[0xde, 0xad, 0xbe], HexOptions::new().with_spaces(true)),
///     "DEADBE"
/// );
/// assert_eq!(
///     hex::encode(&[0xde, 0xad, 0xbe, 0xef, 0x01], HexOptions::new().with_spaces(true)),
///     "DEADBEEF 01"
/// );
/// assert_eq!(hex::encode(&[], HexOptions::new().with_leader(true)), "0x");
/// ```
pub fn encode(bytes: &[u8], options: HexOptions) -> String {
    let digits = bytes.len() * 2;
    let separators = if options.spaces {
        bytes.len().div_ceil(GROUP_BYTES).saturating_sub(1)
    } else {
        0
    };
    let mut out = String::with_capacity(HEX_LEADER.len() + digits + separators);

    if options.leader {
        out.push_str(HEX_LEADER);
    }

    if options.spaces {
        for (i, group) in bytes.chunks(GROUP_BYTES).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            HEXUPPER.encode_append(group, &mut out);
        }
    } else {
        HEXUPPER.encode_append(bytes, &mut out);
    }
    out
}

/// Decode a hex string produced by [`encode`] with any options.
///
/// A leading `0x` is stripped and spaces are ignored wherever they appear.
/// Digits are case-insensitive. Returns `None` if any other character is
/// present or the number of digits is odd.
pub fn decode(text: &str) -> Option<Vec<u8>> {
    let text = text.strip_prefix(HEX_LEADER).unwrap_or(text);
    let cleaned: Vec<u8> = text.bytes().filter(|&b| b != b' ').collect();

    if let Some(pos) = cleaned.iter().position(|b| !b.is_ascii_hexdigit()) {
        debug!(position = pos, "rejecting hex string: non-hex character");
        return None;
    }
    if cleaned.len() % 2 != 0 {
        debug!(
            digits = cleaned.len(),
            "rejecting hex string: odd number of digits"
        );
        return None;
    }

    HEXLOWER_PERMISSIVE.decode(&cleaned).ok()
}
