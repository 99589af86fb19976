//! Byte-slice helpers and the [`DataExt`] extension trait.

use crate::hex::{self, HexOptions};
use crate::structured::{self, KeyValueMapping, ParseError};

/// Copy `bytes` into an owned, indexable array of `u8`.
pub fn bytes_array(bytes: &[u8]) -> Vec<u8> {
    bytes.to_vec()
}

/// Convenience methods on byte sequences.
///
/// Implemented for `[u8]`, so it is available on `Vec<u8>`, arrays and
/// `bytes::Bytes` through deref.
///
/// ```
/// use bytekit_core::{DataExt, HexOptions};
///
/// let data = b"hi".to_vec();
/// assert_eq!(data.to_hex_string(HexOptions::new().with_leader(true)), "0x6869");
/// assert_eq!(data.bytes_array(), vec![0x68, 0x69]);
/// ```
pub trait DataExt {
    /// Hex text of these bytes, see [`hex::encode`].
    fn to_hex_string(&self, options: HexOptions) -> String;

    /// Owned copy of these bytes, see [`bytes_array`].
    fn bytes_array(&self) -> Vec<u8>;

    /// Parse these bytes as a JSON object, see [`structured::to_mapping`].
    fn to_mapping(&self) -> Result<KeyValueMapping, ParseError>;
}

impl DataExt for [u8] {
    fn to_hex_string(&self, options: HexOptions) -> String {
        hex::encode(self, options)
    }

    fn bytes_array(&self) -> Vec<u8> {
        bytes_array(self)
    }

    fn to_mapping(&self) -> Result<KeyValueMapping, ParseError> {
        structured::to_mapping(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_array_preserves_order() {
        let data: Vec<u8> = (1..=10).rev().collect();
        let array = bytes_array(&data);
        assert_eq!(array.len(), 10);
        for (index, byte) in array.iter().enumerate() {
            assert_eq!(*byte as usize, 10 - index);
        }
    }

    #[test]
    fn test_bytes_array_empty() {
        assert!(bytes_array(&[]).is_empty());
    }

    #[test]
    fn test_ext_on_bytes() {
        let data = bytes::Bytes::from_static(b"{\"k\": 1}");
        assert_eq!(data.bytes_array(), b"{\"k\": 1}".to_vec());
        assert_eq!(data.to_hex_string(HexOptions::new()), "7B226B223A20317D");
        assert_eq!(data.to_mapping().unwrap().len(), 1);
    }
}
