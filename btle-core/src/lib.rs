//! Core items shared by the advertising data crates
//!
//! `btle-core` is the base crate for the other crates within this workspace. It contains the
//! record cursors used to walk the length prefixed streams found within advertising data, along
//! with the little-endian word read. Things within this crate are generally re-exported by the crates that
//! use them.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod tlv;

/// Read a little-endian 16 bit word
///
/// The word is read from the first two bytes of `bytes`. All 16 bit fields within advertising
/// data (UUIDs, company identifiers, sequence numbers) are transmitted with the least significant
/// byte first.
///
/// `None` is returned if `bytes` contains less than two bytes.
///
/// ```
/// # use btle_core::read_u16_le;
/// assert_eq!(Some(0x180d), read_u16_le(&[0x0d, 0x18, 0xff]));
///
/// assert_eq!(None, read_u16_le(&[0x4c]));
/// ```
pub fn read_u16_le(bytes: &[u8]) -> Option<u16> {
    match *bytes {
        [low, high, ..] => Some(u16::from_le_bytes([low, high])),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn company_id_is_low_byte_first() {
        assert_eq!(Some(0x004c), read_u16_le(&[0x4c, 0x00]));

        assert_eq!(Some(0x0006), read_u16_le(&[0x06, 0x00]));

        assert_eq!(Some(0x1502), read_u16_le(&[0x02, 0x15]));
    }

    #[test]
    fn short_input() {
        assert_eq!(None, read_u16_le(&[]));
    }
}
