//! Bluetooth Low Energy advertisement classifier
//!
//! This decodes the advertising data of a BLE advertisement into an [`AdvertisementRecord`]. The
//! advertising data is a series of AD structures (see [`gap::assigned`]); the flags, the
//! security manager OOB flags, 16-bit UUID service data, and manufacturer specific data
//! structures are decoded, and the manufacturer data of Apple devices is further decoded into
//! [`continuity`] records.
//!
//! Decoding never fails. Malformed structures are skipped and a truncated structure ends
//! decoding, either way everything decoded before it is kept. The skipped data is reported with
//! [`log`](https://docs.rs/log) at the debug level.
//!
//! ```
//! use btle_classifier::continuity::Record;
//!
//! let record = btle_classifier::decode_hex("02011a0aff4c0010050b1c6d9072").unwrap();
//!
//! assert_eq!(
//!     record.flags().unwrap().labels(),
//!     [
//!         "LE General Discoverable Mode",
//!         "Simultaneous LE and BR/EDR (Controller)",
//!         "Simultaneous LE and BR/EDR (Host)",
//!     ]
//! );
//!
//! let manufacturer = record.manufacturer_specific().unwrap();
//!
//! assert_eq!("Apple", manufacturer.get_company_id().name());
//! assert!(matches!(
//!     manufacturer.get_records(),
//!     [Record::NearbyMessage { action_code: 11, .. }]
//! ));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod record;

pub use btle_continuity as continuity;
pub use btle_core::tlv;
pub use btle_gap as gap;
pub use hex::FromHexError;
pub use record::AdvertisementRecord;

/// Decode an advertisement
///
/// Input `advertisement` is the advertising data (or scan response data) of an advertising
/// packet.
///
/// ```
/// let record = btle_classifier::decode(&[0x05, 0x16, 0x0d, 0x18, 0x01, 0x02]);
///
/// assert_eq!("05160d180102", record.hex());
/// assert_eq!(0x180d, record.service_data().unwrap().get_uuid());
/// assert!(record.flags().is_none());
/// ```
pub fn decode(advertisement: &[u8]) -> AdvertisementRecord {
    decode_with_manufacturer_data(advertisement, &[])
}

/// Decode an advertisement along with separately provided manufacturer data
///
/// Some platforms provide the manufacturer specific data already removed from the advertising
/// data. Input `manufacturer_data` is the data of the manufacturer specific data structure, it
/// starts with the company identifier. It replaces any manufacturer specific data within
/// `advertisement` unless it is empty or too short to contain a company identifier.
pub fn decode_with_manufacturer_data(advertisement: &[u8], manufacturer_data: &[u8]) -> AdvertisementRecord {
    let mut record = AdvertisementRecord::new(advertisement);

    record.add_structures(advertisement);

    record.add_manufacturer_data(manufacturer_data);

    record
}

/// Decode an advertisement in hex text
///
/// Upper and lower case digits are accepted.
///
/// # Error
/// The text is not valid hex
pub fn decode_hex(text: &str) -> Result<AdvertisementRecord, FromHexError> {
    hex::decode(text).map(|bytes| decode(&bytes))
}
