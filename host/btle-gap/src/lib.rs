//! Generic Access Profile data formats
//!
//! This crate contains the decoding side of the data formats the Generic Access Profile (GAP)
//! defines for advertising data. Advertising data is a series of *AD structures*, each being a
//! length byte, a type byte (the *assigned number* of the data), and the data. The Bluetooth
//! Specification only provides for this high level format; the SIG assigns the type numbers and
//! formalizes the data format of each. Only some of those data formats are implemented within
//! [`assigned`].
//!
//! ```
//! # use btle_gap::assigned::{self, flags::{FlagLabel, Flags}, EirOrAdIterator};
//! let advertising_data = [0x02, 0x01, 0x06, 0x03, 0xff, 0x4c, 0x00];
//!
//! let mut structures = EirOrAdIterator::new(&advertising_data).silent();
//!
//! let flags: Flags = structures.next().unwrap().try_into().unwrap();
//!
//! assert!(flags.get_flag(FlagLabel::LeGeneralDiscoverableMode).is_enabled());
//! assert!(flags.get_flag(FlagLabel::BrEdrNotSupported).is_enabled());
//!
//! let manufacturer: assigned::manufacturer_data::ManufacturerData =
//!     structures.next().unwrap().try_into().unwrap();
//!
//! assert_eq!("Apple", manufacturer.get_company_id().name());
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod assigned;
