//! Apple Continuity messages
//!
//! Apple devices advertise their state with manufacturer specific data under Apple's company
//! identifier (`0x004C`). The company payload is a series of *Continuity messages*, each made up
//! of one byte for the message type, one byte for the length, and the message data. This crate
//! decodes those messages into a [`Record`].
//!
//! The message formats are not published by Apple, they come from reverse engineering. Only the
//! messages whose layout is known are decoded into fields, every other message type becomes a
//! [`Record::Unknown`].
//!
//! ```
//! # use btle_continuity::{decode, Record};
//! // company payload of manufacturer specific data with company id 0x004C
//! let payload = [0x10, 0x05, 0x0b, 0x1c, 0x6d, 0x90, 0x72];
//!
//! let records = decode(&payload);
//!
//! assert_eq!(
//!     records,
//!     [Record::NearbyMessage {
//!         location_sharing: 0,
//!         action_code: 11,
//!         action_code_text: "Active User",
//!     }]
//! );
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod record;
mod types;

pub use record::{nearby_action_text, Record};
pub use types::ContinuityType;

use alloc::vec::Vec;
use btle_core::tlv::TypeLengthValueIter;

/// Error for a message whose data is too short for its type
///
/// The message is skipped but the messages after it are still decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "continuity message type {type_code:#04x} requires {required} data bytes but only {remaining} \
    are present"
)]
pub struct MessageTooShort {
    /// The message type
    pub type_code: u8,
    /// The number of data bytes required by the message type
    pub required: usize,
    /// The number of data bytes within the message
    pub remaining: usize,
}

/// An iterator over the Continuity messages within a company payload
///
/// Iteration ends at the first message whose length runs past the end of the payload. Messages
/// that are too short for their type are returned as an error, the iterator continues with the
/// next message.
#[derive(Clone, Debug)]
pub struct MessageIter<'a>(TypeLengthValueIter<'a>);

impl<'a> MessageIter<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        MessageIter(TypeLengthValueIter::new(payload))
    }

    /// Get the bytes not yet consumed
    ///
    /// This is the truncated message (if any) once the iterator is exhausted.
    pub fn remainder(&self) -> &'a [u8] {
        self.0.remainder()
    }
}

impl Iterator for MessageIter<'_> {
    type Item = Result<Record, MessageTooShort>;

    fn next(&mut self) -> Option<Self::Item> {
        let (type_code, data) = self.0.next()?;

        let record = Record::try_from_parts(type_code, data);

        if let Ok(ref record) = record {
            log::trace!("(CONTINUITY) decoded {:?}", record);
        }

        Some(record)
    }
}

impl core::iter::FusedIterator for MessageIter<'_> {}

/// Decode the Continuity messages of an Apple company payload
///
/// The input is the manufacturer specific data *after* the two byte company identifier. Records
/// are returned in the order the messages appear.
pub fn decode(payload: &[u8]) -> Vec<Record> {
    let mut iter = MessageIter::new(payload);

    let mut records = Vec::new();

    for message in iter.by_ref() {
        match message {
            Ok(record) => records.push(record),
            Err(e) => log::debug!("(CONTINUITY) skipping message, {}", e),
        }
    }

    if !iter.remainder().is_empty() {
        log::debug!(
            "(CONTINUITY) dropping {} trailing bytes of a truncated message",
            iter.remainder().len()
        );
    }

    records
}
