//! Manufacturer Specific Data
//!
//! The data starts with the two byte company identifier assigned by the Bluetooth SIG, the rest
//! is defined by that company. Only Apple's format (Continuity) is decoded further, the payload of
//! every other company is kept as raw bytes.

use super::*;
use btle_continuity::Record;

/// A company identifier
///
/// Only the companies whose name is known are their own variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompanyId {
    Microsoft,
    Apple,
    Other(u16),
}

impl CompanyId {
    pub const fn val(&self) -> u16 {
        match *self {
            CompanyId::Microsoft => 0x0006,
            CompanyId::Apple => 0x004C,
            CompanyId::Other(val) => val,
        }
    }

    /// Get the name of the company
    ///
    /// This is `"??"` for an unnamed company.
    pub const fn name(&self) -> &'static str {
        match *self {
            CompanyId::Microsoft => "Microsoft",
            CompanyId::Apple => "Apple",
            CompanyId::Other(_) => "??",
        }
    }
}

impl From<u16> for CompanyId {
    fn from(val: u16) -> Self {
        match val {
            0x0006 => CompanyId::Microsoft,
            0x004C => CompanyId::Apple,
            _ => CompanyId::Other(val),
        }
    }
}

impl core::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} ({:#06x})", self.name(), self.val())
    }
}

/// Manufacturer specific data
///
/// ```
/// # use btle_gap::assigned::manufacturer_data::{CompanyId, ManufacturerData};
/// let data = ManufacturerData::try_from_payload(&[0x06, 0x00, 0x01, 0x09]).unwrap();
///
/// assert_eq!(CompanyId::Microsoft, data.get_company_id());
/// assert_eq!(&[0x01, 0x09], data.get_data());
/// assert!(data.get_records().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManufacturerData {
    company_id: CompanyId,
    data: Vec<u8>,
    records: Vec<Record>,
}

impl ManufacturerData {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::ManufacturerSpecificData;

    /// Try to create `ManufacturerData` from the data of the structure
    ///
    /// Input `payload` starts with the company identifier. This is also the format of the
    /// manufacturer data that some platforms provide already separated from the advertising data.
    ///
    /// # Errors
    /// `payload` is too short to contain a company identifier.
    pub fn try_from_payload(payload: &[u8]) -> Result<Self, Error> {
        let id = btle_core::read_u16_le(payload).ok_or(Error::IncorrectLength {
            required: core::mem::size_of::<u16>(),
            remaining: payload.len(),
        })?;

        let company_id = CompanyId::from(id);

        let data = &payload[core::mem::size_of::<u16>()..];

        let records = match company_id {
            CompanyId::Apple => btle_continuity::decode(data),
            _ => Vec::new(),
        };

        log::trace!(
            "(GAP) manufacturer data from {} with {} continuity records",
            company_id,
            records.len()
        );

        Ok(ManufacturerData {
            company_id,
            data: data.to_vec(),
            records,
        })
    }

    pub fn get_company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Get the company defined data
    ///
    /// This is the data after the company identifier.
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Get the decoded Continuity messages
    ///
    /// This is always empty when the company is not Apple.
    pub fn get_records(&self) -> &[Record] {
        &self.records
    }

    /// Check if this is an iBeacon
    ///
    /// An iBeacon is Apple data that starts with the iBeacon type (`0x02`) and a length of 21
    /// bytes.
    pub fn is_ibeacon(&self) -> bool {
        self.company_id == CompanyId::Apple && self.data.starts_with(&[0x02, 0x15])
    }
}

impl TryFromStruct<'_> for ManufacturerData {
    fn try_from_struct(st: EirOrAdStruct<'_>) -> Result<Self, Error>
    where
        Self: Sized,
    {
        if st.get_type() != Self::ASSIGNED_TYPE.val() {
            return Err(Error::IncorrectAssignedType);
        }

        Self::try_from_payload(st.get_data())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ManufacturerData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut st = serializer.serialize_struct("ManufacturerData", 4)?;

        st.serialize_field("company_id", &self.company_id.val())?;
        st.serialize_field("company_raw", &hex::encode(&self.data))?;
        st.serialize_field("company_name", self.company_id.name())?;
        st.serialize_field("records", &self.records)?;

        st.end()
    }
}
