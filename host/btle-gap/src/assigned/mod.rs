//! Assigned numbers and the associated data formats
//!
//! The assigned numbers for GAP come from the Bluetooth SIG and can be found on the official
//! [Bluetooth](https://www.bluetooth.com/specifications/assigned-numbers/) webpage. These numbers
//! are used to identify the meaning and corresponding data format for whoever is the receiver. GAP
//! assigned numbers are used within Extended Inquiry Response (EIR), Advertising Data (AD), and
//! out of band (OOB) pairing (which is different for BR/EDR and LE).
//!
//! While data assigned a number is used in different places, the general format for the container
//! of the data is the same. One byte for length, one byte for the assigned number, and multiple
//! bytes for the data. There are two names for these containers, they are *EIR struct* and *AD
//! struct*.

pub mod flags;
pub mod manufacturer_data;
pub mod service_data;
pub mod sm_oob_flags;

use alloc::vec::Vec;
use btle_core::tlv::LengthValueIter;

/// Create `AssignedTypes` from a list of `Variant = number, "name"`
///
/// Every number in the list must be unique, the generated `from_val` has one arm per number.
macro_rules! assigned_types {
    ( $( $(#[$attr:meta])* $variant:ident = $val:literal, $name:literal; )* ) => {
        /// The AD types with a number assigned by the Bluetooth SIG
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum AssignedTypes {
            $( $(#[$attr])* $variant, )*
        }

        impl AssignedTypes {
            /// Get the assigned number
            pub const fn val(&self) -> u8 {
                match *self {
                    $( AssignedTypes::$variant => $val, )*
                }
            }

            /// Get the assigned type of an AD type byte
            ///
            /// A few numbers are shared by two data types (for example `0x10` is both the *Device
            /// ID* and the *Security Manager TK Value*). The LE meaning is returned for these.
            /// `None` is returned for a number that is not assigned.
            pub const fn from_val(val: u8) -> Option<Self> {
                match val {
                    $( $val => Some(AssignedTypes::$variant), )*
                    _ => None,
                }
            }

            /// Get the name the Bluetooth SIG gives the data type
            pub const fn name(&self) -> &'static str {
                match *self {
                    $( AssignedTypes::$variant => $name, )*
                }
            }
        }
    };
}

assigned_types! {
    Flags = 0x01, "Flags";
    Incomplete16BitServiceUuids = 0x02, "Incomplete List of 16-bit Service Class UUIDs";
    Complete16BitServiceUuids = 0x03, "Complete List of 16-bit Service Class UUIDs";
    Incomplete32BitServiceUuids = 0x04, "Incomplete List of 32-bit Service Class UUIDs";
    Complete32BitServiceUuids = 0x05, "Complete List of 32-bit Service Class UUIDs";
    Incomplete128BitServiceUuids = 0x06, "Incomplete List of 128-bit Service Class UUIDs";
    Complete128BitServiceUuids = 0x07, "Complete List of 128-bit Service Class UUIDs";
    ShortenedLocalName = 0x08, "Shortened Local Name";
    CompleteLocalName = 0x09, "Complete Local Name";
    TxPowerLevel = 0x0A, "Tx Power Level";
    ClassOfDevice = 0x0D, "Class of Device";
    SimplePairingHashC192 = 0x0E, "Simple Pairing Hash C-192";
    SimplePairingRandomizerR192 = 0x0F, "Simple Pairing Randomizer R-192";
    SecurityManagerTkValue = 0x10, "Security Manager TK Value";
    SecurityManagerOobFlags = 0x11, "Security Manager Out of Band Flags";
    PeripheralConnectionIntervalRange = 0x12, "Peripheral Connection Interval Range";
    Solicitation16BitUuids = 0x14, "List of 16-bit Service Solicitation UUIDs";
    Solicitation128BitUuids = 0x15, "List of 128-bit Service Solicitation UUIDs";
    ServiceData16BitUuid = 0x16, "Service Data - 16-bit UUID";
    PublicTargetAddress = 0x17, "Public Target Address";
    RandomTargetAddress = 0x18, "Random Target Address";
    Appearance = 0x19, "Appearance";
    AdvertisingInterval = 0x1A, "Advertising Interval";
    LeDeviceAddress = 0x1B, "LE Bluetooth Device Address";
    LeRole = 0x1C, "LE Role";
    SimplePairingHashC256 = 0x1D, "Simple Pairing Hash C-256";
    SimplePairingRandomizerR256 = 0x1E, "Simple Pairing Randomizer R-256";
    Solicitation32BitUuids = 0x1F, "List of 32-bit Service Solicitation UUIDs";
    ServiceData32BitUuid = 0x20, "Service Data - 32-bit UUID";
    ServiceData128BitUuid = 0x21, "Service Data - 128-bit UUID";
    LeSecureConnectionsConfirmation = 0x22, "LE Secure Connections Confirmation Value";
    LeSecureConnectionsRandom = 0x23, "LE Secure Connections Random Value";
    Uri = 0x24, "URI";
    IndoorPositioning = 0x25, "Indoor Positioning";
    TransportDiscoveryData = 0x26, "Transport Discovery Data";
    LeSupportedFeatures = 0x27, "LE Supported Features";
    ChannelMapUpdateIndication = 0x28, "Channel Map Update Indication";
    PbAdv = 0x29, "PB-ADV";
    MeshMessage = 0x2A, "Mesh Message";
    MeshBeacon = 0x2B, "Mesh Beacon";
    ThreeDInformationData = 0x3D, "3D Information Data";
    ManufacturerSpecificData = 0xFF, "Manufacturer Specific Data";
}

impl core::fmt::Display for AssignedTypes {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The assigned type within the structure is different from the expected type
    #[error("incorrect assigned type field")]
    IncorrectAssignedType,
    /// The data is too short for the data type
    #[error("the data type requires {required} bytes of data but only {remaining} are present")]
    IncorrectLength { required: usize, remaining: usize },
    /// The structure does not contain an assigned type
    #[error("raw data length is too small")]
    RawTooSmall,
}

/// A trait for attempting to convert an Extended Inquiry Response (EIR) or Advertising Data (AD)
/// Structure to a local type
pub trait TryFromStruct<'a> {
    /// Attempt to convert an EIR or AD struct into this type
    fn try_from_struct(st: EirOrAdStruct<'a>) -> Result<Self, Error>
    where
        Self: Sized;
}

/// A wrapper around an EIR or AD structure
///
/// There is no functional difference between an EIR struct and an AD struct, but they are used
/// in different places within the Bluetooth specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EirOrAdStruct<'a> {
    assigned_type: u8,
    data: &'a [u8],
}

impl<'a> EirOrAdStruct<'a> {
    /// Try to create a new `EirOrAdStruct`
    ///
    /// Input `payload` is the structure without its length byte, so it starts with the assigned
    /// type. This is what a [`LengthValueIter`] returns.
    ///
    /// # Errors
    /// `payload` is empty (the length byte of the structure was zero).
    pub fn try_new(payload: &'a [u8]) -> Result<Self, Error> {
        let (&assigned_type, data) = payload.split_first().ok_or(Error::RawTooSmall)?;

        Ok(EirOrAdStruct { assigned_type, data })
    }

    /// Return the type
    ///
    /// This returns the EIR or AD type.
    pub fn get_type(&self) -> u8 {
        self.assigned_type
    }

    /// Get the data bytes
    pub fn get_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get the size of the structure
    ///
    /// This is the full size of the structure including the length byte.
    ///
    /// ```
    /// # use btle_gap::assigned::EirOrAdStruct;
    /// let ad = EirOrAdStruct::try_new(&[0x16, 0x0d, 0x18, 0x50]).unwrap();
    ///
    /// assert_eq!(ad.size(), 2 + ad.get_data().len())
    /// ```
    pub fn size(&self) -> usize {
        2 + self.data.len()
    }

    /// Try to convert this struct into the type `T`
    pub fn try_into<T>(self) -> Result<T, Error>
    where
        T: TryFromStruct<'a>,
    {
        T::try_from_struct(self)
    }
}

/// An iterator over EIR or AD structs
///
/// This is used to iterate over a contiguous series of either EIR or AD structures.
///
/// The iterator will stop at the first structure whose length field runs past the end of the
/// data. A structure with a length of zero is returned as an error, but iteration continues with
/// the structure after it.
#[derive(Clone, Debug)]
pub struct EirOrAdIterator<'a>(LengthValueIter<'a>);

impl<'a> EirOrAdIterator<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        EirOrAdIterator(LengthValueIter::new(data))
    }

    /// Create a iterator that doesn't report an error
    ///
    /// In general it is not the fault of the recipient when they receive incorrectly formatted EIR
    /// or AD structures, so instead of reporting an error the structure is skipped.
    pub fn silent(self) -> impl Iterator<Item = EirOrAdStruct<'a>> + 'a {
        self.filter_map(|st| {
            st.map_err(|e| log::debug!("(GAP) skipping empty structure, {}", e))
                .ok()
        })
    }

    /// Get the bytes not yet consumed
    ///
    /// Once the iterator is exhausted this is the truncated structure at the end of the data, or
    /// empty if the data ended cleanly.
    pub fn remainder(&self) -> &'a [u8] {
        self.0.remainder()
    }
}

impl<'a> From<&'a [u8]> for EirOrAdIterator<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> Iterator for EirOrAdIterator<'a> {
    type Item = Result<EirOrAdStruct<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(EirOrAdStruct::try_new)
    }
}

impl core::iter::FusedIterator for EirOrAdIterator<'_> {}

/// An AD structure whose data type is not decoded
///
/// The assigned type and the raw data of the structure are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStruct {
    assigned_type: u8,
    data: Vec<u8>,
}

impl UnknownStruct {
    pub fn get_type(&self) -> u8 {
        self.assigned_type
    }

    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Get the assigned type
    ///
    /// `None` is returned when the type number is not assigned by the Bluetooth SIG.
    pub fn assigned_type(&self) -> Option<AssignedTypes> {
        AssignedTypes::from_val(self.assigned_type)
    }
}

impl TryFromStruct<'_> for UnknownStruct {
    fn try_from_struct(st: EirOrAdStruct<'_>) -> Result<Self, Error> {
        Ok(UnknownStruct {
            assigned_type: st.get_type(),
            data: st.get_data().to_vec(),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnknownStruct {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut st = serializer.serialize_struct("UnknownStruct", 2)?;

        st.serialize_field("type", &self.assigned_type)?;
        st.serialize_field("hex", &hex::encode(&self.data))?;

        st.end()
    }
}
