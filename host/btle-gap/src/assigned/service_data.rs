//! Service Data Type
//!
//! Service data is a 16-bit service UUID followed by data for that service. The data is not
//! interpreted, it is kept as is.

use super::*;

/// Service Data
///
/// Contains a 16 bit service UUID along with the corresponding data for that UUID
///
/// ```
/// # use btle_gap::assigned::{EirOrAdStruct, service_data::ServiceData};
/// // Heart Rate service (0x180D) with two bytes of data
/// let st = EirOrAdStruct::try_new(&[0x16, 0x0d, 0x18, 0x01, 0x02]).unwrap();
///
/// let service_data: ServiceData = st.try_into().unwrap();
///
/// assert_eq!(0x180d, service_data.get_uuid());
/// assert_eq!(&[0x01, 0x02], service_data.get_data());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceData {
    uuid: u16,
    data: Vec<u8>,
}

impl ServiceData {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::ServiceData16BitUuid;

    pub fn get_uuid(&self) -> u16 {
        self.uuid
    }

    /// Get the service data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }
}

impl TryFromStruct<'_> for ServiceData {
    fn try_from_struct(st: EirOrAdStruct<'_>) -> Result<Self, Error>
    where
        Self: Sized,
    {
        if st.get_type() != Self::ASSIGNED_TYPE.val() {
            return Err(Error::IncorrectAssignedType);
        }

        let data = st.get_data();

        let uuid = btle_core::read_u16_le(data).ok_or(Error::IncorrectLength {
            required: core::mem::size_of::<u16>(),
            remaining: data.len(),
        })?;

        Ok(ServiceData {
            uuid,
            data: data[core::mem::size_of::<u16>()..].to_vec(),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ServiceData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut st = serializer.serialize_struct("ServiceData", 2)?;

        st.serialize_field("uuid", &self.uuid)?;
        st.serialize_field("data", &hex::encode(&self.data))?;

        st.end()
    }
}
