//! The decoded form of an advertisement

use alloc::string::String;
use btle_gap::assigned::{
    flags::Flags, manufacturer_data::ManufacturerData, service_data::ServiceData,
    sm_oob_flags::SecurityManagerOobFlags, AssignedTypes, EirOrAdIterator, EirOrAdStruct, Error,
    UnknownStruct,
};

/// A decoded advertisement
///
/// There is one field for each kind of AD structure that is decoded, and every AD structure with
/// a type that is not decoded lands in [`unknown`](AdvertisementRecord::unknown). A field is
/// `None` when the advertisement did not contain a (valid) structure of that kind. When an
/// advertisement contains more than one structure of the same kind the last one is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvertisementRecord {
    hex: String,
    flags: Option<Flags>,
    sec_mg_oob_flags: Option<SecurityManagerOobFlags>,
    service_data: Option<ServiceData>,
    manufacturer_specific: Option<ManufacturerData>,
    unknown: Option<UnknownStruct>,
}

impl AdvertisementRecord {
    pub(crate) fn new(advertisement: &[u8]) -> Self {
        AdvertisementRecord {
            hex: hex::encode(advertisement),
            flags: None,
            sec_mg_oob_flags: None,
            service_data: None,
            manufacturer_specific: None,
            unknown: None,
        }
    }

    /// Decode every AD structure within `advertisement` into this record
    pub(crate) fn add_structures(&mut self, advertisement: &[u8]) {
        let mut structures = EirOrAdIterator::new(advertisement);

        for st in structures.by_ref() {
            if let Err(e) = st.and_then(|st| self.add_structure(st)) {
                log::debug!("(CLASSIFIER) skipping AD structure, {}", e);
            }
        }

        if !structures.remainder().is_empty() {
            log::debug!(
                "(CLASSIFIER) truncated AD structure, dropped the last {} bytes",
                structures.remainder().len()
            );
        }
    }

    fn add_structure(&mut self, st: EirOrAdStruct<'_>) -> Result<(), Error> {
        log::trace!("(CLASSIFIER) AD structure type {:#04x}", st.get_type());

        match AssignedTypes::from_val(st.get_type()) {
            Some(AssignedTypes::Flags) => self.flags = Some(st.try_into()?),
            Some(AssignedTypes::SecurityManagerOobFlags) => self.sec_mg_oob_flags = Some(st.try_into()?),
            Some(AssignedTypes::ServiceData16BitUuid) => self.service_data = Some(st.try_into()?),
            Some(AssignedTypes::ManufacturerSpecificData) => self.manufacturer_specific = Some(st.try_into()?),
            other => {
                log::trace!(
                    "(CLASSIFIER) keeping {} structure as unknown",
                    other.map_or("unassigned", |ty| ty.name())
                );

                self.unknown = Some(st.try_into()?)
            }
        }

        Ok(())
    }

    /// Decode manufacturer data that was provided separately from the advertisement
    ///
    /// Nothing is changed if `payload` is empty.
    pub(crate) fn add_manufacturer_data(&mut self, payload: &[u8]) {
        if payload.is_empty() {
            return;
        }

        match ManufacturerData::try_from_payload(payload) {
            Ok(data) => self.manufacturer_specific = Some(data),
            Err(e) => log::debug!("(CLASSIFIER) skipping manufacturer data, {}", e),
        }
    }

    /// Get the advertisement as hex text
    ///
    /// This is the full advertisement, including any structures that were not decoded.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn flags(&self) -> Option<&Flags> {
        self.flags.as_ref()
    }

    pub fn sec_mg_oob_flags(&self) -> Option<&SecurityManagerOobFlags> {
        self.sec_mg_oob_flags.as_ref()
    }

    pub fn service_data(&self) -> Option<&ServiceData> {
        self.service_data.as_ref()
    }

    pub fn manufacturer_specific(&self) -> Option<&ManufacturerData> {
        self.manufacturer_specific.as_ref()
    }

    /// Get the last AD structure whose type is not decoded
    pub fn unknown(&self) -> Option<&UnknownStruct> {
        self.unknown.as_ref()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AdvertisementRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let len = 1
            + usize::from(self.flags.is_some())
            + usize::from(self.sec_mg_oob_flags.is_some())
            + usize::from(self.service_data.is_some())
            + usize::from(self.manufacturer_specific.is_some())
            + usize::from(self.unknown.is_some());

        let mut map = serializer.serialize_map(Some(len))?;

        map.serialize_entry("hex", &self.hex)?;

        if let Some(flags) = &self.flags {
            map.serialize_entry("flags", flags)?;
        }

        if let Some(sec_mg_oob_flags) = &self.sec_mg_oob_flags {
            map.serialize_entry("sec-mg-oob-flags", sec_mg_oob_flags)?;
        }

        if let Some(service_data) = &self.service_data {
            map.serialize_entry("service-data", service_data)?;
        }

        if let Some(manufacturer_specific) = &self.manufacturer_specific {
            map.serialize_entry("manufacturer-specific", manufacturer_specific)?;
        }

        if let Some(unknown) = &self.unknown {
            map.serialize_entry("unknown", unknown)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use btle_gap::assigned::manufacturer_data::CompanyId;

    fn decode(advertisement: &[u8]) -> AdvertisementRecord {
        let mut record = AdvertisementRecord::new(advertisement);

        record.add_structures(advertisement);

        record
    }

    #[test]
    fn empty_advertisement() {
        let record = decode(&[]);

        assert_eq!("", record.hex());
        assert_eq!(AdvertisementRecord::new(&[]), record);
    }

    #[test]
    fn dispatch_by_type() {
        let raw = [
            2, 0x01, 0x06, // flags
            2, 0x11, 0x01, // security manager OOB flags
            4, 0x16, 0x0d, 0x18, 0x50, // service data
            3, 0xff, 0x06, 0x00, // manufacturer data
            2, 0x0a, 0xf4, // TX power level
        ];

        let record = decode(&raw);

        assert_eq!(
            record.flags().unwrap().labels(),
            ["LE General Discoverable Mode", "BR/EDR Not Supported"]
        );
        assert!(record.sec_mg_oob_flags().unwrap().is_oob_data_present());
        assert_eq!(0x180d, record.service_data().unwrap().get_uuid());
        assert_eq!(
            CompanyId::Microsoft,
            record.manufacturer_specific().unwrap().get_company_id()
        );
        assert_eq!(0x0a, record.unknown().unwrap().get_type());
        assert_eq!(Some(AssignedTypes::TxPowerLevel), record.unknown().unwrap().assigned_type());
    }

    #[test]
    fn last_structure_of_a_kind_wins() {
        let raw = [2, 0x01, 0x01, 2, 0x09, b'a', 2, 0x01, 0x02, 2, 0x08, b'b'];

        let record = decode(&raw);

        assert_eq!(record.flags().unwrap().labels(), ["LE General Discoverable Mode"]);
        assert_eq!(0x08, record.unknown().unwrap().get_type());
    }

    #[test]
    fn invalid_structure_keeps_previous_value() {
        // the second service data is too short for a UUID
        let raw = [3, 0x16, 0x0d, 0x18, 2, 0x16, 0x0f];

        let record = decode(&raw);

        assert_eq!(0x180d, record.service_data().unwrap().get_uuid());
    }

    #[test]
    fn empty_structures_are_skipped() {
        let raw = [0, 1, 0x01, 0, 2, 0x01, 0x04];

        let record = decode(&raw);

        assert_eq!(record.flags().unwrap().labels(), ["BR/EDR Not Supported"]);
    }

    #[test]
    fn separate_manufacturer_data() {
        let mut record = decode(&[3, 0xff, 0x06, 0x00]);

        record.add_manufacturer_data(&[]);

        assert_eq!(
            CompanyId::Microsoft,
            record.manufacturer_specific().unwrap().get_company_id()
        );

        record.add_manufacturer_data(&[0x4c]);

        assert_eq!(
            CompanyId::Microsoft,
            record.manufacturer_specific().unwrap().get_company_id()
        );

        record.add_manufacturer_data(&[0x4c, 0x00]);

        assert_eq!(
            CompanyId::Apple,
            record.manufacturer_specific().unwrap().get_company_id()
        );

        // the hex text is always of the advertisement
        assert_eq!("03ff0600", record.hex());
    }
}
