//! Advertising Data: Security Manager Out of Band Flags
//!
//! These flags are sent with the out of band data of LE legacy pairing. Unlike the AD [`Flags`]
//! two of the bits are a choice between two states, so there is always a label for the OOB data
//! state and the address type.
//!
//! [`Flags`]: super::flags::Flags

use super::*;

const OOB_DATA_PRESENT: u8 = 1 << 0;
const LE_SUPPORTED_HOST: u8 = 1 << 1;
const SIMULTANEOUS_LE_BR_EDR_HOST: u8 = 1 << 2;
const RANDOM_ADDRESS: u8 = 1 << 3;

/// Security Manager Out of Band Flags
///
/// ```
/// # use btle_gap::assigned::sm_oob_flags::SecurityManagerOobFlags;
/// let flags = SecurityManagerOobFlags::from_octet(0b1001);
///
/// assert_eq!(flags.labels(), ["OOB data present", "Address Type: Random Address"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityManagerOobFlags {
    oob_data_present: bool,
    le_supported_host: bool,
    simultaneous_le_br_edr_host: bool,
    random_address: bool,
}

impl SecurityManagerOobFlags {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::SecurityManagerOobFlags;

    /// Create the flags from the first octet of the data
    ///
    /// Bits four through seven are reserved and ignored.
    pub fn from_octet(octet: u8) -> Self {
        SecurityManagerOobFlags {
            oob_data_present: octet & OOB_DATA_PRESENT != 0,
            le_supported_host: octet & LE_SUPPORTED_HOST != 0,
            simultaneous_le_br_edr_host: octet & SIMULTANEOUS_LE_BR_EDR_HOST != 0,
            random_address: octet & RANDOM_ADDRESS != 0,
        }
    }

    pub fn is_oob_data_present(&self) -> bool {
        self.oob_data_present
    }

    pub fn is_le_supported_by_host(&self) -> bool {
        self.le_supported_host
    }

    pub fn is_simultaneous_le_br_edr_host(&self) -> bool {
        self.simultaneous_le_br_edr_host
    }

    /// Check if the address type is random
    ///
    /// The address type is public when this returns false.
    pub fn is_random_address(&self) -> bool {
        self.random_address
    }

    /// Iterate over the display text of the flags
    ///
    /// This always contains the text for the OOB data state first and the address type last, with
    /// the host support flags that are set between them.
    pub fn iter_labels(&self) -> impl Iterator<Item = &'static str> {
        let oob = if self.oob_data_present {
            "OOB data present"
        } else {
            "OOB data not present"
        };

        let address = if self.random_address {
            "Address Type: Random Address"
        } else {
            "Address Type: Public Address"
        };

        [
            Some(oob),
            self.le_supported_host.then_some("LE supported (Host)"),
            self.simultaneous_le_br_edr_host
                .then_some("Simultaneous LE/BR-EDR (Host)"),
            Some(address),
        ]
        .into_iter()
        .flatten()
    }

    /// Get the display text of the flags
    pub fn labels(&self) -> Vec<&'static str> {
        self.iter_labels().collect()
    }
}

impl TryFromStruct<'_> for SecurityManagerOobFlags {
    fn try_from_struct(st: EirOrAdStruct<'_>) -> Result<Self, Error> {
        if st.get_type() != Self::ASSIGNED_TYPE.val() {
            return Err(Error::IncorrectAssignedType);
        }

        st.get_data()
            .first()
            .map(|octet| Self::from_octet(*octet))
            .ok_or(Error::IncorrectLength {
                required: 1,
                remaining: 0,
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SecurityManagerOobFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter_labels())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn either_or_labels_always_present() {
        assert_eq!(
            SecurityManagerOobFlags::from_octet(0).labels(),
            ["OOB data not present", "Address Type: Public Address"]
        );

        assert_eq!(
            SecurityManagerOobFlags::from_octet(0x0f).labels(),
            [
                "OOB data present",
                "LE supported (Host)",
                "Simultaneous LE/BR-EDR (Host)",
                "Address Type: Random Address",
            ]
        );
    }

    #[test]
    fn label_count_bounds() {
        for octet in 0..=u8::MAX {
            let count = SecurityManagerOobFlags::from_octet(octet).iter_labels().count();

            assert!((2..=4).contains(&count), "octet {:#x} gave {} labels", octet, count);
        }
    }

    #[test]
    fn host_flags() {
        let flags = SecurityManagerOobFlags::from_octet(0b0110);

        assert!(!flags.is_oob_data_present());
        assert!(flags.is_le_supported_by_host());
        assert!(flags.is_simultaneous_le_br_edr_host());
        assert!(!flags.is_random_address());
    }

    #[test]
    fn from_struct() {
        let st = EirOrAdStruct::try_new(&[0x11, 0x08, 0xff]).unwrap();

        let flags: SecurityManagerOobFlags = st.try_into().unwrap();

        assert!(flags.is_random_address());

        let empty = EirOrAdStruct::try_new(&[0x11]).unwrap();

        assert!(SecurityManagerOobFlags::try_from_struct(empty).is_err());
    }
}
