use crate::{ContinuityType, MessageTooShort};
use alloc::vec::Vec;

/// A decoded Continuity message
///
/// Each variant is the decoded form of one message type. The fields are pulled from fixed offsets
/// within the message data; any bytes not listed are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Record {
    /// Handoff (type `0x0C`)
    HandoffMessage {
        /// first data byte
        clipboard_status: u8,
        /// little-endian word from data bytes one and two
        sequence_number: u16,
    },
    /// Wi-Fi Settings (type `0x0D`)
    WifiSettings {
        /// The data after the first two bytes
        #[cfg_attr(feature = "serde", serde(rename = "icloud_id_hex", serialize_with = "as_hex"))]
        icloud_id: Vec<u8>,
    },
    /// Instant Hotspot (type `0x0E`)
    InstantHotspot {
        battery_life: u8,
        cell_service: u8,
        cell_bars: u8,
    },
    /// Wi-Fi Join Network (type `0x0F`)
    ///
    /// The data is not decoded.
    WifiJoinNetwork {
        #[cfg_attr(feature = "serde", serde(rename = "data_hex", serialize_with = "as_hex"))]
        data: Vec<u8>,
    },
    /// Nearby (type `0x10`)
    NearbyMessage {
        /// upper nibble of the first data byte
        location_sharing: u8,
        /// lower nibble of the first data byte
        action_code: u8,
        /// label of `action_code`, see [`nearby_action_text`]
        action_code_text: &'static str,
    },
    /// Any message type that is not decoded
    Unknown { type_code: u8 },
}

impl Record {
    /// Minimum data length of a Handoff message
    const HANDOFF_LEN: usize = 3;
    /// Minimum data length of a Wi-Fi Settings message
    const WIFI_SETTINGS_LEN: usize = 2;
    /// Minimum data length of an Instant Hotspot message
    const INSTANT_HOTSPOT_LEN: usize = 8;
    /// Minimum data length of a Nearby message
    const NEARBY_LEN: usize = 1;

    /// Try to decode a message from its type and data
    ///
    /// # Error
    /// An error is returned if `data` is shorter than the bytes read by the message type.
    pub fn try_from_parts(type_code: u8, data: &[u8]) -> Result<Self, MessageTooShort> {
        let check_len = |required: usize| {
            if data.len() < required {
                Err(MessageTooShort {
                    type_code,
                    required,
                    remaining: data.len(),
                })
            } else {
                Ok(())
            }
        };

        match ContinuityType::from_val(type_code) {
            Some(ContinuityType::Handoff) => {
                check_len(Self::HANDOFF_LEN)?;

                Ok(Record::HandoffMessage {
                    clipboard_status: data[0],
                    sequence_number: u16::from_le_bytes([data[1], data[2]]),
                })
            }
            Some(ContinuityType::WifiSettings) => {
                check_len(Self::WIFI_SETTINGS_LEN)?;

                Ok(Record::WifiSettings {
                    icloud_id: data[Self::WIFI_SETTINGS_LEN..].to_vec(),
                })
            }
            Some(ContinuityType::InstantHotspot) => {
                check_len(Self::INSTANT_HOTSPOT_LEN)?;

                Ok(Record::InstantHotspot {
                    battery_life: data[4],
                    cell_service: data[6],
                    cell_bars: data[7],
                })
            }
            Some(ContinuityType::WifiJoinNetwork) => Ok(Record::WifiJoinNetwork { data: data.to_vec() }),
            Some(ContinuityType::Nearby) => {
                check_len(Self::NEARBY_LEN)?;

                let action_code = data[0] & 0x0F;

                Ok(Record::NearbyMessage {
                    location_sharing: data[0] >> 4,
                    action_code,
                    action_code_text: nearby_action_text(action_code),
                })
            }
            _ => Ok(Record::Unknown { type_code }),
        }
    }

    /// Get the message type of this record
    ///
    /// `None` is only returned for an unknown record whose type has not been identified.
    pub fn continuity_type(&self) -> Option<ContinuityType> {
        match self {
            Record::HandoffMessage { .. } => Some(ContinuityType::Handoff),
            Record::WifiSettings { .. } => Some(ContinuityType::WifiSettings),
            Record::InstantHotspot { .. } => Some(ContinuityType::InstantHotspot),
            Record::WifiJoinNetwork { .. } => Some(ContinuityType::WifiJoinNetwork),
            Record::NearbyMessage { .. } => Some(ContinuityType::Nearby),
            Record::Unknown { type_code } => ContinuityType::from_val(*type_code),
        }
    }
}

/// Get the label of a Nearby action code
///
/// Action codes without a label are `"??"`.
pub fn nearby_action_text(action_code: u8) -> &'static str {
    match action_code {
        1 => "iOS recently updated",
        3 => "Locked Screen",
        7 => "Transition Phase",
        10 => "Locked Screen, Inform Apple Watch",
        11 => "Active User",
        13 => "Unknown",
        14 => "Phone Call or Facetime",
        _ => "??",
    }
}

#[cfg(feature = "serde")]
fn as_hex<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn handoff() {
        let data = [0x01, 0x34, 0x12, 0xff];

        assert_eq!(
            Ok(Record::HandoffMessage {
                clipboard_status: 1,
                sequence_number: 0x1234
            }),
            Record::try_from_parts(0x0c, &data)
        );

        assert!(Record::try_from_parts(0x0c, &data[..2]).is_err());
    }

    #[test]
    fn wifi_settings_skips_two_bytes() {
        let data = [0xaa, 0xbb, 0x01, 0x02, 0x03, 0x04];

        assert_eq!(
            Ok(Record::WifiSettings {
                icloud_id: alloc::vec![0x01, 0x02, 0x03, 0x04]
            }),
            Record::try_from_parts(0x0d, &data)
        );

        assert_eq!(
            Ok(Record::WifiSettings {
                icloud_id: Vec::new()
            }),
            Record::try_from_parts(0x0d, &data[..2])
        );

        assert!(Record::try_from_parts(0x0d, &data[..1]).is_err());
    }

    #[test]
    fn instant_hotspot() {
        let data = [0, 0, 0, 0, 85, 0, 1, 3];

        assert_eq!(
            Ok(Record::InstantHotspot {
                battery_life: 85,
                cell_service: 1,
                cell_bars: 3
            }),
            Record::try_from_parts(0x0e, &data)
        );

        assert_eq!(
            Err(MessageTooShort {
                type_code: 0x0e,
                required: 8,
                remaining: 7
            }),
            Record::try_from_parts(0x0e, &data[..7])
        );
    }

    #[test]
    fn wifi_join_network_keeps_everything() {
        assert_eq!(
            Ok(Record::WifiJoinNetwork { data: Vec::new() }),
            Record::try_from_parts(0x0f, &[])
        );

        assert_eq!(
            Ok(Record::WifiJoinNetwork {
                data: alloc::vec![9, 8, 7]
            }),
            Record::try_from_parts(0x0f, &[9, 8, 7])
        );
    }

    #[test]
    fn nearby_nibbles() {
        assert_eq!(
            Ok(Record::NearbyMessage {
                location_sharing: 0x5,
                action_code: 0xe,
                action_code_text: "Phone Call or Facetime",
            }),
            Record::try_from_parts(0x10, &[0x5e, 0x00])
        );

        assert!(Record::try_from_parts(0x10, &[]).is_err());
    }

    #[test]
    fn action_text_table() {
        assert_eq!("Locked Screen", nearby_action_text(3));
        assert_eq!("Locked Screen, Inform Apple Watch", nearby_action_text(10));
        assert_eq!("Unknown", nearby_action_text(13));
        assert_eq!("??", nearby_action_text(0));
        assert_eq!("??", nearby_action_text(15));
    }

    #[test]
    fn unknown_types() {
        // AirDrop is identified but its format is not decoded
        let airdrop = Record::try_from_parts(0x05, &[1, 2, 3]).unwrap();

        assert_eq!(Record::Unknown { type_code: 0x05 }, airdrop);
        assert_eq!(Some(ContinuityType::AirDrop), airdrop.continuity_type());

        let other = Record::try_from_parts(0x42, &[]).unwrap();

        assert_eq!(None, other.continuity_type());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_shape() {
        let handoff = Record::HandoffMessage {
            clipboard_status: 0,
            sequence_number: 3957,
        };

        assert_eq!(
            serde_json::json!({"type": "handoff_message", "clipboard_status": 0, "sequence_number": 3957}),
            serde_json::to_value(&handoff).unwrap()
        );

        let settings = Record::WifiSettings {
            icloud_id: alloc::vec![0xde, 0xad],
        };

        assert_eq!(
            serde_json::json!({"type": "wifi_settings", "icloud_id_hex": "dead"}),
            serde_json::to_value(&settings).unwrap()
        );

        let nearby = Record::NearbyMessage {
            location_sharing: 0,
            action_code: 11,
            action_code_text: "Active User",
        };

        assert_eq!(
            serde_json::json!({
                "type": "nearby_message",
                "location_sharing": 0,
                "action_code": 11,
                "action_code_text": "Active User"
            }),
            serde_json::to_value(&nearby).unwrap()
        );
    }
}
