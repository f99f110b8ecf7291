/// Continuity message types
///
/// These are the message type numbers that have been identified within Apple's manufacturer
/// specific data. Only some of these have a known data format (see [`Record`](crate::Record)).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ContinuityType {
    IBeacon,
    AirDrop,
    AirPods,
    AirPlayDestination,
    AirPlaySource,
    Handoff,
    WifiSettings,
    InstantHotspot,
    WifiJoinNetwork,
    Nearby,
}

impl ContinuityType {
    pub const fn val(&self) -> u8 {
        match *self {
            ContinuityType::IBeacon => 0x02,
            ContinuityType::AirDrop => 0x05,
            ContinuityType::AirPods => 0x07,
            ContinuityType::AirPlayDestination => 0x09,
            ContinuityType::AirPlaySource => 0x0A,
            ContinuityType::Handoff => 0x0C,
            ContinuityType::WifiSettings => 0x0D,
            ContinuityType::InstantHotspot => 0x0E,
            ContinuityType::WifiJoinNetwork => 0x0F,
            ContinuityType::Nearby => 0x10,
        }
    }

    /// Get the `ContinuityType` of a message type byte
    ///
    /// `None` is returned for message types that have not been identified.
    pub const fn from_val(val: u8) -> Option<Self> {
        match val {
            0x02 => Some(ContinuityType::IBeacon),
            0x05 => Some(ContinuityType::AirDrop),
            0x07 => Some(ContinuityType::AirPods),
            0x09 => Some(ContinuityType::AirPlayDestination),
            0x0A => Some(ContinuityType::AirPlaySource),
            0x0C => Some(ContinuityType::Handoff),
            0x0D => Some(ContinuityType::WifiSettings),
            0x0E => Some(ContinuityType::InstantHotspot),
            0x0F => Some(ContinuityType::WifiJoinNetwork),
            0x10 => Some(ContinuityType::Nearby),
            _ => None,
        }
    }

    /// Get a human readable name of the message type
    pub const fn name(&self) -> &'static str {
        match *self {
            ContinuityType::IBeacon => "iBeacon",
            ContinuityType::AirDrop => "AirDrop",
            ContinuityType::AirPods => "AirPods",
            ContinuityType::AirPlayDestination => "AirPlay Destination",
            ContinuityType::AirPlaySource => "AirPlay Source",
            ContinuityType::Handoff => "Handoff",
            ContinuityType::WifiSettings => "Wi-Fi Settings",
            ContinuityType::InstantHotspot => "Instant Hotspot",
            ContinuityType::WifiJoinNetwork => "Wi-Fi Join Network",
            ContinuityType::Nearby => "Nearby",
        }
    }
}

impl core::fmt::Display for ContinuityType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn val_round_trips() {
        for val in 0..=u8::MAX {
            if let Some(ty) = ContinuityType::from_val(val) {
                assert_eq!(val, ty.val());
            }
        }
    }

    #[test]
    fn unidentified() {
        assert_eq!(None, ContinuityType::from_val(0x08));
        assert_eq!(None, ContinuityType::from_val(0xff));
    }
}
