//! Advertising Data: Flags
//!

use super::*;

/// The list of Flags defined in the Core Specification Supplement
///
/// These are the labels for the flags in the Flag data type within the Core Specification
/// Supplement. They can be used to get a `Flag` with the method [`Flags::get_flag`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum FlagLabel {
    /// LE limited discoverable mode
    LeLimitedDiscoverableMode,
    /// LE general discoverable mode
    LeGeneralDiscoverableMode,
    /// BR/EDR not supported
    BrEdrNotSupported,
    /// The controller supports simultaneous BR/EDR and LE to the same device
    ControllerSupportsSimultaneousLeAndBrEdr,
    /// The host supports simultaneous BR/EDR and LE to the same device.
    HostSupportsSimultaneousLeAndBrEdr,
}

impl FlagLabel {
    const ALL: [FlagLabel; 5] = [
        FlagLabel::LeLimitedDiscoverableMode,
        FlagLabel::LeGeneralDiscoverableMode,
        FlagLabel::BrEdrNotSupported,
        FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr,
        FlagLabel::HostSupportsSimultaneousLeAndBrEdr,
    ];

    fn get_position(&self) -> usize {
        match *self {
            FlagLabel::LeLimitedDiscoverableMode => 0,
            FlagLabel::LeGeneralDiscoverableMode => 1,
            FlagLabel::BrEdrNotSupported => 2,
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => 3,
            FlagLabel::HostSupportsSimultaneousLeAndBrEdr => 4,
        }
    }

    /// Get the display text of the flag
    pub const fn as_str(&self) -> &'static str {
        match *self {
            FlagLabel::LeLimitedDiscoverableMode => "LE Limited Discoverable Mode",
            FlagLabel::LeGeneralDiscoverableMode => "LE General Discoverable Mode",
            FlagLabel::BrEdrNotSupported => "BR/EDR Not Supported",
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => "Simultaneous LE and BR/EDR (Controller)",
            FlagLabel::HostSupportsSimultaneousLeAndBrEdr => "Simultaneous LE and BR/EDR (Host)",
        }
    }
}

impl core::fmt::Display for FlagLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flag in the `Flags` structure
///
/// Flags are ordered by their bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Flag {
    label: FlagLabel,
    enabled: bool,
}

impl Flag {
    /// Get the label for this flag
    pub fn label(&self) -> FlagLabel {
        self.label
    }

    /// Check if the flag is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the bit position of the flag
    pub fn bit_pos(&self) -> usize {
        self.label.get_position()
    }
}

/// AD flags type
///
/// Only the first octet of the flags data is defined, every bit after bit 4 is reserved. Bytes
/// after the first and the reserved bits are ignored.
///
/// ```
/// # use btle_gap::assigned::flags::Flags;
/// let flags = Flags::from_octet(0x1a);
///
/// assert_eq!(
///     flags.labels(),
///     [
///         "LE General Discoverable Mode",
///         "Simultaneous LE and BR/EDR (Controller)",
///         "Simultaneous LE and BR/EDR (Host)",
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    set: [Flag; 5],
}

impl Flags {
    const ASSIGNED_TYPE: AssignedTypes = AssignedTypes::Flags;

    /// Create flags from the first octet of the flags data
    pub fn from_octet(octet: u8) -> Self {
        let set = FlagLabel::ALL.map(|label| Flag {
            label,
            enabled: octet & 1 << label.get_position() != 0,
        });

        Flags { set }
    }

    /// Get a flag by its label
    pub fn get_flag(&self, label: FlagLabel) -> &Flag {
        &self.set[label.get_position()]
    }

    /// Get an iterator over the flags in Flags
    ///
    /// The flags are in order of their bit position.
    pub fn iter(&self) -> core::slice::Iter<'_, Flag> {
        self.set.iter()
    }

    /// Iterate over the labels of the enabled flags
    pub fn enabled(&self) -> impl Iterator<Item = FlagLabel> + '_ {
        self.iter().filter(|flag| flag.is_enabled()).map(|flag| flag.label())
    }

    /// Get the display text of the enabled flags
    ///
    /// The text is in order of bit position starting with bit 0. The list is empty if no flag is
    /// enabled.
    pub fn labels(&self) -> Vec<&'static str> {
        self.enabled().map(|label| label.as_str()).collect()
    }
}

impl TryFromStruct<'_> for Flags {
    fn try_from_struct(st: EirOrAdStruct<'_>) -> Result<Self, Error>
    where
        Self: Sized,
    {
        if st.get_type() != Self::ASSIGNED_TYPE.val() {
            return Err(Error::IncorrectAssignedType);
        }

        match st.get_data().first() {
            Some(octet) => Ok(Flags::from_octet(*octet)),
            None => Err(Error::IncorrectLength {
                required: 1,
                remaining: 0,
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Flags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.enabled().map(|label| label.as_str()))
    }
}
