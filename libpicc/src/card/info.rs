// libpicc/src/card/info.rs

use crate::utils::to_hex_upper_spaced;

/// Placeholder rendered for a field the reader did not report.
pub const ABSENT: &str = "-";

/// PICC metadata reported by a POLL reply.
///
/// Each field is upper-case, space separated hex (`"04 A1 B2 C3"`) or
/// [`ABSENT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub card_type: String,
    pub uid: String,
    pub sak: String,
    pub atq: String,
}

impl CardInfo {
    /// All fields absent (no card, or a non-success reply).
    pub fn absent() -> Self {
        Self {
            card_type: ABSENT.to_string(),
            uid: ABSENT.to_string(),
            sak: ABSENT.to_string(),
            atq: ABSENT.to_string(),
        }
    }

    pub(crate) fn from_values(
        card_type: Option<&[u8]>,
        uid: Option<&[u8]>,
        sak: Option<&[u8]>,
        atq: Option<&[u8]>,
    ) -> Self {
        let render = |v: Option<&[u8]>| v.map_or_else(|| ABSENT.to_string(), to_hex_upper_spaced);
        Self {
            card_type: render(card_type),
            uid: render(uid),
            sak: render(sak),
            atq: render(atq),
        }
    }

    /// True when the reply carried a UID, i.e. a card answered the poll.
    pub fn is_present(&self) -> bool {
        self.uid != ABSENT
    }
}

impl Default for CardInfo {
    fn default() -> Self {
        Self::absent()
    }
}
