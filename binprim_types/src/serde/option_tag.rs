use crate::error::{Error, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// The byte preceding an optional value's payload.
#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum OptionTag {
    Absent = 0,
    Present = 1,
}

impl OptionTag {
    pub fn to_byte(self) -> u8 {
        // Every member is declared with a u8 discriminant.
        self.to_u8().unwrap_or_default()
    }

    pub fn from_byte(byte: u8) -> Result<Self> {
        OptionTag::from_u8(byte).ok_or_else(|| Error::invalid_value("Option tag", byte))
    }
}

impl From<bool> for OptionTag {
    fn from(present: bool) -> Self {
        if present {
            OptionTag::Present
        } else {
            OptionTag::Absent
        }
    }
}
impl From<OptionTag> for bool {
    fn from(tag: OptionTag) -> Self {
        tag == OptionTag::Present
    }
}
