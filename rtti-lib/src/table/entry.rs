use core::fmt;

use crate::identity::Identity;

/// Selects the identity half of a packed entry.
pub const ID_MASK: u32 = 0x0000_FFFF;

/// `offset: i16` in the upper 16 bits, `id: u16` in the lower 16 bits.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OffsetIdEntry(u32);

impl OffsetIdEntry {
    pub const EMPTY: OffsetIdEntry = OffsetIdEntry(0);
    #[inline(always)]
    pub const fn new(offset: i16, id: Identity) -> Self {
        Self(((offset as u16 as u32) << 16) | id.get() as u32)
    }
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }
    #[inline(always)]
    pub const fn offset(self) -> i16 {
        (self.0 >> 16) as u16 as i16
    }
    #[inline(always)]
    pub const fn id(self) -> Identity {
        Identity::new((self.0 & ID_MASK) as u16)
    }
    /// The same ancestor seen from a type that embeds the current one at `by`.
    pub const fn shift(self, by: i16) -> Self {
        match self.offset().checked_add(by) {
            Some(offset) => Self::new(offset, self.id()),
            None => panic!("ancestor offset doesn't fit in 16 bits"),
        }
    }
}

impl fmt::Debug for OffsetIdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {})", self.offset(), self.id())
    }
}
