pub mod entry;

use core::fmt;

use crate::{hierarchy::TypeDescriptor, identity::Identity};

use self::entry::OffsetIdEntry;

/// The most entries one concrete type can have: the type itself and its ancestors.
pub const CAPACITY: usize = 64;

/// Flat `(offset, identity)` table of a concrete type.
///
/// Entry `0` is the type itself. The rest is a pre-order expansion of the declared ancestors, so
/// the first entry with a given identity is the one closest to the concrete type. Words after
/// `len` are zero, and the whole array is aligned for the widest vector load.
///
/// `descriptors[i]` describes the type of entry `i`. Tables built with [`OffsetTable::root`]
/// have no descriptors and never confirm a type.
#[repr(C, align(64))]
pub struct OffsetTable {
    entries: [OffsetIdEntry; CAPACITY],
    descriptors: [Option<&'static TypeDescriptor>; CAPACITY],
    len: usize,
}

impl OffsetTable {
    pub const fn root(id: Identity) -> Self {
        let mut entries = [OffsetIdEntry::EMPTY; CAPACITY];
        entries[0] = OffsetIdEntry::new(0, id);
        Self {
            entries,
            descriptors: [None; CAPACITY],
            len: 1,
        }
    }
    /// The one-entry table of the type described by `descriptor`.
    pub const fn of(descriptor: &'static TypeDescriptor) -> Self {
        let mut result = Self::root(descriptor.id);
        result.descriptors[0] = Some(descriptor);
        result
    }
    /// Appends the whole table of an ancestor embedded at `offset` bytes.
    ///
    /// ```compile_fail
    /// use rtti_lib::{identity::Identity, table::OffsetTable};
    /// const LEAF: OffsetTable = OffsetTable::root(Identity::new(2));
    /// const FULL: OffsetTable = {
    ///     let mut t = OffsetTable::root(Identity::new(1));
    ///     let mut i = 0;
    ///     while i < 64 {
    ///         t = t.append(0, &LEAF);
    ///         i += 1;
    ///     }
    ///     t
    /// };
    /// let _ = FULL.len();
    /// ```
    pub const fn append(mut self, offset: isize, base: &OffsetTable) -> Self {
        assert!(
            offset >= i16::MIN as isize && offset <= i16::MAX as isize,
            "ancestor offset doesn't fit in 16 bits"
        );
        assert!(self.len + base.len <= CAPACITY, "64 identities is the limit");
        let mut i = 0;
        while i < base.len {
            self.entries[self.len + i] = base.entries[i].shift(offset as i16);
            self.descriptors[self.len + i] = base.descriptors[i];
            i += 1;
        }
        self.len += base.len;
        self
    }
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline(always)]
    pub const fn entries(&self) -> &[OffsetIdEntry] {
        self.entries.split_at(self.len).0
    }
    #[inline(always)]
    pub const fn get(&self, index: usize) -> Option<OffsetIdEntry> {
        if index < self.len {
            Some(self.entries[index])
        } else {
            None
        }
    }
    #[inline(always)]
    pub const fn descriptor(&self, index: usize) -> Option<&'static TypeDescriptor> {
        if index < self.len {
            self.descriptors[index]
        } else {
            None
        }
    }
    /// `true` if entry `index` is known to be a `U`.
    #[inline(always)]
    pub fn holds<U: 'static>(&self, index: usize) -> bool {
        self.descriptor(index).is_some_and(|d| d.is::<U>())
    }
    /// All `CAPACITY` words, including the zero tail.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const u32 {
        self.entries.as_ptr() as *const u32
    }
    /// Scalar first-match search. Used where the answer is needed during compilation.
    pub const fn position(&self, id: Identity) -> Option<usize> {
        let mut i = 0;
        while i < self.len {
            if self.entries[i].id().get() == id.get() {
                return Some(i);
            }
            i += 1;
        }
        None
    }
    pub const fn find(&self, id: Identity) -> Option<i16> {
        match self.position(id) {
            Some(i) => Some(self.entries[i].offset()),
            None => None,
        }
    }
}

impl fmt::Debug for OffsetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}
