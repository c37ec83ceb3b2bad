use core::any::TypeId;

use crate::{layout::Layout, obj_ref::ObjRef};

impl<'a, T: Layout> ObjRef<'a, T> {
    /// The `U` substructure of the concrete instance, if it has one.
    ///
    /// When `U` is an ancestor of `T` the offset is resolved at compile time. Otherwise the
    /// concrete instance's table is searched. Either way the entry has to describe `U` itself, not
    /// just share its identity.
    #[inline(always)]
    pub fn cast<U: Layout>(self) -> Option<ObjRef<'a, U>> {
        let ancestor = const { T::TABLE.position(U::ID) }
            .filter(|&index| T::TABLE.holds::<U>(index))
            .and_then(|index| T::TABLE.get(index));
        if let Some(entry) = ancestor {
            return Some(unsafe { self.shift(entry.offset()) });
        }
        self.object()
            .offset_from_type(U::ID, TypeId::of::<U>())
            .map(|offset| unsafe { self.at(offset) })
    }
    /// The concrete instance, if its type is exactly `U`.
    #[inline(always)]
    pub fn cast_exact<U: Layout>(self) -> Option<ObjRef<'a, U>> {
        if self.object_id() == U::ID && self.object().descriptor().is::<U>() {
            Some(unsafe { self.at(0) })
        } else {
            None
        }
    }
    /// [`ObjRef::cast`] that is expected to succeed. Debug builds assert it.
    #[inline(always)]
    pub fn cast_checked<U: Layout>(self) -> Option<ObjRef<'a, U>> {
        let result = self.cast();
        debug_assert!(
            result.is_some(),
            "`{}` has no `{}`",
            self.object_name(),
            U::NAME
        );
        result
    }
}

/// `None` in, `None` out. See [`ObjRef::cast`].
#[inline(always)]
pub fn object_cast<'a, U: Layout, T: Layout>(
    source: Option<ObjRef<'a, T>>,
) -> Option<ObjRef<'a, U>> {
    source.and_then(|s| s.cast())
}

/// See [`ObjRef::cast_exact`].
#[inline(always)]
pub fn object_cast_exact<'a, U: Layout, T: Layout>(
    source: Option<ObjRef<'a, T>>,
) -> Option<ObjRef<'a, U>> {
    source.and_then(|s| s.cast_exact())
}

/// Debug builds assert that `source` is present and the cast succeeds.
#[inline(always)]
pub fn object_cast_checked<'a, U: Layout, T: Layout>(
    source: Option<ObjRef<'a, T>>,
) -> Option<ObjRef<'a, U>> {
    debug_assert!(source.is_some(), "checked cast of a null source");
    source.and_then(|s| s.cast_checked())
}
