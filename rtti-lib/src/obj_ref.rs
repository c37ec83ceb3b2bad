use core::{any::TypeId, fmt, ops::Deref};

use crate::{
    identity::{Identity, Registered},
    layout::Layout,
    object::Object,
};

/// A `T` substructure together with the concrete instance it belongs to.
///
/// The concrete instance answers every dynamic query, so a cast from any view of an object uses
/// the table of its most-derived type.
pub struct ObjRef<'a, T> {
    object: &'a dyn Object,
    this: &'a T,
}

impl<T> Clone for ObjRef<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ObjRef<'_, T> {}

impl<'a, T: Layout> ObjRef<'a, T> {
    /// Views `object` as its own concrete type.
    #[inline(always)]
    pub fn new(object: &'a T) -> Self {
        Self {
            object,
            this: object,
        }
    }
    /// `true` if the concrete instance has a `U` substructure.
    #[inline(always)]
    pub fn is<U: Registered>(self) -> bool {
        self.object
            .offset_from_type(U::ID, TypeId::of::<U>())
            .is_some()
    }
}

impl<'a, T> ObjRef<'a, T> {
    #[inline(always)]
    pub fn get(self) -> &'a T {
        self.this
    }
    #[inline(always)]
    pub fn object(self) -> &'a dyn Object {
        self.object
    }
    #[inline(always)]
    pub fn object_id(self) -> Identity {
        self.object.object_id()
    }
    #[inline(always)]
    pub fn object_name(self) -> &'static str {
        self.object.object_name()
    }
    #[inline(always)]
    pub fn address(self) -> usize {
        self.this as *const T as usize
    }
    #[inline(always)]
    pub fn object_address(self) -> usize {
        self.object as *const dyn Object as *const u8 as usize
    }
    /// The `U` at `offset` bytes from the start of the concrete instance.
    ///
    /// # Safety
    ///
    /// The concrete instance has a `U` at `offset`.
    #[inline(always)]
    pub(crate) unsafe fn at<U>(self, offset: i16) -> ObjRef<'a, U> {
        let p = (self.object as *const dyn Object as *const u8).offset(offset as isize);
        ObjRef {
            object: self.object,
            this: &*(p as *const U),
        }
    }
    /// The `U` at `offset` bytes from the start of `self`.
    ///
    /// # Safety
    ///
    /// `T` has a `U` at `offset`.
    #[inline(always)]
    pub(crate) unsafe fn shift<U>(self, offset: i16) -> ObjRef<'a, U> {
        let p = (self.this as *const T as *const u8).offset(offset as isize);
        ObjRef {
            object: self.object,
            this: &*(p as *const U),
        }
    }
}

impl<T> Deref for ObjRef<'_, T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        self.this
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjRef")
            .field("object", &self.object.object_name())
            .field("this", self.this)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::{
        app::sample::{Button, Clickable},
        fixture::{Counter, Diamond, Left, Lone, Right, Root},
        identity::Registered,
    };

    use super::ObjRef;

    #[test]
    #[wasm_bindgen_test]
    fn test_new() {
        let d = Diamond::new(1, 2);
        let r = ObjRef::new(&d);
        assert_eq!(r.address(), r.object_address());
        assert_eq!(r.object_name(), "Diamond");
        assert_eq!(r.object_id(), Diamond::ID);
        assert_eq!(r.tag, 7);
        assert!(core::ptr::eq(r.get(), &d));
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_is() {
        let d = Diamond::default();
        let r = ObjRef::new(&d);
        assert!(r.is::<Diamond>());
        assert!(r.is::<Left>());
        assert!(r.is::<Right>());
        assert!(r.is::<Root>());
        assert!(!r.is::<Lone>());
        assert!(!ObjRef::new(&d.left).is::<Right>());
        let b = Button::default();
        assert!(ObjRef::new(&b).is::<Clickable>());
        assert!(!ObjRef::new(&b).is::<Counter>());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_at() {
        let d = Diamond::new(1, 2);
        let r = ObjRef::new(&d);
        let right: ObjRef<Right> = unsafe { r.at(core::mem::offset_of!(Diamond, right) as i16) };
        assert!(core::ptr::eq(right.get(), &d.right));
        assert_eq!(right.object_name(), "Diamond");
        let root: ObjRef<Root> =
            unsafe { right.shift(core::mem::offset_of!(Right, root) as i16) };
        assert_eq!(root.value, 2);
        assert_eq!(format!("{:?}", root), "ObjRef { object: \"Diamond\", this: Root { value: 2 } }");
    }
}
