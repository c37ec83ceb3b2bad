use crate::{hierarchy::Hierarchy, table::OffsetTable};

/// A participating type with its offset table.
///
/// Implemented by [`crate::object!`]. Types without an implementation can't be used in casts:
///
/// ```compile_fail
/// use rtti_lib::{cast::object_cast, obj_ref::ObjRef};
/// pub struct Root(u32);
/// pub struct Stranger(u32);
/// rtti_lib::registry! { Root }
/// rtti_lib::object! { Root }
/// let root = Root(0);
/// let _ = object_cast::<Stranger, Root>(Some(ObjRef::new(&root)));
/// ```
pub trait Layout: Hierarchy + Sized {
    const TABLE: &'static OffsetTable;
}

/// Declares direct ancestors of registered types.
///
/// Every ancestor is a field of the derived type: `Derived: Base = field, ...`. Types without
/// ancestors are listed alone. Fields of non-participating types are simply not mentioned.
///
/// ```
/// use rtti_lib::{hierarchy::Hierarchy, layout::Layout};
///
/// pub struct Named { pub name: &'static str }
/// pub struct Extent { pub w: u32, pub h: u32 }
/// pub struct Label { pub color: u32, pub named: Named, pub size: Extent }
///
/// rtti_lib::registry! { Named, Extent, Label }
/// rtti_lib::object! {
///     Named;
///     Extent;
///     Label: Named = named, Extent = size;
/// }
///
/// assert_eq!(Label::num_direct_base_classes(), 2);
/// assert_eq!(Label::TABLE.len(), 3);
/// ```
///
/// The field has to have the declared type:
///
/// ```compile_fail
/// pub struct A(u32);
/// pub struct B(u32);
/// pub struct C { pub a: A, pub b: B }
/// rtti_lib::registry! { A, B, C }
/// rtti_lib::object! { A; B; C: A = b }
/// ```
#[macro_export]
macro_rules! object {
    (@one $ty:ty $(: $($base:ty = $field:ident),+)?) => {
        impl $crate::hierarchy::Hierarchy for $ty {
            const DESCRIPTOR: &'static $crate::hierarchy::TypeDescriptor =
                &$crate::hierarchy::TypeDescriptor {
                    id: <$ty as $crate::identity::Registered>::ID,
                    name: <$ty as $crate::identity::Registered>::NAME,
                    type_id: ::core::any::TypeId::of::<$ty>,
                    direct_bases: &[$($(<$base as $crate::hierarchy::Hierarchy>::DESCRIPTOR),+)?],
                };
        }

        impl $crate::layout::Layout for $ty {
            const TABLE: &'static $crate::table::OffsetTable = &{
                <$ty as $crate::hierarchy::Hierarchy>::DESCRIPTOR.check_identities();
                $crate::table::OffsetTable::of(<$ty as $crate::hierarchy::Hierarchy>::DESCRIPTOR)
                $($(.append(
                    ::core::mem::offset_of!($ty, $field) as isize,
                    <$base as $crate::layout::Layout>::TABLE,
                ))+)?
            };
        }

        $($(
            const _: fn(&$ty) -> &$base = |object| &object.$field;
        )+)?
    };
    ($($ty:ty $(: $($base:ty = $field:ident),+ $(,)?)?);+ $(;)?) => {
        $($crate::object!(@one $ty $(: $($base = $field),+)?);)+
    };
}
