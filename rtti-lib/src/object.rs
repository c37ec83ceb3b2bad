use core::any::TypeId;

use crate::{
    hierarchy::TypeDescriptor,
    identity::Identity,
    layout::Layout,
    lookup::{find_offset, find_typed, offset_from_id},
    simd::Widest,
};

/// Dispatch hooks of a participating instance.
///
/// Called through `&dyn Object`, they always answer for the concrete type of the instance.
pub trait Object {
    fn object_id(&self) -> Identity;
    fn object_name(&self) -> &'static str;
    fn descriptor(&self) -> &'static TypeDescriptor;
    /// Offset of the `target` substructure from the start of this instance.
    fn offset_from_id(&self, target: Identity) -> Option<i16>;
    /// Address of the `target` substructure, or `0`.
    fn offset_this_from_id(&self, target: Identity) -> usize;
    /// Like [`Object::offset_from_id`], but only a substructure of type `type_id` counts.
    fn offset_from_type(&self, target: Identity, type_id: TypeId) -> Option<i16>;
}

impl<T: Layout> Object for T {
    #[inline(always)]
    fn object_id(&self) -> Identity {
        T::ID
    }
    #[inline(always)]
    fn object_name(&self) -> &'static str {
        T::NAME
    }
    #[inline(always)]
    fn descriptor(&self) -> &'static TypeDescriptor {
        T::DESCRIPTOR
    }
    #[inline(always)]
    fn offset_from_id(&self, target: Identity) -> Option<i16> {
        find_offset::<Widest>(T::TABLE, target)
    }
    #[inline(always)]
    fn offset_this_from_id(&self, target: Identity) -> usize {
        offset_from_id(T::TABLE, self as *const T as usize, target)
    }
    #[inline(always)]
    fn offset_from_type(&self, target: Identity, type_id: TypeId) -> Option<i16> {
        find_typed::<Widest>(T::TABLE, target, type_id)
    }
}

#[cfg(test)]
mod test {
    use core::{any::TypeId, mem::offset_of};

    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::{
        app::sample::Node,
        fixture::{Diamond, Left, Lone, Right, Root, Wide},
        identity::Registered,
    };

    use super::Object;

    #[test]
    #[wasm_bindgen_test]
    fn test_concrete_hooks() {
        let d = Diamond::default();
        let objects: [&dyn Object; 3] = [&d, &d.left, &d.left.root];
        let names: Vec<_> = objects.iter().map(|o| o.object_name()).collect();
        assert_eq!(names, ["Diamond", "Left", "Root"]);
        assert_eq!(objects[0].object_id(), Diamond::ID);
        assert_eq!(objects[1].object_id(), Left::ID);
        assert!(objects[2].descriptor().is::<Root>());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_offset_from_type() {
        let w = Wide::default();
        let o: &dyn Object = &w;
        let right = offset_of!(Wide, diamond) + offset_of!(Diamond, right);
        assert_eq!(o.offset_from_type(Right::ID, TypeId::of::<Right>()), Some(right as i16));
        assert_eq!(o.offset_from_type(Right::ID, TypeId::of::<Left>()), None);
        let n = Node::default();
        let o: &dyn Object = &n;
        assert_eq!(o.object_id(), Wide::ID);
        assert_eq!(o.offset_from_id(Wide::ID), Some(0));
        assert_eq!(o.offset_from_type(Wide::ID, TypeId::of::<Wide>()), None);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_offset_this_from_id() {
        let d = Diamond::default();
        let o: &dyn Object = &d;
        let address = &d as *const Diamond as usize;
        assert_eq!(o.offset_this_from_id(Diamond::ID), address);
        assert_eq!(
            o.offset_this_from_id(Right::ID),
            &d.right as *const Right as usize
        );
        assert_eq!(
            o.offset_this_from_id(Root::ID),
            &d.left.root as *const Root as usize
        );
        assert_eq!(o.offset_this_from_id(Lone::ID), 0);
        assert_eq!(o.offset_from_id(Right::ID), Some(offset_of!(Diamond, right) as i16));
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_nested() {
        let w = Wide::default();
        let o: &dyn Object = &w;
        assert_eq!(
            o.offset_this_from_id(Right::ID),
            &w.diamond.right as *const Right as usize
        );
        assert_eq!(o.offset_this_from_id(Lone::ID), &w.lone as *const Lone as usize);
    }
}
