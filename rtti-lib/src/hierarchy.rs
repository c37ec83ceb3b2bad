use core::any::TypeId;

use crate::{
    common::const_str,
    identity::{Identity, Registered},
};

/// Compile-time metadata of a participating type.
///
/// `id` is only unique inside one registry. `type_id` tells apart types of different registries.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub id: Identity,
    pub name: &'static str,
    pub type_id: fn() -> TypeId,
    /// Participating direct ancestors, in declaration order.
    pub direct_bases: &'static [&'static TypeDescriptor],
}

impl TypeDescriptor {
    pub const fn new(
        id: Identity,
        name: &'static str,
        type_id: fn() -> TypeId,
        direct_bases: &'static [&'static TypeDescriptor],
    ) -> Self {
        Self {
            id,
            name,
            type_id,
            direct_bases,
        }
    }
    /// `true` if this describes `U`.
    #[inline(always)]
    pub fn is<U: 'static>(&self) -> bool {
        self.matches(TypeId::of::<U>())
    }
    #[inline(always)]
    pub fn matches(&self, type_id: TypeId) -> bool {
        (self.type_id)() == type_id
    }
    #[inline(always)]
    pub const fn num_direct_base_classes(&self) -> usize {
        self.direct_bases.len()
    }
    /// `direct + sum(total(direct_i))`. Diamond ancestors are counted once per path.
    pub const fn num_total_base_classes(&self) -> usize {
        let mut result = self.direct_bases.len();
        let mut i = 0;
        while i < self.direct_bases.len() {
            result += self.direct_bases[i].num_total_base_classes();
            i += 1;
        }
        result
    }
    /// `true` if `id` is this type or one of its transitive ancestors.
    pub const fn contains(&self, id: Identity) -> bool {
        if self.id.get() == id.get() {
            return true;
        }
        self.is_derived_from(id)
    }
    /// `true` if `id` is a proper transitive ancestor.
    pub const fn is_derived_from(&self, id: Identity) -> bool {
        let mut i = 0;
        while i < self.direct_bases.len() {
            if self.direct_bases[i].contains(id) {
                return true;
            }
            i += 1;
        }
        false
    }
    /// `true` if this is a proper transitive ancestor of `derived`.
    #[inline(always)]
    pub const fn is_base_of(&self, derived: &TypeDescriptor) -> bool {
        derived.is_derived_from(self.id)
    }
    /// Panics if two types in the transitive closure share an identity but not a name.
    ///
    /// It happens when types from different registries are mixed in one hierarchy.
    pub const fn check_identities(&self) {
        self.check_against(self);
    }
    const fn check_against(&self, root: &TypeDescriptor) {
        root.check_node(self);
        let mut i = 0;
        while i < self.direct_bases.len() {
            self.direct_bases[i].check_against(root);
            i += 1;
        }
    }
    const fn check_node(&self, node: &TypeDescriptor) {
        if self.id.get() == node.id.get() {
            assert!(
                const_str::eq(self.name, node.name),
                "an identity is shared by two different types"
            );
        }
        let mut i = 0;
        while i < self.direct_bases.len() {
            self.direct_bases[i].check_node(node);
            i += 1;
        }
    }
}

/// A participating type with its declared direct ancestors.
///
/// Implemented by [`crate::object!`].
pub trait Hierarchy: Registered {
    const DESCRIPTOR: &'static TypeDescriptor;
    #[inline(always)]
    fn num_direct_base_classes() -> usize {
        Self::DESCRIPTOR.num_direct_base_classes()
    }
    #[inline(always)]
    fn num_total_base_classes() -> usize {
        Self::DESCRIPTOR.num_total_base_classes()
    }
    #[inline(always)]
    fn direct_base_classes() -> &'static [&'static TypeDescriptor] {
        Self::DESCRIPTOR.direct_bases
    }
}
