use core::{cmp::Ordering, fmt};

use crate::common::const_str::compare;

/// A small, dense type identity, unique inside one registry.
///
/// Identities live in the lower half of an [`crate::table::OffsetIdEntry`], so they are `u16`.
/// `0` is reserved and never assigned to a type. Types of different registries may share one, so
/// casts confirm the type with its [`crate::hierarchy::TypeDescriptor`] as well.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(u16);

impl Identity {
    pub const NONE: Identity = Identity(0);
    #[inline(always)]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }
    #[inline(always)]
    pub const fn get(self) -> u16 {
        self.0
    }
    #[inline(always)]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
    /// `1 + ` the number of names in `names` that sort before `name`.
    ///
    /// The result doesn't depend on the order of `names`. `name` has to occur in `names` exactly
    /// once.
    pub const fn ranked(names: &[&str], name: &str) -> Self {
        assert!(names.len() < u16::MAX as usize, "too many participating types");
        let mut rank = 0;
        let mut found = 0;
        let mut i = 0;
        while i < names.len() {
            match compare(names[i], name) {
                Ordering::Less => rank += 1,
                Ordering::Equal => found += 1,
                Ordering::Greater => {}
            }
            i += 1;
        }
        assert!(found == 1, "participating type names must be unique");
        Self(rank as u16 + 1)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A participating type.
///
/// Implemented by [`crate::registry!`]. Both values are known at compile time.
pub trait Registered: 'static {
    const ID: Identity;
    const NAME: &'static str;
}

/// Registers a closed set of participating types.
///
/// Identities are ranks of the type names, so they don't depend on the declaration order.
///
/// ```
/// pub struct Apple;
/// pub struct Zebra;
/// rtti_lib::registry! { Zebra, Apple }
///
/// use rtti_lib::identity::Registered;
/// assert_eq!(Apple::ID.get(), 1);
/// assert_eq!(Zebra::ID.get(), 2);
/// assert_eq!(Zebra::NAME, "Zebra");
/// ```
#[macro_export]
macro_rules! registry {
    ($($ty:ty),+ $(,)?) => {
        const _: () = {
            const NAMES: &[&str] = &[$(stringify!($ty)),+];
            $(
                impl $crate::identity::Registered for $ty {
                    const ID: $crate::identity::Identity =
                        $crate::identity::Identity::ranked(NAMES, stringify!($ty));
                    const NAME: &'static str = stringify!($ty);
                }
            )+
        };
    };
}
