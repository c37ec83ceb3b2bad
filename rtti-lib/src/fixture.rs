//! Test hierarchy.
//!
//! ```text
//!        Root            Lone   Counter
//!       /    \             |      |
//!    Left    Right         |      |
//!       \    /             |      |
//!      Diamond             |      |
//!           \______________|______|
//!                        Wide
//! ```

#[derive(Debug, Default, PartialEq)]
pub struct Root {
    pub value: u64,
}

#[derive(Debug, Default)]
pub struct Left {
    pub root: Root,
    pub left: u32,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Right {
    pub right: [u16; 3],
    pub root: Root,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Diamond {
    pub tag: u8,
    pub left: Left,
    pub right: Right,
}

#[derive(Debug, Default)]
pub struct Lone {
    pub name: &'static str,
}

#[derive(Debug, Default)]
pub struct Counter {
    pub count: u16,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Wide {
    pub counter: Counter,
    pub diamond: Diamond,
    pub lone: Lone,
}

crate::registry! { Root, Left, Right, Diamond, Lone, Counter, Wide }

crate::object! {
    Root;
    Lone;
    Counter;
    Left: Root = root;
    Right: Root = root;
    Diamond: Left = left, Right = right;
    Wide: Diamond = diamond, Lone = lone, Counter = counter;
}

impl Diamond {
    pub fn new(left: u64, right: u64) -> Self {
        Self {
            tag: 7,
            left: Left {
                root: Root { value: left },
                left: 1,
            },
            right: Right {
                right: [2; 3],
                root: Root { value: right },
            },
        }
    }
}
