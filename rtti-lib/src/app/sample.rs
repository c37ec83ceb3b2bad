//! A small widget hierarchy used by the `rtti` binary.

#[derive(Debug, Default)]
#[repr(C)]
pub struct Node {
    pub id: u32,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Named {
    pub name: [u8; 12],
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Drawable {
    pub node: Node,
    pub z: i32,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Clickable {
    pub enabled: bool,
    pub node: Node,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Button {
    pub drawable: Drawable,
    pub clickable: Clickable,
    pub pressed: bool,
    pub named: Named,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct Label {
    pub named: Named,
    pub drawable: Drawable,
}

#[derive(Debug, Default)]
#[repr(C)]
pub struct ImageButton {
    pub image: u64,
    pub button: Button,
}

crate::registry! { Node, Named, Drawable, Clickable, Button, Label, ImageButton }

crate::object! {
    Node;
    Named;
    Drawable: Node = node;
    Clickable: Node = node;
    Button: Drawable = drawable, Clickable = clickable, Named = named;
    Label: Named = named, Drawable = drawable;
    ImageButton: Button = button;
}

#[cfg(test)]
mod test {
    use core::mem::{offset_of, size_of};

    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::{hierarchy::Hierarchy, identity::Registered, layout::Layout, obj_ref::ObjRef};

    use super::*;

    const _: () = assert!(size_of::<Button>() == 32);
    const _: () = assert!(offset_of!(ImageButton, button) == 8);

    #[test]
    #[wasm_bindgen_test]
    fn test_identities() {
        assert_eq!(Button::ID.get(), 1);
        assert_eq!(Node::ID.get(), 7);
        assert_eq!(ImageButton::num_total_base_classes(), 6);
        assert_eq!(ImageButton::TABLE.len(), 7);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_widgets() {
        let b = ImageButton::default();
        let named = ObjRef::new(&b).cast::<Named>().unwrap();
        let clickable = named.cast::<Clickable>().unwrap();
        assert!(core::ptr::eq(clickable.get(), &b.button.clickable));
        let node = clickable.cast::<Node>().unwrap();
        assert!(core::ptr::eq(node.get(), &b.button.clickable.node));
        assert!(named.cast::<Label>().is_none());
    }
}
