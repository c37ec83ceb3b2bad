use std::fmt::{self, Write};

use crate::{
    hierarchy::TypeDescriptor,
    layout::Layout,
    object::Object,
    table::OffsetTable,
};

use super::sample::{Button, Clickable, Drawable, ImageButton, Label, Named, Node};

pub struct Sample {
    pub descriptor: &'static TypeDescriptor,
    pub table: &'static OffsetTable,
    new: fn() -> Box<dyn Object>,
}

impl Sample {
    fn of<T: Layout + Default>() -> Self {
        Self {
            descriptor: T::DESCRIPTOR,
            table: T::TABLE,
            new: || Box::new(T::default()),
        }
    }
}

pub fn samples() -> [Sample; 7] {
    [
        Sample::of::<Node>(),
        Sample::of::<Named>(),
        Sample::of::<Drawable>(),
        Sample::of::<Clickable>(),
        Sample::of::<Button>(),
        Sample::of::<Label>(),
        Sample::of::<ImageButton>(),
    ]
}

/// One header line, then one line per table entry. An entry that a lookup doesn't resolve to
/// (a repeated ancestor) shows the offset the lookup returns instead.
pub fn describe(sample: &Sample, out: &mut impl Write) -> fmt::Result {
    let d = sample.descriptor;
    writeln!(
        out,
        "{} #{}: {} direct, {} total",
        d.name,
        d.id,
        d.num_direct_base_classes(),
        d.num_total_base_classes()
    )?;
    let instance = (sample.new)();
    let address = instance.offset_this_from_id(d.id);
    for (i, entry) in sample.table.entries().iter().enumerate() {
        let name = sample.table.descriptor(i).map_or("?", |base| base.name);
        write!(out, "  {:+} {}", entry.offset(), name)?;
        let resolved = instance.offset_this_from_id(entry.id()).wrapping_sub(address) as isize;
        if resolved != entry.offset() as isize {
            write!(out, " -> {:+}", resolved)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::{describe, samples, Sample};
    use crate::app::sample::{Button, Label};

    fn render(sample: &Sample) -> String {
        let mut s = String::new();
        describe(sample, &mut s).unwrap();
        s
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_label() {
        assert_eq!(
            render(&Sample::of::<Label>()),
            "Label #5: 2 direct, 3 total\n  +0 Label\n  +0 Named\n  +12 Drawable\n  +12 Node\n"
        );
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_repeated_ancestor() {
        assert_eq!(
            render(&Sample::of::<Button>()),
            "Button #1: 3 direct, 5 total\n  +0 Button\n  +0 Drawable\n  +0 Node\n  +8 Clickable\n  +12 Node -> +0\n  +17 Named\n"
        );
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_samples() {
        for sample in samples() {
            let s = render(&sample);
            assert_eq!(s.lines().count(), sample.table.len() + 1);
            assert!(s.starts_with(sample.descriptor.name));
        }
    }
}
