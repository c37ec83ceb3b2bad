use core::any::TypeId;

use crate::{
    identity::Identity,
    simd::{lowest_set_bit, U32Lanes, Widest},
    table::{entry::ID_MASK, OffsetTable, CAPACITY},
};

/// Bit `i` is set if entry `i` of `table` has identity `target`.
///
/// Scans `V::LANES` entries at a time. The last chunk may cover words after `len`; those bits are
/// masked out. Reads never leave the `CAPACITY`-word array because `V::LANES` divides it.
#[inline(always)]
pub fn match_mask<V: U32Lanes>(table: &OffsetTable, target: Identity) -> u64 {
    let target = V::splat(target.get() as u32);
    let len = table.len();
    let words = table.as_ptr();
    let mut result = 0u64;
    let mut index = 0;
    while index + V::LANES <= len {
        let stored = unsafe { V::load_aligned(words.add(index)) }.and(ID_MASK);
        result |= stored.eq_mask(target) << index;
        index += V::LANES;
    }
    let remaining = len - index;
    if remaining > 0 {
        debug_assert!(index + V::LANES <= CAPACITY);
        let stored = unsafe { V::load_aligned(words.add(index)) }.and(ID_MASK);
        let valid = u64::MAX >> (64 - remaining);
        result |= (stored.eq_mask(target) & valid) << index;
    }
    result
}

/// Offset of the first entry with identity `target`.
#[inline(always)]
pub fn find_offset<V: U32Lanes>(table: &OffsetTable, target: Identity) -> Option<i16> {
    lowest_set_bit(match_mask::<V>(table, target))
        .and_then(|index| table.get(index))
        .map(|entry| entry.offset())
}

/// Offset of the first entry with identity `target` that is described as `type_id`.
///
/// Identities of different registries may coincide, so every match is confirmed against the
/// entry's descriptor. Usually the first match is the one.
#[inline(always)]
pub fn find_typed<V: U32Lanes>(
    table: &OffsetTable,
    target: Identity,
    type_id: TypeId,
) -> Option<i16> {
    let mut mask = match_mask::<V>(table, target);
    while let Some(index) = lowest_set_bit(mask) {
        if table.descriptor(index).is_some_and(|d| d.matches(type_id)) {
            return table.get(index).map(|entry| entry.offset());
        }
        mask &= mask - 1;
    }
    None
}

/// `source + offset` of the first entry with identity `target`, or `0`.
#[inline(always)]
pub fn offset_from_id(table: &OffsetTable, source: usize, target: Identity) -> usize {
    match find_offset::<Widest>(table, target) {
        Some(offset) => source.wrapping_add_signed(offset as isize),
        None => 0,
    }
}
