pub mod portable;
#[cfg(target_arch = "x86_64")]
pub mod x86;

/// Fixed-width vector of `u32` lanes.
///
/// The lookup engine only needs these primitives from the vector layer.
pub trait U32Lanes: Copy {
    /// A power of two, at most `16`.
    const LANES: usize;
    fn splat(value: u32) -> Self;
    /// # Safety
    ///
    /// `p` is aligned to `LANES * 4` bytes and points to `LANES` readable words.
    unsafe fn load_aligned(p: *const u32) -> Self;
    fn and(self, mask: u32) -> Self;
    /// Bit `i` is set if lane `i` of `self` equals lane `i` of `other`.
    fn eq_mask(self, other: Self) -> u64;
}

#[inline(always)]
pub const fn lowest_set_bit(mask: u64) -> Option<usize> {
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros() as usize)
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub type Widest = x86::Avx2;

#[cfg(all(target_arch = "x86_64", not(target_feature = "avx2")))]
pub type Widest = x86::Sse2;

#[cfg(not(target_arch = "x86_64"))]
pub type Widest = portable::Portable<8>;
