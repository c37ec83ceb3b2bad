use super::U32Lanes;

/// `N` plain lanes. The compiler is free to vectorize the loops.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portable<const N: usize>([u32; N]);

impl<const N: usize> U32Lanes for Portable<N> {
    const LANES: usize = {
        assert!(N.is_power_of_two() && N <= 16);
        N
    };
    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self([value; N])
    }
    #[inline(always)]
    unsafe fn load_aligned(p: *const u32) -> Self {
        Self((p as *const [u32; N]).read())
    }
    #[inline(always)]
    fn and(self, mask: u32) -> Self {
        Self(self.0.map(|x| x & mask))
    }
    #[inline(always)]
    fn eq_mask(self, other: Self) -> u64 {
        let mut result = 0;
        for i in 0..N {
            result |= ((self.0[i] == other.0[i]) as u64) << i;
        }
        result
    }
}
