use core::arch::x86_64::*;

use super::U32Lanes;

/// 4 lanes. SSE2 is part of the x86_64 baseline.
#[derive(Clone, Copy)]
pub struct Sse2(__m128i);

impl U32Lanes for Sse2 {
    const LANES: usize = 4;
    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Self(_mm_set1_epi32(value as i32)) }
    }
    #[inline(always)]
    unsafe fn load_aligned(p: *const u32) -> Self {
        Self(_mm_load_si128(p as *const __m128i))
    }
    #[inline(always)]
    fn and(self, mask: u32) -> Self {
        unsafe { Self(_mm_and_si128(self.0, _mm_set1_epi32(mask as i32))) }
    }
    #[inline(always)]
    fn eq_mask(self, other: Self) -> u64 {
        unsafe { _mm_movemask_ps(_mm_castsi128_ps(_mm_cmpeq_epi32(self.0, other.0))) as u32 as u64 }
    }
}

/// 8 lanes.
#[cfg(target_feature = "avx2")]
#[derive(Clone, Copy)]
pub struct Avx2(__m256i);

#[cfg(target_feature = "avx2")]
impl U32Lanes for Avx2 {
    const LANES: usize = 8;
    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Self(_mm256_set1_epi32(value as i32)) }
    }
    #[inline(always)]
    unsafe fn load_aligned(p: *const u32) -> Self {
        Self(_mm256_load_si256(p as *const __m256i))
    }
    #[inline(always)]
    fn and(self, mask: u32) -> Self {
        unsafe { Self(_mm256_and_si256(self.0, _mm256_set1_epi32(mask as i32))) }
    }
    #[inline(always)]
    fn eq_mask(self, other: Self) -> u64 {
        unsafe {
            _mm256_movemask_ps(_mm256_castsi256_ps(_mm256_cmpeq_epi32(self.0, other.0))) as u32
                as u64
        }
    }
}
