// simd.rs - Vectorized printable-ASCII bulk scan.
//
// Finds the longest prefix of printable ASCII (0x20..0x80) in a byte
// slice, clamped to a column budget (one column per byte in this range).
// Stops at the first control byte (< 0x20) or complex byte (>= 0x80).
//
// Dispatch: AVX2 (32-byte batches) when the CPU has it, else SSE2
// (16-byte batches) on x86/x86_64, else a scalar loop. Capability
// detection runs once and is cached. All vector loads are unaligned; the
// tail past the last full batch is handled scalarly.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use std::sync::OnceLock;

/// Cached SIMD capability flags for runtime dispatch.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy)]
struct SimdCapabilities {
    has_sse2: bool,
    has_avx2: bool,
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn simd_capabilities() -> SimdCapabilities {
    static CAPS: OnceLock<SimdCapabilities> = OnceLock::new();
    *CAPS.get_or_init(|| SimdCapabilities {
        has_sse2: is_x86_feature_detected!("sse2"),
        has_avx2: is_x86_feature_detected!("avx2"),
    })
}

/// Widest vector width the scan will use on this machine, in bits.
/// 0 means the scalar loop.
pub fn max_simd_width() -> usize {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        let caps = simd_capabilities();
        if caps.has_avx2 {
            return 256;
        }
        if caps.has_sse2 {
            return 128;
        }
    }
    0
}

#[inline]
fn is_printable_ascii(byte: u8) -> bool {
    (0x20..0x80).contains(&byte)
}

/// Returns `n` in `[0, min(text.len(), max_column_count)]` such that
/// `text[..n]` is entirely printable ASCII, and either `n` reached that
/// bound or `text[n]` is a control or complex byte.
pub fn scan_ascii_printable(text: &[u8], max_column_count: usize) -> usize {
    let limit = text.len().min(max_column_count);

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        let caps = simd_capabilities();
        if caps.has_avx2 {
            // SAFETY: AVX2 support was just detected.
            return unsafe { scan_avx2(text, limit) };
        }
        if caps.has_sse2 {
            // SAFETY: SSE2 support was just detected.
            return unsafe { scan_sse2(text, limit) };
        }
    }

    scan_scalar(text, 0, limit)
}

/// Scalar finalizer, also the portable whole-slice fallback.
fn scan_scalar(text: &[u8], mut offset: usize, limit: usize) -> usize {
    while offset < limit && is_printable_ascii(text[offset]) {
        offset += 1;
    }
    offset
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn scan_sse2(text: &[u8], limit: usize) -> usize {
    const BATCH: usize = 16;
    let ptr = text.as_ptr();
    let space = _mm_set1_epi8(0x20);
    let mut offset = 0usize;

    while offset + BATCH <= limit {
        let batch = _mm_loadu_si128(ptr.add(offset) as *const __m128i);
        // Signed less-than 0x20 flags 0x00..0x1F and also 0x80..0xFF; the
        // high-bit movemask flags exactly 0x80..0xFF. The union is exactly
        // the stop set: control or complex.
        let control = _mm_movemask_epi8(_mm_cmplt_epi8(batch, space)) as u32;
        let complex = _mm_movemask_epi8(batch) as u32;
        let stop = control | complex;
        if stop != 0 {
            offset += stop.trailing_zeros() as usize;
            break;
        }
        offset += BATCH;
    }

    scan_scalar(text, offset, limit)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
unsafe fn scan_avx2(text: &[u8], limit: usize) -> usize {
    const BATCH: usize = 32;
    let ptr = text.as_ptr();
    let space = _mm256_set1_epi8(0x20);
    let mut offset = 0usize;

    while offset + BATCH <= limit {
        let batch = _mm256_loadu_si256(ptr.add(offset) as *const __m256i);
        let control = _mm256_movemask_epi8(_mm256_cmpgt_epi8(space, batch)) as u32;
        let complex = _mm256_movemask_epi8(batch) as u32;
        let stop = control | complex;
        if stop != 0 {
            offset += stop.trailing_zeros() as usize;
            break;
        }
        offset += BATCH;
    }

    scan_scalar(text, offset, limit)
}
