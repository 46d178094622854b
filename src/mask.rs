/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_complex::Complex;
use num_traits::Float;

/// Multiplies both components of `spectrum` by the real `mask` scaled by
/// `norm`, in place.
pub(crate) fn apply_mask_in_place<V: Float>(spectrum: &mut [Complex<V>], mask: &[V], norm: V) {
    assert_eq!(spectrum.len(), mask.len());
    #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            unsafe {
                return apply_mask_in_place_avx2(spectrum, mask, norm);
            }
        }
    }
    #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "sse"))]
    {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            unsafe {
                return apply_mask_in_place_sse_4_1(spectrum, mask, norm);
            }
        }
    }
    apply_mask_in_place_impl(spectrum, mask, norm)
}

#[inline(always)]
fn apply_mask_in_place_impl<V: Float>(spectrum: &mut [Complex<V>], mask: &[V], norm: V) {
    for (dst, &weight) in spectrum.iter_mut().zip(mask.iter()) {
        let weight = weight * norm;
        dst.re = dst.re * weight;
        dst.im = dst.im * weight;
    }
}

#[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "sse"))]
#[target_feature(enable = "sse4.1")]
unsafe fn apply_mask_in_place_sse_4_1<V: Float>(
    spectrum: &mut [Complex<V>],
    mask: &[V],
    norm: V,
) {
    apply_mask_in_place_impl(spectrum, mask, norm)
}

#[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "avx"))]
#[target_feature(enable = "avx2")]
unsafe fn apply_mask_in_place_avx2<V: Float>(spectrum: &mut [Complex<V>], mask: &[V], norm: V) {
    apply_mask_in_place_impl(spectrum, mask, norm)
}
