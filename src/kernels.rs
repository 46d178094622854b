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
use crate::error::try_alloc;
use crate::{ImageSize, ScoreError};
use num_traits::AsPrimitive;
use std::f64::consts::PI;

/// Frequency-domain angular weights, laid out as `[orientations, rows, cols]`.
///
/// For every frequency coordinate the weights over all orientations sum to one,
/// so the orientation planes computed with these kernels add back up to the
/// source image.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationKernels<F> {
    data: Vec<F>,
    orientations: usize,
    size: ImageSize,
}

impl<F: Copy> OrientationKernels<F> {
    #[inline]
    pub fn orientations(&self) -> usize {
        self.orientations
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Shape as `[orientations, rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [self.orientations, self.size.height, self.size.width]
    }

    /// Mask of orientation `index`, row major.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.orientations()`.
    pub fn plane(&self, index: usize) -> &[F] {
        assert!(index < self.orientations);
        let len = self.size.width * self.size.height;
        &self.data[index * len..(index + 1) * len]
    }

    /// Weight of orientation `index` at frequency row `r` and column `c`.
    #[inline]
    pub fn get(&self, index: usize, r: usize, c: usize) -> F {
        self.plane(index)[r * self.size.width + c]
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }
}

/// Folds DFT bin `index` of an axis with `len` bins into a signed frequency
/// normalized to (-0.5, 0.5].
///
/// The Nyquist bin of an even axis (`index == len - index`) lands on -0.5.
#[inline]
pub(crate) fn fold_frequency(index: usize, len: usize) -> f64 {
    let signed = if index < len - index {
        index as f64
    } else {
        index as f64 - len as f64
    };
    signed / len as f64
}

/// First order B-spline weight of orientation bin `bin` for a direction at
/// `angle`, with both measured in bins on a circle of `orientations` bins.
#[inline]
fn tent_weight(angle: f64, bin: usize, orientations: usize) -> f64 {
    let n = orientations as f64;
    let distance = (angle + 2. * n - bin as f64) % n;
    let distance = distance.min(n - distance);
    (1. - distance).max(0.)
}

/// Builds angular bandpass masks for `orientations` orientation bins on a
/// spectrum of `size`.
///
/// Inside the disk inscribed in the normalized frequency square every
/// frequency is shared between the two orientation bins nearest to its
/// direction, using a tent function over the bin distance. Frequencies are
/// undirected, so the angular domain wraps at π. Outside of that disk every
/// orientation gets `1 / orientations`, as does the zero frequency.
///
/// A single orientation gets a mask of ones.
///
/// # Arguments
///
/// * `orientations`: Number of orientation bins, at least 1.
/// * `size`: Spectrum size, same as the image size.
///
pub fn orientation_kernels<F>(
    orientations: usize,
    size: ImageSize,
) -> Result<OrientationKernels<F>, ScoreError>
where
    F: Copy + Default + 'static,
    f64: AsPrimitive<F>,
{
    if orientations == 0 {
        return Err(ScoreError::ZeroOrientations);
    }
    if size.is_empty() {
        return Err(ScoreError::ZeroBaseSize);
    }
    let plane_len = size.plane_len().ok_or(ScoreError::ExceedingPointerSize)?;
    let total = plane_len
        .checked_mul(orientations)
        .ok_or(ScoreError::ExceedingPointerSize)?;

    let rows = size.height;
    let cols = size.width;
    let isotropic = 1f64 / orientations as f64;

    if orientations == 1 {
        let one: F = 1f64.as_();
        return Ok(OrientationKernels {
            data: try_alloc(total, one)?,
            orientations,
            size,
        });
    }

    let mut data = try_alloc(total, F::default())?;

    for r in 0..rows {
        let rd = fold_frequency(r, rows);
        for c in 0..cols {
            let cd = fold_frequency(c, cols);
            let offset = r * cols + c;
            if rd * rd + cd * cd < 0.25 {
                let angle = rd.atan2(cd) * orientations as f64 / PI;
                for (i, plane) in data.chunks_exact_mut(plane_len).enumerate() {
                    plane[offset] = tent_weight(angle, i, orientations).as_();
                }
            } else {
                for plane in data.chunks_exact_mut(plane_len) {
                    plane[offset] = isotropic.as_();
                }
            }
        }
    }

    for plane in data.chunks_exact_mut(plane_len) {
        plane[0] = isotropic.as_();
    }

    Ok(OrientationKernels {
        data,
        orientations,
        size,
    })
}
