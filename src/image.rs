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
use crate::error::{check_slice_size, try_alloc};
use crate::{ImageSize, ScoreError};
use num_traits::Float;
use std::fmt::Debug;

/// Immutable single plane image store
pub struct ScoreImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
}

impl<'a, T: Clone + Copy + Default + Debug> ScoreImage<'a, T> {
    /// Borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a [T], width: u32, height: u32) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    /// Borrows existing data described by a dynamic `[rows, cols]` shape.
    ///
    /// Only rank 2 shapes are accepted.
    pub fn from_shape(arr: &'a [T], shape: &[usize]) -> Result<Self, ScoreError> {
        if shape.len() != 2 {
            return Err(ScoreError::InvalidRank(shape.len()));
        }
        let (rows, cols) = (shape[0], shape[1]);
        let height = u32::try_from(rows).map_err(|_| ScoreError::ExceedingPointerSize)?;
        let width = u32::try_from(cols).map_err(|_| ScoreError::ExceedingPointerSize)?;
        let image = Self::borrow(arr, width, height);
        image.check_layout()?;
        Ok(image)
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), ScoreError> {
        check_slice_size(
            self.data.as_ref(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Iterates over image rows without the stride tail.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
        let width = self.width as usize;
        self.data
            .as_ref()
            .chunks(self.row_stride() as usize)
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }
}

/// Stack of orientation score planes, laid out as `[orientations, rows, cols]`.
///
/// Plane `i` holds the image content whose local orientation falls into
/// orientation bin `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationScores<F> {
    data: Vec<F>,
    orientations: usize,
    size: ImageSize,
}

impl<F: Copy + Default> OrientationScores<F> {
    pub(crate) fn alloc(orientations: usize, size: ImageSize) -> Result<Self, ScoreError> {
        let plane = size.plane_len().ok_or(ScoreError::ExceedingPointerSize)?;
        let total = plane
            .checked_mul(orientations)
            .ok_or(ScoreError::ExceedingPointerSize)?;
        Ok(Self {
            data: try_alloc(total, F::default())?,
            orientations,
            size,
        })
    }

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

    #[inline]
    fn plane_len(&self) -> usize {
        self.size.width * self.size.height
    }

    /// Returns plane of orientation `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.orientations()`.
    pub fn plane(&self, index: usize) -> &[F] {
        assert!(index < self.orientations);
        let len = self.plane_len();
        &self.data[index * len..(index + 1) * len]
    }

    /// Returns mutable plane of orientation `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.orientations()`.
    pub fn plane_mut(&mut self, index: usize) -> &mut [F] {
        assert!(index < self.orientations);
        let len = self.plane_len();
        &mut self.data[index * len..(index + 1) * len]
    }

    /// Iterates planes in orientation order.
    pub fn planes(&self) -> std::slice::ChunksExact<'_, F> {
        self.data.chunks_exact(self.plane_len())
    }

    pub(crate) fn planes_mut(&mut self) -> std::slice::ChunksExactMut<'_, F> {
        let len = self.plane_len();
        self.data.chunks_exact_mut(len)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [F] {
        &mut self.data
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<F> {
        self.data
    }
}

impl<F: Float + Default> OrientationScores<F> {
    /// Sums all orientation planes back into a single image.
    ///
    /// Since the angular kernels sum to one at every frequency this gives the
    /// source image back up to rounding.
    pub fn reconstruct(&self) -> Vec<F> {
        let mut dst = vec![F::zero(); self.plane_len()];
        for plane in self.planes() {
            for (dst, &src) in dst.iter_mut().zip(plane.iter()) {
                *dst = *dst + src;
            }
        }
        dst
    }

    /// Sum of squares of orientation plane `index`.
    pub fn energy(&self, index: usize) -> F {
        self.plane(index)
            .iter()
            .fold(F::zero(), |acc, &v| acc + v * v)
    }
}
