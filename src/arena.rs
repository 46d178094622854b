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
use crate::fft2d::{Fft2d, FftNumber};
use crate::{ScoreError, ScoreImage};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Working buffers of a single orientation pass.
///
/// Owned by the pass that uses it and dropped with it, nothing is pooled
/// between calls.
pub(crate) struct SpectrumArena<F> {
    /// Complex working plane, row major.
    pub(crate) plane: Vec<Complex<F>>,
    /// Column major copy of `plane` for the column transforms.
    pub(crate) columns: Vec<Complex<F>>,
    pub(crate) scratch: Vec<Complex<F>>,
}

impl<F: FftNumber> SpectrumArena<F> {
    pub(crate) fn new(fft: &Fft2d<F>) -> Result<Self, ScoreError> {
        let plane_len = fft
            .size()
            .plane_len()
            .ok_or(ScoreError::ExceedingPointerSize)?;
        Ok(Self {
            plane: try_alloc(plane_len, Complex::<F>::default())?,
            columns: try_alloc(plane_len, Complex::<F>::default())?,
            scratch: try_alloc(fft.scratch_len(), Complex::<F>::default())?,
        })
    }

    /// Puts `image` into the real part of the working plane and clears the
    /// imaginary part.
    pub(crate) fn load<T>(&mut self, image: &ScoreImage<T>)
    where
        T: Copy + Default + Debug + AsPrimitive<F>,
    {
        let width = image.width as usize;
        for (dst_row, src_row) in self.plane.chunks_exact_mut(width).zip(image.rows()) {
            for (dst, &src) in dst_row.iter_mut().zip(src_row.iter()) {
                *dst = Complex {
                    re: src.as_(),
                    im: F::zero(),
                };
            }
        }
    }

    /// Writes the real part of the working plane into `dst`.
    pub(crate) fn store_real(&self, dst: &mut [F]) {
        for (dst, src) in dst.iter_mut().zip(self.plane.iter()) {
            *dst = src.re;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageSize;

    #[test]
    fn test_load_clears_imaginary_and_honours_stride() {
        let data = [1u8, 2, 0, 3, 4, 0];
        let mut image = ScoreImage::borrow(&data, 2, 2);
        image.stride = 3;
        let fft = Fft2d::<f32>::new(ImageSize::new(2, 2));
        let mut arena = SpectrumArena::new(&fft).unwrap();
        arena.plane.fill(Complex::new(9., 9.));
        arena.load(&image);
        assert_eq!(
            arena.plane,
            vec![
                Complex::new(1f32, 0.),
                Complex::new(2., 0.),
                Complex::new(3., 0.),
                Complex::new(4., 0.)
            ]
        );
        let mut dst = [0f32; 4];
        arena.store_real(&mut dst);
        assert_eq!(dst, [1., 2., 3., 4.]);
    }
}
