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
use crate::arena::SpectrumArena;
use crate::{ImageSize, ScoreError};
use fast_transpose::{transpose_arbitrary, FlipMode, FlopMode};
use num_traits::Float;
use rustfft::{Fft, FftNum, FftPlanner};
use std::fmt::Debug;
use std::sync::Arc;

/// Floating point types usable as FFT intermediate, only `f32` and `f64`.
pub trait FftNumber: FftNum + Float + Default + Debug {}

impl FftNumber for f32 {}

impl FftNumber for f64 {}

/// Unnormalized 2D complex DFT over a row major plane, composed of row and
/// column 1D plans.
pub(crate) struct Fft2d<F: FftNumber> {
    size: ImageSize,
    rows_forward: Arc<dyn Fft<F>>,
    columns_forward: Arc<dyn Fft<F>>,
    rows_inverse: Arc<dyn Fft<F>>,
    columns_inverse: Arc<dyn Fft<F>>,
}

impl<F: FftNumber> Fft2d<F> {
    pub(crate) fn new(size: ImageSize) -> Self {
        let mut planner = FftPlanner::<F>::new();
        Self {
            size,
            rows_forward: planner.plan_fft_forward(size.width),
            columns_forward: planner.plan_fft_forward(size.height),
            rows_inverse: planner.plan_fft_inverse(size.width),
            columns_inverse: planner.plan_fft_inverse(size.height),
        }
    }

    #[inline]
    pub(crate) fn size(&self) -> ImageSize {
        self.size
    }

    /// Scratch length that satisfies every plan.
    pub(crate) fn scratch_len(&self) -> usize {
        self.rows_forward
            .get_inplace_scratch_len()
            .max(self.columns_forward.get_inplace_scratch_len())
            .max(self.rows_inverse.get_inplace_scratch_len())
            .max(self.columns_inverse.get_inplace_scratch_len())
    }

    pub(crate) fn forward(&self, arena: &mut SpectrumArena<F>) -> Result<(), ScoreError> {
        self.execute(
            self.rows_forward.as_ref(),
            self.columns_forward.as_ref(),
            arena,
        )
    }

    pub(crate) fn inverse(&self, arena: &mut SpectrumArena<F>) -> Result<(), ScoreError> {
        self.execute(
            self.rows_inverse.as_ref(),
            self.columns_inverse.as_ref(),
            arena,
        )
    }

    fn execute(
        &self,
        rows: &dyn Fft<F>,
        columns: &dyn Fft<F>,
        arena: &mut SpectrumArena<F>,
    ) -> Result<(), ScoreError> {
        let width = self.size.width;
        let height = self.size.height;

        rows.process_with_scratch(&mut arena.plane, &mut arena.scratch);

        transpose(&arena.plane, &mut arena.columns, width, height)?;
        columns.process_with_scratch(&mut arena.columns, &mut arena.scratch);
        transpose(&arena.columns, &mut arena.plane, height, width)?;
        Ok(())
    }
}

/// Plain transpose of a `width` x `height` row major matrix into `dst`.
fn transpose<V: Copy + Default>(
    matrix: &[V],
    dst: &mut [V],
    width: usize,
    height: usize,
) -> Result<(), ScoreError> {
    transpose_arbitrary(
        matrix,
        width,
        dst,
        height,
        width,
        height,
        FlipMode::NoFlip,
        FlopMode::NoFlop,
    )
    .map_err(|_| ScoreError::InvalidArguments)
}
