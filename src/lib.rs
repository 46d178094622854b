// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Orientation scores of 2D images.
//!
//! An image is split into a stack of planes, one per orientation bin, by
//! angular bandpass filtering of its spectrum. Each plane keeps the structures
//! (lines, edges, ridges) whose local orientation falls into its bin, and the
//! planes sum back to the source image.
//!
//! ```
//! use orientscore::{orientation_score_f32, ScoreImage, ThreadingPolicy};
//!
//! let pixels = vec![0.5f32; 32 * 24];
//! let image = ScoreImage::borrow(&pixels, 32, 24);
//! let scores = orientation_score_f32(&image, 8, ThreadingPolicy::Single).unwrap();
//! assert_eq!(scores.shape(), [8, 24, 32]);
//! ```

mod arena;
mod error;
mod fft2d;
mod image;
mod img_size;
mod kernels;
mod mask;
mod orientation_score;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod orientation_score_image;
mod threading_policy;

pub use crate::image::{OrientationScores, ScoreImage};
pub use error::{MismatchedSize, ScoreError};
pub use fft2d::FftNumber;
pub use img_size::ImageSize;
pub use kernels::{orientation_kernels, OrientationKernels};
pub use orientation_score::{orientation_score, orientation_score_f32, orientation_score_f64};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use orientation_score_image::orientation_score_image;
pub use threading_policy::ThreadingPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_planes_are_kernel_responses() {
        // An impulse has a flat spectrum, so plane i is the inverse DFT of mask i
        let (width, height) = (8usize, 6usize);
        let mut src = vec![0f64; width * height];
        src[0] = 1.;
        let image = ScoreImage::borrow(&src, width as u32, height as u32);
        let scores = orientation_score_f64(&image, 3, ThreadingPolicy::Single).unwrap();
        let kernels = orientation_kernels::<f64>(3, image.size()).unwrap();
        assert_eq!(scores.shape(), kernels.shape());

        let norm = 1. / (width * height) as f64;
        for i in 0..3 {
            for y in 0..height {
                for x in 0..width {
                    let mut expected = 0.;
                    for r in 0..height {
                        for c in 0..width {
                            let phase = 2.
                                * std::f64::consts::PI
                                * ((r * y) as f64 / height as f64 + (c * x) as f64 / width as f64);
                            expected += kernels.get(i, r, c) * phase.cos();
                        }
                    }
                    expected *= norm;
                    let diff = (scores.plane(i)[y * width + x] - expected).abs();
                    assert!(
                        diff <= 1e-12,
                        "Diff expected to be less than 1e-12 but it was {diff} at ({x}, {y}) of {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_u16_input() {
        let width: usize = 48;
        let height: usize = 40;
        let src = vec![4000u16; width * height];
        let image = ScoreImage::borrow(&src, width as u32, height as u32);
        let scores = orientation_score::<u16, f32>(&image, 4, ThreadingPolicy::Single).unwrap();
        for (i, &cn) in scores.plane(3).iter().enumerate() {
            let diff = (cn - 1000.).abs();
            assert!(
                diff <= 1e-1,
                "Diff expected to be less than 1e-1 but it was {diff} at {i}"
            );
        }
        let restored = scores.reconstruct();
        for (i, &cn) in restored.iter().enumerate() {
            let diff = (cn - 4000.).abs();
            assert!(
                diff <= 1e-1,
                "Diff expected to be less than 1e-1 but it was {diff} at {i}"
            );
        }
    }
}
