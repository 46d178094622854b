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
use crate::fft2d::{Fft2d, FftNumber};
use crate::kernels::orientation_kernels;
use crate::mask::apply_mask_in_place;
use crate::{OrientationScores, ScoreError, ScoreImage, ThreadingPolicy};
use log::{debug, trace};
use num_traits::AsPrimitive;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;
use std::fmt::Debug;
use std::time::Instant;

/// Computes orientation scores of a single plane image.
///
/// The image spectrum is split into `orientations` angular bands, one per
/// orientation bin, and every band is transformed back into its own plane of
/// the result. Planes sum back to the source image.
///
/// # Arguments
///
/// * `image`: Single plane image.
/// * `orientations`: Number of orientation bins, at least 1, one gives the image back.
/// * `threading_policy`: Threads usage policy, orientations are filtered in parallel.
/// * `F`: Intermediate internal type for fft and type of the scores, only `f32` and `f64` is supported.
///
/// returns: Result<OrientationScores<F>, ScoreError>
///
pub fn orientation_score<T, F>(
    image: &ScoreImage<T>,
    orientations: usize,
    threading_policy: ThreadingPolicy,
) -> Result<OrientationScores<F>, ScoreError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F>,
    F: FftNumber,
    f64: AsPrimitive<F>,
{
    if orientations == 0 {
        return Err(ScoreError::ZeroOrientations);
    }
    image.check_layout()?;

    let size = image.size();
    let start = Instant::now();

    let kernels = orientation_kernels::<F>(orientations, size)?;
    let mut scores = OrientationScores::<F>::alloc(orientations, size)?;

    let fft = Fft2d::<F>::new(size);
    let norm_factor: F = (1f64 / (size.width * size.height) as f64).as_();

    let thread_count = threading_policy.worker_count(size, orientations);
    debug!(
        "orientation score: {}x{} image, {} orientations, {} threads, fft scratch {}",
        size.width,
        size.height,
        orientations,
        thread_count,
        fft.scratch_len()
    );

    if thread_count == 1 {
        let mut arena = SpectrumArena::new(&fft)?;
        for (index, plane) in scores.planes_mut().enumerate() {
            trace!("orientation score: filtering orientation {index}");
            filter_orientation(
                image,
                &fft,
                kernels.plane(index),
                norm_factor,
                &mut arena,
                plane,
            )?;
        }
    } else {
        let pool = threading_policy.make_pool(thread_count)?;
        let plane_len = size.width * size.height;
        pool.install(|| {
            scores
                .data_mut()
                .par_chunks_exact_mut(plane_len)
                .enumerate()
                .try_for_each_init(
                    || SpectrumArena::new(&fft),
                    |arena, (index, plane)| -> Result<(), ScoreError> {
                        let arena = arena.as_mut().map_err(|e| *e)?;
                        trace!("orientation score: filtering orientation {index}");
                        filter_orientation(
                            image,
                            &fft,
                            kernels.plane(index),
                            norm_factor,
                            arena,
                            plane,
                        )
                    },
                )
        })?;
    }

    debug!(
        "orientation score: done in {:?}",
        Instant::now().duration_since(start)
    );

    Ok(scores)
}

/// Computes orientation scores of `f32` image, see [orientation_score] for more info.
pub fn orientation_score_f32(
    image: &ScoreImage<f32>,
    orientations: usize,
    threading_policy: ThreadingPolicy,
) -> Result<OrientationScores<f32>, ScoreError> {
    orientation_score::<f32, f32>(image, orientations, threading_policy)
}

/// Computes orientation scores of `f64` image, see [orientation_score] for more info.
pub fn orientation_score_f64(
    image: &ScoreImage<f64>,
    orientations: usize,
    threading_policy: ThreadingPolicy,
) -> Result<OrientationScores<f64>, ScoreError> {
    orientation_score::<f64, f64>(image, orientations, threading_policy)
}

/// Forward transform, angular mask, inverse transform of one orientation.
fn filter_orientation<T, F>(
    image: &ScoreImage<T>,
    fft: &Fft2d<F>,
    mask: &[F],
    norm_factor: F,
    arena: &mut SpectrumArena<F>,
    dst: &mut [F],
) -> Result<(), ScoreError>
where
    T: Copy + Default + Debug + AsPrimitive<F>,
    F: FftNumber,
{
    arena.load(image);
    fft.forward(arena)?;
    apply_mask_in_place(&mut arena.plane, mask, norm_factor);
    fft.inverse(arena)?;
    arena.store_real(dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use std::num::NonZeroUsize;

    fn pattern(width: usize, height: usize) -> Vec<f64> {
        (0..width * height)
            .map(|i| {
                let x = (i % width) as f64;
                let y = (i / width) as f64;
                let noise = ((i * 7919) % 13) as f64 * 0.1;
                (0.7 * x).sin() * 3. + (0.31 * y + 0.2 * x).cos() + noise
            })
            .collect()
    }

    #[test]
    fn test_single_orientation_is_identity() {
        let src = [1f64, 2., 3., 4.];
        let image = ScoreImage::borrow(&src, 2, 2);
        let scores = orientation_score_f64(&image, 1, ThreadingPolicy::Single).unwrap();
        assert_eq!(scores.shape(), [1, 2, 2]);
        for (i, (&v, &s)) in scores.plane(0).iter().zip(src.iter()).enumerate() {
            let diff = (v - s).abs();
            assert!(
                diff <= 1e-12,
                "Diff expected to be less than 1e-12 but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_single_orientation_is_identity_f32() {
        let src = [1f32, 2., 3., 4.];
        let image = ScoreImage::from_shape(&src, &[2, 2]).unwrap();
        let scores = orientation_score_f32(&image, 1, ThreadingPolicy::Single).unwrap();
        for (i, (&v, &s)) in scores.plane(0).iter().zip(src.iter()).enumerate() {
            let diff = (v - s).abs();
            assert!(
                diff <= 1e-5,
                "Diff expected to be less than 1e-5 but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_reconstruction() {
        let cases = [(24, 18, 6), (15, 11, 4), (32, 32, 8), (5, 9, 2)];
        for &(width, height, orientations) in cases.iter() {
            let src = pattern(width, height);
            let image = ScoreImage::borrow(&src, width as u32, height as u32);
            let scores =
                orientation_score_f64(&image, orientations, ThreadingPolicy::Single).unwrap();
            let restored = scores.reconstruct();
            for (i, (&v, &s)) in restored.iter().zip(src.iter()).enumerate() {
                let diff = (v - s).abs();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at {i}, {width}x{height}"
                );
            }
        }
    }

    #[test]
    fn test_orientation_selectivity() {
        let (width, height) = (32usize, 32usize);
        // Intensity varies along x only, the stripes fall into bin 0
        let vertical_stripes = (0..width * height)
            .map(|i| (2. * PI * 3. * (i % width) as f64 / width as f64).cos())
            .collect::<Vec<_>>();
        let image = ScoreImage::borrow(&vertical_stripes, width as u32, height as u32);
        let scores = orientation_score_f64(&image, 4, ThreadingPolicy::Single).unwrap();
        assert!(scores.energy(0) > 400.);
        assert!(
            scores.energy(0) > 1000. * scores.energy(2),
            "Bin 0 energy {} should dominate bin 2 energy {}",
            scores.energy(0),
            scores.energy(2)
        );

        // Intensity varies along y only, the stripes fall into bin 2
        let horizontal_stripes = (0..width * height)
            .map(|i| (2. * PI * 5. * (i / width) as f64 / height as f64).cos())
            .collect::<Vec<_>>();
        let image = ScoreImage::borrow(&horizontal_stripes, width as u32, height as u32);
        let scores = orientation_score_f64(&image, 4, ThreadingPolicy::Single).unwrap();
        assert!(scores.energy(2) > 400.);
        assert!(scores.energy(2) > 1000. * scores.energy(0));
    }

    #[test]
    fn test_shape_invariant() {
        let cases = [(1, 1, 3), (3, 7, 2), (16, 4, 5), (9, 9, 12)];
        for &(width, height, orientations) in cases.iter() {
            let src = vec![1u8; width * height];
            let image = ScoreImage::borrow(&src, width as u32, height as u32);
            let scores =
                orientation_score::<u8, f32>(&image, orientations, ThreadingPolicy::Single)
                    .unwrap();
            assert_eq!(scores.shape(), [orientations, height, width]);
            assert_eq!(scores.as_slice().len(), orientations * width * height);
        }
    }

    #[test]
    fn test_constant_image_splits_evenly() {
        let (width, height) = (10usize, 6usize);
        let src = vec![126u8; width * height];
        let image = ScoreImage::borrow(&src, width as u32, height as u32);
        let scores = orientation_score::<u8, f32>(&image, 3, ThreadingPolicy::Single).unwrap();
        for plane in scores.planes() {
            for (i, &cn) in plane.iter().enumerate() {
                let diff = (cn - 42.).abs();
                assert!(
                    diff <= 1e-3,
                    "Diff expected to be less than 1e-3 but it was {diff} at {i}"
                );
            }
        }
    }

    #[test]
    fn test_parallel_matches_single() {
        let (width, height) = (20usize, 14usize);
        let src = pattern(width, height);
        let image = ScoreImage::borrow(&src, width as u32, height as u32);
        let single = orientation_score_f64(&image, 5, ThreadingPolicy::Single).unwrap();
        let parallel = orientation_score_f64(
            &image,
            5,
            ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();
        assert_eq!(single.shape(), parallel.shape());
        for (i, (&a, &b)) in single
            .as_slice()
            .iter()
            .zip(parallel.as_slice().iter())
            .enumerate()
        {
            let diff = (a - b).abs();
            assert!(
                diff <= 1e-12,
                "Diff expected to be less than 1e-12 but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_strided_input() {
        let (width, height, stride) = (6usize, 4usize, 9usize);
        let packed = pattern(width, height);
        let mut strided = vec![1000f64; stride * height];
        for (dst, src) in strided.chunks_exact_mut(stride).zip(packed.chunks_exact(width)) {
            dst[..width].copy_from_slice(src);
        }
        let mut image = ScoreImage::borrow(&strided, width as u32, height as u32);
        image.stride = stride as u32;
        let from_strided = orientation_score_f64(&image, 3, ThreadingPolicy::Single).unwrap();
        let image = ScoreImage::borrow(&packed, width as u32, height as u32);
        let from_packed = orientation_score_f64(&image, 3, ThreadingPolicy::Single).unwrap();
        assert_eq!(from_strided, from_packed);
    }

    #[test]
    fn test_invalid_arguments() {
        let src = [0f32; 4];
        let image = ScoreImage::borrow(&src, 2, 2);
        assert_eq!(
            orientation_score_f32(&image, 0, ThreadingPolicy::Single).err(),
            Some(ScoreError::ZeroOrientations)
        );
        let empty = ScoreImage::<f32>::borrow(&[], 0, 0);
        assert_eq!(
            orientation_score_f32(&empty, 2, ThreadingPolicy::Single).err(),
            Some(ScoreError::ZeroBaseSize)
        );
        let short = ScoreImage::borrow(&src, 3, 2);
        assert!(matches!(
            orientation_score_f32(&short, 2, ThreadingPolicy::Single),
            Err(ScoreError::MinimumSliceSizeMismatch(_))
        ));
    }
}
