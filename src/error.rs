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
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    ZeroBaseSize,
    ZeroOrientations,
    InvalidRank(usize),
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    ExceedingPointerSize,
    OutOfMemory(usize),
    ThreadPool,
    InvalidArguments,
}

impl Error for ScoreError {}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScoreError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            ScoreError::ZeroOrientations => {
                f.write_str("Number of orientations must be at least one")
            }
            ScoreError::InvalidRank(rank) => f.write_fmt(format_args!(
                "Orientation scores support only 2D images, but received rank {rank}"
            )),
            ScoreError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            ScoreError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ScoreError::ExceedingPointerSize => {
                f.write_str("Image bounds and orientation count exceeds pointer capacity")
            }
            ScoreError::OutOfMemory(items) => f.write_fmt(format_args!(
                "Failed to allocate scratch buffer of {items} items"
            )),
            ScoreError::ThreadPool => f.write_str("Failed to build worker thread pool"),
            ScoreError::InvalidArguments => f.write_str("Invalid arguments"),
        }
    }
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    stride: usize,
    width: usize,
    height: usize,
) -> Result<(), ScoreError> {
    if width == 0 || height == 0 {
        return Err(ScoreError::ZeroBaseSize);
    }
    if stride < width {
        return Err(ScoreError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width,
            received: stride,
        }));
    }
    if arr.len() < stride * (height - 1) + width {
        return Err(ScoreError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * height,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Allocates `len` items filled with `value`, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_alloc<T: Copy>(len: usize, value: T) -> Result<Vec<T>, ScoreError> {
    let mut store = Vec::new();
    store
        .try_reserve_exact(len)
        .map_err(|_| ScoreError::OutOfMemory(len))?;
    store.resize(len, value);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_slice_size() {
        let data = vec![0f32; 12];
        assert!(check_slice_size(&data, 4, 4, 3).is_ok());
        assert!(check_slice_size(&data, 6, 4, 2).is_ok());
        assert_eq!(check_slice_size(&data, 4, 0, 3), Err(ScoreError::ZeroBaseSize));
        assert_eq!(
            check_slice_size(&data, 3, 4, 3),
            Err(ScoreError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: 4,
                received: 3
            }))
        );
        assert_eq!(
            check_slice_size(&data, 4, 4, 4),
            Err(ScoreError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12
            }))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScoreError::InvalidRank(3).to_string(),
            "Orientation scores support only 2D images, but received rank 3"
        );
        assert_eq!(
            ScoreError::ZeroOrientations.to_string(),
            "Number of orientations must be at least one"
        );
    }
}
