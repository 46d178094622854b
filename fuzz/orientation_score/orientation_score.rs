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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use orientscore::{orientation_score, ScoreError, ScoreImage, ThreadingPolicy};

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub stride_pad: u8,
    pub value: u8,
    pub orientations: u8,
    pub threading: bool,
    pub double: bool,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 96 || data.src_height > 96 || data.orientations > 24 {
        return;
    }
    let width = data.src_width as usize;
    let height = data.src_height as usize;
    let stride = width + (data.stride_pad % 8) as usize;
    let src = vec![data.value; stride * height];
    let mut src_image = ScoreImage::borrow(&src, width as u32, height as u32);
    src_image.stride = stride as u32;

    let mp = if data.threading {
        ThreadingPolicy::Adaptive
    } else {
        ThreadingPolicy::Single
    };

    let orientations = data.orientations as usize;
    let expected = data.value as f64 / orientations.max(1) as f64;

    if data.double {
        match orientation_score::<u8, f64>(&src_image, orientations, mp) {
            Ok(scores) => {
                assert_eq!(scores.shape(), [orientations, height, width]);
                for &v in scores.as_slice() {
                    assert!((v - expected).abs() < 1e-6);
                }
            }
            Err(e) => check_rejection(e, width, height, orientations),
        }
    } else {
        match orientation_score::<u8, f32>(&src_image, orientations, mp) {
            Ok(scores) => {
                assert_eq!(scores.shape(), [orientations, height, width]);
                for &v in scores.as_slice() {
                    assert!((v as f64 - expected).abs() < 1e-2);
                }
            }
            Err(e) => check_rejection(e, width, height, orientations),
        }
    }
});

fn check_rejection(e: ScoreError, width: usize, height: usize, orientations: usize) {
    match e {
        ScoreError::ZeroOrientations => assert_eq!(orientations, 0),
        ScoreError::ZeroBaseSize => assert!(width == 0 || height == 0),
        _ => panic!("Unexpected error {e}"),
    }
}
