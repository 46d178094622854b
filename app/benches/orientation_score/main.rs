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

use criterion::{criterion_group, criterion_main, Criterion};
use orientscore::{
    orientation_kernels, orientation_score_f32, ImageSize, ScoreImage, ThreadingPolicy,
};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("Orientation score");
    c.sample_size(10);

    let width = 512usize;
    let height = 384usize;
    let pixels = (0..width * height)
        .map(|i| {
            let x = (i % width) as f32;
            let y = (i / width) as f32;
            (0.05 * x + 0.11 * y).sin() + (0.3 * x).cos() * 0.5
        })
        .collect::<Vec<f32>>();
    let src_image = ScoreImage::borrow(&pixels, width as u32, height as u32);

    c.bench_function("Kernels 512x384: 8", |b| {
        b.iter(|| {
            black_box(orientation_kernels::<f32>(8, ImageSize::new(width, height)).unwrap());
        })
    });

    c.bench_function("Orientation score 512x384: 8 Single", |b| {
        b.iter(|| {
            black_box(orientation_score_f32(&src_image, 8, ThreadingPolicy::Single).unwrap());
        })
    });

    c.bench_function("Orientation score 512x384: 8 Adaptive", |b| {
        b.iter(|| {
            black_box(orientation_score_f32(&src_image, 8, ThreadingPolicy::Adaptive).unwrap());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
