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

use image::{GrayImage, ImageReader, Luma};
use log::info;
use orientscore::{orientation_score_image, ThreadingPolicy};
use std::time::Instant;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "./assets/test_image_1_small.jpg".to_string());
    let orientations = args
        .next()
        .map(|x| {
            x.parse::<usize>()
                .expect("Orientations must be a positive number")
        })
        .unwrap_or(8);

    let dyn_image = ImageReader::open(&path).unwrap().decode().unwrap();
    println!("dimensions {}x{}", dyn_image.width(), dyn_image.height());

    let start_time = Instant::now();

    let scores =
        orientation_score_image(&dyn_image, orientations, ThreadingPolicy::Adaptive).unwrap();

    println!(
        "orientscore::orientation_score_image {} orientations: {:?}",
        orientations,
        start_time.elapsed()
    );

    let size = scores.size();
    for (index, plane) in scores.planes().enumerate() {
        let max = plane
            .iter()
            .fold(0f32, |acc, &v| acc.max(v.abs()))
            .max(1e-6);
        // Magnitude of the band, 0 maps to black
        let gray = GrayImage::from_fn(size.width as u32, size.height as u32, |x, y| {
            let v = plane[y as usize * size.width + x as usize].abs() / max;
            Luma([(v * 255.).round().min(255.) as u8])
        });
        let file = format!("orientation_{index}.png");
        gray.save(&file).unwrap();
        info!("saved {file}, energy {}", scores.energy(index));
    }
}
