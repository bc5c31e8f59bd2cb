/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
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
use libcorrdn::{
    correlate_downsample, BoundaryPolicy, CorrDnParams, CorrImage, KernelShape, Position, Step,
    ThreadingPolicy,
};
use libfuzzer_sys::fuzz_target;
use std::num::NonZeroUsize;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub filter_width: u8,
    pub filter_height: u8,
    pub policy: u8,
    pub step_y: u8,
    pub step_x: u8,
    pub start_y: i8,
    pub start_x: i8,
    pub stop_y: i8,
    pub stop_x: i8,
    pub threading: bool,
}

fuzz_target!(|data: SrcImage| {
    let width = data.src_width as usize % 64 + 1;
    let height = data.src_height as usize % 64 + 1;
    let filter_width = data.filter_width as usize % 9 + 1;
    let filter_height = data.filter_height as usize % 9 + 1;
    if (width > 1 && filter_width >= width) || (height > 1 && filter_height >= height) {
        return;
    }
    let policy = BoundaryPolicy::try_from(data.policy as usize % 7).unwrap();
    let threading_policy = if data.threading {
        ThreadingPolicy::Fixed(NonZeroUsize::new(3).unwrap())
    } else {
        ThreadingPolicy::Single
    };

    let src = (0..width * height)
        .map(|x| (x % 17) as f64 - 8.)
        .collect::<Vec<f64>>();
    let filter = (0..filter_width * filter_height)
        .map(|x| 1. / (x + 1) as f64)
        .collect::<Vec<f64>>();
    let image = CorrImage::borrow(&src, width, height);

    let params = CorrDnParams::new(policy)
        .with_step(Step::new(
            data.step_y as usize % 4 + 1,
            data.step_x as usize % 4 + 1,
        ))
        .with_start(Position::new(data.start_y as isize % 8, data.start_x as isize % 8))
        .with_stop(Position::new(
            height as isize + data.stop_y as isize % 8,
            width as isize + data.stop_x as isize % 8,
        ))
        .with_threading_policy(threading_policy);

    let geometry = params.geometry(image.size()).unwrap();
    let result = correlate_downsample(
        &image,
        &filter,
        KernelShape::new(filter_width, filter_height),
        params,
    )
    .unwrap();
    assert_eq!(result.shape(), geometry.shape());
    assert!(result.data.borrow().iter().all(|x| x.is_finite()));
});
