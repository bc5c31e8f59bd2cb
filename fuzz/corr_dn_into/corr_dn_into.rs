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
    correlate_downsample_into, BoundaryPolicy, CorrDnParams, CorrImage, CorrImageMut,
    KernelShape, Step,
};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub filter_size: u8,
    pub step: u8,
    pub dst_width: u8,
    pub dst_height: u8,
}

fuzz_target!(|data: SrcImage| {
    let width = data.src_width as usize % 48 + 2;
    let height = data.src_height as usize % 48 + 2;
    let filter_size = (data.filter_size as usize % 7 + 1).min(width - 1).min(height - 1);
    let step = data.step as usize % 3 + 1;

    let src = (0..width * height)
        .map(|x| (x % 13) as f32)
        .collect::<Vec<f32>>();
    let filter = vec![1f64; filter_size * filter_size];
    let image = CorrImage::borrow(&src, width, height);
    let params = CorrDnParams::new(BoundaryPolicy::SkipOverhang).with_step(Step::uniform(step));
    let geometry = params.geometry(image.size()).unwrap();

    let dst_width = data.dst_width as usize % 48;
    let dst_height = data.dst_height as usize % 48;
    let mut dst = CorrImageMut::filled(dst_width, dst_height, -999f32);
    let result = correlate_downsample_into(
        &image,
        &filter,
        KernelShape::new(filter_size, filter_size),
        &mut dst,
        params,
    );
    if (dst_height, dst_width) == geometry.shape() {
        result.unwrap();
        let origin = filter_size / 2;
        for (i, row) in dst.data.borrow().chunks_exact(dst_width.max(1)).enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let (y, x) = (i * step, j * step);
                let inside = y >= origin
                    && x >= origin
                    && y - origin + filter_size <= height
                    && x - origin + filter_size <= width;
                assert_eq!(v == -999., !inside, "({y}, {x})");
            }
        }
    } else {
        assert!(result.is_err());
        assert!(dst.data.borrow().iter().all(|&v| v == -999.));
    }
});
