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
use crate::correlate::scan_taps::AxisTaps;
use crate::{ImageSize, SourceIndex};
use num_traits::AsPrimitive;

/// Value of the boundary-extended image at the given per-axis sources.
///
/// Axis resolutions combine as a tensor product, so an [SourceIndex::Extended]
/// corner expands to at most nine weighted pixels and any [SourceIndex::Absent] axis yields zero.
#[inline(always)]
fn sample<T>(image: &[T], width: usize, sy: SourceIndex, sx: SourceIndex) -> f64
where
    T: Copy + AsPrimitive<f64>,
{
    if let (SourceIndex::Pixel(y), SourceIndex::Pixel(x)) = (sy, sx) {
        return image[y * width + x].as_();
    }
    let (y_terms, y_len) = sy.terms();
    let (x_terms, x_len) = sx.terms();
    let mut value = 0f64;
    for &(y, wy) in y_terms[..y_len].iter() {
        let src_row = &image[y * width..(y + 1) * width];
        for &(x, wx) in x_terms[..x_len].iter() {
            let v: f64 = src_row[x].as_();
            value += wy * wx * v;
        }
    }
    value
}

/// Computes one result row for every non-circular policy.
///
/// `rows` holds the vertical sources of every filter row for this result row.
/// With `skip_overhang` set, entries whose footprint leaves the image are not written.
pub(crate) fn correlate_bounded_row<T>(
    image: &[T],
    image_size: ImageSize,
    filter: &[f64],
    filter_width: usize,
    rows: &[SourceIndex],
    row_overhangs: bool,
    columns: &AxisTaps,
    skip_overhang: bool,
    dst: &mut [T],
) where
    T: Copy + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    if skip_overhang && row_overhangs {
        return;
    }
    for (ox, dst) in dst.iter_mut().enumerate() {
        if skip_overhang && columns.overhangs(ox) {
            continue;
        }
        let x_taps = columns.anchor(ox);
        let mut acc = 0f64;
        for (&sy, filter_row) in rows.iter().zip(filter.chunks_exact(filter_width)) {
            for (&sx, &weight) in x_taps.iter().zip(filter_row.iter()) {
                acc += sample(image, image_size.width, sy, sx) * weight;
            }
        }
        *dst = acc.as_();
    }
}
