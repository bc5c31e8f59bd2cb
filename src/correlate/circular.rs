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
use crate::ImageSize;
use num_traits::AsPrimitive;

/// Computes one result row under periodic boundaries.
///
/// `rows` holds the wrapped source row of every filter row, `columns` the wrapped
/// source columns of every filter column for each result entry, entry-major.
pub(crate) fn correlate_circular_row<T>(
    image: &[T],
    image_size: ImageSize,
    filter: &[f64],
    filter_width: usize,
    rows: &[usize],
    columns: &[usize],
    dst: &mut [T],
) where
    T: Copy + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    let width = image_size.width;
    for (dst, x_taps) in dst.iter_mut().zip(columns.chunks_exact(filter_width)) {
        let mut acc = 0f64;
        for (&y, filter_row) in rows.iter().zip(filter.chunks_exact(filter_width)) {
            let src_row = &image[y * width..(y + 1) * width];
            for (&x, &weight) in x_taps.iter().zip(filter_row.iter()) {
                let v: f64 = src_row[x].as_();
                acc += v * weight;
            }
        }
        *dst = acc.as_();
    }
}
