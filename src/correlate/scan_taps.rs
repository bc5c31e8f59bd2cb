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
use crate::{BoundaryPolicy, SourceIndex};

/// Tap sources along one axis for every sampled anchor, anchor-major.
pub(crate) struct AxisTaps {
    taps: Vec<SourceIndex>,
    overhang: Vec<bool>,
    kernel_len: usize,
}

impl AxisTaps {
    /// Sources of all filter taps for anchor `k`
    #[inline(always)]
    pub(crate) fn anchor(&self, k: usize) -> &[SourceIndex] {
        &self.taps[k * self.kernel_len..(k + 1) * self.kernel_len]
    }

    /// True if the footprint at anchor `k` leaves `[0, extent)`
    #[inline(always)]
    pub(crate) fn overhangs(&self, k: usize) -> bool {
        self.overhang[k]
    }
}

/// Anchor on the axis for result index `k`
#[inline(always)]
fn anchor_position(start: isize, step: usize, k: usize) -> isize {
    start + (k * step) as isize
}

pub(crate) fn scan_axis(
    policy: BoundaryPolicy,
    start: isize,
    step: usize,
    count: usize,
    kernel_len: usize,
    extent: usize,
) -> AxisTaps {
    let origin = (kernel_len / 2) as isize;
    let mut taps = Vec::with_capacity(count * kernel_len);
    let mut overhang = Vec::with_capacity(count);
    for k in 0..count {
        let first = anchor_position(start, step, k) - origin;
        let last = first + kernel_len as isize - 1;
        overhang.push(first < 0 || last >= extent as isize);
        for f in 0..kernel_len as isize {
            taps.push(policy.resolve(first + f, extent));
        }
    }
    AxisTaps {
        taps,
        overhang,
        kernel_len,
    }
}

/// Periodic source coordinates for every sampled anchor, anchor-major.
pub(crate) fn wrap_axis(
    start: isize,
    step: usize,
    count: usize,
    kernel_len: usize,
    extent: usize,
) -> Vec<usize> {
    let origin = (kernel_len / 2) as isize;
    let extent = extent as isize;
    let mut taps = Vec::with_capacity(count * kernel_len);
    for k in 0..count {
        let first = anchor_position(start, step, k) - origin;
        for f in 0..kernel_len as isize {
            taps.push((first + f).rem_euclid(extent) as usize);
        }
    }
    taps
}
