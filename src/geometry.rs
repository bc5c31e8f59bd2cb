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
use crate::safe_math::{SafeAdd, SafeMul, SafeSub};
use crate::{CorrError, KernelShape};

/// Signed 2D coordinate, `y` is the row
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Position {
    pub y: isize,
    pub x: isize,
}

impl Position {
    pub fn new(y: isize, x: isize) -> Position {
        Position { y, x }
    }
}

/// Downsampling stride, both components must be positive
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Step {
    pub y: usize,
    pub x: usize,
}

impl Step {
    pub fn new(y: usize, x: usize) -> Step {
        Step { y, x }
    }

    /// Same stride on both axes
    pub fn uniform(step: usize) -> Step {
        Step::new(step, step)
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::new(1, 1)
    }
}

/// Shape of the downsampled result, one entry per sampled anchor
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct OutputGeometry {
    pub rows: usize,
    pub columns: usize,
}

impl OutputGeometry {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Number of result entries
    pub fn len(&self) -> Result<usize, CorrError> {
        self.rows.safe_mul(self.columns)
    }

    /// Shape as `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Checks that every source coordinate a filter of `filter_shape` reads,
    /// from the first anchor's leading tap to the last anchor's trailing tap,
    /// is representable as `isize`.
    pub fn check_footprint(
        &self,
        start: Position,
        step: Step,
        filter_shape: KernelShape,
    ) -> Result<(), CorrError> {
        if self.is_empty() {
            return Ok(());
        }
        _ = footprint_span(start.y, step.y, self.rows, filter_shape.height)?;
        _ = footprint_span(start.x, step.x, self.columns, filter_shape.width)?;
        Ok(())
    }
}

#[inline]
fn to_isize(v: usize) -> Result<isize, CorrError> {
    isize::try_from(v).map_err(|_| CorrError::ExceedingPointerSize)
}

/// Offset of anchor `count - 1` from `start`
fn last_anchor(start: isize, step: usize, count: usize) -> Result<isize, CorrError> {
    let offset = to_isize(count - 1)?.safe_mul(to_isize(step)?)?;
    start.safe_add(offset)
}

/// First and last coordinate touched by `count` anchors of a `kernel_len` filter.
fn footprint_span(
    start: isize,
    step: usize,
    count: usize,
    kernel_len: usize,
) -> Result<(isize, isize), CorrError> {
    let origin = to_isize(kernel_len / 2)?;
    let first = start.safe_sub(origin)?;
    let last = last_anchor(start, step, count)?
        .safe_sub(origin)?
        .safe_add(to_isize(kernel_len.saturating_sub(1))?)?;
    Ok((first, last))
}

#[inline]
fn axis_count(start: isize, stop: isize, step: usize) -> usize {
    if stop <= start {
        return 0;
    }
    stop.abs_diff(start).div_ceil(step)
}

/// Computes the result shape for the window `[start, stop)` sampled every `step`.
///
/// Each axis receives `ceil((stop - start) / step)` entries, or none when
/// `stop <= start`. Image and filter contents play no role.
pub fn output_geometry(
    start: Position,
    stop: Position,
    step: Step,
) -> Result<OutputGeometry, CorrError> {
    if step.y == 0 || step.x == 0 {
        return Err(CorrError::ZeroStep);
    }
    let geometry = OutputGeometry {
        rows: axis_count(start.y, stop.y, step.y),
        columns: axis_count(start.x, stop.x, step.x),
    };
    // Anchors must be addressable as isize, filter taps are checked by `check_footprint`.
    if !geometry.is_empty() {
        _ = last_anchor(start.y, step.y, geometry.rows)?;
        _ = last_anchor(start.x, step.x, geometry.columns)?;
    }
    _ = geometry.len()?;
    Ok(geometry)
}
