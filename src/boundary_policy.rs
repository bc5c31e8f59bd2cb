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
use crate::CorrError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Declares how samples outside of the image are produced
pub enum BoundaryPolicy {
    /// Image is periodic, rule `efgh|abcdefgh|abcd`
    Circular = 0,
    /// Mirror about the edge pixels without repeating them, rule `dcb|abcdefgh|gfe`
    #[default]
    Reflect1 = 1,
    /// Mirror with the edge pixels doubled, rule `cba|abcdefgh|hgf`
    Reflect2 = 2,
    /// Edge pixel replicated across the filter, rule `aaa|abcdefgh|hhh`
    Repeat = 3,
    /// Everything outside is zero, rule `000|abcdefgh|000`
    Zero = 4,
    /// Mirror and invert about the edge value, rule `2a-d,2a-c,2a-b|abcdefgh|2h-g,2h-f,2h-e`.
    /// Keeps the signal and its first derivative continuous across the edge. Farther
    /// out the reflection alternates between the two edges, so a linear ramp stays linear.
    Extend = 5,
    /// Positions where the filter overhangs the image are not computed,
    /// the destination keeps whatever it held before.
    SkipOverhang = 6,
}

impl BoundaryPolicy {
    /// Canonical lowercase name, the same one [FromStr] accepts.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::Circular => "circular",
            BoundaryPolicy::Reflect1 => "reflect1",
            BoundaryPolicy::Reflect2 => "reflect2",
            BoundaryPolicy::Repeat => "repeat",
            BoundaryPolicy::Zero => "zero",
            BoundaryPolicy::Extend => "extend",
            BoundaryPolicy::SkipOverhang => "dont-compute",
        }
    }

    /// Maps coordinate `i` on an axis of extent `n` to its source, see [resolve_index].
    #[inline]
    pub fn resolve(&self, i: isize, n: usize) -> SourceIndex {
        resolve_index(*self, i, n)
    }
}

impl Display for BoundaryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for BoundaryPolicy {
    type Error = CorrError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BoundaryPolicy::Circular),
            1 => Ok(BoundaryPolicy::Reflect1),
            2 => Ok(BoundaryPolicy::Reflect2),
            3 => Ok(BoundaryPolicy::Repeat),
            4 => Ok(BoundaryPolicy::Zero),
            5 => Ok(BoundaryPolicy::Extend),
            6 => Ok(BoundaryPolicy::SkipOverhang),
            _ => Err(CorrError::UnknownBoundaryPolicy(value.to_string())),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = CorrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(BoundaryPolicy::Circular),
            "reflect1" => Ok(BoundaryPolicy::Reflect1),
            "reflect2" => Ok(BoundaryPolicy::Reflect2),
            "repeat" => Ok(BoundaryPolicy::Repeat),
            "zero" => Ok(BoundaryPolicy::Zero),
            "extend" => Ok(BoundaryPolicy::Extend),
            "dont-compute" | "dont_compute" | "skip" => Ok(BoundaryPolicy::SkipOverhang),
            _ => Err(CorrError::UnknownBoundaryPolicy(s.to_string())),
        }
    }
}

/// One pixel of an extrapolated value and its integer weight.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WeightedSource {
    pub index: usize,
    pub weight: i64,
}

/// Where a tap takes its value from on one axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SourceIndex {
    /// An in-range source coordinate.
    Pixel(usize),
    /// Tap contributes nothing.
    Absent,
    /// Weighted sum of up to three pixels, produced by [BoundaryPolicy::Extend].
    /// Zero-weight slots are ignored.
    Extended([WeightedSource; 3]),
}

impl SourceIndex {
    /// Weighted source coordinates this tap expands to, packed into the first `len` slots.
    #[inline(always)]
    pub(crate) fn terms(self) -> ([(usize, f64); 3], usize) {
        let mut terms = [(0usize, 0f64); 3];
        match self {
            SourceIndex::Pixel(i) => {
                terms[0] = (i, 1.);
                (terms, 1)
            }
            SourceIndex::Absent => (terms, 0),
            SourceIndex::Extended(sources) => {
                let mut len = 0usize;
                for source in sources.iter().filter(|s| s.weight != 0) {
                    terms[len] = (source.index, source.weight as f64);
                    len += 1;
                }
                (terms, len)
            }
        }
    }
}

/// Odd extension about both edge values, repeated outward.
///
/// Reflecting through `(0, v[0])` and then through `(n - 1, v[n - 1])` is a shift by
/// `2n - 2` samples that adds `2 * (v[n - 1] - v[0])`, so any coordinate reduces to one
/// folded pixel plus integer multiples of the two edge pixels.
fn extend_index(i: isize, n: isize) -> SourceIndex {
    if n == 1 {
        return SourceIndex::Pixel(0);
    }
    let last = n - 1;
    let period = 2 * last;
    let shifts = i.div_euclid(period) as i64;
    let r = i.rem_euclid(period);
    let mut low = shifts.saturating_mul(-2);
    let mut high = shifts.saturating_mul(2);
    let (mirror, weight) = if r <= last {
        (r, 1i64)
    } else {
        high = high.saturating_add(2);
        (period - r, -1i64)
    };
    let mut sources = [
        WeightedSource { index: 0, weight: 0 },
        WeightedSource {
            index: last as usize,
            weight: 0,
        },
        WeightedSource {
            index: mirror as usize,
            weight,
        },
    ];
    if mirror == 0 {
        low = low.saturating_add(weight);
        sources[2].weight = 0;
    } else if mirror == last {
        high = high.saturating_add(weight);
        sources[2].weight = 0;
    }
    sources[0].weight = low;
    sources[1].weight = high;
    SourceIndex::Extended(sources)
}

#[inline]
pub(crate) fn reflect_index_1(i: isize, n: isize) -> usize {
    let period = 2 * n - 2;
    if period <= 0 {
        return 0;
    }
    let r = i.rem_euclid(period);
    if r < n {
        r as usize
    } else {
        (period - r) as usize
    }
}

#[inline]
pub(crate) fn reflect_index_2(i: isize, n: isize) -> usize {
    let period = 2 * n;
    let r = i.rem_euclid(period);
    if r < n {
        r as usize
    } else {
        (period - r - 1) as usize
    }
}

/// Resolves coordinate `i` on an axis of extent `n` according to `policy`.
///
/// In-range coordinates always map to themselves. For [BoundaryPolicy::SkipOverhang]
/// an out-of-range coordinate yields [SourceIndex::Absent]; the decision to skip the
/// whole output position is made by the correlation kernel.
///
/// `n` must be at least 1.
pub fn resolve_index(policy: BoundaryPolicy, i: isize, n: usize) -> SourceIndex {
    let n = n as isize;
    if i >= 0 && i < n {
        return SourceIndex::Pixel(i as usize);
    }
    match policy {
        BoundaryPolicy::Circular => SourceIndex::Pixel(i.rem_euclid(n) as usize),
        BoundaryPolicy::Reflect1 => SourceIndex::Pixel(reflect_index_1(i, n)),
        BoundaryPolicy::Reflect2 => SourceIndex::Pixel(reflect_index_2(i, n)),
        BoundaryPolicy::Repeat => SourceIndex::Pixel(i.clamp(0, n - 1) as usize),
        BoundaryPolicy::Zero | BoundaryPolicy::SkipOverhang => SourceIndex::Absent,
        BoundaryPolicy::Extend => extend_index(i, n),
    }
}
