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
//! Correlation of a 2D signal with a small filter evaluated on a strided window,
//! i.e. fused correlation and downsampling, the reduction step of image pyramids.
//!
//! Boundary behaviour is selected by [BoundaryPolicy]. Accumulation always happens in `f64`
//! regardless of the image element type, and every call is deterministic.
//!
//! Images may hold `f32`, `f64` or half precision [f16] samples.
#![allow(clippy::too_many_arguments)]

mod boundary_policy;
mod correlate;
mod geometry;
mod image;
mod img_size;
mod kernel_shape;
mod safe_math;
mod threading_policy;
mod util;

pub use boundary_policy::{resolve_index, BoundaryPolicy, SourceIndex, WeightedSource};
pub use correlate::{correlate_downsample, correlate_downsample_into, CorrDnParams};
pub use half::f16;
pub use geometry::{output_geometry, OutputGeometry, Position, Step};
pub use image::{BufferStore, CorrImage, CorrImageMut};
pub use img_size::ImageSize;
pub use kernel_shape::KernelShape;
pub use threading_policy::ThreadingPolicy;
pub use util::{CorrError, MismatchedShape, MismatchedSize};
