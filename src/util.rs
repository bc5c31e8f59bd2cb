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
use crate::KernelShape;
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows mismatching 2D shapes as `(rows, columns)`
pub struct MismatchedShape {
    pub expected: (usize, usize),
    pub received: (usize, usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorrError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    KernelSizeMismatch(MismatchedSize),
    InvalidFilterShape(KernelShape),
    ShapeMismatch(MismatchedShape),
    UnknownBoundaryPolicy(String),
    ZeroStep,
    ExceedingPointerSize,
}

impl Error for CorrError {}

impl std::fmt::Display for CorrError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CorrError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            CorrError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            CorrError::KernelSizeMismatch(size) => f.write_fmt(format_args!(
                "Kernel size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            CorrError::InvalidFilterShape(shape) => f.write_fmt(format_args!(
                "Filter {}x{} must be non-empty and strictly smaller than the image on every non-trivial axis",
                shape.height, shape.width
            )),
            CorrError::ShapeMismatch(shape) => f.write_fmt(format_args!(
                "Result shape mismatch: expected={}x{}, received={}x{}",
                shape.expected.0, shape.expected.1, shape.received.0, shape.received.1
            )),
            CorrError::UnknownBoundaryPolicy(name) => {
                f.write_fmt(format_args!("Unknown boundary policy: {name}"))
            }
            CorrError::ZeroStep => f.write_str("Step must be positive on both axes"),
            CorrError::ExceedingPointerSize => {
                f.write_str("Image bounds and sampling window exceeds pointer capacity")
            }
        }
    }
}

pub(crate) fn check_slice_size<T>(arr: &[T], width: usize, height: usize) -> Result<(), CorrError> {
    if width == 0 || height == 0 {
        return Err(CorrError::ZeroBaseSize);
    }
    let expected = width
        .checked_mul(height)
        .ok_or(CorrError::ExceedingPointerSize)?;
    if arr.len() < expected {
        return Err(CorrError::MinimumSliceSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_size_checks() {
        let data = [0f64; 6];
        assert!(check_slice_size(&data, 3, 2).is_ok());
        assert_eq!(check_slice_size(&data, 0, 2), Err(CorrError::ZeroBaseSize));
        assert_eq!(
            check_slice_size(&data, 4, 2),
            Err(CorrError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 8,
                received: 6,
            }))
        );
    }

    #[test]
    fn test_errors_render() {
        let message = CorrError::ShapeMismatch(MismatchedShape {
            expected: (2, 3),
            received: (3, 2),
        })
        .to_string();
        assert_eq!(message, "Result shape mismatch: expected=2x3, received=3x2");
    }
}
