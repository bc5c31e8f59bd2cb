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
use crate::util::check_slice_size;
use crate::{CorrError, ImageSize};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable dense row-major image
pub struct CorrImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: usize,
    pub height: usize,
}

/// Mutable dense row-major image, used as correlation result.
///
/// Either borrows a caller buffer, which is then written in place,
/// or owns its storage.
pub struct CorrImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Clone + Copy + Default + Debug> Default for CorrImageMut<'_, T> {
    fn default() -> Self {
        CorrImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> CorrImage<'a, T> {
    /// Allocates zeroed image
    pub fn alloc(width: usize, height: usize) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![T::default(); width * height]),
            width,
            height,
        }
    }

    /// Borrows existing data
    pub fn borrow(arr: &'a [T], width: usize, height: usize) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
        }
    }

    /// One dimensional signal stored as a single row
    pub fn row_vector(arr: &'a [T]) -> Self {
        Self::borrow(arr, arr.len(), 1)
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), CorrError> {
        check_slice_size(self.data.as_ref(), self.width, self.height)
    }

    /// Deep clone as mutable image
    pub fn clone_as_mut<'f>(&self) -> CorrImageMut<'f, T> {
        CorrImageMut {
            data: BufferStore::Owned(self.data.to_vec()),
            width: self.width,
            height: self.height,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> CorrImageMut<'a, T> {
    /// Allocates zeroed image
    pub fn alloc(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Allocates image with every entry set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            data: BufferStore::Owned(vec![value; width * height]),
            width,
            height,
        }
    }

    /// Mutable borrows existing data
    pub fn borrow(arr: &'a mut [T], width: usize, height: usize) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    /// Shape as `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Checks that backing storage covers `width * height` entries.
    /// Empty images are accepted, a sampling window may select nothing.
    #[inline]
    pub fn check_layout(&self) -> Result<(), CorrError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        check_slice_size(self.data.borrow(), self.width, self.height)
    }

    /// Returns immutable view over this image
    pub fn to_immutable_ref(&self) -> CorrImage<'_, T> {
        CorrImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            width: self.width,
            height: self.height,
        }
    }
}
