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
use crate::correlate::bounded::correlate_bounded_row;
use crate::correlate::circular::correlate_circular_row;
use crate::correlate::scan_taps::{scan_axis, wrap_axis};
use crate::geometry::output_geometry;
use crate::safe_math::SafeMul;
use crate::util::{MismatchedShape, MismatchedSize};
use crate::{
    BoundaryPolicy, CorrError, CorrImage, CorrImageMut, ImageSize, KernelShape, OutputGeometry,
    Position, Step, ThreadingPolicy,
};
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Correlation with downsampling parameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CorrDnParams {
    /// Boundary handling, see [BoundaryPolicy]
    pub policy: BoundaryPolicy,
    /// Downsampling stride
    pub step: Step,
    /// First sampled anchor, inclusive
    pub start: Position,
    /// End of the sampled window, exclusive. `None` means image extent.
    pub stop: Option<Position>,
    /// See [ThreadingPolicy] for more info
    pub threading_policy: ThreadingPolicy,
}

impl CorrDnParams {
    pub fn new(policy: BoundaryPolicy) -> CorrDnParams {
        CorrDnParams {
            policy,
            ..Default::default()
        }
    }

    pub fn with_step(self, step: Step) -> CorrDnParams {
        CorrDnParams { step, ..self }
    }

    pub fn with_start(self, start: Position) -> CorrDnParams {
        CorrDnParams { start, ..self }
    }

    pub fn with_stop(self, stop: Position) -> CorrDnParams {
        CorrDnParams {
            stop: Some(stop),
            ..self
        }
    }

    pub fn with_threading_policy(self, threading_policy: ThreadingPolicy) -> CorrDnParams {
        CorrDnParams {
            threading_policy,
            ..self
        }
    }

    /// Window end, falling back to the full image extent
    pub fn resolve_stop(&self, image_size: ImageSize) -> Position {
        self.stop.unwrap_or(Position::new(
            image_size.height as isize,
            image_size.width as isize,
        ))
    }

    /// Result shape these parameters produce on an image of `image_size`
    pub fn geometry(&self, image_size: ImageSize) -> Result<OutputGeometry, CorrError> {
        output_geometry(self.start, self.resolve_stop(image_size), self.step)
    }
}

fn check_filter<T>(
    image: &CorrImage<T>,
    filter: &[f64],
    filter_shape: KernelShape,
) -> Result<(), CorrError>
where
    T: Clone + Copy + Default + Debug,
{
    image.check_layout()?;
    if filter_shape.is_empty() {
        return Err(CorrError::InvalidFilterShape(filter_shape));
    }
    let expected = filter_shape.width.safe_mul(filter_shape.height)?;
    if filter.len() != expected {
        return Err(CorrError::KernelSizeMismatch(MismatchedSize {
            expected,
            received: filter.len(),
        }));
    }
    if (image.height > 1 && filter_shape.height >= image.height)
        || (image.width > 1 && filter_shape.width >= image.width)
    {
        return Err(CorrError::InvalidFilterShape(filter_shape));
    }
    Ok(())
}

/// Correlates image with filter and samples the result on a strided window.
///
/// For every anchor `(y, x) = start + (i * step.y, j * step.x)` inside `[start, stop)`
/// the result entry `(i, j)` receives `sum image[y + fy - oy, x + fx - ox] * filter[fy, fx]`
/// where `(oy, ox) = (Fh / 2, Fw / 2)` is the filter origin. The filter is not flipped.
/// Samples outside the image are produced by `params.policy`.
/// Accumulation always happens in `f64`.
///
/// Result is freshly allocated and zero filled, so [BoundaryPolicy::SkipOverhang]
/// leaves zeros where the filter overhangs the image.
///
/// # Arguments
///
/// * `image`: Source image.
/// * `filter`: Row-major filter weights.
/// * `filter_shape`: Filter extent, must be strictly smaller than the image on
///   every axis where the image is longer than one pixel.
/// * `params`: See [CorrDnParams] for more info.
///
/// # Examples
///
/// ```
/// use libcorrdn::{correlate_downsample, CorrDnParams, CorrImage, KernelShape, Step};
///
/// let signal = [1f64, 2., 3., 4., 5., 6.];
/// let image = CorrImage::row_vector(&signal);
/// let params = CorrDnParams::default().with_step(Step::new(1, 2));
/// let result = correlate_downsample(&image, &[1.], KernelShape::new(1, 1), params).unwrap();
/// assert_eq!(result.data.borrow(), &[1., 3., 5.]);
/// ```
pub fn correlate_downsample<T>(
    image: &CorrImage<T>,
    filter: &[f64],
    filter_shape: KernelShape,
    params: CorrDnParams,
) -> Result<CorrImageMut<'static, T>, CorrError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    check_filter(image, filter, filter_shape)?;
    let geometry = params.geometry(image.size())?;
    geometry.check_footprint(params.start, params.step, filter_shape)?;
    let mut dst = CorrImageMut::alloc(geometry.columns, geometry.rows);
    execute(image, filter, filter_shape, geometry, params, dst.data.borrow_mut());
    Ok(dst)
}

/// Same as [correlate_downsample] but writes into caller provided `dst`.
///
/// `dst` must already have exactly the shape produced by
/// [CorrDnParams::geometry], otherwise [CorrError::ShapeMismatch] is returned
/// and nothing is written. With [BoundaryPolicy::SkipOverhang] entries whose
/// filter footprint overhangs the image keep their previous value.
///
/// `dst` must not alias `image`.
pub fn correlate_downsample_into<T>(
    image: &CorrImage<T>,
    filter: &[f64],
    filter_shape: KernelShape,
    dst: &mut CorrImageMut<T>,
    params: CorrDnParams,
) -> Result<(), CorrError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    check_filter(image, filter, filter_shape)?;
    let geometry = params.geometry(image.size())?;
    geometry.check_footprint(params.start, params.step, filter_shape)?;
    if dst.shape() != geometry.shape() {
        return Err(CorrError::ShapeMismatch(MismatchedShape {
            expected: geometry.shape(),
            received: dst.shape(),
        }));
    }
    dst.check_layout()?;
    execute(image, filter, filter_shape, geometry, params, dst.data.borrow_mut());
    Ok(())
}

fn execute<T>(
    image: &CorrImage<T>,
    filter: &[f64],
    filter_shape: KernelShape,
    geometry: OutputGeometry,
    params: CorrDnParams,
    dst: &mut [T],
) where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    if geometry.is_empty() {
        return;
    }
    let dst = &mut dst[..geometry.rows * geometry.columns];
    let image_size = image.size();
    let source = image.data.as_ref();

    let work = (geometry.rows * geometry.columns).saturating_mul(filter_shape.len());
    let thread_count = params.threading_policy.thread_count(work, geometry.rows);

    log::trace!(
        "corr_dn: {}x{} image, {}x{} filter, {} policy, result {}x{}, {} thread(s)",
        image_size.height,
        image_size.width,
        filter_shape.height,
        filter_shape.width,
        params.policy,
        geometry.rows,
        geometry.columns,
        thread_count
    );

    if params.policy == BoundaryPolicy::Circular {
        let rows = wrap_axis(
            params.start.y,
            params.step.y,
            geometry.rows,
            filter_shape.height,
            image_size.height,
        );
        let columns = wrap_axis(
            params.start.x,
            params.step.x,
            geometry.columns,
            filter_shape.width,
            image_size.width,
        );
        let row_fn = |y: usize, row: &mut [T]| {
            let y_taps = &rows[y * filter_shape.height..(y + 1) * filter_shape.height];
            correlate_circular_row(
                source,
                image_size,
                filter,
                filter_shape.width,
                y_taps,
                &columns,
                row,
            );
        };
        dispatch_rows(dst, geometry.columns, thread_count, row_fn);
    } else {
        let rows = scan_axis(
            params.policy,
            params.start.y,
            params.step.y,
            geometry.rows,
            filter_shape.height,
            image_size.height,
        );
        let columns = scan_axis(
            params.policy,
            params.start.x,
            params.step.x,
            geometry.columns,
            filter_shape.width,
            image_size.width,
        );
        let skip_overhang = params.policy == BoundaryPolicy::SkipOverhang;
        let row_fn = |y: usize, row: &mut [T]| {
            correlate_bounded_row(
                source,
                image_size,
                filter,
                filter_shape.width,
                rows.anchor(y),
                rows.overhangs(y),
                &columns,
                skip_overhang,
                row,
            );
        };
        dispatch_rows(dst, geometry.columns, thread_count, row_fn);
    }
}

fn dispatch_rows<T, F>(dst: &mut [T], row_len: usize, thread_count: usize, row_fn: F)
where
    T: Send + Sync,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if thread_count <= 1 {
        for (y, row) in dst.chunks_exact_mut(row_len).enumerate() {
            row_fn(y, row);
        }
        return;
    }
    let pool = novtb::ThreadPool::new(thread_count);
    dst.tb_par_chunks_exact_mut(row_len)
        .for_each_enumerated(&pool, |y, row| {
            row_fn(y, row);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    const ALL_POLICIES: [BoundaryPolicy; 7] = [
        BoundaryPolicy::Circular,
        BoundaryPolicy::Reflect1,
        BoundaryPolicy::Reflect2,
        BoundaryPolicy::Repeat,
        BoundaryPolicy::Zero,
        BoundaryPolicy::Extend,
        BoundaryPolicy::SkipOverhang,
    ];

    fn ramp(width: usize, height: usize) -> Vec<f64> {
        (0..width * height)
            .map(|i| ((i * 37 + 11) % 23) as f64 * 0.25 - 1.5)
            .collect()
    }

    fn corr_row(signal: &[f64], filter: &[f64], params: CorrDnParams) -> Vec<f64> {
        let image = CorrImage::row_vector(signal);
        let result =
            correlate_downsample(&image, filter, KernelShape::row(filter.len()), params).unwrap();
        assert_eq!(result.height, 1);
        result.data.borrow().to_vec()
    }

    #[test]
    fn test_downsample_picks_every_other_sample() {
        for policy in ALL_POLICIES {
            let params = CorrDnParams::new(policy).with_step(Step::new(1, 2));
            assert_eq!(
                corr_row(&[1., 2., 3., 4., 5., 6.], &[1.], params),
                vec![1., 3., 5.],
                "{policy}"
            );
        }
    }

    #[test]
    fn test_left_neighbour_under_each_policy() {
        let signal = [1., 2., 3., 4.];
        let filter = [1., 0., 0.];
        let cases = [
            (BoundaryPolicy::Reflect1, [2., 1., 2., 3.]),
            (BoundaryPolicy::Reflect2, [1., 1., 2., 3.]),
            (BoundaryPolicy::Repeat, [1., 1., 2., 3.]),
            (BoundaryPolicy::Zero, [0., 1., 2., 3.]),
            (BoundaryPolicy::Circular, [4., 1., 2., 3.]),
            (BoundaryPolicy::Extend, [0., 1., 2., 3.]),
        ];
        for (policy, expected) in cases {
            assert_eq!(
                corr_row(&signal, &filter, CorrDnParams::new(policy)),
                expected.to_vec(),
                "{policy}"
            );
        }
    }

    #[test]
    fn test_negative_start_reaches_across_the_edge() {
        let signal = [1., 2., 3., 4.];
        let cases = [
            (BoundaryPolicy::Reflect1, [3., 2., 1., 2., 3., 4.]),
            (BoundaryPolicy::Reflect2, [2., 1., 1., 2., 3., 4.]),
            (BoundaryPolicy::Repeat, [1., 1., 1., 2., 3., 4.]),
            (BoundaryPolicy::Circular, [3., 4., 1., 2., 3., 4.]),
        ];
        for (policy, expected) in cases {
            let params = CorrDnParams::new(policy).with_start(Position::new(0, -2));
            assert_eq!(corr_row(&signal, &[1.], params), expected.to_vec(), "{policy}");
        }
    }

    #[test]
    fn test_extend_keeps_linear_ramp_linear() {
        let signal = [1., 2., 3., 4., 5.];
        let params = CorrDnParams::new(BoundaryPolicy::Extend);
        assert_eq!(corr_row(&signal, &[1., 0., 0.], params)[0], 0.);
        assert_eq!(corr_row(&signal, &[0., 0., 1.], params)[4], 6.);
        let smoothed = corr_row(&signal, &[0.25, 0.5, 0.25], params);
        assert_eq!(smoothed, signal.to_vec());
    }

    #[test]
    fn test_even_filter_origin_leans_right() {
        let params = CorrDnParams::new(BoundaryPolicy::Repeat);
        assert_eq!(corr_row(&[1., 2., 3.], &[1., 0.], params), vec![1., 1., 2.]);
        assert_eq!(corr_row(&[1., 2., 3.], &[0., 1.], params), vec![1., 2., 3.]);
    }

    #[test]
    fn test_skip_overhang_passes_through() {
        let signal = [1., 2., 3., 4.];
        let image = CorrImage::row_vector(&signal);
        let mut dst = CorrImageMut::filled(4, 1, -999f64);
        correlate_downsample_into(
            &image,
            &[1., 1., 1.],
            KernelShape::row(3),
            &mut dst,
            CorrDnParams::new(BoundaryPolicy::SkipOverhang),
        )
        .unwrap();
        assert_eq!(dst.data.borrow(), &[-999., 6., 9., -999.]);
    }

    #[test]
    fn test_skip_overhang_on_vertical_edges() {
        let data = ramp(5, 5);
        let image = CorrImage::borrow(&data, 5, 5);
        let mut dst = CorrImageMut::filled(5, 5, -999f64);
        correlate_downsample_into(
            &image,
            &[1.; 9],
            KernelShape::new(3, 3),
            &mut dst,
            CorrDnParams::new(BoundaryPolicy::SkipOverhang),
        )
        .unwrap();
        let reference = correlate_downsample(
            &image,
            &[1.; 9],
            KernelShape::new(3, 3),
            CorrDnParams::new(BoundaryPolicy::Zero),
        )
        .unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let v = dst.data.borrow()[y * 5 + x];
                if y == 0 || y == 4 || x == 0 || x == 4 {
                    assert_eq!(v, -999., "({y}, {x})");
                } else {
                    assert_eq!(v, reference.data.borrow()[y * 5 + x], "({y}, {x})");
                }
            }
        }
    }

    #[test]
    fn test_circular_identity() {
        let data = ramp(4, 3);
        let image = CorrImage::borrow(&data, 4, 3);
        let result = correlate_downsample(
            &image,
            &[1.],
            KernelShape::new(1, 1),
            CorrDnParams::new(BoundaryPolicy::Circular),
        )
        .unwrap();
        assert_eq!(result.shape(), (3, 4));
        assert_eq!(result.data.borrow(), data.as_slice());
    }

    #[test]
    fn test_zero_filter_gives_zeros() {
        let data = ramp(6, 5);
        let image = CorrImage::borrow(&data, 6, 5);
        for policy in ALL_POLICIES {
            let result = correlate_downsample(
                &image,
                &[0.; 6],
                KernelShape::new(3, 2),
                CorrDnParams::new(policy)
                    .with_start(Position::new(-1, -2))
                    .with_step(Step::new(2, 1)),
            )
            .unwrap();
            assert!(
                result.data.borrow().iter().all(|&v| v == 0.),
                "{policy} produced non zero output"
            );
        }
    }

    #[test]
    fn test_two_dimensional_repeat() {
        let data: Vec<f64> = (1..=16).map(|v| v as f64).collect();
        let image = CorrImage::borrow(&data, 4, 4);
        let result = correlate_downsample(
            &image,
            &[1.; 9],
            KernelShape::new(3, 3),
            CorrDnParams::new(BoundaryPolicy::Repeat).with_step(Step::uniform(3)),
        )
        .unwrap();
        assert_eq!(result.shape(), (2, 2));
        let result = result.data.borrow();
        // (0, 0): rows [0, 0, 1], columns [0, 0, 1]
        assert_eq!(result[0], 2. * (1. + 1. + 2.) + (5. + 5. + 6.));
        // (0, 3): rows [0, 0, 1], columns [2, 3, 3]
        assert_eq!(result[1], 2. * (3. + 4. + 4.) + (7. + 8. + 8.));
        // (3, 0): rows [2, 3, 3], columns [0, 0, 1]
        assert_eq!(result[2], (9. + 9. + 10.) + 2. * (13. + 13. + 14.));
        // (3, 3): rows [2, 3, 3], columns [2, 3, 3]
        assert_eq!(result[3], (11. + 12. + 12.) + 2. * (15. + 16. + 16.));
    }

    #[test]
    fn test_column_signal_matches_row_signal() {
        let signal = [3., -1., 4., 1., -5., 9., 2.];
        let filter = [0.1, 0.2, 0.4, 0.2, 0.1];
        for policy in ALL_POLICIES {
            let params = CorrDnParams::new(policy).with_step(Step::uniform(2));
            let row = corr_row(&signal, &filter, params);
            let column = correlate_downsample(
                &CorrImage::borrow(&signal, 1, signal.len()),
                &filter,
                KernelShape::column(filter.len()),
                params,
            )
            .unwrap();
            assert_eq!(column.shape(), (row.len(), 1));
            assert_eq!(column.data.borrow(), row.as_slice(), "{policy}");
        }
    }

    #[test]
    fn test_sub_window() {
        let data: Vec<f64> = (0..16).map(|x| x as f64).collect();
        let image = CorrImage::borrow(&data, 4, 4);
        let result = correlate_downsample(
            &image,
            &[1.],
            KernelShape::new(1, 1),
            CorrDnParams::default()
                .with_start(Position::new(1, 1))
                .with_stop(Position::new(3, 4))
                .with_step(Step::new(1, 2)),
        )
        .unwrap();
        assert_eq!(result.shape(), (2, 2));
        assert_eq!(result.data.borrow(), &[5., 7., 9., 11.]);
    }

    #[test]
    fn test_empty_window_produces_empty_result() {
        let data = ramp(4, 4);
        let image = CorrImage::borrow(&data, 4, 4);
        let result = correlate_downsample(
            &image,
            &[1.],
            KernelShape::new(1, 1),
            CorrDnParams::default().with_stop(Position::new(0, 4)),
        )
        .unwrap();
        assert_eq!(result.shape(), (0, 4));
        assert!(result.data.borrow().is_empty());
    }

    #[test]
    fn test_threading_is_bit_identical() {
        let data = ramp(41, 37);
        let image = CorrImage::borrow(&data, 41, 37);
        let filter: Vec<f64> = (0..15).map(|x| (x as f64 * 0.37).sin()).collect();
        for policy in ALL_POLICIES {
            let params = CorrDnParams::new(policy)
                .with_start(Position::new(-3, 1))
                .with_step(Step::new(2, 3));
            let single =
                correlate_downsample(&image, &filter, KernelShape::new(5, 3), params).unwrap();
            let again =
                correlate_downsample(&image, &filter, KernelShape::new(5, 3), params).unwrap();
            let threaded = correlate_downsample(
                &image,
                &filter,
                KernelShape::new(5, 3),
                params.with_threading_policy(ThreadingPolicy::Fixed(
                    NonZeroUsize::new(4).unwrap(),
                )),
            )
            .unwrap();
            for ((a, b), c) in single
                .data
                .borrow()
                .iter()
                .zip(again.data.borrow())
                .zip(threaded.data.borrow())
            {
                assert_eq!(a.to_bits(), b.to_bits(), "{policy}");
                assert_eq!(a.to_bits(), c.to_bits(), "{policy}");
            }
        }
    }

    #[test]
    fn test_into_writes_borrowed_buffer() {
        let data = ramp(6, 4);
        let image = CorrImage::borrow(&data, 6, 4);
        let params = CorrDnParams::new(BoundaryPolicy::Reflect2).with_step(Step::uniform(2));
        let mut storage = vec![0f64; 6];
        let mut dst = CorrImageMut::borrow(&mut storage, 3, 2);
        correlate_downsample_into(
            &image,
            &[0.25, 0.5, 0.25],
            KernelShape::column(3),
            &mut dst,
            params,
        )
        .unwrap();
        let owned =
            correlate_downsample(&image, &[0.25, 0.5, 0.25], KernelShape::column(3), params)
                .unwrap();
        assert_eq!(storage, owned.data.borrow());
    }

    #[test]
    fn test_f32_and_f16_accumulate_in_f64() {
        let signal = [1f32, 2., 3., 4., 5., 6.];
        let image = CorrImage::row_vector(&signal);
        let result = correlate_downsample(
            &image,
            &[1.],
            KernelShape::new(1, 1),
            CorrDnParams::default().with_step(Step::new(1, 2)),
        )
        .unwrap();
        assert_eq!(result.data.borrow(), &[1f32, 3., 5.]);

        let signal: Vec<crate::f16> = [1f32, 2., 3., 4.]
            .iter()
            .map(|&x| crate::f16::from_f32(x))
            .collect();
        let image = CorrImage::row_vector(&signal);
        let result = correlate_downsample(
            &image,
            &[0.5, 0., 0.5],
            KernelShape::row(3),
            CorrDnParams::new(BoundaryPolicy::Reflect1),
        )
        .unwrap();
        let values: Vec<f32> = result.data.borrow().iter().map(|x| x.to_f32()).collect();
        assert_eq!(values, vec![2., 2., 3., 3.]);
    }

    #[test]
    fn test_filter_not_smaller_than_image_is_rejected() {
        let data = [1f64, 2., 3.];
        let image = CorrImage::row_vector(&data);
        let shape = KernelShape::row(3);
        assert_eq!(
            correlate_downsample(&image, &[1., 1., 1.], shape, CorrDnParams::default()).err(),
            Some(CorrError::InvalidFilterShape(shape))
        );
        let empty = KernelShape::new(0, 1);
        assert_eq!(
            correlate_downsample(&image, &[], empty, CorrDnParams::default()).err(),
            Some(CorrError::InvalidFilterShape(empty))
        );
    }

    #[test]
    fn test_filter_length_must_match_shape() {
        let data = [1f64, 2., 3., 4.];
        let image = CorrImage::row_vector(&data);
        assert_eq!(
            correlate_downsample(&image, &[1., 1.], KernelShape::row(3), CorrDnParams::default())
                .err(),
            Some(CorrError::KernelSizeMismatch(MismatchedSize {
                expected: 3,
                received: 2,
            }))
        );
    }

    #[test]
    fn test_shape_mismatch_leaves_result_untouched() {
        let data = ramp(4, 4);
        let image = CorrImage::borrow(&data, 4, 4);
        let mut dst = CorrImageMut::filled(4, 4, 7f64);
        let err = correlate_downsample_into(
            &image,
            &[1.],
            KernelShape::new(1, 1),
            &mut dst,
            CorrDnParams::default().with_step(Step::uniform(2)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CorrError::ShapeMismatch(MismatchedShape {
                expected: (2, 2),
                received: (4, 4),
            })
        );
        assert!(dst.data.borrow().iter().all(|&v| v == 7.));
    }

    #[test]
    fn test_extend_ramp_far_outside_the_image() {
        let signal = [1., 2., 3., 4., 5.];
        let params = CorrDnParams::new(BoundaryPolicy::Extend)
            .with_start(Position::new(0, -6))
            .with_stop(Position::new(1, 0));
        assert_eq!(
            corr_row(&signal, &[1.], params),
            vec![-5., -4., -3., -2., -1., 0.]
        );
        let params = CorrDnParams::new(BoundaryPolicy::Extend)
            .with_start(Position::new(0, 5))
            .with_stop(Position::new(1, 14));
        assert_eq!(
            corr_row(&signal, &[1.], params),
            vec![6., 7., 8., 9., 10., 11., 12., 13., 14.]
        );
    }

    #[test]
    fn test_footprint_outside_isize_is_rejected() {
        let signal = [1., 2., 3., 4., 5., 6.];
        let filter = [1.; 5];
        let image = CorrImage::row_vector(&signal);
        for policy in ALL_POLICIES {
            let params = CorrDnParams::new(policy)
                .with_start(Position::new(0, isize::MIN))
                .with_stop(Position::new(1, isize::MIN + 1));
            assert_eq!(
                correlate_downsample(&image, &filter, KernelShape::row(5), params).err(),
                Some(CorrError::ExceedingPointerSize),
                "{policy}"
            );
            let params = CorrDnParams::new(policy)
                .with_start(Position::new(0, isize::MAX - 1))
                .with_stop(Position::new(1, isize::MAX));
            let mut dst = CorrImageMut::filled(1, 1, 7.);
            assert_eq!(
                correlate_downsample_into(
                    &image,
                    &filter,
                    KernelShape::row(5),
                    &mut dst,
                    params
                ),
                Err(CorrError::ExceedingPointerSize),
                "{policy}"
            );
            assert_eq!(dst.data.borrow(), &[7.]);
        }
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let data = ramp(4, 4);
        let image = CorrImage::borrow(&data, 4, 4);
        assert_eq!(
            correlate_downsample(
                &image,
                &[1.],
                KernelShape::new(1, 1),
                CorrDnParams::default().with_step(Step::new(1, 0)),
            )
            .err(),
            Some(CorrError::ZeroStep)
        );
    }
}
