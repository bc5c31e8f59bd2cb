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
use libcorrdn::{
    correlate_downsample, BoundaryPolicy, CorrDnParams, CorrError, CorrImage, CorrImageMut,
    KernelShape, Step, ThreadingPolicy,
};

const BINOMIAL_5: [f64; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// One pyramid reduction: vertical pass then horizontal pass, each halving its axis
fn reduce(
    image: &CorrImage<f32>,
    policy: BoundaryPolicy,
) -> Result<CorrImageMut<'static, f32>, CorrError> {
    let vertical = correlate_downsample(
        image,
        &BINOMIAL_5,
        KernelShape::column(BINOMIAL_5.len()),
        CorrDnParams::new(policy)
            .with_step(Step::new(2, 1))
            .with_threading_policy(ThreadingPolicy::Adaptive),
    )?;
    correlate_downsample(
        &vertical.to_immutable_ref(),
        &BINOMIAL_5,
        KernelShape::row(BINOMIAL_5.len()),
        CorrDnParams::new(policy)
            .with_step(Step::new(1, 2))
            .with_threading_policy(ThreadingPolicy::Adaptive),
    )
}

fn main() -> Result<(), CorrError> {
    let policy = std::env::args()
        .nth(1)
        .map(|x| x.parse::<BoundaryPolicy>())
        .transpose()?
        .unwrap_or_default();

    let width = 640usize;
    let height = 480usize;
    let mut src = vec![0f32; width * height];
    for (y, row) in src.chunks_exact_mut(width).enumerate() {
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = (((x / 16) + (y / 16)) % 2) as f32 * 255.;
        }
    }

    let mut level = CorrImage::borrow(&src, width, height).clone_as_mut();
    let mut depth = 0;
    while level.width > BINOMIAL_5.len() && level.height > BINOMIAL_5.len() {
        let next = reduce(&level.to_immutable_ref(), policy)?;
        depth += 1;
        let data = next.data.borrow();
        let mean = data.iter().map(|&x| x as f64).sum::<f64>() / data.len() as f64;
        println!(
            "level {depth}: {}x{} ({policy}), mean {mean:.3}",
            next.width, next.height
        );
        level = next;
    }
    Ok(())
}
