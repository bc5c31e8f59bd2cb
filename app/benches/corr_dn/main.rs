use criterion::{criterion_group, criterion_main, Criterion};
use libcorrdn::{
    correlate_downsample, correlate_downsample_into, BoundaryPolicy, CorrDnParams, CorrImage,
    CorrImageMut, KernelShape, Step, ThreadingPolicy,
};

const BINOMIAL_5: [f64; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

fn binomial_5x5() -> Vec<f64> {
    BINOMIAL_5
        .iter()
        .flat_map(|&y| BINOMIAL_5.iter().map(move |&x| x * y))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let src = (0..width * height)
        .map(|x| (x % 251) as f64)
        .collect::<Vec<f64>>();
    let image = CorrImage::borrow(&src, width, height);
    let filter = binomial_5x5();

    for policy in [
        BoundaryPolicy::Reflect1,
        BoundaryPolicy::Circular,
        BoundaryPolicy::Extend,
    ] {
        c.bench_function(&format!("corr_dn 5x5 step 2 {policy}: single"), |b| {
            let params = CorrDnParams::new(policy).with_step(Step::uniform(2));
            let geometry = params.geometry(image.size()).unwrap();
            let mut dst = CorrImageMut::alloc(geometry.columns, geometry.rows);
            b.iter(|| {
                correlate_downsample_into(
                    &image,
                    &filter,
                    KernelShape::new(5, 5),
                    &mut dst,
                    params,
                )
                .unwrap();
            })
        });
    }

    c.bench_function("corr_dn 5x5 step 2 reflect1: adaptive", |b| {
        let params = CorrDnParams::new(BoundaryPolicy::Reflect1)
            .with_step(Step::uniform(2))
            .with_threading_policy(ThreadingPolicy::Adaptive);
        b.iter(|| {
            correlate_downsample(&image, &filter, KernelShape::new(5, 5), params).unwrap();
        })
    });

    c.bench_function("corr_dn separable 5 step 2 reflect1: single", |b| {
        b.iter(|| {
            let vertical = correlate_downsample(
                &image,
                &BINOMIAL_5,
                KernelShape::column(5),
                CorrDnParams::default().with_step(Step::new(2, 1)),
            )
            .unwrap();
            correlate_downsample(
                &vertical.to_immutable_ref(),
                &BINOMIAL_5,
                KernelShape::row(5),
                CorrDnParams::default().with_step(Step::new(1, 2)),
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
