use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use simbox_image::{Image, ImageSize};
use simbox_imgproc::segmentation::{bbox_2d_for_actor, decode_instance_segmentation};

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segmentation");

    let size = ImageSize {
        width: 1280,
        height: 720,
    };

    let mut rng = rand::rng();
    let data = (0..size.width * size.height * 4)
        .map(|_| rng.random_range(0..8u8))
        .collect::<Vec<_>>();
    let raw = Image::<u8, 4>::new(size, data).expect("valid image");

    group.bench_function("decode_instance_segmentation", |b| {
        b.iter(|| std::hint::black_box(decode_instance_segmentation(&raw)))
    });

    let (labels, actor_ids) = decode_instance_segmentation(&raw).expect("decoded frame");

    group.bench_function("bbox_2d_for_actor", |b| {
        b.iter(|| std::hint::black_box(bbox_2d_for_actor(&actor_ids, &labels, 0x0304)))
    });

    group.finish();
}

criterion_group!(benches, bench_segmentation);
criterion_main!(benches);
