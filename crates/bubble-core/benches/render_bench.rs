use anyhow::Result;
use bubble_core::{BubblePoint, BubbleSeries, Chart, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use skia_safe::Color;

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let points = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            BubblePoint { x: 300.0 * (600.0f64).powf(t), y: 20.0 + 60.0 * t, r: 2.0 + 30.0 * (1.0 - t) }
        })
        .collect::<Vec<_>>();
    let fill = (0..n).map(|i| Color::from_rgb((i * 37 % 255) as u8, 120, 200)).collect();
    ch.add_series(BubbleSeries::with_points(points).with_fill(fill));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[200usize, 2_000usize] {
        group.bench_function(format!("bubbles_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
