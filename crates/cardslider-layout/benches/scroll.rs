use cardslider_layout::{CardProvider, CardSliderLayoutManager, LayoutPass, SliderConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use web_time::Duration;

const VIEWPORT_WIDTH: f32 = 1080.0;
const ITEM_COUNT_SAMPLES: &[usize] = &[100, 10_000];
const DRAG_TICK: i32 = 12;
const SMOOTH_SCROLL_SPAN: usize = 20;

struct IndexProvider {
    count: usize,
}

impl CardProvider for IndexProvider {
    type Card = usize;

    fn item_count(&self) -> usize {
        self.count
    }

    fn obtain_card(&mut self, index: usize) -> usize {
        index
    }

    fn recycle_card(&mut self, _index: usize, card: usize) {
        black_box(card);
    }
}

fn laid_out(provider: &mut IndexProvider) -> CardSliderLayoutManager<usize> {
    let config = SliderConfig::default().card_width(300).active_card_left(60);
    let mut manager = CardSliderLayoutManager::new(config).expect("valid configuration");
    manager.set_viewport_width(VIEWPORT_WIDTH);
    manager.on_layout_children(provider, LayoutPass::Layout);
    manager
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_tick");
    for &count in ITEM_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("items", count), &count, |b, &count| {
            let mut provider = IndexProvider { count };
            let mut manager = laid_out(&mut provider);
            let mut direction = 1;

            b.iter(|| {
                let consumed = manager.scroll_horizontally_by(DRAG_TICK * direction, &mut provider);
                // Bounce between the ends of the collection.
                if consumed == 0 {
                    direction = -direction;
                }
                black_box(consumed);
            });
        });
    }
    group.finish();
}

fn bench_smooth_scroll(c: &mut Criterion) {
    c.bench_function("smooth_scroll_span", |b| {
        let mut provider = IndexProvider { count: 100 };
        let mut manager = laid_out(&mut provider);
        let mut target = SMOOTH_SCROLL_SPAN;

        b.iter(|| {
            manager.smooth_scroll_to_position(target, &provider);
            while manager.is_smooth_scrolling() {
                manager.on_animation_frame(Duration::from_millis(16), &mut provider);
            }
            target = SMOOTH_SCROLL_SPAN - target;
            black_box(manager.active_card_position());
        });
    });
}

criterion_group!(scroll, bench_drag, bench_smooth_scroll);
criterion_main!(scroll);
