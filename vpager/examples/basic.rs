use vpager::{IndicatorVisibility, PageSpacing, Pager, PagerOptions, Size, indicator};

fn main() {
    // Five full-screen pages with a small gap, dots shown when there is more than one page.
    let opts = PagerOptions::new()
        .with_page_spacing(PageSpacing::Small)
        .with_indicator_visibility(IndicatorVisibility::Automatic);
    let mut pager = Pager::new(opts);

    // The host's layout pass reports the viewport and the stacked content height.
    let viewport = Size::new(390.0, 844.0);
    let content = Size::new(390.0, 5.0 * 844.0 + 4.0 * 20.0);
    pager.update_geometry(viewport, content);
    println!(
        "page_height={} page_count={}",
        pager.page_height(),
        pager.page_count()
    );

    // A short, slow drag snaps back; a fast one advances.
    for translation in [-20.0, -60.0, -120.0] {
        pager.drag_update(translation);
    }
    let t = pager.drag_end(-120.0, -40.0);
    println!("slow release: {:?} -> offset={}", t.kind, pager.offset());

    for translation in [-20.0, -60.0, -120.0] {
        pager.drag_update(translation);
    }
    let t = pager.drag_end(-120.0, -900.0);
    println!(
        "fast release: {:?} -> page={} offset={} ({}ms)",
        t.kind,
        pager.selected_index(),
        pager.offset(),
        t.duration_ms
    );

    // Dots indicator: render, then tap the last dot.
    let mut dots = String::new();
    indicator::for_each_dot(&pager, |d| dots.push(if d.selected { '●' } else { '○' }));
    println!("dots: {dots}");
    if let Some(t) = indicator::tap_dot(&mut pager, 4) {
        println!("tap dot 4: {:?} over {}ms", t.kind, t.duration_ms);
    }
    println!("visible pages: {:?}", pager.visible_pages());
}
