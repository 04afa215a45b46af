// Example: driving the pager from a progress-bar indicator.
use vpager::{IndicatorStyle, Pager, PagerOptions, ProgressBar, Size};

fn main() {
    let mut pager =
        Pager::new(PagerOptions::new().with_indicator_style(IndicatorStyle::ProgressBar));
    pager.update_geometry(Size::new(320.0, 400.0), Size::new(320.0, 8.0 * 400.0));

    let mut bar = ProgressBar::new(240.0);
    println!("handle={:?}", bar.handle(&pager));

    // Tap the middle of the bar.
    let t = bar.tap(&mut pager, 120.0);
    println!(
        "tap: page={} offset={} ({}ms)",
        pager.selected_index(),
        pager.offset(),
        t.duration_ms
    );

    // Drag the handle down, then release: the content snaps to the nearest page.
    for translation in [5.0, 12.0, 31.0, 44.0] {
        bar.drag_update(&mut pager, translation);
        println!(
            "drag {translation}: offset={} progress={:.3}",
            pager.offset(),
            pager.progress()
        );
    }
    let t = bar.drag_end(&mut pager);
    println!("release: {:?} page={}", t.kind, pager.selected_index());
}
