use vpager::{IndicatorVisibility, PagerOptions, Size};
use vpager_adapter::{Controller, DelayedReveal};

fn main() {
    // Example: a controller driving a pager without holding any UI objects.
    //
    // An adapter would:
    // - report layout from its layout pass (committed on the next tick)
    // - forward drag updates and the release velocity
    // - call tick(now_ms) in a frame loop and render from frame(now_ms)
    let mut c = Controller::new(
        PagerOptions::new().with_indicator_visibility(IndicatorVisibility::Automatic),
    )
    .with_indicator_reveal(DelayedReveal::default());

    c.on_layout(Size::new(390.0, 844.0), Size::new(390.0, 4.0 * 844.0));
    c.tick(0);

    let mut now_ms = 0u64;
    c.on_drag_start(now_ms);
    for step in 1..=6 {
        now_ms += 16;
        c.on_drag_change(-15.0 * step as f32, now_ms);
    }
    let t = c.on_drag_end(-90.0, -600.0, now_ms);
    println!("release: {:?} target={}", t.kind, t.to);

    loop {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                let f = c.frame(now_ms);
                println!(
                    "t={now_ms} off={off:.1} visible={:?} opacity={:.2}",
                    f.visible_pages, f.indicator_opacity
                );
            }
        } else {
            break;
        }
    }

    let f = c.frame(now_ms);
    println!(
        "done: page={} offset={} indicator={:?}",
        f.selected_index, f.offset, f.indicator
    );
}
