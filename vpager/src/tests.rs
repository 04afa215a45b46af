use crate::*;

use std::sync::{Arc, Mutex};
use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

const VIEWPORT: Size = Size::new(300.0, 400.0);

/// Five 400pt pages, no spacing.
fn five_pages(options: PagerOptions) -> Pager {
    let mut p = Pager::new(options);
    p.update_geometry(VIEWPORT, Size::new(300.0, 2000.0));
    p
}

fn stack_height(pages: usize, viewport: f32, spacing: f32) -> f32 {
    pages as f32 * viewport + (pages - 1) as f32 * spacing
}

#[test]
fn geometry_derives_page_metrics() {
    let p = five_pages(PagerOptions::new());
    assert_eq!(p.page_height(), 400.0);
    assert_eq!(p.content_height(), 2000.0);
    assert_eq!(p.page_count(), 5);
    assert_eq!(p.offset(), 0.0);
    assert_eq!(p.selected_index(), 0);
}

#[test]
fn geometry_accounts_for_spacing_presets() {
    for spacing in [
        PageSpacing::None,
        PageSpacing::Small,
        PageSpacing::Large,
        PageSpacing::Overlap,
    ] {
        let mut p = Pager::new(PagerOptions::new().with_page_spacing(spacing));
        let s = spacing.value();
        p.update_geometry(VIEWPORT, Size::new(300.0, stack_height(7, 400.0, s)));
        assert_eq!(p.page_height(), 400.0 + s, "{spacing:?}");
        assert_eq!(p.page_count(), 7, "{spacing:?}");
    }
}

#[test]
fn spacing_presets_map_to_fixed_values() {
    assert_eq!(PageSpacing::None.value(), 0.0);
    assert_eq!(PageSpacing::Small.value(), 20.0);
    assert_eq!(PageSpacing::Large.value(), 40.0);
    assert_eq!(PageSpacing::Overlap.value(), -40.0);
}

#[test]
fn page_count_tolerates_float_error() {
    let mut p = Pager::new(PagerOptions::new().with_page_spacing(PageSpacing::Small));
    p.update_geometry(
        Size::new(390.0, 844.3),
        Size::new(390.0, stack_height(3, 844.3, 20.0)),
    );
    assert_eq!(p.page_count(), 3);
}

#[test]
fn degenerate_geometry_floors_page_count_to_one() {
    let mut p = Pager::new(PagerOptions::new());
    assert_eq!(p.page_count(), 1);
    p.update_geometry(Size::ZERO, Size::ZERO);
    assert_eq!(p.page_count(), 1);

    let mut p = Pager::new(PagerOptions::new().with_page_spacing_value(-500.0));
    p.update_geometry(VIEWPORT, Size::new(300.0, 2000.0));
    assert_eq!(p.page_count(), 1);
    assert!(!p.geometry().is_valid());

    p.drag_update(-120.0);
    let t = p.drag_end(-120.0, 0.0);
    assert_eq!(t.kind, TransitionKind::Revert);
    assert_eq!(p.offset(), 0.0);
    assert_eq!(p.selected_index(), 0);

    let mut p = Pager::new(PagerOptions::new());
    p.update_geometry(VIEWPORT, Size::new(300.0, f32::NAN));
    assert_eq!(p.page_count(), 1);
}

#[test]
fn fast_upward_release_advances_one_page() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(-100.0);
    let t = p.drag_end(-100.0, -250.0);
    assert_eq!(t.kind, TransitionKind::Advance);
    assert_eq!(t.from, -100.0);
    assert_eq!(t.to, -400.0);
    assert_eq!(t.duration_ms, SETTLE_DURATION_MS);
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.offset(), -400.0);
    assert!(!p.is_dragging());
    assert!(p.is_at_rest());
}

#[test]
fn fast_downward_release_goes_back_one_page() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(3);
    p.drag_update(30.0);
    let t = p.drag_end(30.0, 900.0);
    assert_eq!(t.kind, TransitionKind::Advance);
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.offset(), -800.0);
}

#[test]
fn slow_release_snaps_to_nearest_page() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(-150.0);
    assert_eq!(p.offset(), -150.0);
    let t = p.drag_end(-150.0, -50.0);
    assert_eq!(t.kind, TransitionKind::Snap);
    assert_eq!(p.selected_index(), 0);
    assert_eq!(p.offset(), 0.0);

    p.drag_update(-250.0);
    p.drag_end(-250.0, -50.0);
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.offset(), -400.0);
}

#[test]
fn velocity_at_threshold_is_not_a_fling() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(-10.0);
    let t = p.drag_end(-10.0, -DEFAULT_FLING_THRESHOLD);
    assert_eq!(t.kind, TransitionKind::Snap);
    assert_eq!(p.selected_index(), 0);
}

#[test]
fn fling_past_last_page_is_rejected() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(4);
    assert_eq!(p.offset(), -1600.0);
    p.drag_update(-30.0);
    let t = p.drag_end(-30.0, -250.0);
    assert!(t.is_revert());
    assert_eq!(p.selected_index(), 4);
    assert_eq!(p.offset(), -1600.0);
}

#[test]
fn fling_before_first_page_is_rejected() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(80.0);
    assert_eq!(p.offset(), 80.0);
    let t = p.drag_end(80.0, 600.0);
    assert!(t.is_revert());
    assert_eq!(t.to, 0.0);
    assert_eq!(p.offset(), 0.0);
}

#[test]
fn overscroll_snap_back_without_prevention() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(4);
    p.drag_update(-300.0);
    assert_eq!(p.offset(), -1900.0);
    p.drag_end(-300.0, 0.0);
    // round(1900 / 400) == 5, which is past the content.
    assert_eq!(p.selected_index(), 4);
    assert_eq!(p.offset(), -1600.0);
}

#[test]
fn prevent_overscroll_rejects_moves_past_bounds() {
    let mut p = five_pages(PagerOptions::new().with_prevent_overscroll(true));
    p.drag_update(50.0);
    assert_eq!(p.offset(), 0.0);
    assert_eq!(p.drag_accumulated(), 50.0);

    // The delta is measured from the last reported translation, not from the last applied one.
    p.drag_update(-50.0);
    assert_eq!(p.offset(), -100.0);
    p.drag_end(-50.0, 0.0);

    p.jump_to(4);
    p.drag_update(-10.0);
    assert_eq!(p.offset(), -1600.0);
    p.drag_update(10.0);
    assert_eq!(p.offset(), -1580.0);
}

#[test]
fn prevent_overscroll_keeps_offsets_in_range_for_random_drags() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let mut p = five_pages(PagerOptions::new().with_prevent_overscroll(true));
        let min = -(p.content_height() - p.page_height());
        for _ in 0..rng.gen_range_usize(1, 6) {
            let mut translation = 0.0;
            p.begin_drag();
            for _ in 0..rng.gen_range_usize(1, 30) {
                translation += rng.gen_range_f32(-300.0, 300.0);
                p.drag_update(translation);
                assert!(p.offset() <= 0.0 && p.offset() >= min, "{}", p.offset());
            }
            p.drag_end(translation, rng.gen_range_f32(-1000.0, 1000.0));
            assert!(p.offset() <= 0.0 && p.offset() >= min, "{}", p.offset());
            assert!(p.is_at_rest());
            assert!(p.selected_index() < p.page_count());
        }
    }
}

#[test]
fn drag_starting_at_zero_translation_counts_as_dragging() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(0.0);
    assert!(p.is_dragging());
    p.drag_end(0.0, 0.0);
    assert!(!p.is_dragging());

    p.begin_drag();
    assert!(p.is_dragging());
    assert_eq!(p.drag_accumulated(), 0.0);
}

#[test]
fn non_finite_input_is_ignored() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(f32::NAN);
    assert!(!p.is_dragging());
    assert_eq!(p.offset(), 0.0);

    p.drag_update(-300.0);
    p.drag_end(-300.0, f32::INFINITY);
    assert_eq!(p.selected_index(), 1);
}

#[test]
fn jump_to_current_page_is_idempotent() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(2);
    let before = p.offset();
    let t = p.jump_to(2).unwrap();
    assert!(t.is_noop());
    assert_eq!(p.offset(), before);
    assert_eq!(p.selected_index(), 2);
}

#[test]
fn jump_duration_scales_with_distance() {
    let mut p = Pager::new(PagerOptions::new());
    p.update_geometry(VIEWPORT, Size::new(300.0, 4000.0));
    assert_eq!(p.page_count(), 10);

    assert_eq!(p.jump_to(2).unwrap().duration_ms, SETTLE_DURATION_MS);
    assert_eq!(p.jump_to(5).unwrap().duration_ms, MEDIUM_JUMP_DURATION_MS);
    assert_eq!(p.jump_to(0).unwrap().duration_ms, MEDIUM_JUMP_DURATION_MS);
    assert_eq!(p.jump_to(6).unwrap().duration_ms, LONG_JUMP_DURATION_MS);
    assert_eq!(p.offset(), -2400.0);

    assert_eq!(jump_duration_ms(0), 400);
    assert_eq!(jump_duration_ms(3), 1_000);
    assert_eq!(jump_duration_ms(9), 1_500);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(1);
    assert!(p.jump_to(5).is_none());
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.offset(), -400.0);
}

#[test]
fn jump_ends_an_active_drag() {
    let mut p = five_pages(PagerOptions::new());
    p.drag_update(-40.0);
    p.jump_to(3);
    assert!(!p.is_dragging());
    assert_eq!(p.drag_accumulated(), 0.0);
    assert_eq!(p.offset(), -1200.0);
}

#[test]
fn geometry_updates_are_ignored_while_dragging() {
    let mut p = five_pages(PagerOptions::new());
    p.begin_drag();
    assert!(
        p.update_geometry(Size::new(300.0, 500.0), Size::new(300.0, 1000.0))
            .is_none()
    );
    assert_eq!(p.page_height(), 400.0);
    assert_eq!(p.page_count(), 5);
    assert!(!p.stage_geometry(Size::new(300.0, 500.0), Size::new(300.0, 1000.0)));
}

#[test]
fn staged_geometry_is_dropped_if_a_drag_starts_before_commit() {
    let mut p = five_pages(PagerOptions::new());
    assert!(p.stage_geometry(Size::new(300.0, 500.0), Size::new(300.0, 1000.0)));
    assert!(p.has_pending_geometry());
    p.begin_drag();
    assert!(p.commit_geometry().is_none());
    assert!(!p.has_pending_geometry());
    assert_eq!(p.page_height(), 400.0);
}

#[test]
fn staged_geometry_applies_on_commit() {
    let mut p = five_pages(PagerOptions::new());
    assert!(p.stage_geometry(Size::new(300.0, 500.0), Size::new(300.0, 1500.0)));
    assert_eq!(p.page_count(), 5);
    let changed = p.commit_geometry().unwrap();
    assert_eq!(changed.previous_page_count, 5);
    assert_eq!(changed.page_count, 3);
    assert_eq!(p.page_height(), 500.0);
    assert!(p.commit_geometry().is_none());
}

#[test]
fn geometry_change_resyncs_resting_offset() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(2);
    // Same page count, taller pages (e.g. rotation).
    let changed = p.update_geometry(Size::new(300.0, 500.0), Size::new(300.0, 2500.0));
    assert!(changed.is_none());
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.offset(), -1000.0);
}

#[test]
fn shrinking_page_count_clamps_selection() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(4);
    let changed = p
        .update_geometry(VIEWPORT, Size::new(300.0, 1200.0))
        .unwrap();
    assert_eq!(changed.page_count, 3);
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.offset(), -800.0);
}

#[test]
fn initial_page_is_applied_on_first_usable_geometry() {
    let p = five_pages(PagerOptions::new().with_initial_page(3));
    assert_eq!(p.selected_index(), 3);
    assert_eq!(p.offset(), -1200.0);

    let p = five_pages(PagerOptions::new().with_initial_page(40));
    assert_eq!(p.selected_index(), 4);

    let mut p = five_pages(PagerOptions::new().with_initial_page(3));
    p.jump_to(1);
    p.update_geometry(Size::new(300.0, 500.0), Size::new(300.0, 2500.0));
    assert_eq!(p.selected_index(), 1);
}

#[test]
fn on_change_reports_changed_fields() {
    let seen = Arc::new(Mutex::new(Vec::<Changes>::new()));
    let sink = Arc::clone(&seen);
    let mut p = Pager::new(PagerOptions::new().with_on_change(Some(
        move |_: &Pager, changes: Changes| sink.lock().unwrap().push(changes),
    )));

    p.update_geometry(VIEWPORT, Size::new(300.0, 2000.0));
    p.update_geometry(VIEWPORT, Size::new(300.0, 2000.0));
    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].page_count);
        assert!(!seen[0].offset);
    }

    p.drag_update(-220.0);
    p.drag_end(-220.0, 0.0);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[1].dragging && seen[1].offset);
    assert!(seen[2].dragging && seen[2].offset && seen[2].selection);
}

#[test]
fn batch_update_coalesces_notifications() {
    let seen = Arc::new(Mutex::new(Vec::<Changes>::new()));
    let mut p = five_pages(PagerOptions::new());
    let sink = Arc::clone(&seen);
    p.set_on_change(Some(move |p: &Pager, changes: Changes| {
        assert!(!p.is_dragging());
        sink.lock().unwrap().push(changes);
    }));

    p.batch_update(|p| {
        p.jump_to(1);
        p.jump_to(2);
        p.jump_to(2);
    });
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].offset && seen[0].selection && !seen[0].page_count);
}

#[test]
fn begin_drag_at_rebases_offset() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(2);
    p.begin_drag_at(-600.0);
    assert!(p.is_dragging());
    assert_eq!(p.offset(), -600.0);
    p.drag_update(-100.0);
    assert_eq!(p.offset(), -700.0);
    p.drag_end(-100.0, 0.0);
    assert_eq!(p.selected_index(), 2);
}

#[test]
fn state_snapshot_matches_accessors() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(3);
    p.drag_update(-25.0);
    let s = p.state();
    assert_eq!(s.offset, -1225.0);
    assert_eq!(s.selected_index, 3);
    assert_eq!(s.page_count, 5);
    assert!(s.is_dragging);
    assert_eq!(s.offset_from_selected(p.page_height()), -25.0);
}

#[test]
fn visible_pages_follow_offset() {
    let mut p = five_pages(PagerOptions::new());
    assert_eq!(
        p.visible_pages(),
        PageRange {
            start_index: 0,
            end_index: 1
        }
    );
    p.drag_update(-200.0);
    let r = p.visible_pages();
    assert_eq!((r.start_index, r.end_index), (0, 2));
    assert_eq!(r.len(), 2);
    assert!(r.contains(1));
    assert!(!r.contains(2));
    assert!(!r.is_empty());
    assert!(p.is_page_visible(1));
    assert!(!p.is_page_visible(2));

    let mut tops = Vec::new();
    p.for_each_page(|it| tops.push(it.top));
    assert_eq!(tops, [-200.0, 200.0, 600.0, 1000.0, 1400.0]);

    assert_eq!(p.visible_pages_at(-1600.0).start_index, 4);
    assert!(p.visible_pages_at(-5000.0).is_empty());
}

#[test]
fn visible_pages_with_overlap_spacing() {
    let mut p = Pager::new(PagerOptions::new().with_page_spacing(PageSpacing::Overlap));
    p.update_geometry(VIEWPORT, Size::new(300.0, stack_height(4, 400.0, -40.0)));
    assert_eq!(p.page_count(), 4);
    // Page 1 starts 360pt down, so it is already peeking in at rest.
    let r = p.visible_pages();
    assert_eq!((r.start_index, r.end_index), (0, 2));
    let item = p.page_item(1).unwrap();
    assert_eq!(item.top, 360.0);
    assert_eq!(item.bottom(), 760.0);
}

#[test]
fn indicator_visibility_policy() {
    assert!(!IndicatorVisibility::Never.is_visible(5));
    assert!(!IndicatorVisibility::Automatic.is_visible(1));
    assert!(IndicatorVisibility::Automatic.is_visible(2));
    assert!(IndicatorVisibility::Always.is_visible(1));

    let p = five_pages(
        PagerOptions::new().with_indicator_visibility(IndicatorVisibility::Automatic),
    );
    assert!(p.indicators_visible());
    let p = five_pages(PagerOptions::new());
    assert!(!p.indicators_visible());
}

#[test]
fn dots_mark_selected_page_and_jump_on_tap() {
    let mut p = five_pages(PagerOptions::new());
    p.jump_to(1);
    let mut dots = Vec::new();
    indicator::for_each_dot(&p, |d| dots.push(d));
    assert_eq!(dots.len(), 5);
    assert_eq!(dots.iter().filter(|d| d.selected).count(), 1);
    assert!(dots[1].selected);

    let t = indicator::tap_dot(&mut p, 4).unwrap();
    assert_eq!(t.kind, TransitionKind::Jump);
    assert_eq!(t.duration_ms, MEDIUM_JUMP_DURATION_MS);
    assert_eq!(p.selected_index(), 4);
}

#[test]
fn progress_tracks_offset() {
    let mut p = five_pages(PagerOptions::new());
    assert_eq!(p.progress(), 0.0);
    p.jump_to(4);
    assert_close(p.progress(), 0.8);
    assert_eq!(Pager::default().progress(), 0.0);
}

#[test]
fn progress_bar_handle_geometry() {
    let mut p = five_pages(PagerOptions::new());
    let bar = ProgressBar::new(500.0);
    let h = bar.handle(&p);
    assert_close(h.height, 100.0);
    assert_close(h.offset, 0.0);

    p.jump_to(2);
    let h = bar.handle(&p);
    assert_close(h.offset, 200.0);
    assert_close(h.end(), 300.0);
    assert_close(bar.handle_at(&p, -1000.0).offset, 250.0);

    assert_eq!(ProgressBar::new(0.0).handle(&p), Handle::default());
}

#[test]
fn progress_bar_tap_maps_to_nearest_page() {
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);

    let t = bar.tap(&mut p, 250.0);
    assert_eq!(t.kind, TransitionKind::Jump);
    assert_eq!(p.selected_index(), 2);
    assert_eq!(p.offset(), -800.0);

    bar.tap(&mut p, 495.0);
    assert_eq!(p.selected_index(), 4);

    bar.tap(&mut p, 10.0);
    assert_eq!(p.selected_index(), 0);
    assert_eq!(p.offset(), 0.0);
}

#[test]
fn progress_bar_tap_outside_content_keeps_page() {
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);
    p.jump_to(2);

    let t = bar.tap(&mut p, 900.0);
    assert!(t.is_revert());
    assert_eq!(p.selected_index(), 2);

    let t = bar.tap(&mut p, -200.0);
    assert!(t.is_revert());
    assert_eq!(p.offset(), -800.0);

    let t = ProgressBar::new(0.0).tap(&mut p, 100.0);
    assert!(t.is_revert());
}

#[test]
fn progress_bar_drag_moves_content_inversely_scaled() {
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);

    assert!(bar.drag_update(&mut p, 40.0));
    assert!(bar.is_dragging());
    assert!(p.is_dragging());
    assert_close(p.offset(), -160.0);
    assert_close(bar.handle(&p).offset, 40.0);

    let t = bar.drag_end(&mut p);
    assert_eq!(t.kind, TransitionKind::Snap);
    assert!(!bar.is_dragging());
    assert!(!p.is_dragging());
    assert_eq!(p.selected_index(), 0);

    bar.drag_update(&mut p, 60.0);
    bar.drag_end(&mut p);
    assert_eq!(p.selected_index(), 1);
    assert_eq!(p.offset(), -400.0);
}

#[test]
fn progress_bar_drag_resumes_after_jump_ends_pager_drag() {
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);
    assert!(bar.drag_update(&mut p, 40.0));
    assert_close(p.offset(), -160.0);

    p.jump_to(3).unwrap();
    assert!(!p.is_dragging());
    assert_eq!(p.offset(), -1200.0);

    // The next handle event continues from the jump target rather than replaying the
    // movement accumulated before it.
    assert!(!bar.drag_update(&mut p, 60.0));
    assert!(p.is_dragging());
    assert_eq!(p.offset(), -1200.0);
    assert!(bar.drag_update(&mut p, 80.0));
    assert_close(p.offset(), -1280.0);

    bar.drag_end(&mut p);
    assert_eq!(p.selected_index(), 3);
    assert_eq!(p.offset(), -1200.0);
}

#[test]
fn progress_bar_tap_resets_handle_drag() {
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);
    assert!(bar.drag_update(&mut p, 40.0));

    bar.tap(&mut p, 250.0);
    assert!(!bar.is_dragging());
    assert!(!p.is_dragging());
    assert_eq!(p.offset(), -800.0);

    assert!(bar.drag_update(&mut p, 20.0));
    assert!(bar.is_dragging());
    assert_close(p.offset(), -880.0);
}

#[test]
fn progress_bar_drag_is_always_bounded() {
    // `prevent_overscroll` is off, yet the bar still refuses to overscroll.
    let mut p = five_pages(PagerOptions::new());
    let mut bar = ProgressBar::new(500.0);
    assert!(!bar.drag_update(&mut p, -10.0));
    assert_eq!(p.offset(), 0.0);

    assert!(bar.drag_update(&mut p, 380.0));
    assert_close(p.offset(), -1560.0);
    assert!(!bar.drag_update(&mut p, 450.0));
    assert_close(p.offset(), -1560.0);
    bar.drag_end(&mut p);
    assert_eq!(p.selected_index(), 4);
}

#[test]
fn fling_velocity_is_predicted_displacement() {
    assert_eq!(fling_velocity(300.0, 40.0), -260.0);
    assert_eq!(fling_velocity(100.0, 150.0), 50.0);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?}");
        assert_close(easing.sample(1.0), 1.0);
        assert_close(easing.sample(2.0), 1.0);
        let mid = easing.sample(0.5);
        assert!(mid > 0.0 && mid < 1.0, "{easing:?}");
    }
}

#[test]
fn options_debug_skips_callbacks() {
    let opts = PagerOptions::new()
        .with_prevent_overscroll(true)
        .with_indicator_style(IndicatorStyle::ProgressBar)
        .with_fling_threshold(300.0)
        .with_easing(Easing::Linear)
        .with_on_change(Some(|_: &Pager, _: Changes| {}));
    let s = format!("{opts:?}");
    assert!(s.contains("prevent_overscroll: true"));
    assert!(s.contains("ProgressBar"));
    assert!(!s.contains("on_change"));
    assert_eq!(opts.fling_threshold, 300.0);
}
