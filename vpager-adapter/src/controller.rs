use vpager::{
    IndicatorStyle, PageItem, Pager, PagerOptions, ProgressBar, Size, Transition, indicator,
};

use crate::{DelayedReveal, Frame, IndicatorFrame, Tween};

/// A framework-neutral controller that wraps a `vpager::Pager` and provides the common
/// adapter workflow: deferred layout commits, gesture forwarding, and tween-driven
/// transitions.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` from the layout pass (the measurement is committed on the next `tick`)
/// - `on_drag_*` / `on_dot_tap` / `on_bar_*` when gestures occur
/// - `tick(now_ms)` each frame, then `frame(now_ms)` to render
///
/// The pager commits every offset change immediately; the controller only animates what is
/// displayed. Any new drag interrupts the running tween and continues from the displayed
/// offset.
#[derive(Clone, Debug)]
pub struct Controller {
    pager: Pager,
    bar: ProgressBar,
    tween: Option<Tween>,
    reveal: Option<DelayedReveal>,
}

impl Controller {
    pub fn new(options: PagerOptions) -> Self {
        Self::from_pager(Pager::new(options))
    }

    pub fn from_pager(pager: Pager) -> Self {
        Self {
            pager,
            bar: ProgressBar::default(),
            tween: None,
            reveal: None,
        }
    }

    /// Keeps the indicator overlay hidden until `reveal` fires.
    pub fn with_indicator_reveal(mut self, reveal: DelayedReveal) -> Self {
        self.reveal = Some(reveal);
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager {
        self.pager
    }

    pub fn progress_bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Sets the progress bar's length, as laid out by the host.
    pub fn set_progress_bar_height(&mut self, height: f32) {
        self.bar.set_height(height);
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// The offset currently on screen: the tween's sample while animating, otherwise the
    /// pager's committed offset.
    pub fn displayed_offset(&self, now_ms: u64) -> f32 {
        match &self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.pager.offset(),
        }
    }

    /// Call this from the layout pass. The measurement is applied on the next `tick`, never
    /// in the middle of the pass. Returns `false` if a drag is active and the measurement
    /// was ignored.
    pub fn on_layout(&mut self, viewport: Size, content: Size) -> bool {
        self.pager.stage_geometry(viewport, content)
    }

    fn interrupt(&mut self, now_ms: u64) {
        match self.tween.take() {
            Some(tween) => self.rebase(tween, now_ms),
            None => self.pager.begin_drag(),
        }
    }

    /// Starts a drag from where an interrupted tween currently is.
    fn rebase(&mut self, tween: Tween, now_ms: u64) {
        let displayed = tween.sample(now_ms);
        adebug!(
            displayed,
            target_offset = tween.to,
            now_ms,
            "Controller: drag interrupted animation"
        );
        self.pager.begin_drag_at(displayed);
    }

    /// Call this when the host recognizes the start of a drag.
    ///
    /// This cancels any active tween.
    pub fn on_drag_start(&mut self, now_ms: u64) {
        self.interrupt(now_ms);
    }

    /// `translation` is the total vertical translation since the gesture started.
    pub fn on_drag_change(&mut self, translation: f32, now_ms: u64) {
        if !self.pager.is_dragging() {
            self.interrupt(now_ms);
        }
        self.pager.drag_update(translation);
    }

    /// Ends the drag and starts the settle animation.
    pub fn on_drag_end(
        &mut self,
        translation: f32,
        predicted_velocity: f32,
        now_ms: u64,
    ) -> Transition {
        let from = self.displayed_offset(now_ms);
        let transition = self.pager.drag_end(translation, predicted_velocity);
        self.animate(from, &transition, now_ms);
        transition
    }

    pub fn on_dot_tap(&mut self, index: usize, now_ms: u64) -> Option<Transition> {
        self.jump_to(index, now_ms)
    }

    /// Animates to page `index`. Out-of-range indexes are ignored.
    pub fn jump_to(&mut self, index: usize, now_ms: u64) -> Option<Transition> {
        let from = self.displayed_offset(now_ms);
        let transition = indicator::tap_dot(&mut self.pager, index)?;
        self.animate(from, &transition, now_ms);
        Some(transition)
    }

    pub fn on_bar_tap(&mut self, tap_y: f32, now_ms: u64) -> Transition {
        let from = self.displayed_offset(now_ms);
        let transition = self.bar.tap(&mut self.pager, tap_y);
        self.animate(from, &transition, now_ms);
        transition
    }

    /// `translation` is the handle's total movement since the drag started, in bar
    /// coordinates. Returns `true` if the content moved.
    pub fn on_bar_drag_change(&mut self, translation: f32, now_ms: u64) -> bool {
        if let Some(tween) = self.tween.take() {
            self.rebase(tween, now_ms);
        }
        self.bar.drag_update(&mut self.pager, translation)
    }

    pub fn on_bar_drag_end(&mut self, now_ms: u64) -> Transition {
        let from = self.displayed_offset(now_ms);
        let transition = self.bar.drag_end(&mut self.pager);
        self.animate(from, &transition, now_ms);
        transition
    }

    fn animate(&mut self, from: f32, transition: &Transition, now_ms: u64) {
        if from == transition.to {
            self.tween = None;
            return;
        }
        atrace!(
            from,
            to = transition.to,
            duration_ms = transition.duration_ms,
            kind = ?transition.kind,
            "Controller: start tween"
        );
        self.tween = Some(Tween::for_transition(from, transition, now_ms));
    }

    /// Advances the controller.
    ///
    /// - Commits a measurement staged by `on_layout` (dropped if a drag started since).
    /// - If a tween is active, returns the displayed offset; the tween is cleared once done.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if self.pager.has_pending_geometry() {
            if self.pager.is_dragging() {
                adebug!(now_ms, "Controller::tick: dropping layout staged before drag");
            }
            let before = self.pager.offset();
            self.pager.commit_geometry();
            let after = self.pager.offset();
            if after != before {
                if let Some(tween) = self.tween.as_mut() {
                    let remaining = tween.remaining_ms(now_ms);
                    adebug!(
                        from = before,
                        to = after,
                        remaining,
                        "Controller::tick: layout moved resting offset, retargeting"
                    );
                    tween.retarget(now_ms, after, remaining);
                }
            }
        }

        let tween = self.tween?;
        let off = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }

    /// Iterates over page placements at the displayed offset.
    pub fn for_each_page(&self, now_ms: u64, f: impl FnMut(PageItem)) {
        let offset = self.displayed_offset(now_ms).round();
        self.pager.for_each_page_at(offset, f);
    }

    /// Builds a render snapshot for the current frame.
    pub fn frame(&self, now_ms: u64) -> Frame {
        let displayed = self.displayed_offset(now_ms);
        let offset = displayed.round();
        let page_count = self.pager.page_count();
        let selected_index = self.pager.selected_index();

        let indicator = self.pager.indicators_visible().then(|| {
            match self.pager.options().indicator_style {
                IndicatorStyle::Dots => IndicatorFrame::Dots {
                    count: page_count,
                    selected: selected_index,
                },
                IndicatorStyle::ProgressBar => IndicatorFrame::ProgressBar {
                    handle: self.bar.handle_at(&self.pager, displayed),
                    progress: self.pager.progress_at(displayed),
                },
            }
        });
        let indicator_opacity = match &self.reveal {
            Some(reveal) => reveal.opacity(now_ms),
            None => 1.0,
        };

        Frame {
            offset,
            selected_index,
            page_count,
            visible_pages: self.pager.visible_pages_at(offset),
            is_dragging: self.pager.is_dragging(),
            is_animating: self.is_animating(),
            indicator,
            indicator_opacity,
        }
    }
}
