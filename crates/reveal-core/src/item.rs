//! A popup item: a pill-shaped row with an icon at one end.
//!
//! `PopupItem` owns the measured pill bounds and the open progress of the
//! item. It hands out [`RevealAnimation`]s for opening, closing and
//! collapsing, and tracks progress as the host samples them.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::animation::{AnimationKind, CloseCurve, Easing, RevealAnimation};
use crate::config::RevealConfig;
use crate::geometry::{Point, Rect};
use crate::outline::{PillWidthReveal, RevealFrame, RevealGeometry, ZoomReveal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Debug)]
pub struct PopupItem {
    config: RevealConfig,
    pill_rect: Rect,
    /// How far the last open got, in `[0, 1]`. Zero means closed.
    open_progress: f32,
    last_kind: Option<AnimationKind>,
}

impl PopupItem {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            pill_rect: Rect::default(),
            open_progress: 0.0,
            last_kind: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.config.rtl = rtl;
    }

    /// Record a measurement pass. The pill always covers the full measured bounds.
    pub fn measure(&mut self, width: f32, height: f32) {
        self.pill_rect = Rect::from_size(width, height);
    }

    pub fn pill_rect(&self) -> Rect {
        self.pill_rect
    }

    pub fn background_radius(&self) -> f32 {
        self.config.pill_radius
    }

    pub fn will_draw_icon(&self) -> bool {
        true
    }

    /// Center of the icon relative to the item: one half-height in from the
    /// leading edge.
    pub fn icon_center(&self) -> Point {
        let half = self.pill_rect.height() / 2.0;
        let x = if self.config.rtl {
            self.pill_rect.width() - half
        } else {
            half
        };
        Point::new(x, half)
    }

    pub fn open_progress(&self) -> f32 {
        self.open_progress
    }

    pub fn is_open_or_opening(&self) -> bool {
        self.open_progress > 0.0
    }

    /// Derived from the open progress and the last animation created.
    ///
    /// A cancelled open keeps its progress so a later close can resume from
    /// it; until that close is created the item reports `Opening`.
    pub fn state(&self) -> RevealState {
        if self.open_progress <= 0.0 {
            return RevealState::Closed;
        }
        match self.last_kind {
            Some(AnimationKind::Close) => RevealState::Closing,
            _ if self.open_progress >= 1.0 => RevealState::Open,
            _ => RevealState::Opening,
        }
    }

    /// Animation played when the popup container opens.
    pub fn create_open_animation(
        &mut self,
        is_container_above_icon: bool,
        pivot_left: bool,
    ) -> RevealAnimation<ZoomReveal> {
        let anim = RevealAnimation::new(
            AnimationKind::Open,
            self.zoom_reveal(is_container_above_icon, pivot_left),
            self.config.open_duration(),
            false,
        );
        self.open_progress = 0.0;
        self.last_kind = Some(AnimationKind::Open);
        debug!(
            "open animation: duration={:?} above={} pivot_left={}",
            anim.duration(),
            is_container_above_icon,
            pivot_left
        );
        anim
    }

    /// Animation played when the popup container closes.
    ///
    /// Starts from the current open progress and runs for the matching share
    /// of `duration`, so an open that was cut short closes quickly.
    pub fn create_close_animation(
        &mut self,
        is_container_above_icon: bool,
        pivot_left: bool,
        duration: Duration,
    ) -> RevealAnimation<ZoomReveal> {
        let open_progress = self.open_progress;
        let scaled = Duration::from_millis((duration.as_millis() as f32 * open_progress) as u64);
        let curve = CloseCurve::new(self.config.close_curve(), open_progress);

        let anim = RevealAnimation::new(
            AnimationKind::Close,
            self.zoom_reveal(is_container_above_icon, pivot_left),
            scaled,
            true,
        )
        .with_easing(Easing::Close(curve));
        self.last_kind = Some(AnimationKind::Close);
        debug!("close animation: duration={scaled:?} open_progress={open_progress}");
        anim
    }

    /// Close using the configured full close duration.
    pub fn create_default_close_animation(
        &mut self,
        is_container_above_icon: bool,
        pivot_left: bool,
    ) -> RevealAnimation<ZoomReveal> {
        let duration = self.config.close_duration();
        self.create_close_animation(is_container_above_icon, pivot_left, duration)
    }

    /// Animation that clips the item down to a circle around the icon.
    pub fn collapse_to_icon(&mut self) -> RevealAnimation<PillWidthReveal> {
        self.warn_if_unmeasured();
        let half = self.pill_rect.height() / 2.0;
        let icon_x = self.icon_center().x;
        debug!("collapse to icon at x={icon_x}");
        RevealAnimation::new(
            AnimationKind::Collapse,
            PillWidthReveal::new(self.pill_rect, icon_x - half, icon_x + half),
            self.config.open_duration(),
            true,
        )
    }

    /// Sample `anim` at `elapsed` and update the open progress.
    ///
    /// Opens record their animated fraction. Closes record the reveal progress
    /// currently on screen, and reset to zero once complete, so a second close
    /// requested mid-close resumes from what is visible.
    pub fn sample<G: RevealGeometry>(
        &mut self,
        anim: &RevealAnimation<G>,
        elapsed: Duration,
    ) -> RevealFrame {
        let progress = anim.progress(elapsed);
        match anim.kind() {
            AnimationKind::Open => {
                self.open_progress = anim.animated_fraction(elapsed).clamp(0.0, 1.0);
            }
            AnimationKind::Close => {
                self.open_progress = if anim.is_finished(elapsed) {
                    0.0
                } else {
                    progress.clamp(0.0, 1.0)
                };
            }
            AnimationKind::Collapse => {}
        }
        trace!(
            "{:?} frame: elapsed={elapsed:?} progress={progress} open_progress={}",
            anim.kind(),
            self.open_progress
        );
        anim.geometry().sample(progress)
    }

    /// The host reports that `anim` ran to completion.
    pub fn finish<G: RevealGeometry>(&mut self, anim: &RevealAnimation<G>) {
        match anim.kind() {
            AnimationKind::Open => self.open_progress = 1.0,
            AnimationKind::Close => self.reset(),
            AnimationKind::Collapse => {}
        }
    }

    /// The host dropped `anim` before it completed.
    ///
    /// A cancelled close still counts as closed.
    pub fn cancel<G: RevealGeometry>(&mut self, anim: &RevealAnimation<G>) {
        if anim.kind() == AnimationKind::Close {
            self.reset();
        }
    }

    fn reset(&mut self) {
        debug!("closed");
        self.open_progress = 0.0;
    }

    fn zoom_reveal(&self, is_container_above_icon: bool, pivot_left: bool) -> ZoomReveal {
        self.warn_if_unmeasured();
        ZoomReveal::new(
            self.icon_center(),
            self.pill_rect,
            self.background_radius(),
            is_container_above_icon,
            pivot_left,
        )
    }

    fn warn_if_unmeasured(&self) {
        if self.pill_rect.is_empty() {
            warn!("reveal animation created before the item was measured");
        }
        debug_assert!(!self.pill_rect.is_empty(), "pill rect must be measured");
    }
}

impl Default for PopupItem {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(rtl: bool) -> PopupItem {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut item = PopupItem::new(RevealConfig {
            rtl,
            ..RevealConfig::default()
        });
        item.measure(200.0, 80.0);
        item
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_icon_center() {
        assert_eq!(measured(false).icon_center(), Point::new(40.0, 40.0));
        assert_eq!(measured(true).icon_center(), Point::new(160.0, 40.0));
    }

    #[test]
    fn test_closed_before_any_animation() {
        let item = measured(false);
        assert!(!item.is_open_or_opening());
        assert_eq!(item.state(), RevealState::Closed);
    }

    #[test]
    fn test_open_close_lifecycle() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        assert!(!item.is_open_or_opening());

        item.sample(&open, ms(100));
        assert!(item.is_open_or_opening());
        assert_eq!(item.state(), RevealState::Opening);

        let frame = item.sample(&open, ms(300));
        assert_eq!(frame.icon_scale, Some(item.open_progress()));
        item.finish(&open);
        assert_eq!(item.open_progress(), 1.0);
        assert_eq!(item.state(), RevealState::Open);

        let close = item.create_close_animation(true, true, ms(300));
        assert_eq!(close.duration(), ms(300));
        item.sample(&close, ms(150));
        assert!(item.is_open_or_opening());
        assert_eq!(item.state(), RevealState::Closing);

        let last = item.sample(&close, ms(300));
        assert_eq!(last.icon_scale, Some(0.0));
        assert!(!item.is_open_or_opening());
        assert_eq!(item.state(), RevealState::Closed);
    }

    #[test]
    fn test_interrupted_open_scales_close_duration() {
        let mut item = measured(false);
        let _open = item.create_open_animation(true, false);
        item.open_progress = 0.3;

        let close = item.create_close_animation(true, false, ms(300));
        assert_eq!(close.duration(), ms(90));
    }

    #[test]
    fn test_close_resumes_from_open_progress() {
        let mut item = measured(false);
        let open = item.create_open_animation(false, true);
        let at_interrupt = item.sample(&open, ms(120));
        let open_progress = item.open_progress();
        assert!(open_progress > 0.0 && open_progress < 1.0);

        let close = item.create_default_close_animation(false, true);
        let first = item.sample(&close, Duration::ZERO);
        let scale = first.icon_scale.unwrap();
        assert!((scale - open_progress).abs() < 1e-5);
        assert!((first.outline.rect.height() - at_interrupt.outline.rect.height()).abs() < 1e-3);
    }

    #[test]
    fn test_close_from_closed_is_instant() {
        let mut item = measured(false);
        let close = item.create_close_animation(true, true, ms(300));
        assert_eq!(close.duration(), Duration::ZERO);

        let frame = item.sample(&close, Duration::ZERO);
        assert_eq!(frame.icon_scale, Some(0.0));
        assert!(!item.is_open_or_opening());
    }

    #[test]
    fn test_second_close_resumes_mid_close() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        item.sample(&open, ms(300));
        item.finish(&open);

        let close = item.create_close_animation(true, true, ms(300));
        item.sample(&close, ms(30));
        let visible = item.open_progress();
        assert!(visible > 0.0 && visible < 1.0);

        let again = item.create_close_animation(true, true, ms(300));
        let first = item.sample(&again, Duration::ZERO);
        assert!((first.icon_scale.unwrap() - visible).abs() < 1e-5);
    }

    #[test]
    fn test_cancelled_close_resets() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        item.sample(&open, ms(200));

        let close = item.create_close_animation(true, true, ms(300));
        item.sample(&close, ms(10));
        item.cancel(&close);
        assert!(!item.is_open_or_opening());
    }

    #[test]
    fn test_cancelled_open_keeps_progress() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        item.sample(&open, ms(150));
        let progress = item.open_progress();
        item.cancel(&open);
        assert_eq!(item.open_progress(), progress);
        assert_eq!(item.state(), RevealState::Opening);
        assert!(item.is_open_or_opening());

        let close = item.create_default_close_animation(true, true);
        assert_eq!(item.state(), RevealState::Closing);
        item.finish(&close);
        assert_eq!(item.state(), RevealState::Closed);
    }

    #[test]
    fn test_open_and_close_animation_directions() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        assert!(!open.is_reversed());
        assert_eq!(open.easing(), &Easing::AccelerateDecelerate);

        item.sample(&open, ms(150));
        let close = item.create_default_close_animation(true, true);
        assert!(close.is_reversed());
        assert!(matches!(close.easing(), Easing::Close(_)));
    }

    #[test]
    fn test_rtl_open_anchors_right_pivot() {
        let mut item = measured(false);
        item.set_rtl(true);
        assert!(item.config().rtl);
        assert_eq!(item.icon_center(), Point::new(160.0, 40.0));

        let open = item.create_open_animation(true, false);
        let zoom = *open.geometry();
        assert_eq!(zoom.fixed_translate_x(), 160.0);

        for step in 0..=10 {
            let frame = item.sample(&open, ms(step * 30));
            let pivot = zoom.pivot_x(&frame.outline);
            assert!((frame.translation.x + pivot - 160.0).abs() < 1e-3);
            assert!(frame.translation.y >= 0.0);
        }

        let last = item.sample(&open, ms(300));
        assert_eq!(last.outline.rect.right, 200.0);
    }

    #[test]
    fn test_new_open_resets_progress() {
        let mut item = measured(false);
        let open = item.create_open_animation(true, true);
        item.sample(&open, ms(300));
        let _reopen = item.create_open_animation(true, true);
        assert_eq!(item.open_progress(), 0.0);
    }

    #[test]
    fn test_collapse_to_icon() {
        let mut item = measured(true);
        let open = item.create_open_animation(true, false);
        item.sample(&open, ms(300));
        let before = item.open_progress();

        let collapse = item.collapse_to_icon();
        let full = item.sample(&collapse, Duration::ZERO);
        assert_eq!(full.outline.rect, item.pill_rect());

        let done = item.sample(&collapse, collapse.duration());
        assert!((done.outline.rect.left - 120.0).abs() < 1e-3);
        assert!((done.outline.rect.right - 200.0).abs() < 1e-3);
        assert_eq!(done.outline.rect.height(), 80.0);
        assert_eq!(done.outline.radius, 40.0);
        assert_eq!(done.icon_scale, None);
        assert_eq!(item.open_progress(), before);
    }
}
