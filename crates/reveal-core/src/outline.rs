//! Pill-shaped clip outlines for reveal animations.
//!
//! A reveal is described by a [`RevealGeometry`] that maps normalized progress
//! (0 = hidden, 1 = fully revealed) to a [`RevealFrame`]: the clip outline plus
//! whatever transform the variant drives on the icon and its container. The
//! host applies the frame to its own views.

use crate::geometry::{Point, Rect};

/// Clip shape for a single frame: a rounded rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PillOutline {
    pub rect: Rect,
    /// Corner radius, never more than half the outline height.
    pub radius: f32,
}

/// Everything a reveal variant produces for one progress value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealFrame {
    pub outline: PillOutline,
    /// Uniform scale for the icon view. `None` when the variant leaves the icon alone.
    pub icon_scale: Option<f32>,
    /// Translation applied to the container view.
    pub translation: Point,
}

/// Maps reveal progress to a frame.
pub trait RevealGeometry {
    fn sample(&self, progress: f32) -> RevealFrame;
}

/// Base reveal: a pill growing from a point at `center` until it fills `pill`.
#[derive(Clone, Copy, Debug)]
pub struct PillReveal {
    center: Point,
    pill: Rect,
    final_radius: f32,
}

impl PillReveal {
    pub fn new(center: Point, pill: Rect, final_radius: f32) -> Self {
        Self {
            center,
            pill,
            final_radius,
        }
    }

    /// Outline at `progress`.
    ///
    /// The outline is a square around the center whose half-size grows
    /// linearly up to the distance from the center to the farther horizontal
    /// edge, clipped to the pill. This assumes the pill is wider than tall.
    pub fn outline(&self, progress: f32) -> PillOutline {
        let Point { x: cx, y: cy } = self.center;
        let center_to_edge = cx.max(self.pill.width() - cx);
        let size = progress * center_to_edge;

        let rect = Rect::new(
            self.pill.left.max(cx - size),
            self.pill.top.max(cy - size),
            self.pill.right.min(cx + size),
            self.pill.bottom.min(cy + size),
        );
        PillOutline {
            rect,
            radius: self.final_radius.min(rect.height() / 2.0),
        }
    }
}

impl RevealGeometry for PillReveal {
    fn sample(&self, progress: f32) -> RevealFrame {
        RevealFrame {
            outline: self.outline(progress),
            ..RevealFrame::default()
        }
    }
}

/// Pill reveal that also zooms the icon and shifts the container so the
/// icon stays put while the pill grows around it.
#[derive(Clone, Copy, Debug)]
pub struct ZoomReveal {
    base: PillReveal,
    full_height: f32,
    /// +0.5 when the container sits above the icon, -0.5 below.
    translate_y_multiplier: f32,
    pivot_left: bool,
    /// Where the outline pivot has to end up, in pill coordinates.
    translate_x: f32,
}

impl ZoomReveal {
    pub fn new(
        pivot: Point,
        pill: Rect,
        radius: f32,
        is_container_above_icon: bool,
        pivot_left: bool,
    ) -> Self {
        let full_height = pill.height();
        let translate_x = if pivot_left {
            full_height / 2.0
        } else {
            pill.right - full_height / 2.0
        };
        Self {
            base: PillReveal::new(pivot, pill, radius),
            full_height,
            translate_y_multiplier: if is_container_above_icon { 0.5 } else { -0.5 },
            pivot_left,
            translate_x,
        }
    }

    /// Target pivot X fixed at construction.
    pub fn fixed_translate_x(&self) -> f32 {
        self.translate_x
    }

    /// Horizontal pivot of a given outline: half its height in from the anchored edge.
    pub fn pivot_x(&self, outline: &PillOutline) -> f32 {
        let half = outline.rect.height() / 2.0;
        if self.pivot_left {
            outline.rect.left + half
        } else {
            outline.rect.right - half
        }
    }
}

impl RevealGeometry for ZoomReveal {
    fn sample(&self, progress: f32) -> RevealFrame {
        let outline = self.base.outline(progress);
        let height = outline.rect.height();

        RevealFrame {
            outline,
            icon_scale: Some(progress),
            translation: Point::new(
                self.translate_x - self.pivot_x(&outline),
                self.translate_y_multiplier * (self.full_height - height),
            ),
        }
    }
}

/// Full-height pill whose horizontal extent interpolates between
/// `[start_left, start_right]` and the pill's own edges.
#[derive(Clone, Copy, Debug)]
pub struct PillWidthReveal {
    pill: Rect,
    start_left: f32,
    start_right: f32,
}

impl PillWidthReveal {
    pub fn new(pill: Rect, start_left: f32, start_right: f32) -> Self {
        Self {
            pill,
            start_left,
            start_right,
        }
    }
}

impl RevealGeometry for PillWidthReveal {
    fn sample(&self, progress: f32) -> RevealFrame {
        let lerp = |from: f32, to: f32| from + (to - from) * progress;
        RevealFrame {
            outline: PillOutline {
                rect: Rect::new(
                    lerp(self.start_left, self.pill.left),
                    self.pill.top,
                    lerp(self.start_right, self.pill.right),
                    self.pill.bottom,
                ),
                radius: self.pill.height() / 2.0,
            },
            ..RevealFrame::default()
        }
    }
}
