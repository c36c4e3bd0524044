use std::time::Duration;

use crate::outline::{RevealFrame, RevealGeometry};

/// Curve that accelerates along `1 - base^(-t)`, optionally tilted by a
/// linear `drift` term, normalized so that 0 maps to 0 and 1 maps to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogAccelerate {
    base: f32,
    drift: f32,
    log_scale: f32,
}

impl LogAccelerate {
    /// Parameters used by the close animation.
    pub const CLOSE_BASE: f32 = 100.0;
    pub const CLOSE_DRIFT: f32 = 0.0;

    pub fn new(base: f32, drift: f32) -> Self {
        Self {
            base,
            drift,
            log_scale: 1.0 / compute_log(1.0, base, drift),
        }
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn drift(&self) -> f32 {
        self.drift
    }

    /// True when `base` and `drift` give a finite curve that never decreases
    /// on `[0, 1]`.
    ///
    /// The slope of `log(s)` is `ln(base) * base^(-s) + drift`, smallest at
    /// `s = 1`. The normalizer `log(1)` has to be finite and positive.
    pub fn is_well_formed(base: f32, drift: f32) -> bool {
        if !base.is_finite() || !drift.is_finite() || base <= 1.0 {
            return false;
        }
        let normalizer = compute_log(1.0, base, drift);
        let min_slope = base.ln() / base + drift;
        normalizer.is_finite() && normalizer > 0.0 && min_slope >= 0.0
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        // 1 - log(0) * scale can land a hair above 1.
        if t == 1.0 {
            return 1.0;
        }
        1.0 - compute_log(1.0 - t, self.base, self.drift) * self.log_scale
    }
}

impl Default for LogAccelerate {
    fn default() -> Self {
        Self::new(Self::CLOSE_BASE, Self::CLOSE_DRIFT)
    }
}

fn compute_log(t: f32, base: f32, drift: f32) -> f32 {
    -base.powf(-t) + 1.0 + drift * t
}

/// Close curve that resumes from wherever an open animation stopped.
///
/// The close animation runs in reverse, so reveal progress is `1 - evaluate(t)`.
/// `evaluate(0) == 1 - open_progress` puts the first frame exactly on the last
/// open frame, and the remainder of the base curve is squeezed into the
/// `open_progress` left to cover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseCurve {
    base: LogAccelerate,
    start_progress: f32,
    remaining_progress: f32,
}

impl CloseCurve {
    /// `open_progress` is the fraction the open animation had reached.
    pub fn new(base: LogAccelerate, open_progress: f32) -> Self {
        Self {
            base,
            start_progress: 1.0 - open_progress,
            remaining_progress: open_progress,
        }
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        self.start_progress + self.base.evaluate(t) * self.remaining_progress
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Cosine ease: slow start, slow finish. Default for open animations.
    AccelerateDecelerate,
    LogAccelerate(LogAccelerate),
    Close(CloseCurve),
}

impl Easing {
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
            Easing::LogAccelerate(curve) => curve.evaluate(t),
            Easing::Close(curve) => curve.evaluate(t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    Open,
    Close,
    Collapse,
}

/// A reveal animation the host polls with elapsed time.
///
/// Nothing runs on its own: the owner of the frame clock calls [`frame`]
/// (or `PopupItem::sample`) once per frame.
///
/// [`frame`]: RevealAnimation::frame
#[derive(Clone, Debug)]
pub struct RevealAnimation<G> {
    kind: AnimationKind,
    geometry: G,
    duration: Duration,
    easing: Easing,
    reversed: bool,
}

impl<G: RevealGeometry> RevealAnimation<G> {
    pub fn new(kind: AnimationKind, geometry: G, duration: Duration, reversed: bool) -> Self {
        Self {
            kind,
            geometry,
            duration,
            easing: Easing::AccelerateDecelerate,
            reversed,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Linear time fraction in `[0, 1]`. A zero-length animation is complete
    /// as soon as it is sampled.
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Fraction after easing.
    pub fn animated_fraction(&self, elapsed: Duration) -> f32 {
        self.easing.evaluate(self.fraction(elapsed))
    }

    /// Reveal progress handed to the geometry: the animated fraction, or its
    /// complement when the animation runs from revealed to hidden.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let fraction = self.animated_fraction(elapsed);
        if self.reversed {
            1.0 - fraction
        } else {
            fraction
        }
    }

    pub fn frame(&self, elapsed: Duration) -> RevealFrame {
        self.geometry.sample(self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
