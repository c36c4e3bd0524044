pub mod animation;
pub mod config;
pub mod geometry;
pub mod item;
pub mod outline;
pub mod uniforms;

pub use animation::{AnimationKind, CloseCurve, Easing, LogAccelerate, RevealAnimation};
pub use config::{ConfigError, LogAccelerateConfig, RevealConfig};
pub use geometry::{Point, Rect};
pub use item::{PopupItem, RevealState};
pub use outline::{
    PillOutline, PillReveal, PillWidthReveal, RevealFrame, RevealGeometry, ZoomReveal,
};
pub use uniforms::RevealUniforms;
