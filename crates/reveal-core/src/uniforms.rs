use crate::outline::RevealFrame;

/// A [`RevealFrame`] laid out for a GPU uniform buffer (32 bytes, std140-compatible).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RevealUniforms {
    /// `[left, top, right, bottom]` of the clip outline.
    pub outline: [f32; 4],
    pub radius: f32,
    /// 1.0 when the frame does not drive the icon.
    pub icon_scale: f32,
    pub translation: [f32; 2],
}

impl RevealUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for RevealUniforms {
    fn default() -> Self {
        Self {
            outline: [0.0; 4],
            radius: 0.0,
            icon_scale: 1.0,
            translation: [0.0; 2],
        }
    }
}

impl From<&RevealFrame> for RevealUniforms {
    fn from(frame: &RevealFrame) -> Self {
        Self {
            outline: frame.outline.rect.to_array(),
            radius: frame.outline.radius,
            icon_scale: frame.icon_scale.unwrap_or(1.0),
            translation: [frame.translation.x, frame.translation.y],
        }
    }
}
