use bytemuck::{Pod, Zeroable};

/// One shaded sphere for the host's SDF pass.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SdfInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// HDR glow multiplier; 0.0 for planets.
    pub emissive: f32,
    pub _pad: f32,
}

impl SdfInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-frame list of body spheres, read by the host through a raw pointer.
#[derive(Debug, Default)]
pub struct SdfBuffer {
    instances: Vec<SdfInstance>,
}

impl SdfBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SdfInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[SdfInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdf_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<SdfInstance>(), SdfInstance::STRIDE_BYTES);
        assert_eq!(SdfInstance::FLOATS, 8);
    }

    #[test]
    fn push_and_clear() {
        let mut buf = SdfBuffer::new();
        buf.push(SdfInstance::default());
        buf.push(SdfInstance { x: 1.0, ..Default::default() });
        assert_eq!(buf.instance_count(), 2);
        let floats: &[f32] = bytemuck::cast_slice(buf.instances());
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[8], 1.0);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
