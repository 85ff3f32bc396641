use crate::api::config::Color;
use crate::core::world::World;
use crate::renderer::sdf_instance::{SdfBuffer, SdfInstance};

/// Glow for the Sun; planets are lit, not emissive.
pub const SUN_EMISSIVE: f32 = 3.5;

fn sphere(x: f64, y: f64, diameter: f64, color: Color, emissive: f32) -> SdfInstance {
    SdfInstance {
        x: x as f32,
        y: y as f32,
        radius: (diameter / 2.0) as f32,
        r: color.r,
        g: color.g,
        b: color.b,
        emissive,
        _pad: 0.0,
    }
}

/// Rebuild the sphere list: the Sun (if present), then present planets
/// in registry order.
pub fn build_body_buffer(world: &World, buffer: &mut SdfBuffer) {
    buffer.clear();
    let registry = world.registry();

    let sun = registry.sun();
    if sun.present {
        buffer.push(sphere(
            sun.position.x,
            sun.position.y,
            sun.appearance.size,
            sun.appearance.color,
            SUN_EMISSIVE,
        ));
    }
    for body in registry.present() {
        buffer.push(sphere(
            body.position.x,
            body.position.y,
            body.appearance.size,
            body.appearance.color,
            0.0,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimConfig;
    use crate::input::queue::InputEvent;

    #[test]
    fn sun_first_then_planets() {
        let world = World::new(SimConfig::default()).unwrap();
        let mut buffer = SdfBuffer::new();
        build_body_buffer(&world, &mut buffer);

        assert_eq!(buffer.instance_count(), 9);
        let sun = buffer.instances()[0];
        assert_eq!((sun.x, sun.y, sun.radius), (400.0, 400.0, 25.0));
        assert_eq!(sun.emissive, SUN_EMISSIVE);

        let mercury = buffer.instances()[1];
        assert_eq!((mercury.x, mercury.y, mercury.radius), (450.0, 400.0, 3.0));
        assert_eq!(mercury.emissive, 0.0);
    }

    #[test]
    fn removed_bodies_are_skipped() {
        let mut world = World::new(SimConfig::default()).unwrap();
        world.frame(
            &[
                InputEvent::PointerDown { x: 400.0, y: 400.0 },
                InputEvent::PointerDown { x: 450.0, y: 400.0 },
            ],
            0,
        );
        let mut buffer = SdfBuffer::new();
        build_body_buffer(&world, &mut buffer);

        assert_eq!(buffer.instance_count(), 7);
        assert!(buffer.instances().iter().all(|s| s.emissive == 0.0));
        assert_eq!(buffer.instances()[0].x, 480.0);
    }
}
