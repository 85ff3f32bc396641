//! Lyon-tessellated backdrop and overlay shapes.
//!
//! Each frame the painter rebuilds one flat triangle list: background
//! stars, orbit rings (only while the Sun holds), the instruction panel,
//! and the hover panel. Bodies themselves go through the SDF buffer and
//! text is drawn by the host.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::core::world::World;
use crate::systems::starfield::Starfield;

const STAR_DIAMETER: f32 = 2.0;
const STAR_ALPHA: f32 = 50.0 / 255.0;
const ORBIT_ALPHA: f32 = 50.0 / 255.0;
const ORBIT_LINE_WIDTH: f32 = 1.0;
const PANEL_ALPHA: f32 = 150.0 / 255.0;

/// Instruction panel: x, y, width, height.
pub const INSTRUCTION_PANEL: [f32; 4] = [10.0, 10.0, 260.0, 100.0];
const HOVER_PANEL_WIDTH: f32 = 300.0;
const HOVER_PANEL_HEIGHT: f32 = 60.0;
const HOVER_PANEL_TOP: f32 = 120.0;

const TOLERANCE: f32 = 0.5;

/// Per-vertex data: position and RGBA. 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
}

#[derive(Debug, Clone, Copy)]
struct Paint([f32; 4]);

impl Paint {
    const fn white(alpha: f32) -> Self {
        Paint([1.0, 1.0, 1.0, alpha])
    }

    const fn black(alpha: f32) -> Self {
        Paint([0.0, 0.0, 0.0, alpha])
    }

    fn vertex(&self, x: f32, y: f32) -> VectorVertex {
        let [r, g, b, a] = self.0;
        VectorVertex { x, y, r, g, b, a }
    }
}

impl FillVertexConstructor<VectorVertex> for Paint {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        self.vertex(p.x, p.y)
    }
}

impl StrokeVertexConstructor<VectorVertex> for Paint {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        self.vertex(p.x, p.y)
    }
}

/// Tessellators plus the output buffer, reused frame to frame.
pub struct OverlayPainter {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
}

impl OverlayPainter {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            vertices: Vec::with_capacity(16384),
        }
    }

    /// Repaint everything for the current frame.
    pub fn paint(&mut self, world: &World, stars: &Starfield) {
        self.vertices.clear();

        let star = Paint::white(STAR_ALPHA);
        for s in stars.stars() {
            self.fill_circle(*s, STAR_DIAMETER / 2.0, star);
        }

        let registry = world.registry();
        if registry.sun().present {
            let center = registry.sun().position;
            for body in registry.present() {
                self.stroke_circle(center, body.orbit_radius as f32, Paint::white(ORBIT_ALPHA));
            }
        }

        let [x, y, w, h] = INSTRUCTION_PANEL;
        self.fill_rect(x, y, w, h, Paint::black(PANEL_ALPHA));

        if world.hovered().is_some() {
            let left = world.config().world_width as f32 / 2.0 - HOVER_PANEL_WIDTH / 2.0;
            self.fill_rect(
                left,
                HOVER_PANEL_TOP,
                HOVER_PANEL_WIDTH,
                HOVER_PANEL_HEIGHT,
                Paint::black(PANEL_ALPHA),
            );
        }
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw pointer to the flat float buffer.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    // ── Primitives ─────────────────────────────────────────────────

    fn fill_circle(&mut self, center: DVec2, radius: f32, paint: Paint) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x as f32, center.y as f32), radius, Winding::Positive);
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, paint),
        );
        if result.is_ok() {
            self.flush_geometry();
        }
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f32, paint: Paint) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x as f32, center.y as f32), radius, Winding::Positive);
        let path = builder.build();

        let result = self.stroke_tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(ORBIT_LINE_WIDTH),
            &mut BuffersBuilder::new(&mut self.geometry, paint),
        );
        if result.is_ok() {
            self.flush_geometry();
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
        let mut builder = Path::builder();
        builder.begin(point(x, y));
        builder.line_to(point(x + width, y));
        builder.line_to(point(x + width, y + height));
        builder.line_to(point(x, y + height));
        builder.close();
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, paint),
        );
        if result.is_ok() {
            self.flush_geometry();
        }
    }

    /// Expand indexed geometry into the flat triangle list.
    fn flush_geometry(&mut self) {
        let VertexBuffers { vertices, indices } = &mut self.geometry;
        self.vertices
            .extend(indices.iter().map(|&i| vertices[i as usize]));
        vertices.clear();
        indices.clear();
    }
}

impl Default for OverlayPainter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SimConfig;
    use crate::input::queue::InputEvent;

    fn no_stars() -> Starfield {
        Starfield::generate(0, 1, 800.0, 800.0)
    }

    fn config_without_planets() -> SimConfig {
        SimConfig {
            bodies: Vec::new(),
            ..SimConfig::default()
        }
    }

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<VectorVertex>(), VectorVertex::FLOATS * 4);
    }

    #[test]
    fn empty_sky_is_just_the_instruction_panel() {
        let world = World::new(config_without_planets()).unwrap();
        let mut painter = OverlayPainter::new();
        painter.paint(&world, &no_stars());

        // One rectangle = two triangles.
        assert_eq!(painter.vertex_count(), 6);
        let v = painter.vertices()[0];
        assert_eq!((v.r, v.g, v.b), (0.0, 0.0, 0.0));
        assert!((v.a - PANEL_ALPHA).abs() < 1e-6);
        for v in painter.vertices() {
            assert!(v.x >= 10.0 && v.x <= 270.0);
            assert!(v.y >= 10.0 && v.y <= 110.0);
        }
    }

    #[test]
    fn stars_add_geometry() {
        let world = World::new(config_without_planets()).unwrap();
        let mut painter = OverlayPainter::new();
        painter.paint(&world, &Starfield::generate(10, 3, 800.0, 800.0));
        assert!(painter.vertex_count() > 6);
    }

    #[test]
    fn orbit_rings_vanish_with_the_sun() {
        let mut world = World::new(SimConfig::default()).unwrap();
        let mut painter = OverlayPainter::new();

        painter.paint(&world, &no_stars());
        let with_rings = painter.vertex_count();
        assert!(with_rings > 6);

        world.frame(&[InputEvent::PointerDown { x: 400.0, y: 400.0 }], 0);
        painter.paint(&world, &no_stars());
        assert_eq!(painter.vertex_count(), 6);
    }

    #[test]
    fn hover_panel_appears_when_hovering() {
        let mut world = World::new(config_without_planets()).unwrap();
        let mut painter = OverlayPainter::new();
        world.frame(&[InputEvent::PointerMove { x: 400.0, y: 400.0 }], 0);
        painter.paint(&world, &no_stars());
        assert_eq!(painter.vertex_count(), 6);

        let mut world = World::new(SimConfig::default()).unwrap();
        world.frame(&[InputEvent::PointerMove { x: 450.0, y: 400.0 }], 0);
        world.frame(&[InputEvent::PointerDown { x: 400.0, y: 400.0 }], 0);
        // Sun gone: no rings, so only the two panels remain.
        world.frame(&[InputEvent::PointerMove { x: 450.0, y: 400.0 }], 0);
        assert!(world.hovered().is_some());
        painter.paint(&world, &no_stars());
        assert_eq!(painter.vertex_count(), 12);
        let hover_panel = &painter.vertices()[6..];
        assert!(hover_panel.iter().all(|v| v.x >= 250.0 && v.x <= 550.0));
        assert!(hover_panel.iter().all(|v| v.y >= 120.0 && v.y <= 180.0));
    }
}
