//! A software implementation of the immediate-mode [`Backend`].

use alloc::vec::Vec;
use core::ops::Range;

use crate::math::{
    Color4f, Lerp, Mat4x4, Point3, Vec3, ZDiv,
    mat::{perspective, translate, viewport},
    vec3,
};
use crate::util::buf::Buf2;

use super::{
    Backend, Stats, Topology,
    clip::{ClipVert, clip_tri},
    fog::{Fog, FogMode, FogSource, Hint},
    raster::{ScreenVert, tri_fill},
};

/// A vertex as submitted, with the current state latched in.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Vertex {
    pos: Point3,
    color: Color4f,
    fog_coord: f32,
}

/// The attributes interpolated across a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Varying {
    pub color: Color4f,
    /// The explicit fog coordinate.
    pub fog_coord: f32,
    /// Distance from the eye plane, positive in front of the camera.
    pub depth: f32,
}

/// Software renderer drawing into a pair of ARGB color buffers.
///
/// Geometry is drawn into the back buffer; [`swap_buffers`] makes it the
/// front buffer, which the platform presents. There is no depth buffer,
/// primitives are drawn in submission order.
///
/// [`swap_buffers`]: Backend::swap_buffers
#[derive(Clone, Debug)]
pub struct Immediate {
    back: Buf2<u32>,
    front: Buf2<u32>,

    clear_color: Color4f,
    color: Color4f,
    fog_coord: f32,
    /// The current fog parameters.
    pub fog: Fog,

    projection: Mat4x4,
    modelview: Mat4x4,
    viewport: Mat4x4,

    batch: Option<Topology>,
    verts: Vec<Vertex>,
    clipped: Vec<[ClipVert<Varying>; 3]>,

    /// Statistics collected since creation.
    pub stats: Stats,
}

impl Immediate {
    /// Creates a renderer with color buffers of the given size.
    ///
    /// The viewport initially covers the whole buffer, and the projection
    /// and view transforms are identity.
    pub fn new((w, h): (u32, u32)) -> Self {
        Self {
            back: Buf2::new((w, h)),
            front: Buf2::new((w, h)),
            clear_color: Color4f::BLACK,
            color: Color4f::WHITE,
            fog_coord: 0.0,
            fog: Fog::default(),
            projection: Mat4x4::identity(),
            modelview: Mat4x4::identity(),
            viewport: viewport(w, h),
            batch: None,
            verts: Vec::new(),
            clipped: Vec::new(),
            stats: Stats::new(),
        }
    }

    /// Reallocates both color buffers to the new size.
    ///
    /// The contents are discarded. The viewport is left unchanged.
    pub fn resize(&mut self, dims: (u32, u32)) {
        if dims == self.back.dims() {
            return;
        }
        log::debug!("resizing color buffers to {}x{}", dims.0, dims.1);
        self.back = Buf2::new(dims);
        self.front = Buf2::new(dims);
    }

    /// Returns the size of the color buffers.
    pub fn dims(&self) -> (u32, u32) {
        self.back.dims()
    }

    /// Returns the buffer most recently presented by `swap_buffers`.
    pub fn front_buffer(&self) -> &Buf2<u32> {
        &self.front
    }

    /// Returns the buffer currently being drawn into.
    pub fn back_buffer(&self) -> &Buf2<u32> {
        &self.back
    }

    pub fn projection(&self) -> &Mat4x4 {
        &self.projection
    }

    pub fn modelview(&self) -> &Mat4x4 {
        &self.modelview
    }

    fn draw_tri(&mut self, tri: [Vertex; 3]) {
        self.stats.prims.i += 1;
        self.stats.verts.i += 3;

        let (mv, proj) = (&self.modelview, &self.projection);
        let clip_verts = tri.map(|v| {
            let eye = mv.apply(&v.pos);
            ClipVert {
                pos: proj.apply4(&eye.to_vec4(1.0)),
                attrib: Varying {
                    color: v.color,
                    fog_coord: v.fog_coord,
                    depth: -eye.z(),
                },
            }
        });
        self.clipped.clear();
        clip_tri(clip_verts, &mut self.clipped);

        let Self { back, clipped, fog, viewport, stats, .. } = self;
        for tri in clipped.drain(..) {
            stats.prims.o += 1;
            stats.verts.o += 3;

            let verts = tri.map(|v| {
                let w = v.pos.w();
                let [x, y, _] = viewport.apply(&v.pos.project_to_real()).0;
                ScreenVert {
                    pos: vec3(x, y, w.recip()),
                    var: v.attrib.z_div(w),
                }
            });
            tri_fill(verts, back.dims(), |frag| {
                let var = frag.var;
                let c = match fog.source {
                    FogSource::Coordinate => var.fog_coord,
                    FogSource::FragmentDepth => var.depth,
                };
                back[[frag.x, frag.y]] = fog.apply(var.color, c).to_argb_u32();
                stats.frags.i += 1;
                stats.frags.o += 1;
            });
        }
    }
}

impl Backend for Immediate {
    fn set_fog_enabled(&mut self, enabled: bool) {
        self.fog.enabled = enabled;
    }
    fn set_fog_mode(&mut self, mode: FogMode) {
        self.fog.mode = mode;
    }
    fn set_fog_color(&mut self, color: Color4f) {
        self.fog.color = color;
    }
    fn set_fog_density(&mut self, density: f32) {
        self.fog.density = density;
    }
    fn set_fog_hint(&mut self, hint: Hint) {
        self.fog.hint = hint;
    }
    fn set_fog_source(&mut self, source: FogSource) {
        self.fog.source = source;
    }

    fn set_clear_color(&mut self, color: Color4f) {
        self.clear_color = color;
    }
    fn clear(&mut self) {
        self.back.fill(self.clear_color.to_argb_u32());
        self.stats.clears += 1;
    }

    fn set_color(&mut self, color: Color4f) {
        self.color = color;
    }
    fn fog_coord(&mut self, coord: f32) {
        self.fog_coord = coord;
    }

    fn begin(&mut self, topology: Topology) {
        if let Some(current) = self.batch {
            log::warn!("begin({topology:?}) inside a {current:?} batch, ignored");
            return;
        }
        self.batch = Some(topology);
        self.verts.clear();
    }

    fn vertex(&mut self, pos: Point3) {
        if self.batch.is_none() {
            log::warn!("vertex {pos:?} outside a batch, ignored");
            return;
        }
        self.verts.push(Vertex {
            pos,
            color: self.color,
            fog_coord: self.fog_coord,
        });
    }

    fn end(&mut self) {
        let Some(Topology::Triangles) = self.batch.take() else {
            log::warn!("end() without begin(), ignored");
            return;
        };
        let verts = core::mem::take(&mut self.verts);
        for tri in verts.chunks_exact(3) {
            self.draw_tri([tri[0], tri[1], tri[2]]);
        }
        self.verts = verts;
    }

    fn viewport(&mut self, width: u32, height: u32) {
        self.viewport = viewport(width, height);
    }
    fn perspective(&mut self, fov_y: f32, aspect: f32, near_far: Range<f32>) {
        self.projection = perspective(fov_y, aspect, near_far);
    }
    fn load_identity(&mut self) {
        self.modelview = Mat4x4::identity();
    }
    fn translate(&mut self, t: Vec3) {
        // Post-multiply: the new translation applies to vertices first
        self.modelview = translate(t).then(&self.modelview);
    }

    fn swap_buffers(&mut self) {
        core::mem::swap(&mut self.back, &mut self.front);
        self.stats.frames += 1;
        log::trace!("frame {} presented", self.stats.frames);
    }
}

impl Lerp for Varying {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            color: self.color.lerp(&other.color, t),
            fog_coord: self.fog_coord.lerp(&other.fog_coord, t),
            depth: self.depth.lerp(&other.depth, t),
        }
    }
}

impl ZDiv for Varying {
    fn z_div(self, z: f32) -> Self {
        Self {
            color: self.color.z_div(z),
            fog_coord: self.fog_coord.z_div(z),
            depth: self.depth.z_div(z),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_4;

    use crate::assert_approx_eq;
    use crate::math::{rgb, vec3};

    use super::*;

    const ORANGE: Color4f = rgb(1.0, 0.75, 0.0);
    const TEAL: Color4f = rgb(0.0, 0.25, 0.25);

    fn fogged(source: FogSource) -> Immediate {
        let mut imm = Immediate::new((4, 4));
        imm.set_fog_enabled(true);
        imm.set_fog_mode(FogMode::Exp);
        imm.set_fog_color(TEAL);
        imm.set_fog_density(0.25);
        imm.set_fog_source(source);
        imm.set_clear_color(TEAL);
        imm
    }

    // Draws a quad covering the whole viewport at depth `-z`, with
    // identity projection and view
    fn full_quad(imm: &mut impl Backend, z: f32) {
        let [a, b, c, d] = [
            vec3(-1.0, -1.0, z),
            vec3(1.0, -1.0, z),
            vec3(1.0, 1.0, z),
            vec3(-1.0, 1.0, z),
        ];
        imm.begin(Topology::Triangles);
        for v in [a, b, c, a, c, d] {
            imm.vertex(v);
        }
        imm.end();
    }

    #[test]
    fn clear_fills_back_buffer_only() {
        let mut imm = fogged(FogSource::Coordinate);
        imm.clear();
        let teal = TEAL.to_argb_u32();
        assert!(imm.back_buffer().data().iter().all(|&c| c == teal));
        assert!(imm.front_buffer().data().iter().all(|&c| c == 0));
        assert_eq!(imm.stats.clears, 1);
    }

    #[test]
    fn swap_buffers_presents_back_buffer() {
        let mut imm = fogged(FogSource::Coordinate);
        imm.clear();
        imm.swap_buffers();
        let teal = TEAL.to_argb_u32();
        assert!(imm.front_buffer().data().iter().all(|&c| c == teal));
        assert_eq!(imm.stats.frames, 1);
    }

    #[test]
    fn explicit_fog_coordinate() {
        let mut imm = fogged(FogSource::Coordinate);
        imm.set_color(ORANGE);
        imm.fog_coord(4.0);
        full_quad(&mut imm, 0.0);

        let expected = imm.fog.apply(ORANGE, 4.0).to_argb_u32();
        assert_ne!(expected, ORANGE.to_argb_u32());
        assert!(imm.back_buffer().data().iter().all(|&c| c == expected));
        assert_eq!(imm.stats.frags.o, 16);
    }

    #[test]
    fn fog_coordinate_is_latched_per_vertex() {
        let mut imm = fogged(FogSource::Coordinate);
        imm.begin(Topology::Triangles);
        imm.fog_coord(1.0);
        imm.vertex(vec3(-1.0, -1.0, 0.0));
        imm.fog_coord(5.0);
        imm.vertex(vec3(1.0, -1.0, 0.0));
        imm.fog_coord(10.0);
        imm.vertex(vec3(-1.0, 1.0, 0.0));
        imm.end();

        let verts = &imm.verts;
        assert_eq!(verts.len(), 3);
        assert_eq!([verts[0].fog_coord, verts[1].fog_coord, verts[2].fog_coord], [1.0, 5.0, 10.0]);
    }

    #[test]
    fn fragment_depth_fog_ignores_coordinate() {
        let mut imm = fogged(FogSource::FragmentDepth);
        imm.set_color(ORANGE);
        imm.fog_coord(4.0);
        full_quad(&mut imm, -0.5);

        let expected = imm.fog.apply(ORANGE, 0.5).to_argb_u32();
        let by_coord = imm.fog.apply(ORANGE, 4.0).to_argb_u32();
        assert_ne!(expected, by_coord);
        assert!(imm.back_buffer().data().iter().all(|&c| c == expected));
    }

    #[test]
    fn disabled_fog_draws_plain_color() {
        let mut imm = fogged(FogSource::Coordinate);
        imm.set_fog_enabled(false);
        imm.set_color(ORANGE);
        imm.fog_coord(100.0);
        full_quad(&mut imm, 0.0);

        let orange = ORANGE.to_argb_u32();
        assert!(imm.back_buffer().data().iter().all(|&c| c == orange));
    }

    #[test]
    fn leftover_vertices_are_dropped() {
        let mut imm = Immediate::new((4, 4));
        imm.begin(Topology::Triangles);
        for x in [0.0, 0.5, 0.0, 0.5] {
            imm.vertex(vec3(x, x, 0.0));
        }
        imm.end();
        assert_eq!(imm.stats.prims.i, 1);
    }

    #[test]
    fn vertices_outside_batch_are_ignored() {
        let mut imm = Immediate::new((4, 4));
        imm.vertex(vec3(0.0, 0.0, 0.0));
        imm.end();
        imm.begin(Topology::Triangles);
        imm.begin(Topology::Triangles);
        imm.vertex(vec3(0.0, 0.0, 0.0));
        imm.end();
        assert_eq!(imm.stats.prims.i, 0);
        assert_eq!(imm.verts.len(), 1);
    }

    #[test]
    fn translations_accumulate() {
        let mut imm = Immediate::new((4, 4));
        imm.load_identity();
        imm.translate(vec3(0.0, 0.0, -5.0));
        imm.translate(vec3(1.0, 0.0, 0.25));
        assert_approx_eq!(
            imm.modelview().apply(&vec3(0.0, 0.0, 0.0)),
            vec3(1.0, 0.0, -4.75)
        );
        imm.load_identity();
        assert_eq!(imm.modelview(), &Mat4x4::identity());
    }

    #[test]
    fn geometry_behind_camera_is_not_drawn() {
        let mut imm = fogged(FogSource::FragmentDepth);
        imm.perspective(FRAC_PI_4, 1.0, 0.25..25.0);
        imm.clear();
        full_quad(&mut imm, 5.0);

        assert_eq!(imm.stats.prims.o, 0);
        let teal = TEAL.to_argb_u32();
        assert!(imm.back_buffer().data().iter().all(|&c| c == teal));
    }

    #[test]
    fn resize_reallocates_buffers() {
        let mut imm = Immediate::new((4, 4));
        imm.resize((8, 2));
        assert_eq!(imm.dims(), (8, 2));
        assert_eq!(imm.front_buffer().dims(), (8, 2));
    }
}
