//! Draw commands, separating what to draw from drawing it.

use core::ops::Range;

use fc::math::{Color4f, Point3, Vec3};
use fc::render::{
    Backend, Topology,
    fog::{FogMode, FogSource, Hint},
};

/// A single call to a rendering [`Backend`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    EnableFog(bool),
    FogMode(FogMode),
    FogColor(Color4f),
    FogDensity(f32),
    FogHint(Hint),
    FogSource(FogSource),
    ClearColor(Color4f),

    Viewport(u32, u32),
    /// Perspective projection; `fov_y` in radians.
    Perspective {
        fov_y: f32,
        aspect: f32,
        near_far: Range<f32>,
    },
    LoadIdentity,
    Translate(Vec3),

    Clear,
    Color(Color4f),
    Begin(Topology),
    FogCoord(f32),
    Vertex(Point3),
    End,
    SwapBuffers,
}

/// Executes `cmds` in order against `backend`.
pub fn execute(cmds: &[Command], backend: &mut impl Backend) {
    log::trace!("executing {} commands", cmds.len());
    for cmd in cmds {
        match cmd {
            Command::EnableFog(on) => backend.set_fog_enabled(*on),
            Command::FogMode(mode) => backend.set_fog_mode(*mode),
            Command::FogColor(c) => backend.set_fog_color(*c),
            Command::FogDensity(d) => backend.set_fog_density(*d),
            Command::FogHint(h) => backend.set_fog_hint(*h),
            Command::FogSource(src) => backend.set_fog_source(*src),
            Command::ClearColor(c) => backend.set_clear_color(*c),

            Command::Viewport(w, h) => backend.viewport(*w, *h),
            Command::Perspective { fov_y, aspect, near_far } => {
                backend.perspective(*fov_y, *aspect, near_far.clone())
            }
            Command::LoadIdentity => backend.load_identity(),
            Command::Translate(t) => backend.translate(*t),

            Command::Clear => backend.clear(),
            Command::Color(c) => backend.set_color(*c),
            Command::Begin(topo) => backend.begin(*topo),
            Command::FogCoord(c) => backend.fog_coord(*c),
            Command::Vertex(v) => backend.vertex(*v),
            Command::End => backend.end(),
            Command::SwapBuffers => backend.swap_buffers(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use fc::math::{rgb, vec3};

    use super::*;

    /// A fake backend that records every call it receives as a command.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder(pub Vec<Command>);

    impl Backend for Recorder {
        fn set_fog_enabled(&mut self, on: bool) {
            self.0.push(Command::EnableFog(on));
        }
        fn set_fog_mode(&mut self, mode: FogMode) {
            self.0.push(Command::FogMode(mode));
        }
        fn set_fog_color(&mut self, c: Color4f) {
            self.0.push(Command::FogColor(c));
        }
        fn set_fog_density(&mut self, d: f32) {
            self.0.push(Command::FogDensity(d));
        }
        fn set_fog_hint(&mut self, h: Hint) {
            self.0.push(Command::FogHint(h));
        }
        fn set_fog_source(&mut self, src: FogSource) {
            self.0.push(Command::FogSource(src));
        }
        fn set_clear_color(&mut self, c: Color4f) {
            self.0.push(Command::ClearColor(c));
        }
        fn clear(&mut self) {
            self.0.push(Command::Clear);
        }
        fn set_color(&mut self, c: Color4f) {
            self.0.push(Command::Color(c));
        }
        fn fog_coord(&mut self, c: f32) {
            self.0.push(Command::FogCoord(c));
        }
        fn begin(&mut self, topo: Topology) {
            self.0.push(Command::Begin(topo));
        }
        fn vertex(&mut self, v: Point3) {
            self.0.push(Command::Vertex(v));
        }
        fn end(&mut self) {
            self.0.push(Command::End);
        }
        fn viewport(&mut self, w: u32, h: u32) {
            self.0.push(Command::Viewport(w, h));
        }
        fn perspective(&mut self, fov_y: f32, aspect: f32, near_far: Range<f32>) {
            self.0.push(Command::Perspective { fov_y, aspect, near_far });
        }
        fn load_identity(&mut self) {
            self.0.push(Command::LoadIdentity);
        }
        fn translate(&mut self, t: Vec3) {
            self.0.push(Command::Translate(t));
        }
        fn swap_buffers(&mut self) {
            self.0.push(Command::SwapBuffers);
        }
    }

    #[test]
    fn execute_preserves_order() {
        let cmds = [
            Command::FogSource(FogSource::Coordinate),
            Command::Clear,
            Command::Color(rgb(1.0, 0.75, 0.0)),
            Command::Begin(Topology::Triangles),
            Command::FogCoord(1.0),
            Command::Vertex(vec3(2.0, -2.0, 0.0)),
            Command::End,
            Command::Perspective { fov_y: 0.5, aspect: 2.0, near_far: 1.0..2.0 },
            Command::SwapBuffers,
        ];
        let mut rec = Recorder::default();
        execute(&cmds, &mut rec);
        assert_eq!(rec.0, cmds);
    }

    #[test]
    fn execute_nothing() {
        let mut rec = Recorder::default();
        execute(&[], &mut rec);
        assert!(rec.0.is_empty());
    }
}
