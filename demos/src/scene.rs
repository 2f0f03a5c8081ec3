//! The scene controller: fog parameters, fog source mode, and camera.
//!
//! The controller never talks to a backend directly. Each operation
//! returns the list of [`Command`]s to execute, so the decisions can be
//! tested without a rendering context.

use core::f32::consts::FRAC_PI_4;
use core::ops::Range;

use fc::math::{Color4f, Point3, Vec3, rgb, rgba, vec3};
use fc::render::{
    Backend, Topology,
    fog::{FogMode, FogSource, Hint},
};
use fc_front::{App, Key, Reply, dims::Dims};

use crate::cmd::{Command, execute};

/// Amount by which each key press changes a fog coordinate or the camera.
pub const STEP: f32 = 0.25;

/// The fog color, also used as the background so that fully fogged
/// geometry disappears into it.
pub const FOG_COLOR: Color4f = rgba(0.0, 0.25, 0.25, 1.0);
pub const FOG_DENSITY: f32 = 0.25;

pub const TRIANGLE_COLOR: Color4f = rgb(1.0, 0.75, 0.0);
/// The triangle, in model space. Vertex `i` uses fog coordinate `i`.
pub const TRIANGLE: [Point3; 3] = [
    vec3(2.0, -2.0, 0.0),
    vec3(-2.0, 0.0, -5.0),
    vec3(0.0, 2.0, -10.0),
];

/// Vertical field of view, 45 degrees.
pub const FOV_Y: f32 = FRAC_PI_4;
pub const NEAR_FAR: Range<f32> = 0.25..25.0;

/// The explicit fog coordinates of the three triangle vertices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FogCoords(pub [f32; 3]);

/// Where the fog distance comes from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FogSourceMode {
    /// Fog is driven by the per-vertex [`FogCoords`].
    #[default]
    ExplicitCoordinate,
    /// Fog is driven by the eye-space depth of each fragment.
    DepthDerived,
}

/// The viewer, pulled back from the origin along the z axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// Accumulated movement towards the scene. Negative values move
    /// further away.
    pub offset: f32,
}

/// The state of the demo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub fog_coords: FogCoords,
    pub mode: FogSourceMode,
    pub camera: Camera,
}

impl FogCoords {
    pub const INITIAL: Self = Self([1.0, 5.0, 10.0]);

    /// Values are never lowered to or below this.
    pub const FLOOR: f32 = 0.25;

    /// Raises coordinate `i` by one step. There is no upper bound.
    pub fn raise(&mut self, i: usize) {
        self.0[i] += STEP;
    }

    /// Lowers coordinate `i` by one step, unless that would take it to or
    /// below [`FLOOR`][Self::FLOOR]. Returns whether the value changed.
    pub fn lower(&mut self, i: usize) -> bool {
        let lowered = self.0[i] - STEP;
        if lowered > Self::FLOOR {
            self.0[i] = lowered;
            true
        } else {
            false
        }
    }
}

impl Default for FogCoords {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl FogSourceMode {
    /// Returns the backend fog source corresponding to `self`.
    pub fn fog_source(self) -> FogSource {
        match self {
            Self::ExplicitCoordinate => FogSource::Coordinate,
            Self::DepthDerived => FogSource::FragmentDepth,
        }
    }
}

impl Camera {
    /// Distance from the origin when `offset` is zero.
    pub const BASE_DISTANCE: f32 = 5.0;

    pub fn forward(&mut self) {
        self.offset += STEP;
    }

    pub fn backward(&mut self) {
        self.offset -= STEP;
    }

    /// Returns the view translation.
    pub fn translation(&self) -> Vec3 {
        vec3(0.0, 0.0, self.offset - Self::BASE_DISTANCE)
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the one-time backend configuration: exponential fog in
    /// the fog color, and a matching background.
    pub fn init_commands(&self) -> Vec<Command> {
        vec![
            Command::EnableFog(true),
            Command::FogMode(FogMode::Exp),
            Command::FogColor(FOG_COLOR),
            Command::FogDensity(FOG_DENSITY),
            Command::FogHint(Hint::DontCare),
            Command::FogSource(self.mode.fog_source()),
            Command::ClearColor(FOG_COLOR),
        ]
    }

    /// Returns the commands that adapt the projection and view to a
    /// `width` × `height` surface. Both must be nonzero.
    pub fn reshape(&self, width: u32, height: u32) -> Vec<Command> {
        vec![
            Command::Viewport(width, height),
            Command::Perspective {
                fov_y: FOV_Y,
                aspect: width as f32 / height as f32,
                near_far: NEAR_FAR,
            },
            Command::LoadIdentity,
            Command::Translate(self.camera.translation()),
        ]
    }

    /// Returns the commands that draw and present a complete frame.
    ///
    /// In explicit coordinate mode each vertex is immediately preceded by
    /// its fog coordinate; in depth mode no fog coordinates are sent.
    pub fn frame(&self) -> Vec<Command> {
        let mut cmds = vec![
            Command::FogSource(self.mode.fog_source()),
            Command::LoadIdentity,
            Command::Translate(self.camera.translation()),
            Command::Clear,
            Command::Color(TRIANGLE_COLOR),
            Command::Begin(Topology::Triangles),
        ];
        for (pos, coord) in TRIANGLE.into_iter().zip(self.fog_coords.0) {
            if self.mode == FogSourceMode::ExplicitCoordinate {
                cmds.push(Command::FogCoord(coord));
            }
            cmds.push(Command::Vertex(pos));
        }
        cmds.extend([Command::End, Command::SwapBuffers]);
        cmds
    }

    /// Updates the state in response to a key press.
    ///
    /// Returns [`Reply::Redraw`] if the frame should be redrawn, and
    /// [`Reply::Quit`] on Esc.
    pub fn handle_key(&mut self, key: Key) -> Reply {
        let c = match key {
            Key::Escape => return Reply::Quit,
            Key::Char(c) => c,
        };
        match c {
            'c' => self.set_mode(FogSourceMode::DepthDerived),
            'C' => self.set_mode(FogSourceMode::ExplicitCoordinate),
            '1' => self.raise(0),
            '2' => self.raise(1),
            '3' => self.raise(2),
            '8' => self.lower(0),
            '9' => self.lower(1),
            '0' => self.lower(2),
            'b' => {
                self.camera.backward();
                log::debug!("camera offset {}", self.camera.offset);
                Reply::Redraw
            }
            'f' => {
                self.camera.forward();
                log::debug!("camera offset {}", self.camera.offset);
                Reply::Redraw
            }
            _ => Reply::Ignore,
        }
    }

    fn set_mode(&mut self, mode: FogSourceMode) -> Reply {
        if self.mode != mode {
            log::debug!("fog source mode {mode:?}");
        }
        self.mode = mode;
        Reply::Redraw
    }

    fn raise(&mut self, i: usize) -> Reply {
        self.fog_coords.raise(i);
        log::debug!("fog coordinates {:?}", self.fog_coords.0);
        Reply::Redraw
    }

    fn lower(&mut self, i: usize) -> Reply {
        if self.fog_coords.lower(i) {
            log::debug!("fog coordinates {:?}", self.fog_coords.0);
            Reply::Redraw
        } else {
            Reply::Ignore
        }
    }
}

impl<B: Backend> App<B> for Scene {
    fn on_init(&mut self, backend: &mut B) {
        self.fog_coords = FogCoords::INITIAL;
        self.mode = FogSourceMode::default();
        execute(&self.init_commands(), backend);
    }

    fn on_resize(&mut self, (w, h): Dims, backend: &mut B) {
        execute(&self.reshape(w, h), backend);
    }

    fn on_key(&mut self, key: Key, _pos: (f32, f32)) -> Reply {
        self.handle_key(key)
    }

    fn on_redraw(&mut self, backend: &mut B) {
        execute(&self.frame(), backend);
    }
}
