//! Fog: blending fragments towards a fixed color with distance.
//!
//! The fog equations take a scalar distance `c`, either an explicit fog
//! coordinate interpolated from the vertices or the eye-space depth of the
//! fragment, and compute a blend factor `f` clamped to `0.0..=1.0`. The
//! fogged color is then `f * frag_color + (1 - f) * fog_color`, so `f = 1`
//! means no fog at all.

use crate::math::Color4f;

/// The fog falloff equation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FogMode {
    /// `f = (end - c) / (end - start)`
    Linear { start: f32, end: f32 },
    /// `f = exp(-density * c)`
    Exp,
    /// `f = exp(-(density * c)²)`
    Exp2,
}

/// Where the distance fed to the fog equation comes from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FogSource {
    /// The explicit fog coordinate given with each vertex.
    Coordinate,
    /// The eye-space depth of each fragment.
    #[default]
    FragmentDepth,
}

/// Quality hint for fog computation.
///
/// The software renderer always evaluates fog per fragment, so the hint
/// is recorded but does not change the output.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Hint {
    #[default]
    DontCare,
    Fastest,
    Nicest,
}

/// Fog parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fog {
    pub enabled: bool,
    pub mode: FogMode,
    pub color: Color4f,
    pub density: f32,
    pub source: FogSource,
    pub hint: Hint,
}

impl Fog {
    /// Returns the blend factor for the distance `c`.
    ///
    /// Only the magnitude of `c` matters. Returns 1.0 for no fog and 0.0
    /// for full fog.
    pub fn factor(&self, c: f32) -> f32 {
        use crate::math::float::f32;
        let c = if c < 0.0 { -c } else { c };
        let f = match self.mode {
            FogMode::Exp => f32::exp(-self.density * c),
            FogMode::Exp2 => {
                let dc = self.density * c;
                f32::exp(-dc * dc)
            }
            FogMode::Linear { start, end } if start == end => {
                if c < end { 1.0 } else { 0.0 }
            }
            FogMode::Linear { start, end } => (end - c) / (end - start),
        };
        f.clamp(0.0, 1.0)
    }

    /// Returns `color` fogged according to the distance `c`.
    ///
    /// If fog is disabled, returns `color` unchanged. The alpha component
    /// is never affected.
    pub fn apply(&self, color: Color4f, c: f32) -> Color4f {
        if !self.enabled {
            return color;
        }
        color.mix_rgb(self.color, 1.0 - self.factor(c))
    }
}

impl Default for Fog {
    /// Returns the default fog parameters.
    ///
    /// The default values are:
    /// * Enabled: false
    /// * Mode:    Exp
    /// * Color:   Transparent black
    /// * Density: 1.0
    /// * Source:  Fragment depth
    /// * Hint:    Don't care
    fn default() -> Self {
        Self {
            enabled: false,
            mode: FogMode::Exp,
            color: Color4f([0.0; 4]),
            density: 1.0,
            source: FogSource::default(),
            hint: Hint::default(),
        }
    }
}
