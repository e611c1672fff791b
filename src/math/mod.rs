/// Math helpers shared by the color model.
///
/// - `math3d`: 3-component vectors and 3×3 matrices (sRGB ⇄ XYZ transforms)
/// - `utils`: clamping, interpolation, angle wrapping, hex and percent coding

pub mod math3d;
pub mod utils;

/// 3-component vector with f64 precision.
///
/// Used for tristimulus values and linearized RGB triplets.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn from_array(v: [f64; 3]) -> Self {
        Self { x: v[0], y: v[1], z: v[2] }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Row-major 3×3 matrix.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Matrix3 {
    pub m: [[f64; 3]; 3],
}
