//! Double-precision 3D vector used for positions, velocities and forces

use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// One of the three world axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0, 1 or 2)
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// 3D vector with `f64` components
///
/// A plain value type: every operation returns a new vector, and single components are
/// replaced through the `with_*` constructors rather than mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Copy of this vector with `x` replaced
    #[inline]
    pub const fn with_x(self, x: f64) -> Self {
        Self::new(x, self.y, self.z)
    }

    /// Copy of this vector with `y` replaced
    #[inline]
    pub const fn with_y(self, y: f64) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Copy of this vector with `z` replaced
    #[inline]
    pub const fn with_z(self, z: f64) -> Self {
        Self::new(self.x, self.y, z)
    }

    /// Component along `axis`
    #[inline]
    pub const fn axis(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this vector with the component along `axis` replaced
    #[inline]
    pub const fn with_axis(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.with_x(value),
            Axis::Y => self.with_y(value),
            Axis::Z => self.with_z(value),
        }
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise product
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize, returning zero if length is too small
    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > f64::EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// Sum of the three components
    #[inline]
    pub fn component_sum(self) -> f64 {
        self.x + self.y + self.z
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl core::iter::Sum for Vec3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> core::iter::Sum<&'a Vec3> for Vec3 {
    fn sum<I: Iterator<Item = &'a Vec3>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}
impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}
impl Mul<f64> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f64) -> Self { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}
impl Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z) }
}
impl Div<f64> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f64) -> Self { Self::new(self.x / rhs, self.y / rhs, self.z / rhs) }
}
impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}
impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl MulAssign<f64> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f64) { *self = *self * rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_add_and_scale() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(0.5 * b, Vec3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_with_axis_leaves_source_untouched() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = v.with_axis(Axis::Y, -7.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(w, Vec3::new(1.0, -7.0, 3.0));
        assert_eq!(w[Axis::Y], -7.0);
        assert_eq!(w.axis(Axis::Z), 3.0);
    }

    #[test]
    fn test_vec3_sum() {
        let forces = [Vec3::X, Vec3::Y, Vec3::new(0.5, 0.5, 2.0)];
        let total: Vec3 = forces.iter().sum();
        assert_eq!(total, Vec3::new(1.5, 1.5, 2.0));

        let empty: [Vec3; 0] = [];
        assert_eq!(empty.iter().sum::<Vec3>(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        let n = Vec3::new(3.0, 0.0, 4.0).normalize_or_zero();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }
}
