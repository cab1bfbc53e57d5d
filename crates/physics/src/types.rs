use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Elementwise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[must_use]
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }

    #[must_use]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    #[must_use]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Applies `f` to every component.
    #[must_use]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Rigid-body configuration: world position followed by Euler angles
/// (roll, pitch, yaw) in radians.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pose {
    pub position: Vec3,
    pub angles: Vec3,
}

impl Pose {
    /// Number of scalars in a flattened pose.
    pub const LEN: usize = 6;

    #[must_use]
    pub const fn new(position: Vec3, angles: Vec3) -> Self {
        Self { position, angles }
    }

    #[must_use]
    pub fn from_array(a: [f32; 6]) -> Self {
        bytemuck::cast(a)
    }

    /// `[x, y, z, roll, pitch, yaw]`
    #[must_use]
    pub fn to_array(self) -> [f32; 6] {
        bytemuck::cast(self)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions() {
        let v = Vec3::new(-2.0, 5.0, 1.0);
        assert_eq!(v.abs(), Vec3::new(2.0, 5.0, 1.0));
        assert_eq!(v.sum(), 4.0);
        assert_eq!(v.min_element(), -2.0);
        assert_eq!(v.max_element(), 5.0);
    }

    #[test]
    fn pose_flattens_position_first() {
        let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(pose.to_array(), [1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
        assert_eq!(pose.as_slice(), &pose.to_array()[..]);
        assert_eq!(Pose::from_array(pose.to_array()), pose);
    }
}
