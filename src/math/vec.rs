use std::fmt;
use std::ops::{Add, Mul, Sub};

/*
Requirements for Memory Compatibility with WGPU:
   1. Standard layout (like C structs).
   2. Alignment that matches WGSL expectations.
   3. Sized correctly for GPU buffers.
   4. Can be safely cast to [f32; N] or bytes.
*/

/// Homogeneous 4-component vector.
///
/// `Vec4` doubles as a point (`w = 1`), a direction (`w = 0`), and an
/// incidental 3-or-4-tuple carrier; nothing at the type level distinguishes
/// the cases, so callers pick `w` to match the transform they intend.
///
/// Every operation returns a new vector; values are never mutated in place.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec4([f32; 4]);

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vec4([x, y, z, w])
    }

    /// A position vector, with `w` set to 1 so translations apply.
    pub fn point(x: f32, y: f32, z: f32) -> Self {
        Vec4([x, y, z, 1.0])
    }

    /// A direction vector, with `w` set to 0 so translations are ignored.
    pub fn direction(x: f32, y: f32, z: f32) -> Self {
        Vec4([x, y, z, 0.0])
    }

    /// Returns this vector scaled by the given scalar.
    pub fn scaled(&self, scalar: f32) -> Self {
        Vec4([
            self.x() * scalar,
            self.y() * scalar,
            self.z() * scalar,
            self.w() * scalar,
        ])
    }

    /// Returns the dot product of this vector and `other`, over all four
    /// components.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Returns the 4-D Euclidean length of this vector.
    pub fn length(&self) -> f32 {
        (self.x().powi(2) + self.y().powi(2) + self.z().powi(2) + self.w().powi(2)).sqrt()
    }

    /// Returns a normalized copy of this vector.
    ///
    /// The zero vector has no direction; normalizing it produces NaN
    /// components. Callers are responsible for not passing zero-length
    /// vectors.
    pub fn norm(&self) -> Self {
        let length = self.length();
        Vec4([
            self.x() / length,
            self.y() / length,
            self.z() / length,
            self.w() / length,
        ])
    }

    /// Returns the component-wise sum of this vector and `other`.
    pub fn add(&self, other: &Self) -> Self {
        Vec4([
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
            self.w() + other.w(),
        ])
    }

    /// Returns the component-wise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scaled(-1.0))
    }

    /// Returns the 3-component cross product of this vector and `other`.
    ///
    /// The `w` components of both inputs are ignored; the result has `w = 0`
    /// (a direction).
    pub fn cross(&self, other: &Self) -> Self {
        Vec4([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
            0.0,
        ])
    }

    /// Returns the unnormalized face normal of the triangle `(p0, p1, p2)`,
    /// computed as `(p1 - p0) × (p2 - p0)`.
    ///
    /// Winding order determines the sign; callers normalize as needed.
    pub fn normal_of_triangle(p0: &Vec4, p1: &Vec4, p2: &Vec4) -> Vec4 {
        p1.sub(p0).cross(&p2.sub(p0))
    }

    pub fn as_array(&self) -> &[f32; 4] {
        &self.0
    }
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    pub fn z(&self) -> f32 {
        self.0[2]
    }
    pub fn w(&self) -> f32 {
        self.0[3]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(values: [f32; 4]) -> Self {
        Vec4(values)
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(vec: Vec4) -> Self {
        vec.0
    }
}

impl Add for Vec4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vec4::add(&self, &other)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vec4::sub(&self, &other)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        self.scaled(scalar)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} {} {} {} ]", self.x(), self.y(), self.z(), self.w())
    }
}
