//! Geometry payloads and the curve collaborator contract.
//!
//! The topology network itself carries no curve mathematics; vertices hold a
//! [`Point3`] position and edges may hold a curve payload implementing
//! [`CurveGeometry`]. Concrete curve types live with the geometry subsystem of
//! the embedding application; [`LineSegment`] is provided as the simplest
//! concrete variant and as the payload used throughout the tests.

use std::fmt;

/// A position in 3-space, the payload of a vertex.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Contract every concrete curve payload must satisfy.
///
/// Edge value equality compares endpoints *and* delegates to
/// `compare_geometry`; the network never inspects the curve beyond this call.
pub trait CurveGeometry {
    /// `true` iff `self` and `other` describe the same point set.
    fn compare_geometry(&self, other: &Self) -> bool;
}

/// Curve-less networks: every pair of `()` payloads compares equal.
impl CurveGeometry for () {
    #[inline]
    fn compare_geometry(&self, _other: &Self) -> bool {
        true
    }
}

/// Straight segment between two points, the minimal concrete curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    pub p0: Point3,
    pub p1: Point3,
}

impl LineSegment {
    #[inline]
    pub const fn new(p0: Point3, p1: Point3) -> Self {
        LineSegment { p0, p1 }
    }
}

impl CurveGeometry for LineSegment {
    fn compare_geometry(&self, other: &Self) -> bool {
        // Direction is part of edge identity, so no reversed match here.
        self.p0 == other.p0 && self.p1 == other.p1
    }
}
