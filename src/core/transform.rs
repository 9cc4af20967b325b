//! Homogeneous transform application.

use nalgebra::{Matrix4, Point3};

/// Apply a 4x4 homogeneous transform to a 3D point.
///
/// The point is lifted to `[x, y, z, 1]`, multiplied by the matrix, and the
/// xyz of the product is taken. No perspective divide is performed; for the
/// rigid transforms produced by a registration search the w component is 1.
#[inline]
pub fn transform_point(mat: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
    Point3::from((mat * point.to_homogeneous()).xyz())
}

/// Apply a 4x4 homogeneous transform to every point of a cloud.
pub fn transform_cloud(mat: &Matrix4<f32>, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
    points.iter().map(|p| transform_point(mat, p)).collect()
}
