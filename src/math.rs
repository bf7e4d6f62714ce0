//! Mathematical utilities for section integration

use nalgebra::{DMatrix, DVector, Matrix3, Matrix6, Vector3, Vector6};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 3x3 flexural tangent block (N, My, Mz)
pub type Mat3 = Matrix3<f64>;
/// 3-element flexural deformation/resultant vector
pub type Vec3 = Vector3<f64>;
/// 6x6 generalized section tangent
pub type Mat6 = Matrix6<f64>;
/// 6-element generalized deformation/resultant vector
pub type Vec6 = Vector6<f64>;

/// Solve a dense linear system A * x = b via LU decomposition.
///
/// Returns `None` if the matrix is singular to working precision.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    let lu = a.clone().lu();
    lu.solve(b)
}
