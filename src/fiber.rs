//! Fiber - a discrete area element within a cross-section

use serde::{Deserialize, Serialize};

use crate::error::SectionResult;
use crate::materials::UniaxialMaterial;
use crate::math::Vec3;

/// A discrete area element of a cross-section
///
/// Geometry (local position and area) is fixed at rasterization time; the
/// owned material carries the mutable strain history. Position is measured
/// in the section's local (y, z) frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fiber {
    /// Local y coordinate
    pub y: f64,
    /// Local z coordinate
    pub z: f64,
    /// Fiber area (positive)
    pub area: f64,
    /// Owned uniaxial material state
    pub material: UniaxialMaterial,
}

impl Fiber {
    /// Create a new fiber at (y, z) with the given area and material
    pub fn new(y: f64, z: f64, area: f64, material: UniaxialMaterial) -> Self {
        Self {
            y,
            z,
            area,
            material,
        }
    }

    /// Local strain at this fiber's position under a flexural section
    /// deformation (ε0, κy, κz), by plane-section kinematics:
    /// ε(y, z) = ε0 − z·κy + y·κz
    pub fn strain_at(&self, deformation: &Vec3) -> f64 {
        deformation[0] - self.z * deformation[1] + self.y * deformation[2]
    }

    /// Impose the section deformation on this fiber's material
    pub fn set_trial(&mut self, deformation: &Vec3) -> SectionResult<()> {
        let strain = self.strain_at(deformation);
        self.material.set_trial_strain(strain)
    }

    /// Fiber stress at the current trial state
    pub fn stress(&self) -> f64 {
        self.material.stress()
    }

    /// Fiber axial force (stress times area)
    pub fn force(&self) -> f64 {
        self.material.stress() * self.area
    }

    /// Tangent modulus at the current trial state
    pub fn tangent(&self) -> f64 {
        self.material.tangent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_section_kinematics() {
        let fiber = Fiber::new(0.5, -0.25, 0.01, UniaxialMaterial::elastic(1.0));
        // eps0 = 1e-3, kappa_y = 2e-3, kappa_z = 4e-3
        let def = Vec3::new(1e-3, 2e-3, 4e-3);
        // eps = 1e-3 - (-0.25)(2e-3) + (0.5)(4e-3)
        assert_relative_eq!(fiber.strain_at(&def), 3.5e-3, max_relative = 1e-12);
    }

    #[test]
    fn test_force_is_stress_times_area() {
        let mut fiber = Fiber::new(0.0, 0.0, 2.0, UniaxialMaterial::elastic(100.0));
        fiber.set_trial(&Vec3::new(0.01, 0.0, 0.0)).unwrap();
        assert_relative_eq!(fiber.force(), 2.0, max_relative = 1e-12);
    }
}
