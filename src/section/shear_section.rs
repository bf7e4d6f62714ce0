//! Fiber section with independent shear and torsion responses

use serde::{Deserialize, Serialize};

use crate::error::SectionResult;
use crate::materials::UniaxialMaterial;
use crate::math::{Mat6, Vec3, Vec6};
use crate::section::fiber_section::FiberSection;

/// A 6-dof fiber section: flexure/axial from fiber integration, plus
/// uncoupled 1D response models for the two transverse shears and torsion
///
/// Generalized deformation (ε0, γy, γz, θ, κy, κz) pairs with the stress
/// resultant (N, Vy, Vz, T, My, Mz). The flexural components route to the
/// base fiber section; γy, γz and θ each drive their own uniaxial response
/// with no interaction terms, so the tangent is block-diagonal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearFiberSection {
    base: FiberSection,
    resp_vy: UniaxialMaterial,
    resp_vz: UniaxialMaterial,
    resp_t: UniaxialMaterial,
    #[serde(skip)]
    trial: Vec6,
    #[serde(skip)]
    committed: Vec6,
}

impl ShearFiberSection {
    /// Wrap a fiber section with shear-y, shear-z and torsion responses
    pub fn new(
        base: FiberSection,
        resp_vy: UniaxialMaterial,
        resp_vz: UniaxialMaterial,
        resp_t: UniaxialMaterial,
    ) -> Self {
        Self {
            base,
            resp_vy,
            resp_vz,
            resp_t,
            trial: Vec6::zeros(),
            committed: Vec6::zeros(),
        }
    }

    /// Impose a trial generalized deformation (ε0, γy, γz, θ, κy, κz)
    pub fn set_trial_deformation(&mut self, deformation: &Vec6) -> SectionResult<()> {
        let flexural = Vec3::new(deformation[0], deformation[4], deformation[5]);
        self.base.set_trial_deformation(&flexural)?;
        self.resp_vy.set_trial_strain(deformation[1])?;
        self.resp_vz.set_trial_strain(deformation[2])?;
        self.resp_t.set_trial_strain(deformation[3])?;
        self.trial = *deformation;
        Ok(())
    }

    /// Current trial deformation
    pub fn trial_deformation(&self) -> Vec6 {
        self.trial
    }

    /// Full 6-component stress resultant (N, Vy, Vz, T, My, Mz)
    pub fn stress_resultant(&self) -> Vec6 {
        let flexural = self.base.stress_resultant();
        Vec6::new(
            flexural[0],
            self.resp_vy.stress(),
            self.resp_vz.stress(),
            self.resp_t.stress(),
            flexural[1],
            flexural[2],
        )
    }

    /// Block-diagonal 6x6 tangent: 3x3 flexural block from fiber
    /// integration, scalar shear/torsion stiffnesses on the diagonal
    pub fn tangent_stiffness(&self) -> Mat6 {
        let flexural = self.base.tangent_stiffness();
        let mut k = Mat6::zeros();
        // Flexural dofs sit at generalized indices 0 (N), 4 (My), 5 (Mz)
        let map = [0, 4, 5];
        for (r3, &r6) in map.iter().enumerate() {
            for (c3, &c6) in map.iter().enumerate() {
                k[(r6, c6)] = flexural[(r3, c3)];
            }
        }
        k[(1, 1)] = self.resp_vy.tangent();
        k[(2, 2)] = self.resp_vz.tangent();
        k[(3, 3)] = self.resp_t.tangent();
        k
    }

    /// Accept the trial state (base fibers and all three responses)
    pub fn commit(&mut self) {
        self.base.commit();
        self.resp_vy.commit();
        self.resp_vz.commit();
        self.resp_t.commit();
        self.committed = self.trial;
    }

    /// Discard the trial state, restoring the last committed state
    pub fn revert_to_last_commit(&mut self) {
        self.base.revert_to_last_commit();
        self.resp_vy.revert_to_last_commit();
        self.resp_vz.revert_to_last_commit();
        self.resp_t.revert_to_last_commit();
        self.trial = self.committed;
    }

    /// Erase all history
    pub fn revert_to_start(&mut self) {
        self.base.revert_to_start();
        self.resp_vy.revert_to_start();
        self.resp_vz.revert_to_start();
        self.resp_t.revert_to_start();
        self.trial = Vec6::zeros();
        self.committed = Vec6::zeros();
    }

    /// The base fiber section
    pub fn base(&self) -> &FiberSection {
        &self.base
    }

    /// Shear-y response model
    pub fn resp_vy(&self) -> &UniaxialMaterial {
        &self.resp_vy
    }

    /// Shear-z response model
    pub fn resp_vz(&self) -> &UniaxialMaterial {
        &self.resp_vz
    }

    /// Torsion response model
    pub fn resp_t(&self) -> &UniaxialMaterial {
        &self.resp_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{QuadRegion, SectionGeometry};
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn unit_shear_section(e: f64, gvy: f64, gvz: f64, gt: f64) -> ShearFiberSection {
        let mut materials = HashMap::new();
        materials.insert("elast".to_string(), UniaxialMaterial::elastic(e));
        let mut geom = SectionGeometry::new("geom");
        geom.add_region(QuadRegion::rectangle("elast", 1.0, 1.0, 8, 8).unwrap());
        let fibers = geom.rasterize(&materials).unwrap();
        let base = FiberSection::new("scc", fibers, geom.extents().unwrap()).unwrap();
        ShearFiberSection::new(
            base,
            UniaxialMaterial::elastic(gvy),
            UniaxialMaterial::elastic(gvz),
            UniaxialMaterial::elastic(gt),
        )
    }

    #[test]
    fn test_shear_components_route_independently() {
        let mut section = unit_shear_section(1e6, 1e6, 1e3, 1e10);
        let def = Vec6::new(0.0, 2e-3, 3e-3, 4e-3, 0.0, 0.0);
        section.set_trial_deformation(&def).unwrap();
        let s = section.stress_resultant();
        assert_relative_eq!(s[1], 1e6 * 2e-3, max_relative = 1e-12);
        assert_relative_eq!(s[2], 1e3 * 3e-3, max_relative = 1e-12);
        assert_relative_eq!(s[3], 1e10 * 4e-3, max_relative = 1e-12);
        // No shear/flexure coupling
        assert_eq!(s[0], 0.0);
        assert_eq!(s[4], 0.0);
        assert_eq!(s[5], 0.0);
    }

    #[test]
    fn test_tangent_is_block_diagonal() {
        let section = unit_shear_section(1e6, 2e6, 3e6, 4e6);
        let k = section.tangent_stiffness();
        assert_relative_eq!(k[(1, 1)], 2e6);
        assert_relative_eq!(k[(2, 2)], 3e6);
        assert_relative_eq!(k[(3, 3)], 4e6);
        // Shear rows/columns carry no coupling
        for i in 1..4 {
            for j in 0..6 {
                if i != j {
                    assert_eq!(k[(i, j)], 0.0);
                    assert_eq!(k[(j, i)], 0.0);
                }
            }
        }
    }
}
