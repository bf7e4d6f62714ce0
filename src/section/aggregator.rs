//! Section aggregator - attach selected 1D responses to a fiber section

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::materials::UniaxialMaterial;
use crate::math::{Mat6, Vec3, Vec6};
use crate::section::fiber_section::FiberSection;
use crate::section::ResultantComponent;

/// A fiber section aggregated with a chosen subset of uncoupled shear or
/// torsion responses
///
/// Unlike [`ShearFiberSection`](crate::section::ShearFiberSection), which
/// always carries all three of Vy, Vz and T, the aggregator attaches only
/// the responses given at construction. Components with no attached
/// response report zero resultant and zero stiffness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAggregator {
    base: FiberSection,
    extras: Vec<(ResultantComponent, UniaxialMaterial)>,
    #[serde(skip)]
    trial: Vec6,
    #[serde(skip)]
    committed: Vec6,
}

impl SectionAggregator {
    /// Aggregate a fiber section with response models for the listed
    /// components (each must be one of Vy, Vz, T, with no duplicates)
    pub fn new(
        base: FiberSection,
        extras: Vec<(ResultantComponent, UniaxialMaterial)>,
    ) -> SectionResult<Self> {
        for (i, (component, _)) in extras.iter().enumerate() {
            if !matches!(
                component,
                ResultantComponent::Vy | ResultantComponent::Vz | ResultantComponent::T
            ) {
                return Err(SectionError::InvalidComponent(format!(
                    "{component} is carried by the fiber section; only Vy, Vz or T can be aggregated"
                )));
            }
            if extras[..i].iter().any(|(c, _)| c == component) {
                return Err(SectionError::InvalidComponent(format!(
                    "duplicate aggregated component {component}"
                )));
            }
        }
        Ok(Self {
            base,
            extras,
            trial: Vec6::zeros(),
            committed: Vec6::zeros(),
        })
    }

    /// Impose a trial generalized deformation (ε0, γy, γz, θ, κy, κz)
    pub fn set_trial_deformation(&mut self, deformation: &Vec6) -> SectionResult<()> {
        let flexural = Vec3::new(deformation[0], deformation[4], deformation[5]);
        self.base.set_trial_deformation(&flexural)?;
        for (component, response) in &mut self.extras {
            response.set_trial_strain(deformation[component.index()])?;
        }
        self.trial = *deformation;
        Ok(())
    }

    /// Current trial deformation
    pub fn trial_deformation(&self) -> Vec6 {
        self.trial
    }

    /// Full 6-component stress resultant; unaggregated shear/torsion
    /// components are zero
    pub fn stress_resultant(&self) -> Vec6 {
        let flexural = self.base.stress_resultant();
        let mut s = Vec6::zeros();
        s[0] = flexural[0];
        s[4] = flexural[1];
        s[5] = flexural[2];
        for (component, response) in &self.extras {
            s[component.index()] = response.stress();
        }
        s
    }

    /// Block-diagonal 6x6 tangent
    pub fn tangent_stiffness(&self) -> Mat6 {
        let flexural = self.base.tangent_stiffness();
        let mut k = Mat6::zeros();
        let map = [0, 4, 5];
        for (r3, &r6) in map.iter().enumerate() {
            for (c3, &c6) in map.iter().enumerate() {
                k[(r6, c6)] = flexural[(r3, c3)];
            }
        }
        for (component, response) in &self.extras {
            let i = component.index();
            k[(i, i)] = response.tangent();
        }
        k
    }

    /// Accept the trial state
    pub fn commit(&mut self) {
        self.base.commit();
        for (_, response) in &mut self.extras {
            response.commit();
        }
        self.committed = self.trial;
    }

    /// Discard the trial state, restoring the last committed state
    pub fn revert_to_last_commit(&mut self) {
        self.base.revert_to_last_commit();
        for (_, response) in &mut self.extras {
            response.revert_to_last_commit();
        }
        self.trial = self.committed;
    }

    /// Erase all history
    pub fn revert_to_start(&mut self) {
        self.base.revert_to_start();
        for (_, response) in &mut self.extras {
            response.revert_to_start();
        }
        self.trial = Vec6::zeros();
        self.committed = Vec6::zeros();
    }

    /// The base fiber section
    pub fn base(&self) -> &FiberSection {
        &self.base
    }

    /// The aggregated response for a component, if attached
    pub fn response(&self, component: ResultantComponent) -> Option<&UniaxialMaterial> {
        self.extras
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{QuadRegion, SectionGeometry};
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn base_section() -> FiberSection {
        let mut materials = HashMap::new();
        materials.insert("elast".to_string(), UniaxialMaterial::elastic(1e6));
        let mut geom = SectionGeometry::new("geom");
        geom.add_region(QuadRegion::rectangle("elast", 1.0, 1.0, 4, 4).unwrap());
        let fibers = geom.rasterize(&materials).unwrap();
        FiberSection::new("scc", fibers, geom.extents().unwrap()).unwrap()
    }

    #[test]
    fn test_flexural_component_rejected() {
        let extras = vec![(ResultantComponent::Mz, UniaxialMaterial::elastic(1e6))];
        let err = SectionAggregator::new(base_section(), extras).unwrap_err();
        assert!(matches!(err, SectionError::InvalidComponent(_)));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let extras = vec![
            (ResultantComponent::T, UniaxialMaterial::elastic(1e6)),
            (ResultantComponent::T, UniaxialMaterial::elastic(1e3)),
        ];
        let err = SectionAggregator::new(base_section(), extras).unwrap_err();
        assert!(matches!(err, SectionError::InvalidComponent(_)));
    }

    #[test]
    fn test_unaggregated_components_are_inert() {
        let extras = vec![(ResultantComponent::T, UniaxialMaterial::elastic(1e10))];
        let mut agg = SectionAggregator::new(base_section(), extras).unwrap();
        let def = Vec6::new(0.0, 1e-3, 2e-3, 3e-3, 0.0, 0.0);
        agg.set_trial_deformation(&def).unwrap();
        let s = agg.stress_resultant();
        assert_eq!(s[1], 0.0);
        assert_eq!(s[2], 0.0);
        assert_relative_eq!(s[3], 1e10 * 3e-3, max_relative = 1e-12);

        let k = agg.tangent_stiffness();
        assert_eq!(k[(1, 1)], 0.0);
        assert_eq!(k[(2, 2)], 0.0);
        assert_relative_eq!(k[(3, 3)], 1e10);
    }
}
