//! Linear-elastic uniaxial material

use serde::{Deserialize, Serialize};

/// Linear-elastic uniaxial stress-strain law
///
/// Used directly for elastic fibers and as the independent shear/torsion
/// response model in aggregated sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elastic {
    /// Elastic modulus
    pub e: f64,
    /// Current trial strain
    #[serde(skip)]
    pub(crate) trial_strain: f64,
    /// Committed strain
    #[serde(skip)]
    pub(crate) committed_strain: f64,
}

impl Elastic {
    /// Create a new linear-elastic material with modulus `e`
    pub fn new(e: f64) -> Self {
        Self {
            e,
            trial_strain: 0.0,
            committed_strain: 0.0,
        }
    }

    pub(crate) fn set_trial_strain(&mut self, strain: f64) {
        self.trial_strain = strain;
    }

    pub(crate) fn strain(&self) -> f64 {
        self.trial_strain
    }

    pub(crate) fn stress(&self) -> f64 {
        self.e * self.trial_strain
    }

    pub(crate) fn tangent(&self) -> f64 {
        self.e
    }

    pub(crate) fn commit(&mut self) {
        self.committed_strain = self.trial_strain;
    }

    pub(crate) fn revert_to_last_commit(&mut self) {
        self.trial_strain = self.committed_strain;
    }

    pub(crate) fn revert_to_start(&mut self) {
        self.trial_strain = 0.0;
        self.committed_strain = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elastic_stress() {
        let mut mat = Elastic::new(2.1e6);
        mat.set_trial_strain(1e-3);
        assert!((mat.stress() - 2.1e3).abs() < 1e-9);
        assert_eq!(mat.tangent(), 2.1e6);
    }
}
