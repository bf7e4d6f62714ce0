//! Elastic-perfectly-plastic uniaxial material

use serde::{Deserialize, Serialize};

/// Elastic-perfectly-plastic uniaxial stress-strain law
///
/// Linear-elastic up to the tension/compression yield stresses, then a flat
/// plateau with zero tangent. Plastic strain accumulates on commit, so
/// unloading from the plateau is elastic from the shifted origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticPerfectlyPlastic {
    /// Elastic modulus
    pub e: f64,
    /// Tension yield stress (positive)
    pub fyp: f64,
    /// Compression yield stress (negative)
    pub fyn: f64,

    /// Committed plastic strain
    pub(crate) plastic_strain: f64,
    /// Committed total strain
    pub(crate) committed_strain: f64,

    #[serde(skip)]
    pub(crate) trial_strain: f64,
    #[serde(skip)]
    pub(crate) trial_stress: f64,
    #[serde(skip)]
    pub(crate) trial_tangent: f64,
}

impl ElasticPerfectlyPlastic {
    /// Create a new material with modulus `e` and yield stresses `fyp` (tension,
    /// positive) and `fyn` (compression, negative)
    pub fn new(e: f64, fyp: f64, fyn: f64) -> Self {
        Self {
            e,
            fyp,
            fyn,
            plastic_strain: 0.0,
            committed_strain: 0.0,
            trial_strain: 0.0,
            trial_stress: 0.0,
            trial_tangent: e,
        }
    }

    /// Symmetric yield: fyn = -fyp
    pub fn symmetric(e: f64, fy: f64) -> Self {
        Self::new(e, fy, -fy)
    }

    pub(crate) fn set_trial_strain(&mut self, strain: f64) {
        self.trial_strain = strain;
        let sig_trial = self.e * (strain - self.plastic_strain);

        if sig_trial > self.fyp {
            self.trial_stress = self.fyp;
            self.trial_tangent = 0.0;
        } else if sig_trial < self.fyn {
            self.trial_stress = self.fyn;
            self.trial_tangent = 0.0;
        } else {
            self.trial_stress = sig_trial;
            self.trial_tangent = self.e;
        }
    }

    pub(crate) fn strain(&self) -> f64 {
        self.trial_strain
    }

    pub(crate) fn stress(&self) -> f64 {
        self.trial_stress
    }

    pub(crate) fn tangent(&self) -> f64 {
        self.trial_tangent
    }

    pub(crate) fn commit(&mut self) {
        // Accepting a plateau state shifts the elastic origin.
        self.plastic_strain = self.trial_strain - self.trial_stress / self.e;
        self.committed_strain = self.trial_strain;
    }

    pub(crate) fn revert_to_last_commit(&mut self) {
        self.set_trial_strain(self.committed_strain);
    }

    pub(crate) fn revert_to_start(&mut self) {
        self.plastic_strain = 0.0;
        self.committed_strain = 0.0;
        self.trial_strain = 0.0;
        self.trial_stress = 0.0;
        self.trial_tangent = self.e;
    }
}
