//! Bilinear steel uniaxial material with kinematic hardening

use serde::{Deserialize, Serialize};

/// Bilinear steel stress-strain law (Steel01-type)
///
/// Elastic modulus `e` up to the yield stress `fy`, then a post-yield branch
/// with tangent `b * e`. Hardening is kinematic: the yield envelope
/// translates with the accumulated plastic deformation, giving the classic
/// hysteretic response under strain reversals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilinearSteel {
    /// Elastic modulus
    pub e: f64,
    /// Yield stress (positive)
    pub fy: f64,
    /// Strain-hardening ratio (post-yield tangent / elastic tangent)
    pub b: f64,

    /// Committed strain
    pub(crate) committed_strain: f64,
    /// Committed stress
    pub(crate) committed_stress: f64,

    #[serde(skip)]
    pub(crate) trial_strain: f64,
    #[serde(skip)]
    pub(crate) trial_stress: f64,
    #[serde(skip)]
    pub(crate) trial_tangent: f64,
}

impl BilinearSteel {
    /// Create a new bilinear steel with modulus `e`, yield stress `fy` and
    /// hardening ratio `b`
    pub fn new(e: f64, fy: f64, b: f64) -> Self {
        Self {
            e,
            fy,
            b,
            committed_strain: 0.0,
            committed_stress: 0.0,
            trial_strain: 0.0,
            trial_stress: 0.0,
            trial_tangent: e,
        }
    }

    pub(crate) fn set_trial_strain(&mut self, strain: f64) {
        self.trial_strain = strain;

        // Elastic predictor from the committed state, clipped against the
        // translated bilinear envelope.
        let sig_trial = self.committed_stress + self.e * (strain - self.committed_strain);
        let sig_max = self.b * self.e * strain + (1.0 - self.b) * self.fy;
        let sig_min = self.b * self.e * strain - (1.0 - self.b) * self.fy;

        if sig_trial > sig_max {
            self.trial_stress = sig_max;
            self.trial_tangent = self.b * self.e;
        } else if sig_trial < sig_min {
            self.trial_stress = sig_min;
            self.trial_tangent = self.b * self.e;
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
        self.committed_strain = self.trial_strain;
        self.committed_stress = self.trial_stress;
    }

    pub(crate) fn revert_to_last_commit(&mut self) {
        self.set_trial_strain(self.committed_strain);
    }

    pub(crate) fn revert_to_start(&mut self) {
        self.committed_strain = 0.0;
        self.committed_stress = 0.0;
        self.trial_strain = 0.0;
        self.trial_stress = 0.0;
        self.trial_tangent = self.e;
    }
}
