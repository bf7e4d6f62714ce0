//! Uniaxial stress-strain material models
//!
//! Every fiber owns one of these, as do the independent shear/torsion
//! responses of an aggregated section. The supported laws form a closed
//! tagged variant rather than a string-dispatched registry, so a section
//! kind is fixed at construction.

pub mod elastic;
pub mod elastic_pp;
pub mod steel01;

pub use elastic::Elastic;
pub use elastic_pp::ElasticPerfectlyPlastic;
pub use steel01::BilinearSteel;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// A uniaxial stress-strain material model
///
/// State machine per load step: `set_trial_strain` evaluates the trial
/// response, `commit` accepts it into the strain history, and the revert
/// methods discard it. Re-evaluating the same trial strain before a commit
/// always reproduces the same stress and tangent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UniaxialMaterial {
    /// Linear-elastic
    Elastic(Elastic),
    /// Elastic-perfectly-plastic
    ElasticPerfectlyPlastic(ElasticPerfectlyPlastic),
    /// Bilinear steel with kinematic hardening
    BilinearSteel(BilinearSteel),
}

impl UniaxialMaterial {
    /// Linear-elastic material with modulus `e`
    pub fn elastic(e: f64) -> Self {
        Self::Elastic(Elastic::new(e))
    }

    /// Elastic-perfectly-plastic material with tension yield stress `fyp`
    /// (positive) and compression yield stress `fyn` (negative)
    pub fn elastic_pp(e: f64, fyp: f64, fyn: f64) -> Self {
        Self::ElasticPerfectlyPlastic(ElasticPerfectlyPlastic::new(e, fyp, fyn))
    }

    /// Bilinear steel with hardening ratio `b`
    pub fn bilinear_steel(e: f64, fy: f64, b: f64) -> Self {
        Self::BilinearSteel(BilinearSteel::new(e, fy, b))
    }

    /// Impose a trial strain and evaluate the constitutive response
    pub fn set_trial_strain(&mut self, strain: f64) -> SectionResult<()> {
        if !strain.is_finite() {
            return Err(SectionError::MaterialResponse(format!(
                "non-finite trial strain: {strain}"
            )));
        }
        match self {
            Self::Elastic(m) => m.set_trial_strain(strain),
            Self::ElasticPerfectlyPlastic(m) => m.set_trial_strain(strain),
            Self::BilinearSteel(m) => m.set_trial_strain(strain),
        }
        Ok(())
    }

    /// Current trial strain
    pub fn strain(&self) -> f64 {
        match self {
            Self::Elastic(m) => m.strain(),
            Self::ElasticPerfectlyPlastic(m) => m.strain(),
            Self::BilinearSteel(m) => m.strain(),
        }
    }

    /// Stress at the current trial strain
    pub fn stress(&self) -> f64 {
        match self {
            Self::Elastic(m) => m.stress(),
            Self::ElasticPerfectlyPlastic(m) => m.stress(),
            Self::BilinearSteel(m) => m.stress(),
        }
    }

    /// Tangent modulus at the current trial strain
    pub fn tangent(&self) -> f64 {
        match self {
            Self::Elastic(m) => m.tangent(),
            Self::ElasticPerfectlyPlastic(m) => m.tangent(),
            Self::BilinearSteel(m) => m.tangent(),
        }
    }

    /// Initial (unstressed) tangent modulus
    pub fn initial_tangent(&self) -> f64 {
        match self {
            Self::Elastic(m) => m.e,
            Self::ElasticPerfectlyPlastic(m) => m.e,
            Self::BilinearSteel(m) => m.e,
        }
    }

    /// Accept the trial state into the strain history
    pub fn commit(&mut self) {
        match self {
            Self::Elastic(m) => m.commit(),
            Self::ElasticPerfectlyPlastic(m) => m.commit(),
            Self::BilinearSteel(m) => m.commit(),
        }
    }

    /// Discard the trial state, restoring the last committed state
    pub fn revert_to_last_commit(&mut self) {
        match self {
            Self::Elastic(m) => m.revert_to_last_commit(),
            Self::ElasticPerfectlyPlastic(m) => m.revert_to_last_commit(),
            Self::BilinearSteel(m) => m.revert_to_last_commit(),
        }
    }

    /// Erase all history, restoring the virgin state
    pub fn revert_to_start(&mut self) {
        match self {
            Self::Elastic(m) => m.revert_to_start(),
            Self::ElasticPerfectlyPlastic(m) => m.revert_to_start(),
            Self::BilinearSteel(m) => m.revert_to_start(),
        }
    }
}
