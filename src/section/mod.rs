//! Section kinds and the generalized 6-component interface

pub mod aggregator;
pub mod fiber_section;
pub mod shear_section;

pub use aggregator::SectionAggregator;
pub use fiber_section::{FiberSection, SectionProperties};
pub use shear_section::ShearFiberSection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::math::{Mat6, Vec3, Vec6};

/// A named component of the generalized stress-resultant vector
///
/// Ordering matches the generalized pair: deformation (ε0, γy, γz, θ, κy,
/// κz) against resultant (N, Vy, Vz, T, My, Mz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultantComponent {
    /// Axial force / axial strain
    N,
    /// Transverse shear along y / shear strain γy
    Vy,
    /// Transverse shear along z / shear strain γz
    Vz,
    /// Torsion (also written Mx) / twist θ
    T,
    /// Bending about y / curvature κy
    My,
    /// Bending about z / curvature κz
    Mz,
}

impl ResultantComponent {
    /// Index of this component in the 6-vectors
    pub fn index(self) -> usize {
        match self {
            Self::N => 0,
            Self::Vy => 1,
            Self::Vz => 2,
            Self::T => 3,
            Self::My => 4,
            Self::Mz => 5,
        }
    }

    /// All components, in vector order
    pub fn all() -> [Self; 6] {
        [Self::N, Self::Vy, Self::Vz, Self::T, Self::My, Self::Mz]
    }
}

impl fmt::Display for ResultantComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::N => "N",
            Self::Vy => "Vy",
            Self::Vz => "Vz",
            Self::T => "T",
            Self::My => "My",
            Self::Mz => "Mz",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ResultantComponent {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::N),
            "Vy" => Ok(Self::Vy),
            "Vz" => Ok(Self::Vz),
            // Torsion goes by both names in beam-theory conventions
            "T" | "Mx" => Ok(Self::T),
            "My" => Ok(Self::My),
            "Mz" => Ok(Self::Mz),
            other => Err(SectionError::InvalidComponent(other.to_string())),
        }
    }
}

/// A cross-section, tagged by kind
///
/// All kinds expose the same 6-component generalized interface. A plain
/// fiber section carries only the flexural/axial components; its shear and
/// torsion rows are zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Section {
    /// Flexure/axial only, from fiber integration
    PlainFiber(FiberSection),
    /// Fiber integration plus fixed Vy/Vz/T responses
    ShearFiber(ShearFiberSection),
    /// Fiber integration plus a chosen subset of responses
    Aggregated(SectionAggregator),
}

impl Section {
    /// Section name
    pub fn name(&self) -> &str {
        match self {
            Self::PlainFiber(s) => &s.name,
            Self::ShearFiber(s) => &s.base().name,
            Self::Aggregated(s) => &s.base().name,
        }
    }

    /// Impose a trial generalized deformation (ε0, γy, γz, θ, κy, κz)
    ///
    /// For a plain fiber section only the flexural components take effect.
    pub fn set_trial_deformation(&mut self, deformation: &Vec6) -> SectionResult<()> {
        match self {
            Self::PlainFiber(s) => {
                let flexural = Vec3::new(deformation[0], deformation[4], deformation[5]);
                s.set_trial_deformation(&flexural)
            }
            Self::ShearFiber(s) => s.set_trial_deformation(deformation),
            Self::Aggregated(s) => s.set_trial_deformation(deformation),
        }
    }

    /// Current trial deformation as a 6-vector
    pub fn trial_deformation(&self) -> Vec6 {
        match self {
            Self::PlainFiber(s) => {
                let d = s.trial_deformation();
                Vec6::new(d[0], 0.0, 0.0, 0.0, d[1], d[2])
            }
            Self::ShearFiber(s) => s.trial_deformation(),
            Self::Aggregated(s) => s.trial_deformation(),
        }
    }

    /// Generalized stress resultant (N, Vy, Vz, T, My, Mz)
    pub fn stress_resultant(&self) -> Vec6 {
        match self {
            Self::PlainFiber(s) => {
                let r = s.stress_resultant();
                Vec6::new(r[0], 0.0, 0.0, 0.0, r[1], r[2])
            }
            Self::ShearFiber(s) => s.stress_resultant(),
            Self::Aggregated(s) => s.stress_resultant(),
        }
    }

    /// 6x6 generalized tangent stiffness
    pub fn tangent_stiffness(&self) -> Mat6 {
        match self {
            Self::PlainFiber(s) => {
                let flexural = s.tangent_stiffness();
                let mut k = Mat6::zeros();
                let map = [0, 4, 5];
                for (r3, &r6) in map.iter().enumerate() {
                    for (c3, &c6) in map.iter().enumerate() {
                        k[(r6, c6)] = flexural[(r3, c3)];
                    }
                }
                k
            }
            Self::ShearFiber(s) => s.tangent_stiffness(),
            Self::Aggregated(s) => s.tangent_stiffness(),
        }
    }

    /// One named component of the current stress resultant
    pub fn resultant_component(&self, component: ResultantComponent) -> f64 {
        self.stress_resultant()[component.index()]
    }

    /// One named component of the current trial deformation
    pub fn deformation_component(&self, component: ResultantComponent) -> f64 {
        self.trial_deformation()[component.index()]
    }

    /// Accept the trial state into the strain history
    pub fn commit(&mut self) {
        match self {
            Self::PlainFiber(s) => s.commit(),
            Self::ShearFiber(s) => s.commit(),
            Self::Aggregated(s) => s.commit(),
        }
    }

    /// Discard the trial state, restoring the last committed state
    pub fn revert_to_last_commit(&mut self) {
        match self {
            Self::PlainFiber(s) => s.revert_to_last_commit(),
            Self::ShearFiber(s) => s.revert_to_last_commit(),
            Self::Aggregated(s) => s.revert_to_last_commit(),
        }
    }

    /// Erase all history
    pub fn revert_to_start(&mut self) {
        match self {
            Self::PlainFiber(s) => s.revert_to_start(),
            Self::ShearFiber(s) => s.revert_to_start(),
            Self::Aggregated(s) => s.revert_to_start(),
        }
    }

    /// The underlying fiber section (the base, for wrapped kinds)
    pub fn fiber_section(&self) -> &FiberSection {
        match self {
            Self::PlainFiber(s) => s,
            Self::ShearFiber(s) => s.base(),
            Self::Aggregated(s) => s.base(),
        }
    }

    /// Derived linear-elastic section properties
    pub fn properties(&self) -> &SectionProperties {
        self.fiber_section().properties()
    }
}
