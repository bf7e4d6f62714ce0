//! Section-level state determination
//!
//! A Newton-Raphson driver that finds the generalized deformation producing
//! a target stress resultant, and a zero-length section bench that wraps one
//! section between a fixed and a loaded node. This is the section-test
//! counterpart of a force-based element's state determination loop; no
//! global system is assembled.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::math::{self, Mat, Vec as DVec, Vec6};
use crate::section::{ResultantComponent, Section};

/// Options for the Newton state-determination solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Relative residual tolerance
    pub tolerance: f64,
    /// Emit per-iteration debug logging
    pub log: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-12,
            log: false,
        }
    }
}

impl SolveOptions {
    /// Set the maximum iteration count
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }

    /// Set the relative residual tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Enable per-iteration logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }
}

/// Outcome of a converged state determination
#[derive(Debug, Clone)]
pub struct SolveSummary {
    /// Converged (and committed) generalized deformation
    pub deformation: Vec6,
    /// Stress resultant at convergence
    pub resultant: Vec6,
    /// Newton iterations used
    pub iterations: usize,
}

/// Newton-Raphson state determination on a single section
pub struct SectionDriver;

impl SectionDriver {
    /// Find the deformation whose stress resultant matches `target` on the
    /// `active` components, then commit the converged state
    ///
    /// Only the active components are driven; the rest of the deformation
    /// vector stays at its current trial value. On non-convergence the
    /// section is reverted to its last committed state.
    pub fn solve(
        section: &mut Section,
        target: &Vec6,
        active: &[ResultantComponent],
        options: &SolveOptions,
    ) -> SectionResult<SolveSummary> {
        if active.is_empty() {
            return Err(SectionError::InvalidInput(
                "no active components to drive".to_string(),
            ));
        }
        let idx: Vec<usize> = active.iter().map(|c| c.index()).collect();
        let target_norm = idx
            .iter()
            .map(|&i| target[i] * target[i])
            .sum::<f64>()
            .sqrt()
            .max(1.0);

        let mut deformation = section.trial_deformation();

        for iteration in 0..options.max_iterations {
            section.set_trial_deformation(&deformation)?;
            let resultant = section.stress_resultant();

            let mut residual_norm = 0.0;
            for &i in &idx {
                let r = target[i] - resultant[i];
                residual_norm += r * r;
            }
            let residual_norm = residual_norm.sqrt();
            if options.log {
                debug!(
                    "section '{}': iteration {iteration}, residual norm {residual_norm:.3e}",
                    section.name()
                );
            }

            if residual_norm <= options.tolerance * target_norm {
                section.commit();
                return Ok(SolveSummary {
                    deformation: section.trial_deformation(),
                    resultant,
                    iterations: iteration,
                });
            }

            let k = section.tangent_stiffness();
            let n = idx.len();
            let mut k_reduced = Mat::zeros(n, n);
            let mut r_reduced = DVec::zeros(n);
            for (a, &i) in idx.iter().enumerate() {
                r_reduced[a] = target[i] - resultant[i];
                for (b, &j) in idx.iter().enumerate() {
                    k_reduced[(a, b)] = k[(i, j)];
                }
            }

            let step = math::solve_linear_system(&k_reduced, &r_reduced).ok_or_else(|| {
                section.revert_to_last_commit();
                SectionError::SingularStiffness
            })?;
            for (a, &i) in idx.iter().enumerate() {
                deformation[i] += step[a];
            }
        }

        warn!(
            "section '{}': state determination did not converge in {} iterations",
            section.name(),
            options.max_iterations
        );
        section.revert_to_last_commit();
        Err(SectionError::ConvergenceFailed(options.max_iterations))
    }
}

/// Equilibrium results of a zero-length section bench
#[derive(Debug, Clone)]
pub struct ZeroLengthResults {
    /// Generalized deformation of the section (equals the relative
    /// displacement of the free node)
    pub deformation: Vec6,
    /// Stress resultant in equilibrium with the load
    pub resultant: Vec6,
    /// Reactions at the fixed node (the negated resultant)
    pub reactions: Vec6,
    /// Newton iterations used
    pub iterations: usize,
}

/// A zero-length element wrapping one section between a fixed node and a
/// loaded node
///
/// With zero length the section deformation equals the free node's
/// generalized displacement, and equilibrium requires the section resultant
/// to match the applied load exactly.
pub struct ZeroLengthSection {
    section: Section,
}

impl ZeroLengthSection {
    /// Put a section on the bench
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    /// Apply a nodal load and solve for equilibrium, committing the
    /// converged state
    pub fn apply_load(
        &mut self,
        load: &Vec6,
        active: &[ResultantComponent],
        options: &SolveOptions,
    ) -> SectionResult<ZeroLengthResults> {
        let summary = SectionDriver::solve(&mut self.section, load, active, options)?;
        Ok(ZeroLengthResults {
            deformation: summary.deformation,
            resultant: summary.resultant,
            reactions: -summary.resultant,
            iterations: summary.iterations,
        })
    }

    /// The wrapped section
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The wrapped section, mutable
    pub fn section_mut(&mut self) -> &mut Section {
        &mut self.section
    }
}
