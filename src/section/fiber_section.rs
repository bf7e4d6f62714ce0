//! Fiber section - flexural/axial integration over a fiber set

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::fiber::Fiber;
use crate::geometry::Extents;
use crate::math::{Mat3, Vec3};

/// Linear-elastic section properties derived from the unstressed fiber layout
///
/// Computed once at setup by area-weighted fiber moments. Centroid and
/// inertias are reported about the fiber centroid; extreme-fiber distances
/// come from the geometry extents, so yield moments of a coarsely
/// discretized section still reference the true outer edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total fiber area
    pub area: f64,
    /// Centroid y coordinate
    pub centroid_y: f64,
    /// Centroid z coordinate
    pub centroid_z: f64,
    /// Moment of inertia about the centroidal y-axis (Σ a·(z−z̄)²)
    pub iy: f64,
    /// Moment of inertia about the centroidal z-axis (Σ a·(y−ȳ)²)
    pub iz: f64,
    /// Radius of gyration about y
    pub ry: f64,
    /// Radius of gyration about z
    pub rz: f64,
    /// Extreme-fiber distance from the centroid in z (for bending about y)
    pub c_z: f64,
    /// Extreme-fiber distance from the centroid in y (for bending about z)
    pub c_y: f64,
    /// Elastic section modulus about y (Iy / c_z)
    pub elastic_modulus_y: f64,
    /// Elastic section modulus about z (Iz / c_y)
    pub elastic_modulus_z: f64,
    /// Plastic section modulus about y (Σ a·|z − z_pna|)
    pub plastic_modulus_y: f64,
    /// Plastic section modulus about z (Σ a·|y − y_pna|)
    pub plastic_modulus_z: f64,
}

impl SectionProperties {
    fn from_fibers(fibers: &[Fiber], extents: &Extents) -> SectionResult<Self> {
        let area: f64 = fibers.iter().map(|f| f.area).sum();
        if area <= 0.0 {
            return Err(SectionError::InvalidGeometry(
                "section has non-positive total fiber area".to_string(),
            ));
        }
        let centroid_y = fibers.iter().map(|f| f.area * f.y).sum::<f64>() / area;
        let centroid_z = fibers.iter().map(|f| f.area * f.z).sum::<f64>() / area;

        let iz = fibers
            .iter()
            .map(|f| f.area * (f.y - centroid_y).powi(2))
            .sum::<f64>();
        let iy = fibers
            .iter()
            .map(|f| f.area * (f.z - centroid_z).powi(2))
            .sum::<f64>();

        let c_y = (extents.y_max - centroid_y).max(centroid_y - extents.y_min);
        let c_z = (extents.z_max - centroid_z).max(centroid_z - extents.z_min);

        let y_pna = equal_area_axis(fibers, area, |f| f.y);
        let z_pna = equal_area_axis(fibers, area, |f| f.z);
        let plastic_modulus_z = fibers.iter().map(|f| f.area * (f.y - y_pna).abs()).sum();
        let plastic_modulus_y = fibers.iter().map(|f| f.area * (f.z - z_pna).abs()).sum();

        Ok(Self {
            area,
            centroid_y,
            centroid_z,
            iy,
            iz,
            ry: (iy / area).sqrt(),
            rz: (iz / area).sqrt(),
            c_z,
            c_y,
            elastic_modulus_y: iy / c_z,
            elastic_modulus_z: iz / c_y,
            plastic_modulus_y,
            plastic_modulus_z,
        })
    }

    /// Bending moment about z at first extreme-fiber yield
    pub fn yield_moment_z(&self, fy: f64) -> f64 {
        fy * self.elastic_modulus_z
    }

    /// Bending moment about y at first extreme-fiber yield
    pub fn yield_moment_y(&self, fy: f64) -> f64 {
        fy * self.elastic_modulus_y
    }

    /// Fully plastic bending moment about z (elastic-perfectly-plastic law)
    pub fn plastic_moment_z(&self, fy: f64) -> f64 {
        fy * self.plastic_modulus_z
    }

    /// Fully plastic bending moment about y (elastic-perfectly-plastic law)
    pub fn plastic_moment_y(&self, fy: f64) -> f64 {
        fy * self.plastic_modulus_y
    }
}

/// Equal-area (plastic neutral) axis: the weighted median of the fiber
/// coordinates. Σ a·|c − axis| is piecewise linear in the axis position and
/// minimized here.
fn equal_area_axis(fibers: &[Fiber], area: f64, coord: impl Fn(&Fiber) -> f64) -> f64 {
    let mut sorted: Vec<(f64, f64)> = fibers.iter().map(|f| (coord(f), f.area)).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let half = area / 2.0;
    let tol = 1e-12 * area;
    let mut cumulative = 0.0;
    for (i, &(c, a)) in sorted.iter().enumerate() {
        cumulative += a;
        if cumulative >= half - tol {
            // Half-area boundary between two fibers: the axis sits midway.
            if (cumulative - half).abs() <= tol && i + 1 < sorted.len() {
                return (c + sorted[i + 1].0) / 2.0;
            }
            return c;
        }
    }
    sorted.last().map(|&(c, _)| c).unwrap_or(0.0)
}

/// A fiber section: aggregates fiber responses into flexural/axial stress
/// resultants for 3D beam theory
///
/// Generalized deformation is (ε0, κy, κz); the conjugate stress resultant
/// is (N, My, Mz) with N = Σ σ·a, My = −Σ σ·a·z, Mz = Σ σ·a·y. The tangent
/// is the 3x3 matrix Σ Et·a·gᵀg with g = (1, −z, y).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberSection {
    /// Section name
    pub name: String,
    fibers: Vec<Fiber>,
    props: SectionProperties,
    #[serde(skip)]
    trial: Vec3,
    #[serde(skip)]
    committed: Vec3,
}

impl FiberSection {
    /// Create a fiber section from a rasterized fiber list and the geometry
    /// extents it came from
    pub fn new(name: &str, fibers: Vec<Fiber>, extents: Extents) -> SectionResult<Self> {
        if fibers.is_empty() {
            return Err(SectionError::InvalidGeometry(format!(
                "section '{name}' has no fibers"
            )));
        }
        let props = SectionProperties::from_fibers(&fibers, &extents)?;
        Ok(Self {
            name: name.to_string(),
            fibers,
            props,
            trial: Vec3::zeros(),
            committed: Vec3::zeros(),
        })
    }

    /// Impose a trial generalized deformation (ε0, κy, κz) on every fiber
    pub fn set_trial_deformation(&mut self, deformation: &Vec3) -> SectionResult<()> {
        for fiber in &mut self.fibers {
            fiber.set_trial(deformation)?;
        }
        self.trial = *deformation;
        Ok(())
    }

    /// Current trial deformation (ε0, κy, κz)
    pub fn trial_deformation(&self) -> Vec3 {
        self.trial
    }

    /// Integrate fiber stresses into the stress resultant (N, My, Mz)
    pub fn stress_resultant(&self) -> Vec3 {
        let mut n = 0.0;
        let mut my = 0.0;
        let mut mz = 0.0;
        for fiber in &self.fibers {
            let force = fiber.force();
            n += force;
            my -= force * fiber.z;
            mz += force * fiber.y;
        }
        Vec3::new(n, my, mz)
    }

    /// Integrate fiber tangent moduli into the 3x3 section tangent
    pub fn tangent_stiffness(&self) -> Mat3 {
        self.stiffness_with(|f| f.tangent())
    }

    /// Section stiffness from the initial (unstressed) fiber moduli
    pub fn initial_stiffness(&self) -> Mat3 {
        self.stiffness_with(|f| f.material.initial_tangent())
    }

    fn stiffness_with(&self, modulus: impl Fn(&Fiber) -> f64) -> Mat3 {
        let mut k = Mat3::zeros();
        for fiber in &self.fibers {
            let ea = modulus(fiber) * fiber.area;
            let g = Vec3::new(1.0, -fiber.z, fiber.y);
            // k += ea * g * g^T
            for r in 0..3 {
                for c in 0..3 {
                    k[(r, c)] += ea * g[r] * g[c];
                }
            }
        }
        k
    }

    /// Accept the trial state into every fiber's strain history
    pub fn commit(&mut self) {
        for fiber in &mut self.fibers {
            fiber.material.commit();
        }
        self.committed = self.trial;
    }

    /// Discard the trial state, restoring the last committed state
    pub fn revert_to_last_commit(&mut self) {
        for fiber in &mut self.fibers {
            fiber.material.revert_to_last_commit();
        }
        self.trial = self.committed;
    }

    /// Erase all history, restoring the virgin state
    pub fn revert_to_start(&mut self) {
        for fiber in &mut self.fibers {
            fiber.material.revert_to_start();
        }
        self.trial = Vec3::zeros();
        self.committed = Vec3::zeros();
    }

    /// Derived linear-elastic section properties
    pub fn properties(&self) -> &SectionProperties {
        &self.props
    }

    /// The fibers, in rasterization order
    pub fn fibers(&self) -> &[Fiber] {
        &self.fibers
    }

    /// Number of fibers
    pub fn fiber_count(&self) -> usize {
        self.fibers.len()
    }
}
