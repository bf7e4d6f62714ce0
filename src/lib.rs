//! fiber-section - a fiber cross-section analysis library
//!
//! This library implements the fiber-section force-deformation engine used
//! by 3D beam-theory structural analysis:
//! - Uniaxial material models (elastic, elastic-perfectly-plastic, bilinear steel)
//! - Quadrilateral-region fiber discretization of cross-sections
//! - Fiber integration into stress resultants and tangent stiffness
//! - Aggregation of uncoupled shear/torsion responses into a 6-dof section
//! - Newton state determination on a single section (zero-length bench)
//!
//! ## Example
//! ```rust
//! use fiber_section::prelude::*;
//!
//! let mut model = SectionModel::new();
//!
//! // Materials: elastic-perfectly-plastic fibers, elastic shear/torsion responses
//! model.add_material("epp", UniaxialMaterial::elastic_pp(2.1e6, 2600.0, -2600.0)).unwrap();
//! model.add_material("respT", UniaxialMaterial::elastic(1e10)).unwrap();
//! model.add_material("respVy", UniaxialMaterial::elastic(1e6)).unwrap();
//! model.add_material("respVz", UniaxialMaterial::elastic(1e3)).unwrap();
//!
//! // A 10 x 20 rectangle discretized into 32 x 32 fibers
//! let mut geom = SectionGeometry::new("rect");
//! geom.add_region(QuadRegion::rectangle("epp", 10.0, 20.0, 32, 32).unwrap());
//! model.add_geometry(geom).unwrap();
//!
//! // Build the 6-dof section and put it on the zero-length bench
//! model.new_shear_fiber_section("sa", "rect", "respVy", "respVz", "respT").unwrap();
//! let section = model.sections.remove("sa").unwrap();
//! let mut bench = ZeroLengthSection::new(section);
//!
//! let load = Vec6::new(0.0, 2e4, 3e4, 1e3, 0.0, 1e6);
//! let results = bench
//!     .apply_load(&load, &ResultantComponent::all(), &SolveOptions::default())
//!     .unwrap();
//! assert!((results.reactions[5] + 1e6).abs() < 1e-3);
//! ```

pub mod analysis;
pub mod error;
pub mod fiber;
pub mod geometry;
pub mod materials;
pub mod math;
pub mod model;
pub mod section;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        SectionDriver, SolveOptions, SolveSummary, ZeroLengthResults, ZeroLengthSection,
    };
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::fiber::Fiber;
    pub use crate::geometry::{QuadRegion, SectionGeometry};
    pub use crate::materials::UniaxialMaterial;
    pub use crate::math::{Mat3, Mat6, Vec3, Vec6};
    pub use crate::model::SectionModel;
    pub use crate::section::{
        FiberSection, ResultantComponent, Section, SectionAggregator, SectionProperties,
        ShearFiberSection,
    };
}
