//! Section geometry - regions and reinforcement that rasterize into fibers

pub mod region;

pub use region::{QuadRegion, RegionCell};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::fiber::Fiber;
use crate::materials::UniaxialMaterial;

/// A discrete reinforcement fiber with explicit position and area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReinforcementFiber {
    /// Material name, resolved against the model's material registry
    pub material: String,
    /// Local y coordinate
    pub y: f64,
    /// Local z coordinate
    pub z: f64,
    /// Fiber area (positive)
    pub area: f64,
}

/// A named collection of quadrilateral regions and reinforcement fibers
///
/// Rasterization produces the fiber list consumed by a fiber section. Fiber
/// order is deterministic: regions in insertion order (row-major within each
/// region), then reinforcement fibers in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Geometry name (unique within a model)
    pub name: String,
    /// Quadrilateral patches, in insertion order
    pub regions: Vec<QuadRegion>,
    /// Discrete reinforcement fibers, in insertion order
    pub reinforcement: Vec<ReinforcementFiber>,
}

/// Bounding extents of a geometry in the local (y, z) frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl SectionGeometry {
    /// Create a new empty geometry
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            regions: Vec::new(),
            reinforcement: Vec::new(),
        }
    }

    /// Add a quadrilateral region
    pub fn add_region(&mut self, region: QuadRegion) -> &mut Self {
        self.regions.push(region);
        self
    }

    /// Add a discrete reinforcement fiber
    pub fn add_reinforcement(
        &mut self,
        material: &str,
        y: f64,
        z: f64,
        area: f64,
    ) -> SectionResult<&mut Self> {
        if area <= 0.0 || !area.is_finite() {
            return Err(SectionError::InvalidGeometry(format!(
                "reinforcement fiber area must be positive (got {area})"
            )));
        }
        self.reinforcement.push(ReinforcementFiber {
            material: material.to_string(),
            y,
            z,
            area,
        });
        Ok(self)
    }

    /// Total fiber count: sum of region cell counts plus reinforcement fibers
    pub fn fiber_count(&self) -> usize {
        self.regions.iter().map(|r| r.fiber_count()).sum::<usize>() + self.reinforcement.len()
    }

    /// Bounding extents over region corners and reinforcement positions
    ///
    /// Used for extreme-fiber distances in yield-moment queries; rasterized
    /// fiber centroids sit inside these extents.
    pub fn extents(&self) -> SectionResult<Extents> {
        let mut points = Vec::new();
        for region in &self.regions {
            points.extend(region.corners.iter().copied());
        }
        for rebar in &self.reinforcement {
            points.push([rebar.y, rebar.z]);
        }
        if points.is_empty() {
            return Err(SectionError::InvalidGeometry(
                "geometry has no regions or reinforcement".to_string(),
            ));
        }
        let mut ext = Extents {
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
            z_min: f64::INFINITY,
            z_max: f64::NEG_INFINITY,
        };
        for [y, z] in points {
            ext.y_min = ext.y_min.min(y);
            ext.y_max = ext.y_max.max(y);
            ext.z_min = ext.z_min.min(z);
            ext.z_max = ext.z_max.max(z);
        }
        Ok(ext)
    }

    /// Rasterize all regions and reinforcement into fibers
    ///
    /// Each fiber receives its own clone of the region material, so strain
    /// history is tracked per fiber.
    pub fn rasterize(
        &self,
        materials: &HashMap<String, UniaxialMaterial>,
    ) -> SectionResult<Vec<Fiber>> {
        let mut fibers = Vec::with_capacity(self.fiber_count());

        for region in &self.regions {
            let material = materials
                .get(&region.material)
                .ok_or_else(|| SectionError::MaterialNotFound(region.material.clone()))?;
            for cell in region.cells()? {
                fibers.push(Fiber::new(cell.y, cell.z, cell.area, material.clone()));
            }
        }

        for rebar in &self.reinforcement {
            let material = materials
                .get(&rebar.material)
                .ok_or_else(|| SectionError::MaterialNotFound(rebar.material.clone()))?;
            fibers.push(Fiber::new(rebar.y, rebar.z, rebar.area, material.clone()));
        }

        if fibers.is_empty() {
            return Err(SectionError::InvalidGeometry(format!(
                "geometry '{}' rasterized to zero fibers",
                self.name
            )));
        }
        Ok(fibers)
    }
}
