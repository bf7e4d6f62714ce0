//! Section model - the single ownership context for materials, geometries
//! and sections

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};
use crate::geometry::SectionGeometry;
use crate::materials::UniaxialMaterial;
use crate::section::{
    FiberSection, ResultantComponent, Section, SectionAggregator, ShearFiberSection,
};

/// Owns every material, section geometry and built section by identifier
///
/// Sections are built through typed factory methods, one per section kind;
/// geometry and material references are resolved eagerly at build time, so
/// lookup failures surface as construction errors rather than later string
/// dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionModel {
    /// Uniaxial materials by name
    pub materials: HashMap<String, UniaxialMaterial>,
    /// Section geometries by name
    pub geometries: HashMap<String, SectionGeometry>,
    /// Built sections by name
    pub sections: HashMap<String, Section>,
}

impl SectionModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material
    pub fn add_material(&mut self, name: &str, material: UniaxialMaterial) -> SectionResult<()> {
        if self.materials.contains_key(name) {
            return Err(SectionError::DuplicateName(name.to_string()));
        }
        self.materials.insert(name.to_string(), material);
        Ok(())
    }

    /// Register a section geometry (keyed by its own name)
    pub fn add_geometry(&mut self, geometry: SectionGeometry) -> SectionResult<()> {
        if self.geometries.contains_key(&geometry.name) {
            return Err(SectionError::DuplicateName(geometry.name.clone()));
        }
        self.geometries.insert(geometry.name.clone(), geometry);
        Ok(())
    }

    /// Look up a material
    pub fn material(&self, name: &str) -> SectionResult<&UniaxialMaterial> {
        self.materials
            .get(name)
            .ok_or_else(|| SectionError::MaterialNotFound(name.to_string()))
    }

    /// Look up a geometry
    pub fn geometry(&self, name: &str) -> SectionResult<&SectionGeometry> {
        self.geometries
            .get(name)
            .ok_or_else(|| SectionError::GeometryNotFound(name.to_string()))
    }

    /// Look up a geometry for in-place editing
    pub fn geometry_mut(&mut self, name: &str) -> SectionResult<&mut SectionGeometry> {
        self.geometries
            .get_mut(name)
            .ok_or_else(|| SectionError::GeometryNotFound(name.to_string()))
    }

    /// Look up a built section
    pub fn section(&self, name: &str) -> SectionResult<&Section> {
        self.sections
            .get(name)
            .ok_or_else(|| SectionError::SectionNotFound(name.to_string()))
    }

    /// Look up a built section for state determination
    pub fn section_mut(&mut self, name: &str) -> SectionResult<&mut Section> {
        self.sections
            .get_mut(name)
            .ok_or_else(|| SectionError::SectionNotFound(name.to_string()))
    }

    /// Rasterize a geometry into a fiber section
    fn build_fiber_section(&self, name: &str, geometry_name: &str) -> SectionResult<FiberSection> {
        let geometry = self.geometry(geometry_name)?;
        let fibers = geometry.rasterize(&self.materials)?;
        FiberSection::new(name, fibers, geometry.extents()?)
    }

    fn insert_section(&mut self, name: &str, section: Section) -> SectionResult<&Section> {
        if self.sections.contains_key(name) {
            return Err(SectionError::DuplicateName(name.to_string()));
        }
        self.sections.insert(name.to_string(), section);
        Ok(&self.sections[name])
    }

    /// Build a plain (flexure/axial only) fiber section from a geometry
    pub fn new_plain_fiber_section(
        &mut self,
        name: &str,
        geometry_name: &str,
    ) -> SectionResult<&Section> {
        let base = self.build_fiber_section(name, geometry_name)?;
        self.insert_section(name, Section::PlainFiber(base))
    }

    /// Build a fiber section with shear-y, shear-z and torsion responses
    /// taken from the named materials
    pub fn new_shear_fiber_section(
        &mut self,
        name: &str,
        geometry_name: &str,
        resp_vy: &str,
        resp_vz: &str,
        resp_t: &str,
    ) -> SectionResult<&Section> {
        let base = self.build_fiber_section(name, geometry_name)?;
        let vy = self.material(resp_vy)?.clone();
        let vz = self.material(resp_vz)?.clone();
        let t = self.material(resp_t)?.clone();
        self.insert_section(name, Section::ShearFiber(ShearFiberSection::new(base, vy, vz, t)))
    }

    /// Build an aggregated section with responses for the listed components
    pub fn new_aggregated_section(
        &mut self,
        name: &str,
        geometry_name: &str,
        extras: &[(ResultantComponent, &str)],
    ) -> SectionResult<&Section> {
        let base = self.build_fiber_section(name, geometry_name)?;
        let mut responses = Vec::with_capacity(extras.len());
        for (component, material_name) in extras {
            responses.push((*component, self.material(material_name)?.clone()));
        }
        let aggregated = SectionAggregator::new(base, responses)?;
        self.insert_section(name, Section::Aggregated(aggregated))
    }
}
