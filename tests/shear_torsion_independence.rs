//! Fiber section with shear and torsion stiffnesses: equilibrium on the
//! zero-length bench, consistency of the per-response stresses and strains,
//! and strict independence of the uncoupled components.

use approx::assert_relative_eq;
use fiber_section::prelude::*;

const E: f64 = 1e6;

fn build_section() -> Section {
    let mut model = SectionModel::new();
    model
        .add_material("elast", UniaxialMaterial::elastic(E))
        .unwrap();
    model
        .add_material("respT", UniaxialMaterial::elastic(1e6))
        .unwrap();
    model
        .add_material("respVy", UniaxialMaterial::elastic(1e6))
        .unwrap();
    model
        .add_material("respVz", UniaxialMaterial::elastic(1e6))
        .unwrap();

    let mut geom = SectionGeometry::new("geomRectang");
    geom.add_region(QuadRegion::rectangle("elast", 1.0, 1.0, 32, 32).unwrap());
    model.add_geometry(geom).unwrap();

    model
        .new_shear_fiber_section("sa", "geomRectang", "respVy", "respVz", "respT")
        .unwrap();
    model.sections.remove("sa").unwrap()
}

#[test]
fn six_component_load_equilibrium() {
    let mut bench = ZeroLengthSection::new(build_section());
    let load = Vec6::new(-1.0, -2.0, -3.0, -4.0, -5.0, -6.0);

    let results = bench
        .apply_load(&load, &ResultantComponent::all(), &SolveOptions::default())
        .unwrap();

    // Reaction + resultant = 0 and resultant = load, to solver precision
    assert!((results.reactions + results.resultant).norm() < 1e-15);
    assert!((results.resultant - load).norm() < 1e-10);

    // Rebuild the resultant from the fiber container and the individual
    // response models; it must agree with the section's own report
    let Section::ShearFiber(section) = bench.section() else {
        panic!("expected a shear fiber section");
    };
    let flexural = section.base().stress_resultant();
    let rebuilt = Vec6::new(
        flexural[0],
        section.resp_vy().stress(),
        section.resp_vz().stress(),
        section.resp_t().stress(),
        flexural[1],
        flexural[2],
    );
    assert_eq!(rebuilt, results.resultant);

    // Deformation components match the response strains and the fiber
    // section's trial deformation
    let flexural_def = section.base().trial_deformation();
    let rebuilt_def = Vec6::new(
        flexural_def[0],
        section.resp_vy().strain(),
        section.resp_vz().strain(),
        section.resp_t().strain(),
        flexural_def[1],
        flexural_def[2],
    );
    assert!((rebuilt_def - results.deformation).norm() < 1e-12);
}

#[test]
fn shear_and_flexure_are_uncoupled() {
    let mut section = build_section();

    let flexural_only = Vec6::new(1e-3, 0.0, 0.0, 0.0, 2e-3, 3e-3);
    section.set_trial_deformation(&flexural_only).unwrap();
    let base = section.stress_resultant();

    // Perturbing only the shear/torsion deformations leaves N, My, Mz
    // bit-identical
    let perturbed = Vec6::new(1e-3, 5e-2, -7e-2, 4e-2, 2e-3, 3e-3);
    section.set_trial_deformation(&perturbed).unwrap();
    let with_shear = section.stress_resultant();
    assert_eq!(with_shear[0], base[0]);
    assert_eq!(with_shear[4], base[4]);
    assert_eq!(with_shear[5], base[5]);

    // And the converse: flexural changes leave Vy, Vz, T untouched
    let flexural_changed = Vec6::new(-4e-3, 5e-2, -7e-2, 4e-2, 1e-3, -2e-3);
    section.set_trial_deformation(&flexural_changed).unwrap();
    let after = section.stress_resultant();
    assert_eq!(after[1], with_shear[1]);
    assert_eq!(after[2], with_shear[2]);
    assert_eq!(after[3], with_shear[3]);
}

#[test]
fn trial_state_is_reproducible_before_commit() {
    let mut section = build_section();
    let def = Vec6::new(1e-3, 2e-3, 3e-3, 4e-3, 5e-3, 6e-3);

    section.set_trial_deformation(&def).unwrap();
    let first = section.stress_resultant();
    let first_k = section.tangent_stiffness();

    // Wander elsewhere, come back: same inputs give bit-identical outputs
    section
        .set_trial_deformation(&Vec6::new(-1.0, 0.5, 0.0, 0.2, 0.0, -0.3))
        .unwrap();
    section.set_trial_deformation(&def).unwrap();
    assert_eq!(section.stress_resultant(), first);
    assert_eq!(section.tangent_stiffness(), first_k);
}

#[test]
fn elastic_resultant_matches_section_constants() {
    let mut section = build_section();
    let props = *section.properties();
    let def = Vec6::new(1e-3, 2e-3, 3e-3, 4e-3, 5e-3, 6e-3);
    section.set_trial_deformation(&def).unwrap();
    let s = section.stress_resultant();

    assert_relative_eq!(s[0], E * props.area * def[0], max_relative = 1e-12);
    assert_relative_eq!(s[1], 1e6 * def[1], max_relative = 1e-12);
    assert_relative_eq!(s[2], 1e6 * def[2], max_relative = 1e-12);
    assert_relative_eq!(s[3], 1e6 * def[3], max_relative = 1e-12);
    assert_relative_eq!(s[4], E * props.iy * def[4], max_relative = 1e-12);
    assert_relative_eq!(s[5], E * props.iz * def[5], max_relative = 1e-12);
}
