//! Horizontal cantilever under tension load at its end, modeled at the
//! section level: with a constant axial force along the bar, the tip
//! displacement is the section's axial strain times the length.

use approx::assert_relative_eq;
use fiber_section::prelude::*;

const WIDTH: f64 = 0.001; // m
const DEPTH: f64 = 0.01; // m
const L: f64 = 1.5; // bar length [m]
const F: f64 = 1.5e3; // load magnitude [N]
const E: f64 = 210e9; // Young's modulus [Pa]
const FY: f64 = 275e6; // yield stress [Pa]

fn build_section() -> Section {
    let mut model = SectionModel::new();
    model
        .add_material("steel", UniaxialMaterial::bilinear_steel(E, FY, 0.001))
        .unwrap();
    let mut geom = SectionGeometry::new("quadRegion");
    geom.add_region(QuadRegion::rectangle("steel", WIDTH, DEPTH, 2, 2).unwrap());
    model.add_geometry(geom).unwrap();
    model.new_plain_fiber_section("quadFibers", "quadRegion").unwrap();
    model.sections.remove("quadFibers").unwrap()
}

#[test]
fn axial_tension_matches_closed_form() {
    let mut section = build_section();
    let area = section.properties().area;
    assert_relative_eq!(area, WIDTH * DEPTH, max_relative = 1e-12);

    let target = Vec6::new(F, 0.0, 0.0, 0.0, 0.0, 0.0);
    let summary = SectionDriver::solve(
        &mut section,
        &target,
        &[ResultantComponent::N],
        &SolveOptions::default(),
    )
    .unwrap();

    let n = summary.resultant[0];
    assert_relative_eq!(n, F, max_relative = 1e-10);

    // Constant axial force: tip displacement is strain times length
    let delta = summary.deformation[0] * L;
    let delta_theory = F * L / (E * area);
    assert_relative_eq!(delta, delta_theory, max_relative = 1e-10);
}

#[test]
fn axial_strain_is_uniform_over_the_fibers() {
    let mut section = build_section();
    let target = Vec6::new(F, 0.0, 0.0, 0.0, 0.0, 0.0);
    let summary = SectionDriver::solve(
        &mut section,
        &target,
        &[ResultantComponent::N],
        &SolveOptions::default(),
    )
    .unwrap();

    let fibers = section.fiber_section().fibers();
    assert_eq!(fibers.len(), 4);
    let avg_strain: f64 =
        fibers.iter().map(|f| f.material.strain()).sum::<f64>() / fibers.len() as f64;
    assert_relative_eq!(avg_strain, summary.deformation[0], max_relative = 1e-12);
    for fiber in fibers {
        assert_relative_eq!(fiber.material.strain(), avg_strain, max_relative = 1e-12);
    }
}

#[test]
fn load_past_yield_engages_the_hardening_branch() {
    let mut section = build_section();
    let area = section.properties().area;
    let n_yield = FY * area;

    // 1% past first yield: the tangent drops to b·E on every fiber
    let target = Vec6::new(1.01 * n_yield, 0.0, 0.0, 0.0, 0.0, 0.0);
    let summary = SectionDriver::solve(
        &mut section,
        &target,
        &[ResultantComponent::N],
        &SolveOptions::default(),
    )
    .unwrap();

    assert_relative_eq!(summary.resultant[0], 1.01 * n_yield, max_relative = 1e-10);
    let strain = summary.deformation[0];
    assert!(strain > FY / E, "strain should exceed the yield strain");

    let k = section.tangent_stiffness();
    assert_relative_eq!(k[(0, 0)], 0.001 * E * area, max_relative = 1e-9);
}
