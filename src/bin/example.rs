//! Fiber Section Example - rectangular section driven to near-plastic bending

use anyhow::{Context, Result};
use fiber_section::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Fiber Section Example: 10 x 20 rectangle, elastic-perfectly-plastic ===\n");

    let b = 10.0; // width [cm]
    let h = 20.0; // depth [cm]
    let e = 2.1e6; // Young's modulus [kp/cm2]
    let fy = 2600.0; // yield stress [kp/cm2]

    let mut model = SectionModel::new();

    // Fibers and the three uncoupled responses
    model.add_material("epp", UniaxialMaterial::elastic_pp(e, fy, -fy))?;
    model.add_material("respT", UniaxialMaterial::elastic(1e10))?;
    model.add_material("respVy", UniaxialMaterial::elastic(1e6))?;
    model.add_material("respVz", UniaxialMaterial::elastic(1e3))?;

    // 32 x 32 fiber grid
    let mut geom = SectionGeometry::new("geomRectang");
    geom.add_region(QuadRegion::rectangle("epp", b, h, 32, 32)?);
    model.add_geometry(geom)?;

    model.new_shear_fiber_section("sa", "geomRectang", "respVy", "respVz", "respT")?;
    let section = model.sections.remove("sa").context("section 'sa' not built")?;

    let props = *section.properties();
    println!("Section properties (from {} fibers):", section.fiber_section().fiber_count());
    println!("  A  = {:.4} cm2", props.area);
    println!("  Iz = {:.2} cm4, Iy = {:.2} cm4", props.iz, props.iy);
    println!("  rz = {:.4} cm, ry = {:.4} cm", props.rz, props.ry);
    println!("  Me,z = {:.1} kp·cm", props.yield_moment_z(fy));
    println!("  Mp,z = {:.1} kp·cm\n", props.plastic_moment_z(fy));

    // Shear/torsion combination at 99.9% of the plastic moment in z
    let load = Vec6::new(0.0, 2e4, 3e4, 1e3, 0.0, 0.999 * props.plastic_moment_z(fy));
    println!("Applying load: Vy={:.0}, Vz={:.0}, T={:.0}, Mz={:.1}\n", load[1], load[2], load[3], load[5]);

    let mut bench = ZeroLengthSection::new(section);
    let results = bench.apply_load(&load, &ResultantComponent::all(), &SolveOptions::default())?;

    println!("Converged in {} iterations", results.iterations);
    println!("Stress resultant:");
    for component in ResultantComponent::all() {
        println!(
            "  {component:>2} = {:>14.4}   (deformation {:>12.6e})",
            results.resultant[component.index()],
            results.deformation[component.index()]
        );
    }
    println!("\nReactions at the fixed node:");
    for component in ResultantComponent::all() {
        println!("  {component:>2} = {:>14.4}", results.reactions[component.index()]);
    }

    println!("\n=== Analysis Complete ===");
    Ok(())
}
