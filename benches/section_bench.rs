//! Benchmarks for fiber-section integration

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fiber_section::prelude::*;

fn create_section(n_div: usize) -> Section {
    let mut model = SectionModel::new();
    model
        .add_material("epp", UniaxialMaterial::elastic_pp(2.1e6, 2600.0, -2600.0))
        .unwrap();
    model
        .add_material("resp", UniaxialMaterial::elastic(1e6))
        .unwrap();

    let mut geom = SectionGeometry::new("rect");
    geom.add_region(QuadRegion::rectangle("epp", 10.0, 20.0, n_div, n_div).unwrap());
    model.add_geometry(geom).unwrap();

    model
        .new_shear_fiber_section("sa", "rect", "resp", "resp", "resp")
        .unwrap();
    model.sections.remove("sa").unwrap()
}

fn bench_rasterization(c: &mut Criterion) {
    c.bench_function("rasterize 32x32", |b| {
        b.iter(|| black_box(create_section(black_box(32))))
    });
}

fn bench_integration(c: &mut Criterion) {
    let mut section = create_section(32);
    let def = Vec6::new(1e-4, 1e-4, 1e-4, 1e-4, 1e-3, 2e-3);

    c.bench_function("integrate 32x32", |b| {
        b.iter(|| {
            section.set_trial_deformation(black_box(&def)).unwrap();
            black_box(section.stress_resultant());
            black_box(section.tangent_stiffness());
        })
    });
}

fn bench_state_determination(c: &mut Criterion) {
    let props = *create_section(32).properties();
    let load = Vec6::new(0.0, 2e4, 3e4, 1e3, 0.0, 0.9 * props.plastic_moment_z(2600.0));

    c.bench_function("newton solve to 0.9 Mp", |b| {
        b.iter(|| {
            let mut section = create_section(32);
            SectionDriver::solve(
                &mut section,
                black_box(&load),
                &ResultantComponent::all(),
                &SolveOptions::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_rasterization,
    bench_integration,
    bench_state_determination
);
criterion_main!(benches);
