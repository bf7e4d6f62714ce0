//! Quadrilateral fiber region

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// A quadrilateral patch of fibers within a section geometry
///
/// Corners I, J, K, L are given in the section's local (y, z) frame in
/// consecutive order around the perimeter. Rasterization subdivides the
/// patch bilinearly into `n_div_ij` cells along the I-J edge and `n_div_jk`
/// cells along the J-K edge; each cell becomes one fiber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadRegion {
    /// Material name, resolved against the model's material registry
    pub material: String,
    /// Corner coordinates [(y, z); 4] in perimeter order I, J, K, L
    pub corners: [[f64; 2]; 4],
    /// Number of divisions along the I-J direction
    pub n_div_ij: usize,
    /// Number of divisions along the J-K direction
    pub n_div_jk: usize,
}

/// One rasterized cell: centroid position and area
#[derive(Debug, Clone, Copy)]
pub struct RegionCell {
    pub y: f64,
    pub z: f64,
    pub area: f64,
}

impl QuadRegion {
    /// Create a new quadrilateral region
    ///
    /// Fails with `InvalidGeometry` on non-positive division counts or a
    /// degenerate corner polygon.
    pub fn new(
        material: &str,
        corners: [[f64; 2]; 4],
        n_div_ij: usize,
        n_div_jk: usize,
    ) -> SectionResult<Self> {
        if n_div_ij == 0 || n_div_jk == 0 {
            return Err(SectionError::InvalidGeometry(format!(
                "division counts must be positive (got {n_div_ij}x{n_div_jk})"
            )));
        }
        let region = Self {
            material: material.to_string(),
            corners,
            n_div_ij,
            n_div_jk,
        };
        if region.signed_area().abs() < 1e-14 {
            return Err(SectionError::InvalidGeometry(
                "degenerate region: corner polygon has zero area".to_string(),
            ));
        }
        Ok(region)
    }

    /// Create a rectangular region of the given width (z extent) and depth
    /// (y extent), centered on the local origin
    pub fn rectangle(
        material: &str,
        width: f64,
        depth: f64,
        n_div_ij: usize,
        n_div_jk: usize,
    ) -> SectionResult<Self> {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        Self::new(
            material,
            [[-hd, -hw], [-hd, hw], [hd, hw], [hd, -hw]],
            n_div_ij,
            n_div_jk,
        )
    }

    /// Signed shoelace area of the corner polygon
    fn signed_area(&self) -> f64 {
        shoelace(&self.corners)
    }

    /// Bilinear interpolation of the corners at parametric (xi, eta)
    fn map(&self, xi: f64, eta: f64) -> [f64; 2] {
        let [i, j, k, l] = self.corners;
        let mut p = [0.0; 2];
        for d in 0..2 {
            p[d] = (1.0 - xi) * (1.0 - eta) * i[d]
                + xi * (1.0 - eta) * j[d]
                + xi * eta * k[d]
                + (1.0 - xi) * eta * l[d];
        }
        p
    }

    /// Rasterize the region into cells, row-major: J-K index outer, I-J
    /// index inner. The order is stable so downstream fiber indices are
    /// reproducible.
    pub fn cells(&self) -> SectionResult<Vec<RegionCell>> {
        let region_sign = self.signed_area().signum();
        let ni = self.n_div_ij;
        let nj = self.n_div_jk;
        let mut cells = Vec::with_capacity(ni * nj);

        for j in 0..nj {
            let eta0 = j as f64 / nj as f64;
            let eta1 = (j + 1) as f64 / nj as f64;
            for i in 0..ni {
                let xi0 = i as f64 / ni as f64;
                let xi1 = (i + 1) as f64 / ni as f64;

                let quad = [
                    self.map(xi0, eta0),
                    self.map(xi1, eta0),
                    self.map(xi1, eta1),
                    self.map(xi0, eta1),
                ];
                let signed = shoelace(&quad);
                if signed * region_sign <= 0.0 {
                    return Err(SectionError::InvalidGeometry(format!(
                        "degenerate cell ({i}, {j}): non-positive area"
                    )));
                }

                let y = quad.iter().map(|c| c[0]).sum::<f64>() / 4.0;
                let z = quad.iter().map(|c| c[1]).sum::<f64>() / 4.0;
                cells.push(RegionCell {
                    y,
                    z,
                    area: signed.abs(),
                });
            }
        }
        Ok(cells)
    }

    /// Total fiber count contributed by this region
    pub fn fiber_count(&self) -> usize {
        self.n_div_ij * self.n_div_jk
    }
}

fn shoelace(poly: &[[f64; 2]; 4]) -> f64 {
    let mut sum = 0.0;
    for i in 0..4 {
        let [y0, z0] = poly[i];
        let [y1, z1] = poly[(i + 1) % 4];
        sum += y0 * z1 - y1 * z0;
    }
    sum / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_cell_areas_sum_to_total() {
        let region = QuadRegion::rectangle("mat", 0.1, 0.2, 8, 4).unwrap();
        let cells = region.cells().unwrap();
        assert_eq!(cells.len(), 32);
        let total: f64 = cells.iter().map(|c| c.area).sum();
        assert_relative_eq!(total, 0.02, max_relative = 1e-12);
    }

    #[test]
    fn test_rectangle_cell_centroids_are_centered() {
        let region = QuadRegion::rectangle("mat", 1.0, 1.0, 2, 2).unwrap();
        let cells = region.cells().unwrap();
        // 2x2 grid over a unit square centered at the origin
        for cell in &cells {
            assert_relative_eq!(cell.y.abs(), 0.25, max_relative = 1e-12);
            assert_relative_eq!(cell.z.abs(), 0.25, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_divisions_rejected() {
        let err = QuadRegion::rectangle("mat", 1.0, 1.0, 0, 4).unwrap_err();
        assert!(matches!(err, SectionError::InvalidGeometry(_)));
    }

    #[test]
    fn test_degenerate_corners_rejected() {
        let corners = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]];
        let err = QuadRegion::new("mat", corners, 2, 2).unwrap_err();
        assert!(matches!(err, SectionError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rasterization_order_is_stable() {
        let region = QuadRegion::rectangle("mat", 1.0, 1.0, 2, 2).unwrap();
        let a = region.cells().unwrap();
        let b = region.cells().unwrap();
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.y, cb.y);
            assert_eq!(ca.z, cb.z);
            assert_eq!(ca.area, cb.area);
        }
        // First cell is the I-corner cell, last the K-corner cell
        assert!(a[0].y < 0.0 && a[0].z < 0.0);
        assert!(a[3].y > 0.0);
    }
}
