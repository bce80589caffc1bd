//! Final-lattice snapshot rendering.

use std::path::Path;

use image::{Rgb, RgbImage};
use ising_core::errors::ErrorInfo;
use ising_core::IsingError;
use ising_mcmc::SpinLattice;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const SPIN_UP: Rgb<u8> = Rgb([0, 0, 0]);

/// Renders the lattice one pixel per cell: black where the spin is positive,
/// background color everywhere else.
pub fn render_lattice(lattice: &SpinLattice) -> RgbImage {
    let n = lattice.side() as u32;
    let mut img = RgbImage::from_pixel(n, n, BACKGROUND);
    for i in 0..n {
        for j in 0..n {
            if lattice.spin(i as i64, j as i64) > 0 {
                img.put_pixel(j, i, SPIN_UP);
            }
        }
    }
    img
}

/// Renders the lattice and saves it as a PNG file.
pub fn save_png(lattice: &SpinLattice, path: &Path) -> Result<(), IsingError> {
    render_lattice(lattice).save(path).map_err(|err| {
        IsingError::Serde(
            ErrorInfo::new("image-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
