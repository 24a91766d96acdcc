// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Prints the standard Landau density on a grid and evaluates a two-peak model.
//!
//! ```text
//! cargo run --example landau_table
//! cargo +nightly run --example landau_table --features simd
//! ```

use log::info;
use minarrow::{Bitmask, Vec64};

use landau_kernels::kernels::scientific::distributions::univariate::landau::{
    LandauMixture, landau_fit, landau_pdf, landau_regime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let mut x = Vec64::with_capacity(64);
    for i in 0..64 {
        x.push(-6.0 + i as f64 * 0.5);
    }

    let pdf = landau_pdf(&x, 1.0, 0.0, None, None)?;
    println!("{:>8}  {:>24}  regime", "v", "density");
    for (v, f) in x.iter().zip(pdf.data.iter()) {
        println!("{:>8.2}  {:>24.16e}  {:?}", v, f, landau_regime(*v));
    }

    // Two overlapping deposits, with the last bin masked out as a dead channel
    let model = LandauMixture::from_params(&[100.0, 1.0, 0.5, 40.0, 6.0, 2.0]);
    let mut mask = Bitmask::new_set_all(x.len(), true);
    mask.set(x.len() - 1, false);
    let y = landau_fit(&x, &model, Some(&mask), Some(1))?;
    let (peak_at, peak) = x
        .iter()
        .zip(y.data.iter())
        .filter(|(_, f)| !f.is_nan())
        .fold((0.0, 0.0), |acc, (&v, &f)| if f > acc.1 { (v, f) } else { acc });
    info!("mixture {:?}: maximum {:.6} at x = {:.2}", model.to_params(), peak, peak_at);

    // A zero width is not an error, it only zeroes the output
    let flat = landau_pdf(&x, 0.0, 0.0, None, None)?;
    info!("xi = 0 -> max density {}", flat.data.iter().cloned().fold(0.0, f64::max));

    info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
