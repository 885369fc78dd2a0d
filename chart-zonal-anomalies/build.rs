//! Build script for chart-zonal-anomalies.
//!
//! Copies the zonal contribution CSVs and the region map PNG from
//! `fixtures/` into OUT_DIR for `include_str!` / `include_bytes!`. A missing
//! fixture becomes an empty placeholder and is listed in
//! `ZCA_MISSING_FIXTURES` so the app can say which file to add.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURE_DIR: &str = "../fixtures";

const FIXTURES: [&str; 3] = [
    "sst_zonal_contributions.csv",
    "t2m_zonal_contributions.csv",
    "zonal_subdivisions_map.png",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut missing = Vec::new();

    for name in FIXTURES {
        let src = Path::new(FIXTURE_DIR).join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture {} not found, embedding empty placeholder",
                src.display()
            );
            missing.push(name);
        }
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rustc-env=ZCA_MISSING_FIXTURES={}", missing.join(","));
    println!("cargo:rerun-if-changed=build.rs");
}
