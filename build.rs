//! Build script: stage the matching memory.x for the selected Pico target.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Host builds need no linker script; thumb targets pick the board's.
    let memory_x = if target.starts_with("thumbv6m") {
        Some("memory-pico1.x")
    } else if target.starts_with("thumbv8m") {
        Some("memory-pico2.x")
    } else {
        None
    };

    if let Some(name) = memory_x {
        let contents =
            fs::read_to_string(name).unwrap_or_else(|_| panic!("Failed to read {name}"));
        fs::write(out_dir.join("memory.x"), contents).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={name}");
    }
}
