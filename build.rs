use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Tell cargo to rerun this build script if the memory layout changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (unit and integration tests) need no linker scripts
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "none" {
        return;
    }

    // Get the output directory
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy the memory layout to the output directory
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();

    // Tell cargo to look in the output directory for linker scripts
    println!("cargo:rustc-link-search={}", out_dir.display());

    // CRITICAL: --nmagic keeps flash sections aligned for probe-rs
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
