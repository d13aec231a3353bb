// CLASSIFICATION: COMMUNITY
// Filename: build.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

// Builds the variadic ioctl double used by the integration tests. The
// archive is only pulled into binaries that reference its symbols.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=tests/support/ioctl_double.c");

    cc::Build::new()
        .file("tests/support/ioctl_double.c")
        .warnings(true)
        .compile("i2c_bridge_double");
}
