#![forbid(unsafe_code)]

fn main() {
    // Only the compiler version is captured.  The git-derived values that
    // build-data can also set would fail outside a git checkout.
    build_data::set_RUSTC_VERSION();

    // Tells cargo not to rebuild build.rs during debug builds when other files change.
    // This speeds up development builds.
    //build_data::no_debug_rebuilds();
}
