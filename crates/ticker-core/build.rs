// File: crates/ticker-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by the system font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
