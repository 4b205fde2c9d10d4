fn main() {
    // The editor frontend is embedded with include_dir!, but cargo only
    // tracks Rust sources on its own.
    println!("cargo:rerun-if-changed=frontend/dist");
}
