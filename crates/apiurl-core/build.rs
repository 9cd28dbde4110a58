fn main() {
    // `option_env!("VITE_API_URL")` is baked in; rebuild when it changes.
    println!("cargo:rerun-if-env-changed=VITE_API_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
