fn main() {
    // The backend URL is baked in with option_env!
    println!("cargo:rerun-if-env-changed=VD_BACKEND_URL");
}
