//! Entry point for the WASM application

pub fn main() {
    fingerprint_web::run();
}
