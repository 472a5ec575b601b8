//! # obj2webgl Core
//!
//! Core crate for the obj2webgl tool: parses the recognized subset of the
//! Wavefront OBJ grammar into a GPU-ready indexed mesh and emits that mesh
//! as a self-contained WebGL JavaScript module.

pub mod math;
pub mod mesh;
pub mod obj;
pub mod webgl;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core library version at startup.
pub fn init() {
    log::info!("obj2webgl core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
