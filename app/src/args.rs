//! Command line arguments for the obj2webgl tool.

use std::path::PathBuf;

/// Turn a Wavefront OBJ file into a WebGL JavaScript module.
///
/// The generated module defines `<NAME>.init()` to create and fill the
/// GPU buffers and `<NAME>.render(a_Position, a_Normal, a_TexCo)` to draw
/// the mesh with the given attribute locations.
#[derive(Debug, clap::Parser)]
#[command(name = "obj2webgl", version)]
pub struct Args {
    /// JavaScript identifier the generated data and functions attach to.
    pub name: String,

    /// Input OBJ file. Reads standard input when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output JavaScript file. Writes standard output when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
