//! obj2webgl: read an OBJ file, write a WebGL JavaScript module.

mod args;

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::args::Args;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    obj2webgl_core::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let document = obj2webgl_core::obj::parse_obj(&input)?;
    log::info!(
        "parsed mesh: {} vertices, {} triangles, stride {} bytes",
        document.mesh.vertex_count(),
        document.mesh.triangle_count(),
        document.mesh.stride_bytes()
    );

    // The module is rendered in memory first, so a failed parse or write
    // never leaves a partial output file behind.
    let mut code = Vec::new();
    obj2webgl_core::webgl::write_module(&mut code, &args.name, &document.mesh)?;

    match &args.output {
        Some(path) => fs::write(path, &code)?,
        None => io::stdout().write_all(&code)?,
    }

    Ok(())
}
