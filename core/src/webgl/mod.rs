//! WebGL JavaScript module emitter.
//!
//! Serializes an [`IndexedMesh`] into a self-contained JavaScript object:
//! typed arrays for the vertex and index data, an `init()` that creates
//! and fills the VBO/IBO, and a `render(a_Position, a_Normal, a_TexCo)`
//! that binds the buffers, points the attributes at the interleaved data,
//! and draws. The emitted code assumes a `gl` context in scope.

use std::io::{self, Write};

use crate::mesh::{IndexedMesh, VertexAttributeSemantic};

/// Write the JavaScript module for `mesh` as object `name`.
///
/// `name` is used verbatim as the JavaScript identifier the module's
/// data and functions are attached to.
pub fn write_module<W: Write>(out: &mut W, name: &str, mesh: &IndexedMesh) -> io::Result<()> {
    writeln!(out, "/*")?;
    writeln!(out, " * This file was generated using the obj2webgl tool.")?;
    writeln!(out, " */")?;
    writeln!(out)?;

    write!(out, "const {name}={{}};")?;

    write!(out, "{name}.data=new Float32Array([")?;
    for (i, value) in mesh.vertex_data().iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        write!(out, "{value}")?;
    }
    write!(out, "]);")?;

    write!(out, "{name}.indexData=new Uint16Array([")?;
    for (i, index) in mesh.indices().iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        write!(out, "{index}")?;
    }
    write!(out, "]);")?;

    write!(out, "{name}.init=function(){{")?;
    write!(out, "{name}.vbo=gl.createBuffer();")?;
    write!(out, "{name}.ibo=gl.createBuffer();")?;
    write!(out, "gl.bindBuffer(gl.ARRAY_BUFFER,{name}.vbo);")?;
    write!(out, "gl.bindBuffer(gl.ELEMENT_ARRAY_BUFFER,{name}.ibo);")?;
    write!(out, "gl.bufferData(gl.ARRAY_BUFFER,{name}.data,gl.STATIC_DRAW);")?;
    write!(
        out,
        "gl.bufferData(gl.ELEMENT_ARRAY_BUFFER,{name}.indexData,gl.STATIC_DRAW);"
    )?;
    write!(out, "}};")?;

    let stride = mesh.stride_bytes();

    write!(out, "{name}.render=function(a_Position,a_Normal,a_TexCo){{")?;
    write!(out, "gl.bindBuffer(gl.ARRAY_BUFFER,{name}.vbo);")?;
    write!(out, "gl.bindBuffer(gl.ELEMENT_ARRAY_BUFFER,{name}.ibo);")?;
    write!(
        out,
        "gl.vertexAttribPointer(a_Position,3,gl.FLOAT,false,{stride},null);"
    )?;
    write!(out, "gl.enableVertexAttribArray(a_Position);")?;

    if let Some(attr) = mesh.layout().attribute(VertexAttributeSemantic::TexCoord0) {
        write!(out, "if(a_TexCo!==undefined){{")?;
        write!(
            out,
            "gl.vertexAttribPointer(a_TexCo,2,gl.FLOAT,false,{stride},{});",
            attr.offset
        )?;
        write!(out, "gl.enableVertexAttribArray(a_TexCo);")?;
        write!(out, "}}")?;
    }

    if let Some(attr) = mesh.layout().attribute(VertexAttributeSemantic::Normal) {
        write!(out, "if(a_Normal!==undefined){{")?;
        write!(
            out,
            "gl.vertexAttribPointer(a_Normal,3,gl.FLOAT,false,{stride},{});",
            attr.offset
        )?;
        write!(out, "gl.enableVertexAttribArray(a_Normal);")?;
        write!(out, "}}")?;
    }

    write!(
        out,
        "gl.drawElements(gl.TRIANGLES,{},gl.UNSIGNED_SHORT,0);",
        mesh.index_count()
    )?;
    write!(out, "}};")?;

    Ok(())
}
