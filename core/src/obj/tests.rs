//! Pipeline tests: text in, unified buffers out.

use super::parse_obj;

const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

#[test]
fn test_single_triangle_buffers() {
    let document = parse_obj(TRIANGLE).unwrap();
    let mesh = &document.mesh;
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.vertex_data().len(), 9);
    assert_eq!(mesh.indices(), &[0, 1, 2]);
    assert!(!mesh.has_texcoords());
    assert!(!mesh.has_normals());
    assert_eq!(mesh.stride_bytes(), 12);
}

#[test]
fn test_quad_fan_triangulates() {
    let input = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
}

#[test]
fn test_index_count_matches_triangle_count() {
    // A pentagon (3 triangles) and a quad (2 triangles).
    let input = "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\n\
                 f 1 2 3 4 5\nf 1 2 3 4\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert_eq!(mesh.triangle_count(), 5);
    assert_eq!(mesh.index_count(), 15);
}

#[test]
fn test_same_position_different_normals_split() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvn 0 1 0\n\
                 f 1//1 2//1 3//2\n";
    let mesh = parse_obj(input).unwrap().mesh;
    // Three corners, three distinct (position, normal) keys.
    assert_eq!(mesh.vertex_count(), 3);

    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvn 0 1 0\n\
                 f 1//1 2//1 3//1\nf 1//2 2//1 3//1\n";
    let mesh = parse_obj(input).unwrap().mesh;
    // Corner `1//2` shares position 1 with `1//1` but must get its own slot.
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 3, 1, 2]);
}

#[test]
fn test_identical_triples_share_slots() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\n\
                 f 1/1/1 2/1/1 3/1/1\nf 3/1/1 2/1/1 1/1/1\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 0]);
}

#[test]
fn test_unused_texcoord_directives_leave_no_channel() {
    // vt lines present, but no face references them.
    let input = "vt 0 0\nvt 1 1\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert!(!mesh.has_texcoords());
    assert_eq!(mesh.stride_bytes(), 12);
    assert_eq!(mesh.vertex_data().len(), 9);
}

#[test]
fn test_determinism() {
    let input = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
                 vn 0 0 1\nf 1/1/1 2/2/1 3/3/1 4/4/1\n";
    let first = parse_obj(input).unwrap().mesh;
    let second = parse_obj(input).unwrap().mesh;
    assert_eq!(first.vertex_data(), second.vertex_data());
    assert_eq!(first.indices(), second.indices());
}

#[test]
fn test_unknown_directive_line_is_inert() {
    let with_polyline = "l 1 2\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let without = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let a = parse_obj(with_polyline).unwrap().mesh;
    let b = parse_obj(without).unwrap().mesh;
    assert_eq!(a.vertex_data(), b.vertex_data());
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn test_crlf_input() {
    let input = "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert_eq!(mesh.indices(), &[0, 1, 2]);
}

#[test]
fn test_full_channel_interleaving() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvn 0 0 1\n\
                 f 1/1/1 2/2/1 3/3/1\n";
    let mesh = parse_obj(input).unwrap().mesh;
    assert!(mesh.has_texcoords());
    assert!(mesh.has_normals());
    assert_eq!(mesh.stride_bytes(), 32);
    assert_eq!(mesh.vertex_data().len(), 3 * 8);
    // Second vertex: position (1,0,0), texcoord (1,0), normal (0,0,1).
    assert_eq!(
        &mesh.vertex_data()[8..16],
        &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
}

#[test]
fn test_document_metadata() {
    let input = "mtllib materials.mtl\no cube\ng top\nusemtl shiny\ns 1\n\
                 v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
    let document = parse_obj(input).unwrap();
    assert_eq!(document.material_libs, vec!["materials.mtl"]);
    assert_eq!(document.objects, vec!["cube"]);
    assert_eq!(document.groups, vec!["top"]);
    assert_eq!(document.materials, vec!["shiny"]);
    assert!(document.smooth_shading);
}

#[test]
fn test_empty_input() {
    let document = parse_obj("").unwrap();
    assert_eq!(document.mesh.vertex_count(), 0);
    assert_eq!(document.mesh.index_count(), 0);
}
