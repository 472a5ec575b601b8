use criterion::{black_box, criterion_group, criterion_main, Criterion};

use obj2webgl_core::obj::parse_obj;
use obj2webgl_core::webgl::write_module;

/// Build an OBJ grid of `n` x `n` quads with texcoords and normals.
fn grid_obj(n: u32) -> String {
    let mut text = String::new();
    for y in 0..=n {
        for x in 0..=n {
            text.push_str(&format!("v {} {} 0\n", x, y));
            text.push_str(&format!("vt {} {}\n", x, y));
        }
    }
    text.push_str("vn 0 0 1\n");
    for y in 0..n {
        for x in 0..n {
            let a = y * (n + 1) + x + 1;
            let b = a + 1;
            let c = a + n + 2;
            let d = a + n + 1;
            text.push_str(&format!(
                "f {a}/{a}/1 {b}/{b}/1 {c}/{c}/1 {d}/{d}/1\n"
            ));
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Parsing and unification
// ---------------------------------------------------------------------------

fn bench_parse_small(c: &mut Criterion) {
    let input = grid_obj(8);
    c.bench_function("parse_grid_8x8", |b| {
        b.iter(|| parse_obj(black_box(&input)));
    });
}

fn bench_parse_medium(c: &mut Criterion) {
    let input = grid_obj(64);
    c.bench_function("parse_grid_64x64", |b| {
        b.iter(|| parse_obj(black_box(&input)));
    });
}

// ---------------------------------------------------------------------------
// Code emission
// ---------------------------------------------------------------------------

fn bench_emit(c: &mut Criterion) {
    let document = parse_obj(&grid_obj(32)).expect("grid parses");
    c.bench_function("emit_grid_32x32", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_module(&mut out, black_box("mesh"), &document.mesh).expect("write to vec");
            out
        });
    });
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_medium,
    bench_emit
);
criterion_main!(benches);
