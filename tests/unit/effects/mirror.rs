use super::*;
use crate::dimension::catalog::ProductSize;

fn dims() -> DimensionSpec {
    // 9x9 at 8 dpi: border 6, back 2 -> total 88x88, mirror padding 9.
    DimensionSpec::new(ProductSize::In9x9, 0.75, 8.0).unwrap()
}

/// Every pixel unique-ish so reflections are observable.
fn gradient(w: u32, h: u32) -> Raster {
    let mut r = Raster::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            r.set_pixel(x, y, [(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8, 255]);
        }
    }
    r
}

#[test]
fn reflect_map_is_identity_inside_and_reflects_outside() {
    let m = reflect_map(10, 3);
    assert_eq!(m, vec![6, 5, 4, 3, 4, 5, 6, 5, 4, 3]);
}

#[test]
fn reflect_map_degenerate_padding_keeps_a_tile() {
    assert_eq!(reflect_map(3, 10), vec![1, 1, 1]);
    assert_eq!(reflect_map(1, 4), vec![0]);
    assert!(reflect_map(0, 4).is_empty());
}

#[test]
fn center_region_is_untouched() {
    let d = dims();
    let (w, h) = d.total_px();
    let src = gradient(w, h);
    let out = mirror_tile(&src, &d).unwrap();
    let pad = d.mirror_padding_px();
    for y in pad..h - pad {
        for x in pad..w - pad {
            assert_eq!(out.pixel(x, y), src.pixel(x, y));
        }
    }
}

#[test]
fn output_is_symmetric_about_every_padding_edge() {
    let d = dims();
    let (w, h) = d.total_px();
    let out = mirror_tile(&gradient(w, h), &d).unwrap();
    let pad = d.mirror_padding_px();
    let right = w - pad - 1;
    let bottom = h - pad - 1;

    for d in 1..=pad {
        for y in 0..h {
            assert_eq!(out.pixel(pad - d, y), out.pixel(pad + d, y));
            assert_eq!(out.pixel(right + d, y), out.pixel(right - d, y));
        }
        for x in 0..w {
            assert_eq!(out.pixel(x, pad - d), out.pixel(x, pad + d));
            assert_eq!(out.pixel(x, bottom + d), out.pixel(x, bottom - d));
        }
    }
}

#[test]
fn corners_flip_both_axes() {
    let d = dims();
    let (w, h) = d.total_px();
    let src = gradient(w, h);
    let out = mirror_tile(&src, &d).unwrap();
    let pad = d.mirror_padding_px();
    assert_eq!(out.pixel(0, 0), src.pixel(2 * pad, 2 * pad));
    assert_eq!(out.pixel(w - 1, h - 1), src.pixel(w - 1 - 2 * pad, h - 1 - 2 * pad));
}

#[test]
fn source_is_not_mutated_and_mismatched_sizes_are_fitted() {
    let d = dims();
    let src = gradient(44, 44);
    let copy = src.clone();
    let out = mirror_tile(&src, &d).unwrap();
    assert_eq!(src, copy);
    assert_eq!((out.width, out.height), d.total_px());
}

#[test]
fn preview_adds_guides_over_the_tile() {
    let d = dims();
    let (w, h) = d.total_px();
    let src = Raster::filled(w, h, crate::foundation::core::Rgba8Premul::BLACK).unwrap();
    let plain = mirror_tile(&src, &d).unwrap();
    let preview = mirror_wrap_preview(&src, &d, 2.0).unwrap();
    assert_ne!(plain, preview);
    let frame = d.frame_inset_px();
    // Dashes start at the rectangle corner.
    assert_ne!(preview.pixel(frame, frame), [0, 0, 0, 255]);
}
