use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn composite_over_rejects_size_mismatch() {
    let mut a = Raster::new(2, 2).unwrap();
    let b = Raster::new(3, 2).unwrap();
    assert!(composite_over(&mut a, &b).is_err());
}

#[test]
fn draw_over_at_clips_negative_offsets() {
    let mut dst = Raster::new(4, 4).unwrap();
    let src = Raster::filled(3, 3, Rgba8Premul::WHITE).unwrap();
    draw_over_at(&mut dst, &src, -2, 2);

    assert_eq!(dst.pixel(0, 2), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(0, 3), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(1, 2), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(0, 1), [0, 0, 0, 0]);
}

#[test]
fn draw_over_at_fully_outside_is_noop() {
    let mut dst = Raster::new(4, 4).unwrap();
    let src = Raster::filled(2, 2, Rgba8Premul::WHITE).unwrap();
    draw_over_at(&mut dst, &src, 10, 0);
    assert!(dst.data.iter().all(|&b| b == 0));
}

#[test]
fn clear_rect_erases_only_inside() {
    let mut r = Raster::filled(5, 5, Rgba8Premul::BLACK).unwrap();
    clear_rect(&mut r, PixelRect::new(1, 1, 4, 4));
    assert_eq!(r.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(r.pixel(1, 1), [0, 0, 0, 0]);
    assert_eq!(r.pixel(3, 3), [0, 0, 0, 0]);
    assert_eq!(r.pixel(4, 3), [0, 0, 0, 255]);
}

#[test]
fn fill_rect_is_clipped_to_raster() {
    let mut r = Raster::new(3, 3).unwrap();
    fill_rect(&mut r, PixelRect::new(2, 2, 10, 10), Rgba8Premul::WHITE);
    assert_eq!(r.pixel(2, 2), [255, 255, 255, 255]);
    assert_eq!(r.pixel(1, 2), [0, 0, 0, 0]);
}
