use super::*;
use crate::dimension::catalog::ProductSize;
use crate::foundation::core::Rgba8Premul;

fn dims() -> DimensionSpec {
    DimensionSpec::new(ProductSize::In9x9, 0.75, 8.0).unwrap()
}

const BLUR: BlurSettings = BlurSettings {
    sigma_px: 2.0,
    reference_dpi: 8.0,
};

/// Left half red, right half blue.
fn split(w: u32, h: u32) -> Raster {
    let mut r = Raster::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let px = if x < w / 2 {
                [255, 0, 0, 255]
            } else {
                [0, 0, 255, 255]
            };
            r.set_pixel(x, y, px);
        }
    }
    r
}

#[test]
fn blur_wrap_clears_the_face() {
    let d = dims();
    let (w, h) = d.total_px();
    let out = blur_wrap(&split(w, h), &d, BLUR, false).unwrap();
    let face = PixelRect::inset(w, h, d.frame_inset_px());
    for y in face.y0..face.y1 {
        for x in face.x0..face.x1 {
            assert_eq!(out.pixel(x, y), [0, 0, 0, 0]);
        }
    }
    assert_eq!(out.pixel(0, 0)[3], 255);
}

#[test]
fn blur_band_softens_edges_inside_the_band() {
    let d = dims();
    let (w, h) = d.total_px();
    let src = split(w, h);
    let out = blur_wrap(&src, &d, BLUR, false).unwrap();
    // Top band, right at the red/blue seam: both channels mixed.
    let px = out.pixel(w / 2, 1);
    assert!(px[0] > 0 && px[2] > 0, "{px:?}");
    // Far from the seam the band keeps the source color.
    assert_eq!(out.pixel(2, 1), [255, 0, 0, 255]);
}

#[test]
fn image_wrap_guides_have_no_image_content() {
    let d = dims();
    let g = image_wrap_guides(&d, 2.0).unwrap();
    assert_eq!((g.width, g.height), d.total_px());
    assert_eq!(g.pixel(44, 44), [0, 0, 0, 0]);
    assert_eq!(g.pixel(0, 44), [0, 0, 0, 0]);
}

#[test]
fn blur_above_reference_dpi_downsamples() {
    let src = Raster::filled(40, 20, Rgba8Premul::WHITE).unwrap();
    let out = blur_at_dpi(&src, 16.0, BLUR).unwrap();
    assert_eq!((out.width, out.height), (40, 20));
    assert!(out.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn blur_band_keeps_the_band_and_clears_the_face() {
    let d = dims();
    let (w, h) = d.total_px();
    let sharp = Raster::filled(w, h, Rgba8Premul::BLACK).unwrap();
    let blurred = split(w, h);
    let out = blur_band(&sharp, &blurred, &d).unwrap();
    let face = PixelRect::inset(w, h, d.frame_inset_px());
    assert_eq!(out.pixel(face.x0, face.y0), [0, 0, 0, 0]);
    assert_eq!(out.pixel(face.x1 - 1, face.y1 - 1), [0, 0, 0, 0]);
    assert_eq!(out.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(out.pixel(w - 1, h - 1), [0, 0, 255, 255]);
}

#[test]
fn blur_band_rejects_mismatched_layers() {
    let d = dims();
    let (w, h) = d.total_px();
    let sharp = Raster::new(w, h).unwrap();
    let blurred = Raster::new(w + 1, h).unwrap();
    assert!(blur_band(&sharp, &blurred, &d).is_err());
}
