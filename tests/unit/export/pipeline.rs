use super::*;
use crate::dimension::catalog::ProductSize;
use crate::effects::wrap::BlurSettings;
use crate::foundation::color::Color;
use crate::foundation::core::Rgba8Premul;

const GREEN: [u8; 4] = [0, 160, 0, 255];

fn style() -> EffectStyle {
    EffectStyle {
        blur: BlurSettings {
            sigma_px: 2.0,
            reference_dpi: 6.0,
        },
        guide_stroke_px: 2.0,
    }
}

fn preview_snapshot() -> Raster {
    let d = DimensionSpec::new(ProductSize::In8x10, 0.75, 6.0).unwrap();
    let (w, h) = d.total_px();
    Raster::filled(w, h, Rgba8Premul::from_straight_rgba(0, 160, 0, 255)).unwrap()
}

fn export_dims() -> DimensionSpec {
    DimensionSpec::new(ProductSize::In8x10, 0.75, 12.0).unwrap()
}

fn near(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 1)
}

fn all_near(r: &Raster, px: [u8; 4]) -> bool {
    r.data.chunks_exact(4).all(|p| near([p[0], p[1], p[2], p[3]], px))
}

#[test]
fn passthrough_scales_snapshot_to_export_size() {
    let d = export_dims();
    let out = render_export(
        &preview_snapshot(),
        EffectMode::None,
        &EffectParams::default(),
        &d,
        &style(),
    )
    .unwrap();
    assert_eq!((out.width, out.height), d.total_px());
    assert!(all_near(&out, GREEN));
}

#[test]
fn border_is_rederived_at_export_dpi() {
    let d = export_dims();
    let params = EffectParams {
        border_color: Color::rgb(200, 0, 0),
    };
    let out = render_export(&preview_snapshot(), EffectMode::Border, &params, &d, &style()).unwrap();
    let inset = d.frame_inset_px();
    assert_eq!(inset, 12);
    assert_eq!(out.pixel(0, 0), [200, 0, 0, 255]);
    assert_eq!(out.pixel(inset - 1, inset - 1), [200, 0, 0, 255]);
    assert!(near(out.pixel(inset, inset), GREEN));
    assert!(near(out.pixel(out.width / 2, out.height / 2), GREEN));
}

#[test]
fn mirror_export_has_no_guides() {
    let out = render_export(
        &preview_snapshot(),
        EffectMode::Mirror,
        &EffectParams::default(),
        &export_dims(),
        &style(),
    )
    .unwrap();
    assert!(all_near(&out, GREEN));
}

#[test]
fn image_wrap_export_has_no_guides_or_labels() {
    let out = render_export(
        &preview_snapshot(),
        EffectMode::ImageWrap,
        &EffectParams::default(),
        &export_dims(),
        &style(),
    )
    .unwrap();
    assert!(all_near(&out, GREEN));
}

#[test]
fn other_product_sizes_stretch_the_design() {
    let d = DimensionSpec::new(ProductSize::In12x12, 0.75, 12.0).unwrap();
    let out = render_export(
        &preview_snapshot(),
        EffectMode::None,
        &EffectParams::default(),
        &d,
        &style(),
    )
    .unwrap();
    assert_eq!((out.width, out.height), (168, 168));
}
