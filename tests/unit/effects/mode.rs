use super::*;
use crate::dimension::catalog::ProductSize;
use crate::foundation::core::Rgba8Premul;

fn style() -> EffectStyle {
    EffectStyle {
        blur: BlurSettings {
            sigma_px: 1.0,
            reference_dpi: 6.0,
        },
        guide_stroke_px: 2.0,
    }
}

fn dims() -> DimensionSpec {
    DimensionSpec::new(ProductSize::In8x10, 0.75, 6.0).unwrap()
}

fn snapshot(d: &DimensionSpec) -> Raster {
    let (w, h) = d.total_px();
    Raster::filled(w, h, Rgba8Premul::from_straight_rgba(0, 128, 0, 255)).unwrap()
}

fn kinds(plan: &OverlayPlan) -> Vec<OverlayKind> {
    plan.layers.iter().map(|(k, _)| *k).collect()
}

#[test]
fn overlay_sets_are_disjoint() {
    for a in EffectMode::ALL {
        for b in EffectMode::ALL {
            if a != b {
                assert!(a.overlays().iter().all(|k| !b.overlays().contains(k)));
            }
        }
    }
    assert!(EffectMode::Mirror.tracks_content());
    assert!(EffectMode::ImageWrap.tracks_content());
    assert!(!EffectMode::Border.tracks_content());
    assert!(!EffectMode::None.tracks_content());
}

#[test]
fn parses_mode_spellings() {
    assert_eq!("imageWrap".parse::<EffectMode>().unwrap(), EffectMode::ImageWrap);
    assert_eq!("image-wrap".parse::<EffectMode>().unwrap(), EffectMode::ImageWrap);
    assert_eq!("Mirror".parse::<EffectMode>().unwrap(), EffectMode::Mirror);
    assert_eq!("solid_border".parse::<EffectMode>().unwrap(), EffectMode::Border);
    assert!("sepia".parse::<EffectMode>().is_err());
    for mode in EffectMode::ALL {
        assert_eq!(mode.key().parse::<EffectMode>().unwrap(), mode);
    }
}

#[test]
fn composite_produces_layers_of_the_mode() {
    let d = dims();
    let snap = snapshot(&d);
    let params = EffectParams::default();
    for mode in EffectMode::ALL {
        let plan = composite(mode, &snap, &d, &params, &style(), RenderTarget::Preview).unwrap();
        assert_eq!(kinds(&plan), mode.overlays());
        for (_, raster) in &plan.layers {
            assert_eq!((raster.width, raster.height), d.total_px());
        }
    }
}

#[test]
fn export_target_drops_guide_only_layers() {
    let d = dims();
    let snap = snapshot(&d);
    let params = EffectParams::default();
    let plan = composite(
        EffectMode::ImageWrap,
        &snap,
        &d,
        &params,
        &style(),
        RenderTarget::Export,
    )
    .unwrap();
    assert_eq!(kinds(&plan), vec![OverlayKind::BlurOverlay]);

    let plan = composite(
        EffectMode::Mirror,
        &snap,
        &d,
        &params,
        &style(),
        RenderTarget::Export,
    )
    .unwrap();
    // Guide-free mirror of a flat snapshot is the snapshot.
    assert_eq!(plan.get(OverlayKind::MirrorWrap), Some(&snap));
}

#[test]
fn border_uses_the_requested_color() {
    let d = dims();
    let params = EffectParams {
        border_color: "#ff0000".parse().unwrap(),
    };
    let plan = composite(
        EffectMode::Border,
        &snapshot(&d),
        &d,
        &params,
        &style(),
        RenderTarget::Preview,
    )
    .unwrap();
    let border = plan.get(OverlayKind::Border).unwrap();
    assert_eq!(border.pixel(0, 0), [255, 0, 0, 255]);
}

#[test]
fn params_default_to_black_and_deserialize_hex() {
    assert_eq!(EffectParams::default().border_color, Color::BLACK);
    let p: EffectParams = serde_json::from_str(r##"{"border_color":"#00ff00"}"##).unwrap();
    assert_eq!(p.border_color, Color::rgb(0, 255, 0));
}
