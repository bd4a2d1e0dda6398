use super::*;

#[test]
fn scenario_8x10_at_72_dpi() {
    let d = DimensionSpec::new(ProductSize::In8x10, 0.75, 72.0).unwrap();
    assert_eq!(d.border_width_px(), 54.0);
    assert_eq!(d.back_border_px(), 18.0);
    assert_eq!(d.inner_width(), 576.0);
    assert_eq!(d.inner_height(), 720.0);
    assert_eq!(d.total().width, 720.0);
    assert_eq!(d.total_px(), (720, 864));
    assert_eq!(d.frame_inset_px(), 72);
    assert_eq!(d.mirror_padding_px(), 81);
}

#[test]
fn back_border_is_a_third_for_every_input() {
    for product in ProductSize::ALL {
        for dpi in [10.0, 72.0, 96.0, 150.0, 300.0] {
            for inches in [0.0, 0.1, 0.5, 0.75, 1.0, 1.3] {
                let d = DimensionSpec::new(product, inches, dpi).unwrap();
                assert_eq!(d.back_border_px(), d.border_width_px() / 3.0);
                let band = 2.0 * (d.border_width_px() + d.back_border_px());
                assert_eq!(d.total().width, d.inner_width() + band);
                assert_eq!(d.total().height, d.inner_height() + band);
            }
        }
    }
}

#[test]
fn derive_back_border_matches_spec_value() {
    assert!((derive_back_border(0.75, 300.0) - 75.0).abs() < 1e-9);
    assert!((derive_back_border(0.75, 72.0) - 18.0).abs() < 1e-9);
}

#[test]
fn changing_dpi_rederives_pixels() {
    let preview = DimensionSpec::new(ProductSize::In12x12, 0.75, PREVIEW_DPI).unwrap();
    let export = preview.at_dpi(HIGH_RES_DPI).unwrap();
    assert_eq!(export.border_width_px(), 225.0);
    assert_eq!(export.back_border_px(), 75.0);
    assert_eq!(export.inner_width(), 3600.0);
    assert_eq!(export.total_px(), (4200, 4200));
    assert_eq!(export.border_width_in(), preview.border_width_in());
}

#[test]
fn inner_size_for_unknown_key_fails() {
    assert!(inner_size_for_key("8x10", 72.0).is_ok());
    let err = inner_size_for_key("7x7", 72.0).unwrap_err();
    assert!(matches!(err, WrapError::Configuration(_)));
}

#[test]
fn total_size_adds_both_bands() {
    let t = total_size(Size::new(100.0, 50.0), 9.0, 3.0);
    assert_eq!(t, Size::new(124.0, 74.0));
}

#[test]
fn rejects_non_positive_dpi_and_negative_border() {
    assert!(DimensionSpec::new(ProductSize::In9x9, 0.75, 0.0).is_err());
    assert!(DimensionSpec::new(ProductSize::In9x9, 0.75, f64::NAN).is_err());
    assert!(DimensionSpec::new(ProductSize::In9x9, -0.1, 72.0).is_err());
}

#[test]
fn label_font_has_floor() {
    let low = DimensionSpec::new(ProductSize::In9x9, 0.75, 10.0).unwrap();
    assert_eq!(low.label_font_px(), 12.0);
    let high = DimensionSpec::new(ProductSize::In9x9, 0.75, 300.0).unwrap();
    assert_eq!(high.label_font_px(), 50.0);
}
