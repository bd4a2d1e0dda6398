use super::*;
use crate::dimension::catalog::ProductSize;

fn dims() -> DimensionSpec {
    // 8x10 at 10 dpi: border 7.5, back 2.5 -> total 100x120, frame inset 10, back inset 3.
    DimensionSpec::new(ProductSize::In8x10, 0.75, 10.0).unwrap()
}

const FRAMES_ONLY: GuideSpec = GuideSpec {
    frames: true,
    labels: None,
    stroke_px: 2.0,
};

#[test]
fn svg_contains_both_fold_rectangles() {
    let svg = guide_svg(&dims(), &FRAMES_ONLY);
    assert!(svg.contains(r#"<rect x="10" y="10" width="80" height="100""#));
    assert!(svg.contains(r#"<rect x="3" y="3" width="94" height="114""#));
    assert!(svg.contains(r#"stroke-dasharray="5 5""#));
    assert!(!svg.contains("<text"));
}

#[test]
fn svg_labels_are_centered_in_their_bands() {
    let spec = GuideSpec {
        frames: false,
        labels: Some(GuideLabels::SIDES),
        stroke_px: 2.0,
    };
    let svg = guide_svg(&dims(), &spec);
    assert!(!svg.contains("<rect"));
    assert!(svg.contains(r#"<text x="50" y="6.5""#));
    assert!(svg.contains(">Sides</text>"));
    assert!(svg.contains(">Back</text>"));
    assert!(svg.contains(r#"font-size="12""#));
}

#[test]
fn rendered_frames_are_sparse_and_stay_out_of_the_face() {
    let d = dims();
    let raster = render_guides(&d, &FRAMES_ONLY).unwrap();
    assert_eq!((raster.width, raster.height), d.total_px());

    let painted = raster.data.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(painted > 0);
    assert!(painted < (raster.width * raster.height / 4) as usize);

    // The center of the front face carries no guide ink.
    assert_eq!(raster.pixel(50, 60), [0, 0, 0, 0]);
}
