use super::*;

#[test]
fn geometry_roundtrips_through_rect() {
    let attrs = ElementAttrs::default().with_geometry(Rect::new(10.0, 20.0, 110.0, 70.0));
    assert_eq!((attrs.x, attrs.y, attrs.width, attrs.height), (10.0, 20.0, 100.0, 50.0));
    assert_eq!(attrs.geometry(), Rect::new(10.0, 20.0, 110.0, 70.0));
}

#[test]
fn defaults_are_a_plain_editable_element() {
    let attrs = ElementAttrs::default();
    assert!(attrs.visible && attrs.selectable && attrs.draggable && attrs.show_in_export);
    assert!(!attrs.always_on_top);
    assert!(attrs.source.is_none());
}

#[test]
fn patch_touches_only_given_fields() {
    let mut attrs = ElementAttrs::default().with_geometry(Rect::new(1.0, 2.0, 4.0, 6.0));
    let touched = ElementPatch::visible(false).with_size(8.0, 9.0).apply(&mut attrs);
    assert!(touched);
    assert!(!attrs.visible);
    assert_eq!((attrs.x, attrs.y, attrs.width, attrs.height), (1.0, 2.0, 8.0, 9.0));

    assert!(!ElementPatch::default().apply(&mut attrs));
}

#[test]
fn patch_can_replace_source() {
    let mut attrs = ElementAttrs::default();
    let raster = Raster::new(2, 2).unwrap();
    ElementPatch::default()
        .with_source(raster.clone())
        .apply(&mut attrs);
    assert_eq!(attrs.source.as_deref(), Some(&raster));
}
