use wanderstate::{
    FillBand, MapLayout, ParseOptions, Point, Region, RegionMap, Selection, Size, ZoomPan,
};

fn grid_map() -> RegionMap {
    // Two squares side by side, and a later 'overlay' covering part of both
    RegionMap::new(Size::new(20., 10.))
        .with_region(Region::new("W", "West", "M0 0 H10 V10 H0 Z").with_photo_count(1))
        .with_region(Region::new("E", "East", "M10 0 H20 V10 H10 Z").with_photo_count(40))
        .with_region(
            Region::new("O", "Overlay", "M8 4 H12 V6 H8 Z").with_additional_path("M18 8 h1 v1 h-1 z"),
        )
}

fn hit(map: &RegionMap, x: f64, y: f64) -> Option<&str> {
    map.hit_test(Point::new(x, y), &ParseOptions::default())
        .map(|r| r.code.as_str())
}

#[test]
fn test_hit_test_paint_order() {
    let map = grid_map();
    assert_eq!(hit(&map, 2., 2.), Some("W"));
    assert_eq!(hit(&map, 15., 2.), Some("E"));
    assert_eq!(hit(&map, 9., 5.), Some("O"));
    assert_eq!(hit(&map, 11., 5.), Some("O"));
    assert_eq!(hit(&map, 18.5, 8.5), Some("O"));
    assert_eq!(hit(&map, 25., 5.), None);
}

#[test]
fn test_hit_test_through_layout() {
    let map = grid_map();
    let layout = MapLayout::new(Size::new(224., 124.)).with_zoom(1.);
    // padded canvas is 200x100 so the map is drawn at 10x from (12, 12)
    let xf = layout.transform(map.view_box);
    assert_eq!(xf.scale, 10.);
    assert_eq!(xf.origin, Point::new(12., 12.));

    let tap = Point::new(12. + 150., 12. + 20.);
    let location = layout.locate(map.view_box, tap).expect("visible");
    assert_eq!(map.hit_test(location, &ParseOptions::default()).map(|r| r.code.as_str()), Some("E"));
}

#[test]
fn test_gesture_then_tap() {
    let map = grid_map();
    let canvas = Size::new(224., 124.);
    let mut zp = ZoomPan::new();
    zp.magnify(2.);
    zp.end_magnify();
    zp.drag(50., 0.);
    zp.end_drag();
    let layout = zp.apply(MapLayout::new(canvas));
    // map is 400x200 centred on (162, 62)
    assert_eq!(layout.frame_origin(map.view_box), Point::new(-38., -38.));

    let mut selection = Selection::default();
    let p = layout.locate(map.view_box, Point::new(10., 10.)).expect("visible");
    selection.tap(map.hit_test(p, &ParseOptions::default()).map(|r| r.code.as_str()));
    assert_eq!(selection.selected(), Some("W"));
    assert!(selection.details_visible());
}

#[test]
fn test_bands() {
    let map = grid_map();
    let bands: Vec<FillBand> = map.regions.iter().map(Region::fill_band).collect();
    assert_eq!(bands, [FillBand::Light, FillBand::Heavy, FillBand::Unvisited]);
}

#[cfg(feature = "json")]
#[test]
fn test_sample_map_loads() {
    let text = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/sample_map.json"))
        .expect("sample map present");
    let map = RegionMap::from_json(&text).expect("valid sample");
    assert_eq!(map.view_box, Size::new(959., 593.));
    let hi = map.get("HI").expect("has Hawaii");
    assert_eq!(hi.parts().count(), 3);
    assert_eq!(hi.fill_band(), FillBand::Medium);
    // every part of every region parses to something drawable
    for region in &map.regions {
        for g in region.geometries(&ParseOptions::default()) {
            assert!(!g.is_empty(), "{}", region.code);
        }
    }
    // centre of Colorado
    assert_eq!(
        map.hit_test(Point::new(330., 170.), &ParseOptions::default()).map(|r| r.code.as_str()),
        Some("CO")
    );
}
