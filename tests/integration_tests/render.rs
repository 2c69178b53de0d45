use assertables::{assert_contains, assert_not_contains};
use wanderstate::{render_map, render_map_json, Point, Region, RegionMap, RenderConfig, Size};

fn banded_map() -> RegionMap {
    [0, 1, 10, 11, 25, 26]
        .into_iter()
        .enumerate()
        .fold(RegionMap::new(Size::new(60., 10.)), |map, (i, count)| {
            let x = i * 10;
            map.with_region(
                Region::new(format!("R{i}"), format!("Region {i}"), format!("M{x} 0 h10 v10 h-10 z"))
                    .with_photo_count(count),
            )
        })
}

fn config() -> RenderConfig {
    RenderConfig {
        canvas: Size::new(600., 100.),
        padding: 0.,
        ..Default::default()
    }
}

#[test]
fn test_render_fill_bands() {
    let svg = render_map(&banded_map(), &config()).expect("render");
    for (code, fill) in [
        ("R0", "#CCCCCC"),
        ("R1", "#90EE90"),
        ("R2", "#90EE90"),
        ("R3", "#32CD32"),
        ("R4", "#32CD32"),
        ("R5", "#228B22"),
    ] {
        assert_contains!(svg, &format!(r#"<g id="{code}" fill="{fill}""#));
    }
    assert_contains!(svg, "<title>Region 1: 1 photo</title>");
    assert_contains!(svg, "<title>Region 5: 26 photos</title>");
}

#[test]
fn test_render_selection_stroke() {
    let cfg = RenderConfig {
        selected: Some("R2".into()),
        ..config()
    };
    let svg = render_map(&banded_map(), &cfg).expect("render");
    assert_contains!(svg, r##"<g id="R2" fill="#90EE90" stroke="blue" stroke-width="2">"##);
    assert_contains!(svg, r##"<g id="R1" fill="#90EE90" stroke="white" stroke-width="0.75">"##);
    assert_eq!(svg.matches(r#"stroke="blue""#).count(), 1);

    let cfg = RenderConfig {
        selected: Some("nowhere".into()),
        ..config()
    };
    assert_not_contains!(render_map(&banded_map(), &cfg).expect("render"), "blue");
}

#[test]
fn test_render_scaled_and_framed() {
    let svg = render_map(&banded_map(), &config()).expect("render");
    assert_contains!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="100" viewBox="0 0 600 100">"#);
    assert_contains!(svg, r#"<g transform="translate(0 0)">"#);
    assert_contains!(svg, r#"<path d="M 100 0 L 200 0 L 200 100 L 100 100 Z"/>"#);

    // panning moves the frame, not the path data
    let cfg = RenderConfig {
        offset: Point::new(5., -5.),
        ..config()
    };
    let panned = render_map(&banded_map(), &cfg).expect("render");
    assert_contains!(panned, r#"<g transform="translate(5 -5)">"#);
    assert_contains!(panned, r#"<path d="M 100 0 L 200 0 L 200 100 L 100 100 Z"/>"#);
}

#[test]
fn test_render_skips_empty_parts() {
    let map = RegionMap::new(Size::new(10., 10.))
        .with_region(Region::new("E", "Empty", "").with_additional_path("M0 0 H5 V5 Z"));
    let svg = render_map(&map, &RenderConfig::default()).expect("render");
    assert_eq!(svg.matches("<path").count(), 1);
    assert_contains!(svg, r#"<g id="E""#);
}

#[test]
fn test_render_json_canvas_coordinates() {
    let cfg = RenderConfig {
        offset: Point::new(5., -5.),
        selected: Some("R5".into()),
        ..config()
    };
    let json = render_map_json(&banded_map(), &cfg).expect("render");
    let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(v["canvas"], serde_json::json!([600.0, 100.0]));
    assert_eq!(v["transform"]["scale"], 10.0);
    let r5 = &v["regions"][5];
    assert_eq!(r5["band"], "heavy");
    assert_eq!(r5["selected"], true);
    assert_eq!(r5["stroke"], "blue");
    assert_eq!(r5["paths"][0], "M 505 -5 L 605 -5 L 605 95 L 505 95 Z");
}
