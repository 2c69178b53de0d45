use itertools::Itertools;
use wanderstate::{parse, scale, uniform_scale, Point, Size};

#[test]
fn test_scale_square_to_target() {
    let g = scale(
        &parse("M 0 0 L 10 0 L 10 10 Z"),
        Size::new(10., 10.),
        Size::new(100., 100.),
    );
    assert_eq!(g.subpaths().len(), 1);
    assert!(g.subpaths()[0].is_closed());
    assert_eq!(
        g.points().map(|p| p.as_xy()).collect_vec(),
        [(0., 0.), (100., 0.), (100., 100.)]
    );
}

#[test]
fn test_scale_uses_smaller_ratio() {
    let vb = Size::new(959., 593.);
    let g = parse("M0 0 L959 0 L959 593 L0 593 Z");
    for (w, h) in [(400., 800.), (2000., 300.), (959., 100.), (1., 1000.)] {
        let target = Size::new(w, h);
        let s = uniform_scale(vb, target);
        assert_eq!(s, (w / 959.).min(h / 593.));
        let bb = scale(&g, vb, target).bbox().expect("non-empty");
        assert!(bb.width() <= w + 1e-9);
        assert!(bb.height() <= h + 1e-9);
        // aspect ratio kept
        assert!((bb.width() / bb.height() - 959. / 593.).abs() < 1e-9);
    }
}

#[test]
fn test_scale_scales_control_points() {
    let g = parse("M0 0 C1 2 3 4 5 6 Q7 8 9 10");
    let scaled = scale(&g, Size::new(1., 1.), Size::new(2., 3.));
    let expected = g.points().map(|p| p * 2.).collect_vec();
    assert_eq!(scaled.points().collect_vec(), expected);
}

#[test]
fn test_scale_identity_when_target_is_view_box() {
    let g = parse("M12.5 7 c1 1 2 2 3 3 s 1 1 2 2 l-4 4 z m 100 100 h 5");
    let vb = Size::new(959., 593.);
    assert_eq!(scale(&g, vb, vb), g);
}

#[test]
fn test_scale_degenerate_target() {
    let g = parse("M10 10 L20 20 Z");
    for target in [Size::new(0., 10.), Size::new(10., -5.), Size::new(-1., -1.)] {
        let scaled = scale(&g, Size::new(40., 40.), target);
        assert!(scaled.points().all(|p| p == Point::ORIGIN));
        assert!(scaled.subpaths()[0].is_closed());
    }
}

#[test]
fn test_scale_two_part_region() {
    let vb = Size::new(40., 40.);
    let target = Size::new(400., 400.);
    let parts = ["M0 0 L10 0 L10 10 Z", "M20 20 L30 20 L30 30 Z"]
        .iter()
        .map(|d| scale(&parse(d), vb, target))
        .collect_vec();
    assert_eq!(parts.iter().map(|g| g.subpaths().len()).sum::<usize>(), 2);
    assert_eq!(
        parts[1].points().map(|p| p.as_xy()).collect_vec(),
        [(200., 200.), (300., 200.), (300., 300.)]
    );
}
