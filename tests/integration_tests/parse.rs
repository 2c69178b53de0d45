use assertables::assert_contains;
use wanderstate::path::{read_commands, tokenize, PathCommand};
use wanderstate::{parse, parse_with, ArcMode, ParseOptions, Point, Segment, SmoothCurves, UnknownCommands};

fn points(data: &str) -> Vec<(f64, f64)> {
    parse(data).points().map(|p| p.as_xy()).collect()
}

#[test]
fn test_tokenize_sign_and_decimal() {
    assert_eq!(tokenize("M10-5,3.5.5"), ["M", "10", "-5", "3.5", "0.5"]);
}

#[test]
fn test_implicit_lineto() {
    let g = parse("M 0 0 5 5 10 10");
    assert_eq!(g.subpaths().len(), 1);
    assert_eq!(
        g.subpaths()[0].segments(),
        [
            Segment::MoveTo(Point::new(0., 0.)),
            Segment::LineTo(Point::new(5., 5.)),
            Segment::LineTo(Point::new(10., 10.)),
        ]
    );
}

#[test]
fn test_moveto_bad_coordinate_reads_as_zero() {
    let g = parse("M 1+2 3 4 4");
    assert_eq!(g.subpaths().len(), 1);
    assert_eq!(
        g.subpaths()[0].segments(),
        [
            Segment::MoveTo(Point::new(0., 3.)),
            Segment::LineTo(Point::new(4., 4.)),
        ]
    );
    assert_eq!(points("m 5 # 1 1"), [(5., 0.), (6., 1.)]);
}

#[test]
fn test_close_then_continue() {
    let g = parse("M0 0 L10 0 Z M20 20 L30 20");
    assert_eq!(g.subpaths().len(), 2);
    assert!(g.subpaths()[0].is_closed());
    assert!(!g.subpaths()[1].is_closed());
    assert_eq!(g.subpaths()[0].end_point(), Point::new(0., 0.));

    // relative move after Z is from the subpath start
    let g = parse("M0 0 L10 0 Z m20 20 l10 0");
    assert_eq!(g.subpaths()[1].start(), Point::new(20., 20.));
}

#[test]
fn test_every_command() {
    let g = parse("M1 1 L2 2 H5 V6 C1 1 2 2 3 3 S5 5 6 6 Q7 7 8 8 A1 1 0 0 1 9 9 Z");
    let kinds: Vec<&str> = g.subpaths()[0]
        .segments()
        .iter()
        .map(|s| match s {
            Segment::MoveTo(_) => "M",
            Segment::LineTo(_) => "L",
            Segment::CubicTo { .. } => "C",
            Segment::QuadTo { .. } => "Q",
            Segment::Close => "Z",
        })
        .collect();
    assert_eq!(kinds, ["M", "L", "L", "L", "C", "C", "Q", "L", "Z"]);
}

#[test]
fn test_relative_commands() {
    assert_eq!(
        points("m10 10 l5 0 h5 v5 l-10 0 z"),
        [(10., 10.), (15., 10.), (20., 10.), (20., 15.), (10., 15.)]
    );
    // a relative quad offsets both points from the segment start
    let g = parse("M10 10 q5 5 10 0");
    assert_eq!(
        g.subpaths()[0].segments()[1],
        Segment::QuadTo {
            c: Point::new(15., 15.),
            to: Point::new(20., 10.)
        }
    );
}

#[test]
fn test_compact_notation() {
    // no separators, signs and repeated decimals split numbers
    assert_eq!(points("M1.5.5L-1-1"), [(1.5, 0.5), (-1., -1.)]);
    assert_eq!(points("M0,0l.5.5.5.5"), [(0., 0.), (0.5, 0.5), (1., 1.)]);
}

#[test]
fn test_unsupported_smooth_quad_skipped() {
    let g = parse("M0 0 Q5 5 10 0 T20 0 L30 0");
    assert_eq!(points("M0 0 Q5 5 10 0 T20 0 L30 0").last(), Some(&(30., 0.)));
    assert_eq!(g.segment_count(), 3);
}

#[test]
fn test_skip_operands_resyncs() {
    // Numbers after an unknown letter never become operands of the
    // command before it, whichever policy is used.
    let data = "M0 0 L5 5 X 1 2 L 10 10";
    let opts = ParseOptions {
        unknown_commands: UnknownCommands::SkipOperands,
        ..Default::default()
    };
    assert_eq!(
        parse_with(data, &opts).points().count(),
        parse(data).points().count()
    );
    assert_eq!(parse_with(data, &opts).points().last(), Some(Point::new(10., 10.)));
}

#[test]
fn test_strict_smooth_only_after_cubic() {
    let opts = ParseOptions {
        smooth_curves: SmoothCurves::Strict,
        ..Default::default()
    };
    // after a cubic the two modes agree
    let after_cubic = "M0 0 C0 10 10 10 10 0 S20 -10 20 0";
    assert_eq!(parse(after_cubic), parse_with(after_cubic, &opts));

    // after a line they differ
    let after_line = "M0 0 C0 10 10 10 10 0 L 20 0 S30 -10 30 0";
    assert_ne!(parse(after_line), parse_with(after_line, &opts));
}

#[test]
fn test_arc_curve_mode_ends_at_endpoint() {
    let opts = ParseOptions {
        arc_mode: ArcMode::Curve,
        ..Default::default()
    };
    for data in [
        "M10 10 A20 10 30 0 1 50 40",
        "M10 10 A20 10 30 1 0 50 40",
        "M10 10 a5 5 0 1 1 0 0.001",
        "M0 0 A1 1 0 0 0 100 0",
    ] {
        let g = parse_with(data, &opts);
        let last = g.subpaths()[0].end_point();
        let expected = parse(data).subpaths()[0].end_point();
        assert_eq!(last, expected, "{data}");
    }
}

#[test]
fn test_read_commands_display() {
    let text: Vec<String> = read_commands("m1 2 3 4 z")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(text, ["m 1 2", "l 3 4", "z"]);
    assert!(matches!(
        read_commands("H 5")[0].command,
        PathCommand::HorizontalLineTo(x) if x == 5.
    ));
}

#[test]
fn test_geometry_display() {
    let g = parse("m1 1 h2 v2 h-2 z");
    assert_contains!(g.to_string(), "M 1 1 L 3 1 L 3 3 L 1 3 Z");
}

#[test]
fn test_deterministic() {
    let data = "M10 10 c5 0 5 5 0 5 s-5 5 0 5 q 3 3 6 0 a 4 4 0 0 1 8 0 z m 50 50 h 10";
    let a = parse(data);
    let b = parse(data);
    assert_eq!(a, b);
    assert_eq!(a.segment_count(), b.segment_count());
}
