use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use wanderstate::{parse, parse_with, scale, ArcMode, ParseOptions, Size, SmoothCurves};

const ALPHABET: &[u8] = b"MmLlHhVvCcSsQqTtAaZzXe0123456789.-+, \t\n";

fn random_path(rng: &mut Pcg32) -> String {
    let len = rng.random_range(0..120);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[test]
fn test_random_path_data_never_panics() {
    let mut rng = Pcg32::seed_from_u64(0x5eed);
    let curve = ParseOptions {
        arc_mode: ArcMode::Curve,
        smooth_curves: SmoothCurves::Strict,
        ..Default::default()
    };
    for _ in 0..2000 {
        let d = random_path(&mut rng);
        let g = parse(&d);
        for sp in g.subpaths() {
            // every subpath starts with its move; nothing follows a close
            assert!(!sp.segments().is_empty(), "{d:?}");
            let closes = sp.segments().iter().filter(|s| s.end_point().is_none()).count();
            assert!(closes <= 1, "{d:?}");
            if closes == 1 {
                assert!(sp.is_closed(), "{d:?}");
            }
        }
        let _ = parse_with(&d, &curve);
        let _ = scale(&g, Size::new(959., 593.), Size::new(100., 100.));
    }
}

#[test]
fn test_random_path_data_deterministic() {
    let mut rng = Pcg32::seed_from_u64(42);
    for _ in 0..500 {
        let d = random_path(&mut rng);
        assert_eq!(parse(&d), parse(&d));
    }
}

#[test]
fn test_random_numbers_without_commands() {
    let mut rng = Pcg32::seed_from_u64(7);
    for _ in 0..200 {
        let d = (0..rng.random_range(1..20))
            .map(|_| format!("{:.2}", rng.random_range(-1000.0..1000.0)))
            .collect::<Vec<_>>()
            .join(" ");
        assert!(parse(&d).is_empty(), "{d}");
    }
}
