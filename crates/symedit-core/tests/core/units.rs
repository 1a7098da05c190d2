use proptest::prelude::*;
use symedit_core::{Angle, Length, Point};

const COORD_RANGE: std::ops::Range<i64> = -1_000_000_000..1_000_000_000;

proptest! {
    #[test]
    fn snap_is_idempotent(
        x in COORD_RANGE,
        y in COORD_RANGE,
        grid in 1i64..10_000_000,
    ) {
        let interval = Length::from_nm(grid);
        let once = Point::from_nm(x, y).mapped_to_grid(interval);
        prop_assert_eq!(once.mapped_to_grid(interval), once);
        prop_assert_eq!(once.x.to_nm() % grid, 0);
        prop_assert_eq!(once.y.to_nm() % grid, 0);
    }

    #[test]
    fn snap_moves_at_most_half_a_grid(x in COORD_RANGE, grid in 1i64..10_000_000) {
        let interval = Length::from_nm(grid);
        let snapped = Length::from_nm(x).mapped_to_grid(interval);
        prop_assert!((snapped - Length::from_nm(x)).abs().to_nm() <= grid / 2);
    }

    #[test]
    fn rotation_is_reversible(
        x in COORD_RANGE,
        y in COORD_RANGE,
        cx in COORD_RANGE,
        cy in COORD_RANGE,
        deci in -3600i32..3600,
    ) {
        let p = Point::from_nm(x, y);
        let center = Point::from_nm(cx, cy);
        let angle = Angle::from_deci_deg(deci);
        let back = p.rotated(angle, center).rotated(-angle, center);
        prop_assert!((back.x - p.x).abs().to_nm() <= 2, "x drift: {} vs {}", back, p);
        prop_assert!((back.y - p.y).abs().to_nm() <= 2, "y drift: {} vs {}", back, p);
    }

    #[test]
    fn quarter_turn_rotation_is_exact(
        x in COORD_RANGE,
        y in COORD_RANGE,
        cx in COORD_RANGE,
        cy in COORD_RANGE,
        turns in 0i32..4,
    ) {
        let p = Point::from_nm(x, y);
        let center = Point::from_nm(cx, cy);
        let angle = Angle::from_deci_deg(turns * 900);
        prop_assert_eq!(p.rotated(angle, center).rotated(-angle, center), p);
    }

    #[test]
    fn angle_wraps_modulo_full_turn(deci in -100_000i32..100_000) {
        prop_assert_eq!(Angle::from_deci_deg(deci), Angle::from_deci_deg(deci + 3600));
        prop_assert_eq!(Angle::from_deci_deg(deci) + -Angle::from_deci_deg(deci), Angle::deg0());
    }
}

#[test]
fn test_four_quarter_turns_restore_point() {
    let p = Point::from_mm(3.0, -1.5);
    let center = Point::from_mm(1.0, 1.0);
    let mut q = p;
    for _ in 0..4 {
        q.rotate(Angle::deg90(), center);
    }
    assert_eq!(q, p);
}

#[test]
fn test_point_serialization() {
    let p = Point::from_nm(2_540_000, -5_080_000);
    let json = serde_json::to_string(&p).expect("Failed to serialize");
    assert_eq!(json, r#"{"x":2540000,"y":-5080000}"#);
    let back: Point = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(back, p);
}

#[test]
fn test_angle_deserialization_normalizes() {
    let angle: Angle = serde_json::from_str("-900").expect("Failed to deserialize");
    assert_eq!(angle, Angle::deg270());
}
