use proptest::prelude::*;
use sloperkit_drafting::views::Panel;
use sloperkit_drafting::{
    cubic_bezier_length, dart_allocation, distance, right_triangle_leg, square_off_corner,
    DartSpec, Point, CORNER_RADIUS,
};

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()) + 1e-9
}

#[test]
fn test_leg_of_equal_sides_is_zero() {
    for h in [0.0, 0.25, 1.0, 17.5, 1234.5] {
        assert_eq!(right_triangle_leg(h, h).unwrap(), 0.0);
    }
}

#[test]
fn test_leg_longer_than_hypotenuse_is_rejected() {
    let err = right_triangle_leg(5.5, 6.0).unwrap_err();
    assert!(err.to_string().starts_with("incompatible measurements"));
}

#[test]
fn test_skirt_dart_lookups() {
    assert_eq!(
        dart_allocation(9.0, Panel::Front),
        DartSpec {
            count: 2,
            intake: 0.375
        }
    );
    assert_eq!(dart_allocation(2.0, Panel::Front), DartSpec::NONE);
    assert_eq!(dart_allocation(2.0, Panel::Back), DartSpec::NONE);
}

fn coord() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn bezier_length_ignores_direction(p0 in point(), c1 in point(), c2 in point(), p3 in point()) {
        let forward = cubic_bezier_length(p0, c1, c2, p3);
        let backward = cubic_bezier_length(p3, c2, c1, p0);
        prop_assert!(close(forward, backward, 1e-5), "{} vs {}", forward, backward);
    }

    #[test]
    fn bezier_length_scales_linearly(
        p0 in point(),
        c1 in point(),
        c2 in point(),
        p3 in point(),
        k in 0.1f64..10.0,
    ) {
        let base = cubic_bezier_length(p0, c1, c2, p3);
        let scaled = cubic_bezier_length(p0 * k, c1 * k, c2 * k, p3 * k);
        prop_assert!(close(scaled, base * k, 1e-4), "{} vs {}", scaled, base * k);
    }

    #[test]
    fn bezier_length_at_least_chord(p0 in point(), c1 in point(), c2 in point(), p3 in point()) {
        let len = cubic_bezier_length(p0, c1, c2, p3);
        prop_assert!(len + 1e-6 >= distance(p0, p3));
    }

    #[test]
    fn corner_radius_is_fixed(
        low_x in 1.0f64..20.0,
        low_y in 0.0f64..30.0,
        rise in 0.1f64..10.0,
        run in -10.0f64..10.0,
    ) {
        let low = Point::new(low_x, low_y);
        let top = Point::new(low_x, low_y + rise);
        let high = Point::new(low_x - run, low_y + rise);
        let corner = square_off_corner(top, low, high).unwrap();

        prop_assert!((distance(corner.squared_point, low) - CORNER_RADIUS).abs() < 1e-12);
        prop_assert_eq!(corner.control_point.x, low.x);
        prop_assert_eq!(corner.squared_point.y, corner.control_point.y);
        prop_assert!(corner.control_point.y <= low.y);
    }

    #[test]
    fn dart_table_is_total(difference in -20.0f64..40.0) {
        for panel in [Panel::Front, Panel::Back] {
            let spec = dart_allocation(difference, panel);
            prop_assert!(spec.count <= 2);
            prop_assert!(spec.intake >= 0.0);
            if difference < 3.0 {
                prop_assert_eq!(spec, DartSpec::NONE);
            } else {
                prop_assert!(spec.count >= 1);
            }
        }
    }

    #[test]
    fn leg_is_non_negative_when_defined(h in 0.0f64..100.0, frac in 0.0f64..=1.0) {
        let leg = right_triangle_leg(h, h * frac).unwrap();
        prop_assert!(leg >= 0.0);
        prop_assert!(leg <= h * (1.0 + 1e-12));
    }
}
