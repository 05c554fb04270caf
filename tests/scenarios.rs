//! End-to-end measure → arrange scenarios through the public API.

use core::f64::consts::{FRAC_PI_2, PI};

use arclayout::*;

const TOL: f64 = 1e-9;

fn union(rects: &[Rect]) -> Rect {
    rects.iter().fold(Rect::EMPTY, |acc, r| acc.union(*r))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOL
}

fn centre_of(r: &Rect) -> Point {
    r.centre()
}

// ============================================================
// Circular
// ============================================================

mod circular {
    use super::*;

    #[test]
    fn four_quarter_items_unbounded_centred() {
        let layout = CircularLayout::new(ArcSpan::FULL_TURN).origin_at_centre(true);
        let items = [Size::new(24.0, 24.0); 4];
        let m = layout.measure(Size::INFINITE, &items).unwrap();

        assert!(close(m.state.radii.x, 24.0));
        assert_eq!(m.state.radii.x, m.state.radii.y);
        // square, half-extent r + 12
        assert!(close(m.desired.width, 72.0));
        assert!(close(m.desired.height, 72.0));

        let a = layout.arrange(m.desired, &items, &m.state).unwrap();
        let expected = [
            Point::new(36.0, 60.0), // -π/2: bottom
            Point::new(60.0, 36.0), // 0: right
            Point::new(36.0, 12.0), // π/2: top
            Point::new(12.0, 36.0), // π: left
        ];
        for (rect, want) in a.rects.iter().zip(expected) {
            let c = centre_of(rect);
            assert!(close(c.x, want.x) && close(c.y, want.y), "{c:?} vs {want:?}");
        }
    }

    #[test]
    fn degenerate_arc_ignores_everything_but_sizes() {
        let items = [
            Size::new(12.0, 30.0),
            Size::new(40.0, 8.0),
            Size::new(20.0, 20.0),
        ];
        let arc = ArcSpan::new(FRAC_PI_2, FRAC_PI_2);
        for centred in [false, true] {
            let layout = CircularLayout::new(arc).origin_at_centre(centred);
            let m = layout.measure(Size::new(500.0, 500.0), &items).unwrap();
            assert_eq!(m.state.radii, Radii::ZERO);
            assert!(close(m.desired.width, 40.0));
            assert!(close(m.desired.height, 30.0));

            let a = layout.arrange(m.desired, &items, &m.state).unwrap();
            for r in &a.rects {
                let c = r.centre();
                assert!(close(c.x, 20.0) && close(c.y, 15.0), "{r:?}");
            }
        }
    }

    #[test]
    fn centred_origin_follows_final_size() {
        let layout = CircularLayout::new(ArcSpan::UPPER_HALF).origin_at_centre(true);
        let items = [Size::new(10.0, 10.0); 3];
        let m = layout.measure(Size::INFINITE, &items).unwrap();
        let a = layout
            .arrange(Size::new(300.0, 200.0), &items, &m.state)
            .unwrap();
        assert_eq!(a.origin, Point::new(150.0, 100.0));
        assert_eq!(a.size, Size::new(300.0, 200.0));
    }

    #[test]
    fn uncentered_hugs_content() {
        let layout = CircularLayout::new(ArcSpan::UPPER_HALF);
        let items = [Size::new(10.0, 10.0); 5];
        let m = layout.measure(Size::INFINITE, &items).unwrap();
        let centred = CircularLayout::new(ArcSpan::UPPER_HALF)
            .origin_at_centre(true)
            .measure(Size::INFINITE, &items)
            .unwrap();
        // same radius, but the lower half of the centred box is empty
        assert_eq!(m.state.radii, centred.state.radii);
        assert!(close(m.desired.width, centred.desired.width));
        assert!(m.desired.height < centred.desired.height);

        let a = layout
            .arrange(Size::new(400.0, 400.0), &items, &m.state)
            .unwrap();
        let u = union(&a.rects);
        assert!(close(u.x, 0.0) && close(u.y, 0.0));
    }

    #[test]
    fn bounded_radius_grows_to_fill_space() {
        let layout = CircularLayout::new(ArcSpan::FULL_TURN).origin_at_centre(true);
        let items = [Size::new(10.0, 10.0); 6];
        let unbounded = layout.measure(Size::INFINITE, &items).unwrap();
        let bounded = layout.measure(Size::new(400.0, 400.0), &items).unwrap();
        assert!(bounded.state.radii.x > unbounded.state.radii.x);
        assert!(bounded.desired.width <= 400.0 + TOL);
        assert!(bounded.desired.height <= 400.0 + TOL);
    }

    #[test]
    fn one_bounded_axis_uses_it() {
        let layout = CircularLayout::new(ArcSpan::FULL_TURN).origin_at_centre(true);
        let items = [Size::new(10.0, 10.0); 4];
        let m = layout
            .measure(Size::new(f64::INFINITY, 100.0), &items)
            .unwrap();
        // the vertical items bind: 50 - 5
        assert!(close(m.state.radii.x, 45.0));
        assert!(close(m.desired.height, 100.0));
    }

    #[test]
    fn reversed_arc_walks_the_other_way() {
        let items = [Size::new(10.0, 10.0); 3];
        let forward = CircularLayout::new(ArcSpan::new(0.0, PI))
            .measure(Size::INFINITE, &items)
            .unwrap();
        let backward = CircularLayout::new(ArcSpan::new(PI, 0.0))
            .measure(Size::INFINITE, &items)
            .unwrap();
        assert!(close(forward.state.radii.x, backward.state.radii.x));
        let fa = CircularLayout::new(ArcSpan::new(0.0, PI))
            .arrange(forward.desired, &items, &forward.state)
            .unwrap();
        let ba = CircularLayout::new(ArcSpan::new(PI, 0.0))
            .arrange(backward.desired, &items, &backward.state)
            .unwrap();
        assert!(close(fa.rects[0].x, ba.rects[2].x));
        assert!(close(fa.rects[2].x, ba.rects[0].x));
    }
}

// ============================================================
// Elliptical
// ============================================================

mod elliptical {
    use super::*;

    fn stretched(arc: ArcSpan) -> EllipticalLayout {
        EllipticalLayout::new(arc)
            .horizontal_alignment(Alignment::Stretch)
            .vertical_alignment(Alignment::Stretch)
    }

    #[test]
    fn single_stretch_axis_only_grows_that_axis() {
        let items = [Size::new(20.0, 20.0); 4];
        let available = Size::new(300.0, 100.0);
        let layout = EllipticalLayout::new(ArcSpan::FULL_TURN)
            .include_full_ellipse(true)
            .horizontal_alignment(Alignment::Stretch)
            .vertical_alignment(Alignment::Center);
        let m = layout.measure(available, &items).unwrap();
        // horizontal items free to reach the sides, vertical ones tied
        assert!(close(m.state.radii.x, 140.0));
        assert!(close(m.state.radii.y, 40.0));

        let locked = EllipticalLayout::new(ArcSpan::FULL_TURN)
            .include_full_ellipse(true)
            .horizontal_alignment(Alignment::Center)
            .vertical_alignment(Alignment::Stretch)
            .measure(available, &items)
            .unwrap();
        assert!(close(locked.state.radii.x, 40.0));
        assert!(close(locked.state.radii.y, 40.0));
    }

    #[test]
    fn uncentered_bounded_fills_available() {
        let items = [Size::new(20.0, 20.0); 5];
        let available = Size::new(240.0, 120.0);
        let layout = stretched(ArcSpan::UPPER_HALF);
        let m = layout.measure(available, &items).unwrap();
        assert!(m.desired.width <= available.width + TOL);
        assert!(m.desired.height <= available.height + TOL);
        assert!(m.state.radii.x > m.state.radii.y);

        let a = layout.arrange(available, &items, &m.state).unwrap();
        for r in &a.rects {
            assert!(r.within(available, 1e-7), "{r:?}");
        }
    }

    #[test]
    fn oversize_item_is_placed_but_not_solved_for() {
        let items = [
            Size::new(20.0, 20.0),
            Size::new(20.0, 20.0),
            Size::new(400.0, 20.0),
            Size::new(20.0, 20.0),
            Size::new(20.0, 20.0),
        ];
        let available = Size::new(200.0, 200.0);
        let m = EllipticalLayout::new(ArcSpan::UPPER_HALF)
            .measure(available, &items)
            .unwrap();
        assert!(m.state.radii.x > 0.0);
        let a = EllipticalLayout::new(ArcSpan::UPPER_HALF)
            .arrange(available, &items, &m.state)
            .unwrap();
        assert_eq!(a.rects.len(), 5);
        assert_eq!(a.rects[2].width, 400.0);
    }

    #[test]
    fn alignment_moves_content_inside_a_larger_frame() {
        let items = [Size::new(16.0, 16.0); 3];
        let big = Size::new(1000.0, 1000.0);
        let cases = [
            (Alignment::Start, Alignment::Start),
            (Alignment::Center, Alignment::End),
            (Alignment::End, Alignment::Center),
        ];
        for (h, v) in cases {
            let layout = EllipticalLayout::new(ArcSpan::UPPER_HALF)
                .horizontal_alignment(h)
                .vertical_alignment(v);
            let m = layout.measure(Size::INFINITE, &items).unwrap();
            let u = union(&layout.arrange(big, &items, &m.state).unwrap().rects);
            let want_x = match h {
                Alignment::Start => 0.0,
                Alignment::End => 1000.0 - u.width,
                _ => 500.0 - u.width / 2.0,
            };
            let want_y = match v {
                Alignment::Start => 0.0,
                Alignment::End => 1000.0 - u.height,
                _ => 500.0 - u.height / 2.0,
            };
            assert!(close(u.x, want_x), "{h:?}: {u:?}");
            assert!(close(u.y, want_y), "{v:?}: {u:?}");
        }
    }

    #[test]
    fn full_ellipse_keeps_origin_centred() {
        let items = [Size::new(16.0, 16.0); 3];
        let layout = EllipticalLayout::new(ArcSpan::UPPER_HALF).include_full_ellipse(true);
        let m = layout.measure(Size::INFINITE, &items).unwrap();
        let a = layout.arrange(m.desired, &items, &m.state).unwrap();
        assert!(close(a.origin.x, m.desired.width / 2.0));
        assert!(close(a.origin.y, m.desired.height / 2.0));
    }
}

// ============================================================
// Configuration
// ============================================================

mod configuration {
    use super::*;

    #[test]
    fn alignment_from_config_strings() {
        let h: Alignment = "stretch".parse().unwrap();
        let v: Alignment = "Top".parse().unwrap();
        let layout = EllipticalLayout::new(ArcSpan::FULL_TURN)
            .horizontal_alignment(h)
            .vertical_alignment(v);
        assert_eq!(layout.horizontal_alignment, Alignment::Stretch);
        assert_eq!(layout.vertical_alignment, Alignment::Start);
        assert_eq!(
            "middle".parse::<Alignment>(),
            Err(LayoutError::InvalidAlignment)
        );
    }

    #[test]
    fn errors_display() {
        let e = LayoutError::StaleState {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            e.to_string(),
            "layout state was measured for 4 items, arrange got 3"
        );
        assert_eq!(
            LayoutError::InvalidItemSize { index: 2 }.to_string(),
            "item 2 has an invalid desired size"
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(ArcSpan::default(), ArcSpan::FULL_TURN);
        let c = CircularLayout::default();
        assert!(!c.origin_at_centre);
        let e = EllipticalLayout::default();
        assert_eq!(e.horizontal_alignment, Alignment::Center);
        assert!(!e.include_full_ellipse);
    }
}
