use super::*;

#[test]
fn alignment_defaults_to_center() {
    assert_eq!(Alignment::default(), Alignment::CENTER);
    assert_eq!(
        Alignment::TOP_TRAILING,
        Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::Top)
    );
}

#[test]
fn baseline_variants_are_flagged() {
    assert!(VerticalAlignment::FirstBaseline.is_baseline());
    assert!(VerticalAlignment::LastBaseline.is_baseline());
    assert!(!VerticalAlignment::Top.is_baseline());
    assert!(!VerticalAlignment::Center.is_baseline());
    assert!(!VerticalAlignment::Bottom.is_baseline());
}

#[test]
fn alignment_serializes_snake_case() {
    let a = Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::LastBaseline);
    let s = serde_json::to_string(&a).unwrap();
    assert_eq!(s, r#"{"horizontal":"trailing","vertical":"last_baseline"}"#);
    let back: Alignment = serde_json::from_str(&s).unwrap();
    assert_eq!(back, a);

    let partial: Alignment = serde_json::from_str(r#"{"horizontal":"leading"}"#).unwrap();
    assert_eq!(partial, Alignment::LEADING);
}

#[test]
fn flip_helpers_swap_axes() {
    assert_eq!(flip_size(Size::new(3.0, 7.0)), Size::new(7.0, 3.0));
    let f = Frame::from_origin_size((1.0, 2.0), (3.0, 4.0));
    let flipped = flip_frame(f);
    assert_eq!(flipped, Frame::from_origin_size((2.0, 1.0), (4.0, 3.0)));
    assert_eq!(flip_frame(flipped), f);
}

#[test]
fn frame_keeps_the_reported_size_exactly() {
    let f = Frame::from_origin_size((0.3, 0.6), (0.1, 0.2));
    assert_eq!(f.size, Size::new(0.1, 0.2));
    assert_eq!(f.width(), 0.1);
    assert_eq!(f.height(), 0.2);
    assert_eq!(f.translated(Vec2::new(0.7, 0.7)).size, Size::new(0.1, 0.2));
    assert_eq!(flip_frame(f).size, Size::new(0.2, 0.1));
}

#[test]
fn frame_edges_and_rect() {
    let f = Frame::from_origin_size((-2.0, 4.0), (10.0, 6.0));
    assert_eq!((f.min_x(), f.min_y(), f.max_x(), f.max_y()), (-2.0, 4.0, 8.0, 10.0));
    assert_eq!(f.to_rect(), Rect::new(-2.0, 4.0, 8.0, 10.0));
    assert_eq!(Frame::ZERO, Frame::default());
}

#[test]
fn frame_serializes_origin_and_size() {
    let f = Frame::from_origin_size((1.0, 2.0), (3.0, 4.0));
    assert_eq!(
        serde_json::to_string(&f).unwrap(),
        r#"{"origin":{"x":1.0,"y":2.0},"size":{"width":3.0,"height":4.0}}"#
    );
}

#[test]
fn target_validation_rejects_negative_and_nan() {
    assert!(validate_target_size(Size::new(0.0, 0.0)).is_ok());
    assert!(validate_target_size(UNBOUNDED_SIZE).is_ok());
    assert!(matches!(
        validate_target_size(Size::new(-1.0, 10.0)),
        Err(LayoutError::MalformedConstraint(_))
    ));
    assert!(matches!(
        validate_target_size(Size::new(10.0, f64::NAN)),
        Err(LayoutError::MalformedConstraint(_))
    ));
}

#[test]
fn sanitize_clamps_to_zero() {
    assert_eq!(
        sanitize_proposal(Size::new(-5.0, f64::NAN)),
        Size::new(0.0, 0.0)
    );
    assert_eq!(sanitize_proposal(UNBOUNDED_SIZE), UNBOUNDED_SIZE);
}
