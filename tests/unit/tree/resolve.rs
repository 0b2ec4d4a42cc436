use super::*;
use crate::{
    HorizontalAlignment, LayoutError, ShapeKind, UNBOUNDED, VerticalAlignment, dsl,
};

fn row() -> LayoutTree {
    dsl::h_stack(
        VerticalAlignment::Center,
        [dsl::fixed(20.0, 10.0), dsl::spacer(), dsl::fixed(30.0, 20.0)],
    )
}

#[test]
fn row_with_spacer_fills_the_target_width() {
    let placed = row()
        .resolve(Size::new(100.0, 40.0), Alignment::TOP_LEADING)
        .unwrap();
    let expected = vec![
        PlacedNode {
            path: vec![],
            kind: "h_stack",
            frame: Frame::from_origin_size((0.0, 0.0), (100.0, 20.0)),
        },
        PlacedNode {
            path: vec![0],
            kind: "fixed",
            frame: Frame::from_origin_size((0.0, 5.0), (20.0, 10.0)),
        },
        PlacedNode {
            path: vec![1],
            kind: "spacer",
            frame: Frame::from_origin_size((20.0, 0.0), (50.0, 20.0)),
        },
        PlacedNode {
            path: vec![2],
            kind: "fixed",
            frame: Frame::from_origin_size((70.0, 0.0), (30.0, 20.0)),
        },
    ];
    assert_eq!(placed, expected);
}

#[test]
fn root_alignment_offsets_every_frame() {
    let placed = row()
        .resolve(Size::new(100.0, 40.0), Alignment::CENTER)
        .unwrap();
    assert_eq!(placed[0].frame, Frame::from_origin_size((0.0, 10.0), (100.0, 20.0)));
    assert_eq!(placed[1].frame, Frame::from_origin_size((0.0, 15.0), (20.0, 10.0)));
    assert_eq!(placed[3].frame, Frame::from_origin_size((70.0, 10.0), (30.0, 20.0)));
}

#[test]
fn nested_containers_are_placed_in_pre_order() {
    let tree = dsl::z_stack(
        Alignment::CENTER,
        [
            dsl::shape(ShapeKind::Rectangle),
            dsl::v_stack(
                HorizontalAlignment::Leading,
                [dsl::fixed(10.0, 10.0), dsl::fixed(30.0, 5.0)],
            ),
        ],
    );
    let placed = tree
        .resolve(Size::new(50.0, 50.0), Alignment::TOP_LEADING)
        .unwrap();

    let paths: Vec<_> = placed.iter().map(|p| p.path.clone()).collect();
    assert_eq!(paths, vec![vec![], vec![0], vec![1], vec![1, 0], vec![1, 1]]);
    let kinds: Vec<_> = placed.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, ["z_stack", "shape", "v_stack", "fixed", "fixed"]);

    assert_eq!(placed[0].frame, Frame::from_origin_size((0.0, 0.0), (50.0, 50.0)));
    assert_eq!(placed[1].frame, Frame::from_origin_size((0.0, 0.0), (50.0, 50.0)));
    assert_eq!(placed[2].frame, Frame::from_origin_size((10.0, 17.5), (30.0, 15.0)));
    assert_eq!(placed[3].frame, Frame::from_origin_size((10.0, 17.5), (10.0, 10.0)));
    assert_eq!(placed[4].frame, Frame::from_origin_size((10.0, 27.5), (30.0, 5.0)));
}

#[test]
fn single_leaf_resolves_to_one_frame() {
    let placed = dsl::fixed(10.0, 10.0)
        .resolve(Size::new(UNBOUNDED, UNBOUNDED), Alignment::TOP_LEADING)
        .unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].frame, Frame::from_origin_size((0.0, 0.0), (10.0, 10.0)));
}

#[test]
fn rejects_bad_targets_and_alignments() {
    assert!(matches!(
        row().resolve(Size::new(-1.0, 10.0), Alignment::CENTER),
        Err(LayoutError::MalformedConstraint(_))
    ));
    assert!(matches!(
        row().resolve(
            Size::new(10.0, 10.0),
            Alignment::new(HorizontalAlignment::Center, VerticalAlignment::FirstBaseline)
        ),
        Err(LayoutError::UnsupportedAlignment(_))
    ));
    let nested = dsl::z_stack(
        Alignment::CENTER,
        [dsl::h_stack(VerticalAlignment::LastBaseline, [])],
    );
    assert!(matches!(
        nested.resolve(Size::new(10.0, 10.0), Alignment::CENTER),
        Err(LayoutError::UnsupportedAlignment(VerticalAlignment::LastBaseline))
    ));
}
