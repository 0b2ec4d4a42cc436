use super::*;
use crate::{Frame, UNBOUNDED_SIZE, dsl};

const ROW_JSON: &str = r#"{
    "kind": "h_stack",
    "alignment": "top",
    "spacing": 4,
    "children": [
        { "kind": "fixed", "width": 10, "height": 5 },
        { "kind": "spacer" },
        { "kind": "shape", "shape": { "type": "circle" }, "priority": 2 }
    ]
}"#;

#[test]
fn parses_nested_tree_with_integer_numbers() {
    let tree = LayoutTree::from_json(ROW_JSON).unwrap();
    assert_eq!(tree.kind_name(), "h_stack");
    assert_eq!(tree.priority, 0.0);
    assert!(matches!(
        tree.node,
        TreeNode::HStack { alignment: VerticalAlignment::Top, spacing, .. } if spacing == 4.0
    ));

    let kinds: Vec<_> = tree.children().iter().map(LayoutTree::kind_name).collect();
    assert_eq!(kinds, ["fixed", "spacer", "shape"]);
    assert_eq!(tree.children()[0].node, TreeNode::Fixed { width: 10.0, height: 5.0 });
    assert_eq!(tree.children()[1].node, TreeNode::Spacer { min_length: 0.0 });
    assert_eq!(tree.children()[2].priority, 2.0);
}

#[test]
fn z_stack_alignment_defaults_to_center() {
    let tree = LayoutTree::from_json(r#"{"kind":"z_stack"}"#).unwrap();
    assert_eq!(
        tree.node,
        TreeNode::ZStack {
            alignment: Alignment::CENTER,
            children: vec![],
        }
    );
    assert!(tree.children().is_empty());
}

#[test]
fn json_output_parses_back_to_the_same_tree() {
    let tree = LayoutTree::from_json(ROW_JSON).unwrap();
    let json = tree.to_json().unwrap();
    assert!(json.contains("\"kind\": \"h_stack\""));
    assert!(!json.contains("\"priority\": 0.0"));
    assert_eq!(LayoutTree::from_json(&json).unwrap(), tree);
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        LayoutTree::from_json(r#"{"kind":"grid"}"#),
        Err(LayoutError::Serde(_))
    ));
    assert!(matches!(
        LayoutTree::from_json("[1, 2"),
        Err(LayoutError::Serde(_))
    ));
}

#[test]
fn validation_reports_the_first_bad_node() {
    let baseline = r#"{"kind":"v_stack","children":[
        {"kind":"h_stack","alignment":"first_baseline"}
    ]}"#;
    assert!(matches!(
        LayoutTree::from_json(baseline),
        Err(LayoutError::UnsupportedAlignment(VerticalAlignment::FirstBaseline))
    ));

    let overlay = dsl::z_stack(
        Alignment::new(HorizontalAlignment::Leading, VerticalAlignment::LastBaseline),
        [],
    );
    assert!(matches!(
        overlay.validate(),
        Err(LayoutError::UnsupportedAlignment(VerticalAlignment::LastBaseline))
    ));

    let negative = dsl::v_stack(HorizontalAlignment::Center, [dsl::fixed(-1.0, 4.0)]);
    assert!(matches!(negative.validate(), Err(LayoutError::Validation(_))));

    let inverted = dsl::compressible(Size::new(10.0, 10.0), Size::new(20.0, 0.0));
    assert!(inverted.validate().is_err());

    let nan = dsl::fixed(1.0, 1.0).with_priority(f64::NAN);
    assert!(matches!(nan.validate(), Err(LayoutError::Validation(_))));

    let gap = dsl::h_stack(VerticalAlignment::Top, []).with_spacing(-2.0);
    assert!(matches!(gap.validate(), Err(LayoutError::Validation(_))));
}

#[test]
fn leaves_size_like_their_standalone_nodes() {
    let fitting = Size::new(50.0, 30.0);
    assert_eq!(dsl::fixed(70.0, 10.0).layout_size(fitting), Size::new(70.0, 10.0));
    assert_eq!(
        dsl::compressible(Size::new(80.0, 20.0), Size::new(40.0, 20.0)).layout_size(fitting),
        Size::new(50.0, 20.0)
    );
    assert_eq!(dsl::spacer_min(6.0).layout_size(fitting), Size::new(6.0, 6.0));
    assert_eq!(dsl::shape(ShapeKind::Rectangle).layout_size(fitting), fitting);
    assert_eq!(dsl::shape(ShapeKind::Rectangle).layout_size(UNBOUNDED_SIZE), Size::ZERO);
}

#[test]
fn containers_report_their_ideal_size() {
    let overlay = dsl::z_stack(
        Alignment::CENTER,
        [dsl::fixed(30.0, 10.0), dsl::fixed(10.0, 25.0)],
    );
    assert_eq!(overlay.layout_size(Size::new(100.0, 100.0)), Size::new(30.0, 25.0));

    let row = dsl::h_stack(
        VerticalAlignment::Center,
        [dsl::fixed(10.0, 4.0), dsl::fixed(20.0, 8.0)],
    )
    .with_spacing(5.0);
    assert_eq!(row.layout_size(Size::new(100.0, 100.0)), Size::new(35.0, 8.0));

    let column = dsl::v_stack(
        HorizontalAlignment::Center,
        [dsl::fixed(10.0, 4.0), dsl::fixed(20.0, 8.0)],
    );
    assert_eq!(column.layout_size(UNBOUNDED_SIZE), Size::new(20.0, 12.0));
}

#[test]
fn container_with_baseline_alignment_reports_zero() {
    let bad = dsl::h_stack(VerticalAlignment::FirstBaseline, [dsl::fixed(10.0, 10.0)]);
    assert_eq!(bad.layout_size(Size::new(100.0, 100.0)), Size::ZERO);
    assert!(bad.children_geometry(Size::new(100.0, 100.0)).is_err());
}

#[test]
fn children_geometry_is_empty_for_leaves() {
    let g = dsl::fixed(5.0, 5.0).children_geometry(Size::new(10.0, 10.0)).unwrap();
    assert!(g.is_empty());

    let overlay = dsl::z_stack(Alignment::BOTTOM_TRAILING, [dsl::fixed(5.0, 5.0)]);
    let g = overlay.children_geometry(Size::new(10.0, 10.0)).unwrap();
    assert_eq!(g.frames, vec![Frame::from_origin_size((5.0, 5.0), (5.0, 5.0))]);
}

#[test]
fn spacer_flag_and_priority_pass_through() {
    assert!(dsl::spacer().is_spacer());
    assert!(!dsl::fixed(1.0, 1.0).is_spacer());
    assert!(!dsl::h_stack(VerticalAlignment::Top, [dsl::spacer()]).is_spacer());
    assert_eq!(dsl::shape(ShapeKind::Circle).with_priority(4.0).layout_priority(), 4.0);
}
