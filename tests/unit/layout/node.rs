use super::*;
use crate::{FixedNode, Spacer, UNBOUNDED_SIZE};

/// Reports the proposal width capped at 30 and half its height, so axis swaps are visible.
struct HalfHeight;

impl SizableNode for HalfHeight {
    fn layout_size(&self, fitting: Size) -> Size {
        Size::new(fitting.width.min(30.0), fitting.height * 0.5)
    }

    fn layout_priority(&self) -> f64 {
        3.5
    }
}

#[test]
fn flipped_node_swaps_input_and_output() {
    let flipped = HalfHeight.axis_flipped();
    // HalfHeight sees (80, 20) -> (20, 40) -> flipped back to (40, 20).
    assert_eq!(flipped.layout_size(Size::new(20.0, 80.0)), Size::new(40.0, 20.0));
}

#[test]
fn double_flip_is_identity() {
    let twice = HalfHeight.axis_flipped().axis_flipped();
    for target in [
        Size::new(0.0, 0.0),
        Size::new(20.0, 80.0),
        Size::new(100.0, 7.0),
        Size::new(15.5, 1e6),
    ] {
        assert_eq!(twice.layout_size(target), HalfHeight.layout_size(target));
    }
    let unbounded = twice.layout_size(UNBOUNDED_SIZE);
    assert_eq!(unbounded, HalfHeight.layout_size(UNBOUNDED_SIZE));
}

#[test]
fn flip_passes_flags_through() {
    let spacer = Spacer::new(4.0).unwrap().axis_flipped();
    assert!(spacer.is_spacer());
    assert_eq!(spacer.layout_priority(), 0.0);

    let flipped = AxisFlipped::new(HalfHeight);
    assert!(!flipped.is_spacer());
    assert_eq!(flipped.layout_priority(), 3.5);
}

#[test]
fn into_inner_returns_wrapped_node() {
    let node = FixedNode::new(1.0, 2.0);
    let flipped = node.axis_flipped();
    assert_eq!(flipped.get_ref(), &node);
    assert_eq!(flipped.into_inner(), node);
}

#[test]
fn smart_pointers_delegate() {
    let boxed: Box<dyn SizableNode> = Box::new(FixedNode::new(3.0, 4.0).with_priority(2.0));
    assert_eq!(boxed.layout_size(UNBOUNDED_SIZE), Size::new(3.0, 4.0));
    assert_eq!(boxed.layout_priority(), 2.0);

    let shared: Arc<dyn SizableNode> = Arc::new(Spacer::default());
    assert!(shared.is_spacer());

    let by_ref: &dyn SizableNode = &HalfHeight;
    assert_eq!(by_ref.layout_size(Size::new(10.0, 10.0)), Size::new(10.0, 5.0));
}
