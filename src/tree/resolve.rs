use crate::{
    foundation::core::{Alignment, Frame, Size, sanitize_proposal},
    foundation::error::LayoutResult,
    layout::zstack::compute_overlay_layout,
    tree::model::LayoutTree,
};

/// One node of a resolved tree with its frame in root coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedNode {
    /// Child indices from the root; empty for the root itself.
    pub path: Vec<usize>,
    /// Variant name, see [`LayoutTree::kind_name`].
    pub kind: &'static str,
    /// Absolute frame.
    pub frame: Frame,
}

impl LayoutTree {
    /// Place the whole tree inside `target_size`.
    ///
    /// The root is sized against `target_size` and positioned in it by
    /// `alignment`; every container then lays out its children inside its own
    /// frame. Nodes are returned in pre-order.
    #[tracing::instrument(level = "debug", skip(self), fields(root = self.kind_name()))]
    pub fn resolve(
        &self,
        target_size: Size,
        alignment: Alignment,
    ) -> LayoutResult<Vec<PlacedNode>> {
        self.validate()?;
        let root = compute_overlay_layout(std::slice::from_ref(self), target_size, alignment)?;

        let mut placed = Vec::new();
        let mut path = Vec::new();
        for frame in root.frames {
            place(self, frame, &mut path, &mut placed)?;
        }
        tracing::debug!(nodes = placed.len(), "tree resolved");
        Ok(placed)
    }
}

fn place(
    node: &LayoutTree,
    frame: Frame,
    path: &mut Vec<usize>,
    placed: &mut Vec<PlacedNode>,
) -> LayoutResult<()> {
    placed.push(PlacedNode {
        path: path.clone(),
        kind: node.kind_name(),
        frame,
    });

    let children = node.children();
    if children.is_empty() {
        return Ok(());
    }
    let geometry = node
        .children_geometry(sanitize_proposal(frame.size))?
        .translated(frame.origin.to_vec2());
    for (idx, (child, child_frame)) in children.iter().zip(geometry.frames).enumerate() {
        path.push(idx);
        place(child, child_frame, path, placed)?;
        path.pop();
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tree/resolve.rs"]
mod tests;
