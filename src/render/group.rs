//! Groups: ordered, exclusively owned children in a shared frame

use super::DrawCommand;
use super::shapes::{Frame, Graphic, Node};
use crate::types::{BoundingCoords, Coords};

/// A container node
///
/// Children are positioned in the group's local space; the group's own
/// position and scale place that space inside its parent.
#[derive(Debug, Clone, Default)]
pub struct Group {
    frame: Frame,
    pub class: Option<String>,
    children: Vec<Node>,
}

impl Group {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            frame: Frame::new(x, y),
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_scale(mut self, scale: Coords) -> Self {
        self.set_scale(scale);
        self
    }

    /// Append a child, compounding this group's effective scale into it.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Node {
        let mut child = child.into();
        child.inherit_scale(self.frame.effective_scale());
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// Insert a child beneath all existing children in paint order.
    pub fn add_behind(&mut self, child: impl Into<Node>) -> &mut Node {
        let mut child = child.into();
        child.inherit_scale(self.frame.effective_scale());
        self.children.insert(0, child);
        &mut self.children[0]
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Union of the children's boxes in this group's own space.
    pub fn content_bounds(&self) -> BoundingCoords {
        let mut boxes = self.children.iter().map(Graphic::bounding_coords);
        match boxes.next() {
            Some(first) => boxes.fold(first, |acc, bc| acc.union(&bc)),
            None => BoundingCoords::ZERO,
        }
    }
}

impl Graphic for Group {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn bounding_coords(&self) -> BoundingCoords {
        if self.children.is_empty() {
            return BoundingCoords::ZERO;
        }
        self.frame.place(self.content_bounds())
    }

    fn propagate_scale(&mut self) {
        let effective = self.frame.effective_scale();
        for child in &mut self.children {
            child.inherit_scale(effective);
        }
    }

    fn render(&self) -> DrawCommand {
        DrawCommand::Group {
            x: self.frame.x,
            y: self.frame.y,
            scale: self.frame.local_scale(),
            class: self.class.clone(),
            children: self.children.iter().map(Graphic::render).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shapes::Rect;

    const MIRROR_X: Coords = Coords::new(-1.0, 1.0);

    fn child_scale(group: &Group, idx: usize) -> Coords {
        group.children()[idx].scale()
    }

    #[test]
    fn empty_group_is_degenerate_regardless_of_frame() {
        let mut group = Group::new(50.0, -20.0);
        group.set_scale(Coords::new(-1.0, -1.0));
        assert_eq!(group.bounding_coords(), BoundingCoords::ZERO);
        assert_eq!(group.width(), 0.0);
    }

    #[test]
    fn bounds_offset_by_group_position() {
        let mut group = Group::new(100.0, 10.0);
        group.add(Rect::new(0.0, 0.0, 20.0, 10.0));
        group.add(Rect::new(30.0, 5.0, 10.0, 10.0));
        assert_eq!(group.bounding_coords(), BoundingCoords::new(100.0, 10.0, 140.0, 25.0));
        assert_eq!(group.width(), 40.0);
        assert_eq!(group.height(), 15.0);
    }

    #[test]
    fn mirrored_group_bounds_land_on_the_other_side() {
        let mut group = Group::new(100.0, 0.0);
        group.add(Rect::new(10.0, 0.0, 20.0, 10.0));
        group.set_scale(MIRROR_X);
        // children span 10..30 locally, mirrored about x=100
        assert_eq!(group.bounding_coords(), BoundingCoords::new(70.0, 0.0, 90.0, 10.0));
    }

    #[test]
    fn bounds_normalized_for_every_flip_combination() {
        let flips = [
            Coords::new(1.0, 1.0),
            Coords::new(-1.0, 1.0),
            Coords::new(1.0, -1.0),
            Coords::new(-1.0, -1.0),
        ];
        for outer in flips {
            for inner in flips {
                let mut nested = Group::new(5.0, 5.0);
                nested.add(Rect::new(-3.0, 2.0, 7.0, 4.0));
                nested.set_scale(inner);
                let mut group = Group::new(-10.0, 20.0);
                group.add(nested);
                group.set_scale(outer);
                let bc = group.bounding_coords();
                assert!(bc.x1() <= bc.x2(), "x inverted for {outer} / {inner}");
                assert!(bc.y1() <= bc.y2(), "y inverted for {outer} / {inner}");
                assert_eq!(bc.width(), 7.0);
                assert_eq!(bc.height(), 4.0);
            }
        }
    }

    #[test]
    fn child_scale_multiplied_at_attach_time() {
        let mut group = Group::new(0.0, 0.0).with_scale(MIRROR_X);
        let mut rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        rect.set_scale(Coords::new(1.0, -1.0));
        group.add(rect);
        assert_eq!(child_scale(&group, 0), Coords::new(-1.0, -1.0));
        assert_eq!(group.children()[0].local_scale(), Coords::new(1.0, -1.0));
    }

    #[test]
    fn scale_set_after_attach_reaches_grandchildren() {
        let mut inner = Group::new(0.0, 0.0);
        let mut leaf = Rect::new(0.0, 0.0, 1.0, 1.0);
        leaf.set_scale(Coords::new(1.0, -1.0));
        inner.add(leaf);

        let mut outer = Group::new(0.0, 0.0);
        outer.add(inner);
        outer.set_scale(MIRROR_X);

        let inner = outer.children()[0].as_group().unwrap();
        assert_eq!(inner.scale(), MIRROR_X);
        assert_eq!(inner.children()[0].scale(), Coords::new(-1.0, -1.0));
    }

    #[test]
    fn children_added_after_scale_change_get_current_scale() {
        let mut group = Group::new(0.0, 0.0);
        group.set_scale(MIRROR_X);
        group.add(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(child_scale(&group, 0), MIRROR_X);
        group.set_scale(Coords::ONE);
        assert_eq!(child_scale(&group, 0), Coords::ONE);
    }

    #[test]
    fn nested_flips_cancel() {
        let mut inner = Group::new(0.0, 0.0).with_scale(MIRROR_X);
        inner.add(Rect::new(0.0, 0.0, 1.0, 1.0));
        let mut outer = Group::new(0.0, 0.0).with_scale(MIRROR_X);
        outer.add(inner);
        let inner = outer.children()[0].as_group().unwrap();
        assert_eq!(inner.children()[0].scale(), Coords::ONE);
    }

    #[test]
    fn mirror_applied_twice_restores_bounds() {
        let mut group = Group::new(40.0, 0.0);
        group.add(Rect::new(5.0, 5.0, 20.0, 10.0));
        group.add(Rect::new(-10.0, 0.0, 5.0, 5.0));
        let original = group.bounding_coords();

        group.apply_scale(MIRROR_X);
        assert_ne!(group.bounding_coords(), original);
        assert_eq!(child_scale(&group, 0), MIRROR_X);

        group.apply_scale(MIRROR_X);
        assert_eq!(group.bounding_coords(), original);
        assert_eq!(group.scale(), Coords::ONE);
        assert_eq!(child_scale(&group, 0), Coords::ONE);
    }

    #[test]
    fn scale_keeps_only_signs() {
        let mut group = Group::new(0.0, 0.0);
        group.add(Rect::new(0.0, 0.0, 10.0, 10.0));

        group.set_scale(Coords::new(2.0, 1.0));
        assert_eq!(group.scale(), Coords::ONE);
        assert_eq!(child_scale(&group, 0), Coords::ONE);
        assert_eq!(group.width(), 10.0);

        // zero never collapses the geometry
        group.set_scale(Coords::new(0.0, -3.0));
        assert_eq!(group.scale(), Coords::new(1.0, -1.0));
        assert_eq!(group.bounding_coords(), BoundingCoords::new(0.0, -10.0, 10.0, 0.0));

        group.apply_scale(Coords::new(-0.5, 0.0));
        assert_eq!(group.scale(), Coords::new(-1.0, -1.0));
        assert_eq!(child_scale(&group, 0), Coords::new(-1.0, -1.0));
        assert_eq!(group.width(), 10.0);
    }

    #[test]
    fn bounds_reflect_current_children() {
        let mut group = Group::new(0.0, 0.0);
        group.add(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(group.width(), 10.0);
        group.add(Rect::new(20.0, 0.0, 10.0, 10.0));
        assert_eq!(group.width(), 30.0);
    }

    #[test]
    fn add_behind_paints_first() {
        let mut group = Group::new(0.0, 0.0);
        group.add(Rect::new(0.0, 0.0, 1.0, 1.0).with_class("content"));
        group.add_behind(Rect::new(0.0, 0.0, 2.0, 2.0).with_class("background"));
        let rendered = group.render();
        let classes: Vec<_> = rendered.children().iter().filter_map(DrawCommand::class).collect();
        assert_eq!(classes, ["background", "content"]);
    }
}
