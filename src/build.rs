use crate::node::{Link, Ref};
use crate::Tree;

impl Tree {
    /// Builds a height-balanced subtree holding every integer in `min..=max` and returns its
    /// root. Each subtree is rooted at the floor of its range's midpoint so even-sized ranges
    /// lean right. Only real links are set; threads are added afterwards by [`Tree::thread`].
    pub(crate) fn build_balanced(&mut self, min: i32, max: i32) -> Option<Ref> {
        if min > max {
            return None;
        }

        let mid = min + (max - min) / 2;
        let node = self.alloc(mid);
        // The bounds checks keep `mid - 1`/`mid + 1` from overflowing at the ends of `i32`.
        if min < mid {
            if let Some(left) = self.build_balanced(min, mid - 1) {
                self.node_mut(node).left = Link::Child(left);
            }
        }
        if mid < max {
            if let Some(right) = self.build_balanced(mid + 1, max) {
                self.node_mut(node).right = Link::Child(right);
            }
        }

        Some(node)
    }
}
