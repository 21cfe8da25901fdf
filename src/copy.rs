use slab::Slab;

use crate::node::{Link, Side};
use crate::Tree;

/// Copies the real links of the tree and then threads the copy from scratch. Threads are never
/// copied since they'd point into the original's arena.
///
/// # Examples
///
/// ```
/// use threaded_bst::Tree;
///
/// let tree = Tree::new(5)?;
/// let mut copy = tree.clone();
/// assert!(copy.remove_even());
///
/// assert_eq!(copy.to_string(), "1 3 5 ");
/// assert_eq!(tree.to_string(), "1 2 3 4 5 ");
/// # Ok::<(), threaded_bst::Error>(())
/// ```
impl Clone for Tree {
    fn clone(&self) -> Self {
        let mut copy = Self {
            nodes: Slab::with_capacity(self.nodes.len()),
            root: None,
            n: self.n,
        };

        if let Some(root) = self.root {
            let new_root = copy.alloc(self.node(root).value);
            copy.root = Some(new_root);

            let mut stack = vec![(root, new_root)];
            while let Some((original, new)) = stack.pop() {
                for side in [Side::Left, Side::Right] {
                    if let Some(child) = self.node(original).link(side).child() {
                        let new_child = copy.alloc(self.node(child).value);
                        *copy.node_mut(new).link_mut(side) = Link::Child(new_child);
                        stack.push((child, new_child));
                    }
                }
            }
        }

        copy.thread();
        log::debug!("Copied tree with {} values", copy.len());
        copy
    }
}
