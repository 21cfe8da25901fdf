//! Removing values from a threaded tree.
//!
//! Removal rewires the threads around the removed node in place instead of re-threading the whole
//! tree. The three cases are:
//!
//! 1. The node has no real children. Its parent takes over the node's thread on the side the node
//!    hung from.
//! 2. The node has two real children. It takes its successor's value and the successor (which has
//!    no real left child) is removed instead.
//! 3. The node has one real child. The child replaces it and the node's neighbor at the near edge
//!    of the child's subtree, which threaded back to the removed node, takes over the removed
//!    node's thread on the other side.

use crate::node::{Link, Ref, Side};
use crate::Tree;

impl Tree {
    /// Removes `target` from the tree. Returns whether it was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new(7)?;
    ///
    /// assert!(tree.remove(4));
    /// assert_eq!(tree.to_string(), "1 2 3 5 6 7 ");
    ///
    /// assert!(!tree.remove(4));
    /// # Ok::<(), threaded_bst::Error>(())
    /// ```
    pub fn remove(&mut self, target: i32) -> bool {
        match self.search(target) {
            Some((node, parent)) => {
                self.delete(node, parent);
                log::trace!("Removed {}", target);
                true
            }
            None => {
                log::trace!("{} not found", target);
                false
            }
        }
    }

    /// Removes every even value in `1..=n` where `n` is the size the tree was built with. Stops at
    /// the first even value that's missing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new(5)?;
    /// assert!(tree.remove_even());
    /// assert_eq!(tree.to_string(), "1 3 5 ");
    ///
    /// // The evens are gone now.
    /// assert!(!tree.remove_even());
    /// # Ok::<(), threaded_bst::Error>(())
    /// ```
    pub fn remove_even(&mut self) -> bool {
        for value in (2..=self.n).step_by(2) {
            if !self.remove(value) {
                log::debug!("Stopped removing evens at {}", value);
                return false;
            }
        }
        true
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: i32) -> bool {
        self.search(value).is_some()
    }

    /// Finds the node holding `target` and its parent, which is `None` for the root.
    ///
    /// The search stops as soon as it reaches a node without real children, matching or not. It
    /// only ever follows real links.
    fn search(&self, target: i32) -> Option<(Ref, Option<Ref>)> {
        let mut curr = self.root?;
        let mut parent = None;

        while self.node(curr).value != target && !self.node(curr).is_leaf() {
            let side = if target < self.node(curr).value {
                Side::Left
            } else {
                Side::Right
            };
            match self.node(curr).link(side).child() {
                Some(next) => {
                    parent = Some(curr);
                    curr = next;
                }
                None => break,
            }
        }

        if self.node(curr).value == target {
            Some((curr, parent))
        } else {
            None
        }
    }

    fn delete(&mut self, node: Ref, parent: Option<Ref>) {
        let (left, right) = {
            let node = self.node(node);
            (node.left.child(), node.right.child())
        };

        match (left, right) {
            (None, None) => self.delete_leaf(node, parent),
            (Some(child), None) => self.splice(node, parent, child, Side::Left),
            (None, Some(child)) => self.splice(node, parent, child, Side::Right),
            (Some(_), Some(right)) => {
                let mut successor_parent = node;
                let mut successor = right;
                while let Some(left) = self.node(successor).left.child() {
                    successor_parent = successor;
                    successor = left;
                }

                let value = self.node(successor).value;
                self.node_mut(node).value = value;
                // The successor has no real left child so this doesn't come back here.
                self.delete(successor, Some(successor_parent));
            }
        }
    }

    /// Removes `node`, which has no real children.
    fn delete_leaf(&mut self, node: Ref, parent: Option<Ref>) {
        match parent {
            Some(parent) => {
                let side = self.side_of(parent, node);
                let removed = self.free(node);
                *self.node_mut(parent).link_mut(side) = removed.link(side);
            }
            None => {
                self.free(node);
                self.root = None;
            }
        }
    }

    /// Removes `node`, which has exactly one real child, `child`, on `side`.
    fn splice(&mut self, node: Ref, parent: Option<Ref>, child: Ref, side: Side) {
        match parent {
            Some(parent) => {
                let parent_side = self.side_of(parent, node);
                *self.node_mut(parent).link_mut(parent_side) = Link::Child(child);
            }
            None => self.root = Some(child),
        }

        // The node's nearest neighbor inside `child`'s subtree threads back to it.
        let toward = side.opposite();
        let neighbor = self.extreme(child, toward);
        let removed = self.free(node);
        *self.node_mut(neighbor).link_mut(toward) = removed.link(toward);
    }
}
