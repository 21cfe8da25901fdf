//! Adds threads to a tree that only has real links.
//!
//! Each pass walks the real links in order with an explicit stack. Right threads are added by a
//! walk in increasing order and left threads by a walk in decreasing order, so both passes are
//! the same code with the sides swapped.

use crate::node::{Link, Ref, Side};
use crate::Tree;

/// An in-order walk over real links only. `toward` is the direction of travel: `Side::Right`
/// visits values in increasing order and `Side::Left` in decreasing order.
///
/// The walk doesn't borrow the tree between steps so the caller can modify nodes it has already
/// visited, as long as it leaves their real links alone.
pub(crate) struct RealWalk {
    stack: Vec<Ref>,
    toward: Side,
}

impl RealWalk {
    pub(crate) fn new(tree: &Tree, toward: Side) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            toward,
        };
        if let Some(root) = tree.root {
            walk.descend(tree, root);
        }
        walk
    }

    /// Pushes `node` and its chain of real children on the side we're travelling away from.
    fn descend(&mut self, tree: &Tree, mut node: Ref) {
        let away = self.toward.opposite();
        loop {
            self.stack.push(node);
            match tree.node(node).link(away).child() {
                Some(next) => node = next,
                None => break,
            }
        }
    }

    pub(crate) fn step(&mut self, tree: &Tree) -> Option<Ref> {
        let node = self.stack.pop()?;
        if let Some(child) = tree.node(node).link(self.toward).child() {
            self.descend(tree, child);
        }
        Some(node)
    }
}

impl Tree {
    /// Threads every `Empty` slot that has an in-order neighbor. Right threads are added first.
    pub(crate) fn thread(&mut self) {
        self.thread_side(Side::Right);
        self.thread_side(Side::Left);
    }

    /// Points each `Empty` slot on `side` at the node the walk visits next. Slots that already
    /// hold a child or a thread are left alone so re-threading a threaded tree changes nothing.
    fn thread_side(&mut self, side: Side) {
        let mut walk = RealWalk::new(self, side);
        let mut prev: Option<Ref> = None;

        while let Some(curr) = walk.step(self) {
            if let Some(prev) = prev {
                let value = self.node(curr).value;
                let prev_value = self.node(prev).value;
                let beyond = match side {
                    Side::Left => value < prev_value,
                    Side::Right => value > prev_value,
                };

                let slot = self.node_mut(prev).link_mut(side);
                if beyond && *slot == Link::Empty {
                    *slot = Link::Thread(curr);
                }
            }
            prev = Some(curr);
        }
        log::trace!("Threaded {:?} slots", side);
    }
}
