use std::iter::FusedIterator;

use crate::node::{Link, Ref, Side};
use crate::Tree;

/// An iterator over the values of a [`Tree`] in increasing order, created by [`Tree::iter`].
///
/// It only remembers the next node to visit: right threads lead straight to a node's successor so
/// no stack is needed.
pub struct Iter<'a> {
    tree: &'a Tree,
    next: Option<Ref>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            next: tree.root.map(|root| tree.extreme(root, Side::Left)),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.tree.node(self.next?);
        self.next = match curr.right {
            Link::Thread(successor) => Some(successor),
            Link::Child(child) => Some(self.tree.extreme(child, Side::Left)),
            Link::Empty => None,
        };
        Some(curr.value)
    }
}

impl FusedIterator for Iter<'_> {}
