//! The threaded [`Tree`] itself. The construction, copy, traversal, and removal algorithms live
//! in their own modules as further `impl Tree` blocks.

use std::fmt;

use slab::Slab;

use crate::iter::Iter;
use crate::node::{Node, Ref, Side};
use crate::Error;

/// A threaded Binary Search Tree over the integers `1..=n`.
///
/// Every node lives in an arena owned by the tree. A node's child slot either owns a real subtree
/// or holds a thread to the node's in-order predecessor (left slot) or successor (right slot), so
/// in-order traversal never needs a stack or parent pointers.
///
/// The tree is built balanced but is never rebalanced, so removals can degrade its shape.
pub struct Tree {
    pub(crate) nodes: Slab<Node>,
    pub(crate) root: Option<Ref>,
    /// The size the tree was built with. Removals do not change it.
    pub(crate) n: i32,
}

impl Tree {
    /// Builds a balanced, threaded tree holding every integer in `1..=n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveSize`] if `n` is less than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::{Error, Tree};
    ///
    /// let tree = Tree::new(5)?;
    /// assert_eq!(tree.to_string(), "1 2 3 4 5 ");
    ///
    /// assert_eq!(Tree::new(0).unwrap_err(), Error::NonPositiveSize(0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(n: i32) -> Result<Self, Error> {
        if n < 1 {
            return Err(Error::NonPositiveSize(n));
        }

        let mut tree = Self {
            nodes: Slab::with_capacity(n as usize),
            root: None,
            n,
        };
        tree.root = tree.build_balanced(1, n);
        tree.thread();
        log::debug!("Built threaded tree holding 1..={}", n);

        Ok(tree)
    }

    /// The size this tree was built with. This is not updated when values are removed; see
    /// [`Tree::len`] for the number of values currently in the tree.
    pub fn n(&self) -> i32 {
        self.n
    }

    /// The number of values currently in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether every value has been removed from the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over the values in the tree in increasing order by following threads.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new(4)?;
    /// tree.remove(3);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 4]);
    /// # Ok::<(), threaded_bst::Error>(())
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Removes every value from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use threaded_bst::Tree;
    ///
    /// let mut tree = Tree::new(3)?;
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_string(), "");
    /// # Ok::<(), threaded_bst::Error>(())
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            self.destroy(root);
        }
        // Every node is reachable from the root through real links.
        debug_assert!(self.nodes.is_empty());
        log::debug!("Cleared tree");
    }

    /// Frees `node` and every node it owns. Only real links are followed, threads are not.
    pub(crate) fn destroy(&mut self, node: Ref) {
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            let node = self.free(node);
            stack.extend(node.children());
        }
    }

    pub(crate) fn alloc(&mut self, value: i32) -> Ref {
        Ref(self.nodes.insert(Node::new(value)))
    }

    /// Removes `node` from the arena and hands it back. Nothing may link to it afterwards.
    pub(crate) fn free(&mut self, node: Ref) -> Node {
        self.nodes.remove(node.0)
    }

    pub(crate) fn node(&self, node: Ref) -> &Node {
        &self.nodes[node.0]
    }

    pub(crate) fn node_mut(&mut self, node: Ref) -> &mut Node {
        &mut self.nodes[node.0]
    }

    /// Follows real links on `side` starting at `node` as far as they go.
    pub(crate) fn extreme(&self, mut node: Ref, side: Side) -> Ref {
        while let Some(next) = self.node(node).link(side).child() {
            node = next;
        }
        node
    }

    /// Which of `parent`'s slots owns `child`.
    pub(crate) fn side_of(&self, parent: Ref, child: Ref) -> Side {
        if self.node(parent).left.child() == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes each value followed by a space, e.g. `1 2 3 `. An empty tree writes nothing.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("n", &self.n)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
impl Tree {
    /// The handle of the node currently holding `value`.
    pub(crate) fn ref_of(&self, value: i32) -> Ref {
        self.nodes
            .iter()
            .find(|(_, node)| node.value == value)
            .map(|(key, _)| Ref(key))
            .unwrap_or_else(|| panic!("{} is not in the tree", value))
    }

    /// Asserts that every node's links agree with the sorted order of the live values: a thread
    /// points at the adjacent value on its side and only the smallest/largest values have an
    /// `Empty` slot.
    pub(crate) fn assert_threaded(&self) {
        use crate::node::Link;

        let mut values: Vec<i32> = self.nodes.iter().map(|(_, node)| node.value).collect();
        values.sort_unstable();
        assert_eq!(self.iter().collect::<Vec<_>>(), values);

        for (_, node) in &self.nodes {
            let pos = values.binary_search(&node.value).expect("value is live");
            let neighbors = [
                (Side::Left, pos.checked_sub(1).map(|i| values[i])),
                (Side::Right, values.get(pos + 1).copied()),
            ];
            for (side, neighbor) in neighbors {
                match node.link(side) {
                    Link::Child(child) => {
                        let child = self.node(child).value;
                        match side {
                            Side::Left => assert!(child < node.value),
                            Side::Right => assert!(child > node.value),
                        }
                    }
                    Link::Thread(target) => {
                        assert_eq!(Some(self.node(target).value), neighbor, "{:?}", node)
                    }
                    Link::Empty => assert_eq!(neighbor, None, "{:?}", node),
                }
            }
        }
    }
}
