//! The `Node` stored in a [`Tree`](crate::Tree)'s arena and the links between nodes.

/// A handle to a `Node` in the tree's arena. This is the key the arena handed out when the node
/// was inserted.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Ref(pub usize);

/// One of a node's two child slots.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The contents of a child slot.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) enum Link {
    /// Nothing on this side and no known neighbor. Only the smallest node has an `Empty` left
    /// slot and only the largest node has an `Empty` right slot.
    Empty,
    /// The node owns the subtree rooted here.
    Child(Ref),
    /// The in-order predecessor (left slot) or successor (right slot). The node does not own it.
    Thread(Ref),
}

impl Link {
    /// The owned child, if this is a real link.
    pub(crate) fn child(self) -> Option<Ref> {
        match self {
            Self::Child(r) => Some(r),
            Self::Empty | Self::Thread(_) => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(value: i32) -> Self {
        Self {
            value,
            left: Link::Empty,
            right: Link::Empty,
        }
    }

    pub(crate) fn link(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The real children of this node, left first.
    pub(crate) fn children(&self) -> impl Iterator<Item = Ref> {
        self.left.child().into_iter().chain(self.right.child())
    }

    /// Whether both slots are empty or threads.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.child().is_none() && self.right.child().is_none()
    }
}
