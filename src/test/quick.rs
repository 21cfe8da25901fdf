use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a threaded tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Remove the value from the tree
    Remove(i8),
    /// Remove every even value the tree was built with
    RemoveEven,
    /// Remove everything
    Clear,
    /// Carry on with a copy of the tree
    Clone,
    /// Compare iterators
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Removals are the interesting part
    /// so they're picked most often.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 0, 0, 1, 2, 3, 3, 4]).unwrap() {
            0 => Op::Remove(i8::arbitrary(g)),
            1 => Op::RemoveEven,
            2 => Op::Clear,
            3 => Op::Clone,
            4 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
