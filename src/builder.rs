//! The interface shared by the tree builders.

use std::hash::Hash;

use crate::tree::Tree;

/// Dense index of a sequence stored in a tree.  Handed to builders by
/// `Tree::add_with`; not meant to be fabricated by callers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeqIndex(pub(crate) usize);

/// A construction algorithm: inserts all suffixes of one stored sequence
/// into the tree.
pub trait Builder<T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str;

    fn build(&mut self, tree: &mut Tree<T, I>, seq: SeqIndex);
}

/// A progress callback, invoked with the current iteration index every
/// `tick` iterations of a builder's main loop.  The callback must not
/// touch the tree.
pub struct Progress {
    tick: usize,
    callback: Box<dyn FnMut(usize)>,
}

impl Progress {
    /// # Panics
    ///
    /// Panics if `tick` is zero.
    pub fn new<F>(tick: usize, callback: F) -> Progress
    where
        F: FnMut(usize) + 'static,
    {
        assert!(tick > 0, "progress tick must be positive");
        Progress {
            tick,
            callback: Box::new(callback),
        }
    }

    pub(crate) fn report(&mut self, iteration: usize) {
        if iteration % self.tick == 0 {
            (self.callback)(iteration);
        }
    }
}
