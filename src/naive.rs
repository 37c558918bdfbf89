//! The naive quadratic builder.
//!
//! Inserts every suffix from the root with a full path search, splitting an
//! edge when the search ends inside one.  Simple enough to serve as the
//! reference the linear builders are checked against.

use std::hash::Hash;

use tracing::debug;

use crate::builder::{Progress, SeqIndex};
use crate::node::SpanEnd;
use crate::tree::{Cursor, Tree};

pub struct Builder {
    progress: Option<Progress>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { progress: None }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

impl<T, I> crate::builder::Builder<T, I> for Builder
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    fn name(&self) -> &'static str {
        "naive"
    }

    fn build(&mut self, tree: &mut Tree<T, I>, seq: SeqIndex) {
        let SeqIndex(seq) = seq;
        let end = tree.seq_len(seq);

        for start in 0..end {
            if let Some(progress) = self.progress.as_mut() {
                progress.report(start);
            }

            let cursor = Cursor::Suffix { seq, start, end };
            let (mut node, matched, child) = tree.find_path(tree.root(), &cursor);
            if let Some(child) = child {
                // the suffix ends inside the edge to child
                node = tree.split_edge(node, matched, child);
            }
            debug_assert_eq!(matched, tree.depth(node));

            // the terminator guarantees a mismatch before the suffix runs out
            assert!(matched < end - start, "suffix already present");
            let leaf = tree.new_leaf(node, seq, start, SpanEnd::Fixed(end));
            let key = tree.seq_at(seq, start + matched).cloned();
            tree.add_child(node, key, leaf);
            debug!("attached leaf for suffix {} below node {}", start, node.0);
        }
    }
}
