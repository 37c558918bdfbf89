//! McCreight's linear-time offline builder.
//!
//! Carries the locus of the previous iteration's head and its matched
//! length; each iteration follows a suffix link (substep A), rescans by
//! first symbols to the known depth (substep B), then scans the rest of
//! the suffix (substep C) and attaches a leaf.  Every internal node
//! receives its suffix link no later than one iteration after it is
//! created.

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
        "mccreight"
    }

    fn build(&mut self, tree: &mut Tree<T, I>, seq: SeqIndex) {
        let SeqIndex(seq) = seq;
        let root = tree.root();
        tree.set_suffix_link(root, root);
        tree.set_parent(root, root);

        let end = tree.seq_len(seq);
        let mut head = root;
        let mut matched_len = 0;

        for start in 0..end {
            if let Some(progress) = self.progress.as_mut() {
                progress.report(start);
            }

            // substep A: follow the suffix link of head, or of its parent
            // when head was created by the previous iteration's scan
            let mut c = match tree.suffix_link(head) {
                Some(link) => link,
                None => tree
                    .suffix_link(tree.parent(head))
                    .expect("parent of head must carry a suffix link"),
            };

            // substep B: rescan to depth matched_len - 1; only the first
            // symbol of each edge needs to be examined because the path is
            // known to exist
            if matched_len > 1 {
                let depth = matched_len - 1;
                let (head_seq, head_start) = {
                    let span = tree.span(head);
                    (span.seq, span.start)
                };
                while tree.depth(c) < depth {
                    let key = tree.seq_at(head_seq, head_start + tree.depth(c) + 1);
                    c = tree
                        .child(c, key)
                        .expect("rescan edge must exist");
                }
                if tree.depth(c) > depth {
                    // the rescan ended in the middle of an edge
                    c = tree.split_edge(tree.parent(c), depth, c);
                }
                debug!("rescanned to depth {}", depth);
                debug_assert_eq!(tree.depth(c), depth);
            }

            if tree.suffix_link(head).is_none() {
                tree.set_suffix_link(head, c);
            }

            // substep C: scan the remainder of the suffix
            let cursor = Cursor::Suffix { seq, start, end };
            let (mut new_head, new_matched, child) = tree.find_path(c, &cursor);
            if let Some(child) = child {
                new_head = tree.split_edge(new_head, new_matched, child);
            }
            debug!("scanned to depth {}", new_matched);
            head = new_head;
            matched_len = new_matched;

            assert!(matched_len < end - start, "suffix already present");
            let leaf = tree.new_leaf(head, seq, start, SpanEnd::Fixed(end));
            let key = tree.seq_at(seq, start + matched_len).cloned();
            tree.add_child(head, key, leaf);
        }
    }
}
