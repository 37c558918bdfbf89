//! Ukkonen's linear-time online builder.
//!
//! The active point is kept as a canonical reference pair `(s, start)`
//! against the phase counter `e`: the symbols `start..e` of the sequence
//! under construction spell the path from the explicit node `s` to the
//! active point.  Leaves are created with an open end and take their
//! effective length from `e`, so a single phase increment extends all of
//! them at once.
//!
//! The auxiliary state simplifies the first extension of every phase: its
//! pseudo-transitions consume exactly one symbol and lead to the root, so
//! following the root's suffix link behaves like dropping the first symbol
//! of the active path.
//!
//! After `i` processed symbols the tree is the implicit suffix tree of the
//! first `i` symbols; processing the terminator turns it into the true
//! suffix tree of the sequence.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::builder::{Progress, SeqIndex};
use crate::node::{Node, NodeId, SpanEnd};
use crate::path::Symbol;
use crate::tree::Tree;

/// Active state of one running construction.
struct Machine {
    s: NodeId,
    start: usize,
    e: usize,
    aux: NodeId,
}

impl Machine {
    fn open<T, I>(tree: &mut Tree<T, I>, seq: usize) -> Machine
    where
        T: Eq + Hash + Clone,
        I: Eq + Hash + Clone,
    {
        let root = tree.root();
        let aux = tree.push_node(Node::new_internal(root, 0, 0, 0));
        tree.set_parent(root, aux);
        tree.set_suffix_link(root, aux);
        tree.phase = Some((seq, 0));
        Machine {
            s: root,
            start: 0,
            e: 0,
            aux,
        }
    }

    /// Processes the next symbol of the sequence: the one at index
    /// `e` before the increment, terminator included.
    fn step<T, I>(&mut self, tree: &mut Tree<T, I>, seq: usize)
    where
        T: Eq + Hash + Clone,
        I: Eq + Hash + Clone,
    {
        self.e += 1;
        tree.phase = Some((seq, self.e));

        let (s, start) = update(tree, seq, self.aux, self.s, self.start, self.e);
        let (s, start) = canonize(tree, seq, self.aux, s, start, self.e);
        self.s = s;
        self.start = start;
    }

    fn close<T, I>(&self, tree: &mut Tree<T, I>)
    where
        T: Eq + Hash + Clone,
        I: Eq + Hash + Clone,
    {
        tree.phase = None;
    }
}

/// The `t`-transition out of `s`: the child taken and the length of its
/// edge.  Open edges report an unbounded length so that canonization never
/// walks into them; the auxiliary state reports a synthetic one-symbol
/// edge to the root.
fn transition<T, I>(
    tree: &Tree<T, I>,
    seq: usize,
    aux: NodeId,
    s: NodeId,
    k: usize,
) -> (NodeId, usize)
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    if s == aux {
        return (tree.root(), 1);
    }
    let child = tree
        .child(s, tree.seq_at(seq, k))
        .expect("transition must exist");
    if matches!(tree.nodes[child.0].span_end(), SpanEnd::Open) {
        (child, usize::MAX)
    } else {
        (child, tree.depth(child) - tree.depth(s))
    }
}

/// Tests whether the state `(s, start..end)` already has a `t`-transition;
/// if not, makes the state explicit by splitting, and returns it.
fn test_and_split<T, I>(
    tree: &mut Tree<T, I>,
    seq: usize,
    aux: NodeId,
    s: NodeId,
    start: usize,
    end: usize,
    t: &Symbol<T>,
) -> (bool, NodeId)
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    if start < end {
        debug_assert!(s != aux, "a nonempty pair cannot be canonical at aux");
        let (child, _) = transition(tree, seq, aux, s, start);
        let offset = tree.depth(s) + (end - start);
        let (child_seq, child_start) = {
            let record = &tree.nodes[child.0];
            (record.seq(), record.start())
        };
        if tree.seq_at(child_seq, child_start + offset) == t.as_ref() {
            (true, s)
        } else {
            let split_depth = tree.depth(s) + (end - start);
            (false, tree.split_edge(s, split_depth, child))
        }
    } else if s == aux {
        (true, s)
    } else if tree.child(s, t.as_ref()).is_some() {
        (true, s)
    } else {
        (false, s)
    }
}

/// Canonizes the reference pair `(s, start..end)`: advances `s` to the
/// closest explicit ancestor of the referenced state, shrinking the span
/// accordingly.
fn canonize<T, I>(
    tree: &Tree<T, I>,
    seq: usize,
    aux: NodeId,
    mut s: NodeId,
    mut start: usize,
    end: usize,
) -> (NodeId, usize)
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    if start >= end {
        return (s, start);
    }

    let (mut child, mut edge_len) = transition(tree, seq, aux, s, start);
    while edge_len <= end - start {
        start += edge_len;
        s = child;
        if start >= end {
            break;
        }
        let (next_child, next_len) = transition(tree, seq, aux, s, start);
        child = next_child;
        edge_len = next_len;
    }
    (s, start)
}

/// Inserts the transitions for the symbol at `end - 1` along the boundary
/// path, starting at the active point, and returns the reference pair of
/// the endpoint.
fn update<T, I>(
    tree: &mut Tree<T, I>,
    seq: usize,
    aux: NodeId,
    mut s: NodeId,
    mut start: usize,
    end: usize,
) -> (NodeId, usize)
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    let i = end - 1;
    let t = tree.seq_at(seq, i).cloned();
    trace!("update at phase {} from node {}", end, s.0);

    let root = tree.root();
    let mut oldr = root;
    let (mut endpoint, mut r) = test_and_split(tree, seq, aux, s, start, i, &t);

    while !endpoint {
        let leaf_start = i - tree.depth(r);
        let leaf = tree.new_leaf(r, seq, leaf_start, SpanEnd::Open);
        tree.add_child(r, t.clone(), leaf);
        debug!("attached open leaf for suffix {} below node {}", leaf_start, r.0);

        if oldr != root {
            tree.set_suffix_link(oldr, r);
        }
        oldr = r;

        let link = tree
            .suffix_link(s)
            .expect("active node must carry a suffix link");
        let (next_s, next_start) = canonize(tree, seq, aux, link, start, i);
        s = next_s;
        start = next_start;

        let (next_endpoint, next_r) = test_and_split(tree, seq, aux, s, start, i, &t);
        endpoint = next_endpoint;
        r = next_r;
    }

    if oldr != root {
        tree.set_suffix_link(oldr, s);
    }
    (s, start)
}

/// The batch builder: drives the online machine over a stored sequence.
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
        "ukkonen"
    }

    fn build(&mut self, tree: &mut Tree<T, I>, seq: SeqIndex) {
        let SeqIndex(seq) = seq;
        let len = tree.seq_len(seq);
        let mut machine = Machine::open(tree, seq);
        for phase in 0..len {
            if let Some(progress) = self.progress.as_mut() {
                progress.report(phase);
            }
            machine.step(tree, seq);
        }
        machine.close(tree);
    }
}

/// An in-progress online construction.
///
/// Symbols are processed one at a time as they are pushed, and the tree can
/// be queried between pushes.  `finish` processes the terminator, closing
/// every leaf of the sequence.
///
/// # Examples
///
/// ```
/// use gstree::{Online, Tree};
///
/// let mut tree = Tree::new();
/// let mut online = Online::open(&mut tree, "A");
/// online.extend("xabxac".chars());
/// assert!(online.tree().find(&['x', 'a', 'c']));
/// online.extend("abc".chars());
/// online.finish();
///
/// assert!(tree.find(&['x', 'a', 'c', 'a', 'b', 'c']));
/// ```
pub struct Online<'t, T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    tree: &'t mut Tree<T, I>,
    seq: usize,
    machine: Machine,
}

impl<'t, T, I> Online<'t, T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    /// Registers an empty sequence under `id` and starts building it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present in the tree.
    pub fn open(tree: &'t mut Tree<T, I>, id: I) -> Online<'t, T, I> {
        let seq = tree.insert_sequence(id, Vec::new());
        let machine = Machine::open(tree, seq);
        Online { tree, seq, machine }
    }

    /// Appends one symbol and fully processes it.
    pub fn push(&mut self, symbol: T) {
        self.tree.push_symbol(self.seq, symbol);
        self.machine.step(self.tree, self.seq);
    }

    /// Pulls symbols one at a time; each is fully processed before the
    /// next is requested.
    pub fn extend<S>(&mut self, symbols: S)
    where
        S: IntoIterator<Item = T>,
    {
        for symbol in symbols {
            self.push(symbol);
        }
    }

    /// The tree under construction, for queries between pushes.
    pub fn tree(&self) -> &Tree<T, I> {
        self.tree
    }

    /// Processes the terminator and ends the construction.
    pub fn finish(mut self) {
        self.machine.step(self.tree, self.seq);
        self.machine.close(self.tree);
    }
}

impl<'t, T, I> Drop for Online<'t, T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        // an abandoned construction leaves a partial sequence; the phase
        // must not outlive the machine
        self.tree.phase = None;
    }
}
