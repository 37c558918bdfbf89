//! The generalized suffix tree.
//!
//! The tree owns every added sequence and a node arena; builders mutate the
//! arena through the tree's crate-internal methods, queries and analyses
//! only read it.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use bit_vec::BitVec;
use smallvec::SmallVec;
use tracing::debug;

use crate::builder::{Builder, SeqIndex};
use crate::lca;
use crate::node::{InternalNode, Node, NodeId, SpanEnd, ROOT};
use crate::path::{Sequence, Span, Symbol};
use crate::ukkonen;

/// Result of a path search: the deepest fully matched node, the matched
/// length, and the child whose edge the search ended inside, if any.
pub(crate) type PathMatch = (NodeId, usize, Option<NodeId>);

/// A read-only source of symbols for path searches: either a caller
/// pattern (regular symbols only) or a suffix of a stored sequence,
/// terminator included.
pub(crate) enum Cursor<'q, T> {
    Pattern(&'q [T]),
    Suffix { seq: usize, start: usize, end: usize },
}

impl<'q, T> Cursor<'q, T> {
    fn len(&self) -> usize {
        match *self {
            Cursor::Pattern(pattern) => pattern.len(),
            Cursor::Suffix { start, end, .. } => end - start,
        }
    }
}

/// A generalized suffix tree over sequences of `T`, keyed by caller ids of
/// type `I`.
///
/// # Examples
///
/// ```
/// use gstree::Tree;
///
/// let mut tree = Tree::new();
/// tree.add("A", "xabxac".chars());
/// tree.add("B", "awyawxawxz".chars());
///
/// assert!(tree.find(&['a', 'b', 'x']));
/// assert!(tree.find(&['a', 'w', 'x']));
/// assert!(!tree.find(&['a', 'b', 'c']));
/// ```
pub struct Tree<T, I> {
    pub(crate) sequences: Vec<Sequence<T, I>>,
    index_of: HashMap<I, usize>,
    pub(crate) nodes: Vec<Node<T>>,
    /// `(sequence, phase)` while an online build is running; open leaves of
    /// that sequence end at the phase.
    pub(crate) phase: Option<(usize, usize)>,
    pub(crate) lca: Option<lca::Tables<I>>,
}

impl<T, I> Tree<T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    pub fn new() -> Tree<T, I> {
        Tree {
            sequences: Vec::new(),
            index_of: HashMap::new(),
            nodes: vec![Node::new_internal(ROOT, 0, 0, 0)],
            phase: None,
            lca: None,
        }
    }

    /// Adds a sequence and builds its suffixes into the tree with the
    /// online builder, pulling one symbol at a time.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "xabxac".chars());
    /// assert!(tree.find(&['x', 'a', 'c']));
    /// ```
    pub fn add<S>(&mut self, id: I, symbols: S)
    where
        S: IntoIterator<Item = T>,
    {
        let mut online = ukkonen::Online::open(self, id);
        online.extend(symbols);
        online.finish();
    }

    /// Adds a sequence and builds it with the given builder.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::{naive, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.add_with("A", "xabxac".chars(), &mut naive::Builder::new());
    /// assert!(tree.find(&['a', 'b', 'x']));
    /// ```
    pub fn add_with<S, B>(&mut self, id: I, symbols: S, builder: &mut B)
    where
        S: IntoIterator<Item = T>,
        B: Builder<T, I>,
    {
        let seq = self.insert_sequence(id, symbols.into_iter().collect());
        debug!("building sequence {} with the {} builder", seq, builder.name());
        builder.build(self, SeqIndex(seq));
    }

    /// Returns true if the pattern occurs in any of the added sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "xabxac".chars());
    /// assert!(tree.find(&['a', 'b', 'x']));
    /// assert!(!tree.find(&['a', 'b', 'c']));
    /// ```
    pub fn find(&self, pattern: &[T]) -> bool {
        let (_, matched, _) = self.find_path(ROOT, &Cursor::Pattern(pattern));
        matched == pattern.len()
    }

    /// Returns every occurrence of the pattern, as the id of the sequence
    /// and the full suffix span of the leaf below the match.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "xabxac".chars());
    /// let hits = tree.find_all(&['a', 'b']);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].0, "A");
    /// assert_eq!(tree.span_string(&hits[0].1), "a b x a c $");
    /// ```
    pub fn find_all(&self, pattern: &[T]) -> Vec<(I, Span)> {
        let (node, matched, child) = self.find_path(ROOT, &Cursor::Pattern(pattern));
        if matched < pattern.len() {
            return Vec::new();
        }
        let mut positions = Vec::new();
        self.collect_positions(child.unwrap_or(node), &mut positions);
        positions
    }

    /// Returns true if the pattern occurs in the sequence labeled `id`.
    pub fn find_id(&self, id: &I, pattern: &[T]) -> bool {
        self.find_all(pattern).iter().any(|(found, _)| found == id)
    }

    /// Visits every node before its children.  Children are visited in
    /// child-map order; sort by first symbol yourself if you need another
    /// order.
    pub fn pre_order<F: FnMut(NodeId)>(&self, mut f: F) {
        self.pre_order_node(ROOT, &mut f);
    }

    /// Visits every node after its children.
    pub fn post_order<F: FnMut(NodeId)>(&self, mut f: F) {
        self.post_order_node(ROOT, &mut f);
    }

    /// Computes for every internal node the number of distinct sequence
    /// ids occurring at the leaves below it.
    pub fn compute_c(&mut self) {
        let nseq = self.sequences.len();
        self.compute_c_node(ROOT, nseq);
    }

    /// Computes for every internal node whether at least two leaves in its
    /// subtree have different left characters.
    pub fn compute_left_diverse(&mut self) {
        self.left_diverse_node(ROOT);
    }

    /// Returns the common-substring table: for every `k` from 2 up to the
    /// largest number of sequences sharing a substring, the length `l(k)`
    /// of the longest substring common to at least `k` sequences, and one
    /// such substring.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "sandollar".chars());
    /// tree.add("B", "sandlot".chars());
    /// tree.add("C", "handler".chars());
    /// tree.add("D", "grand".chars());
    /// tree.add("E", "pantry".chars());
    ///
    /// let rows: Vec<(usize, usize, String)> = tree
    ///     .common_substrings()
    ///     .iter()
    ///     .map(|&(k, l, ref span)| (k, l, tree.span_string(span)))
    ///     .collect();
    /// assert_eq!(
    ///     rows,
    ///     vec![
    ///         (2, 4, "s a n d".to_string()),
    ///         (3, 3, "a n d".to_string()),
    ///         (4, 3, "a n d".to_string()),
    ///         (5, 2, "a n".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn common_substrings(&mut self) -> Vec<(usize, usize, Span)> {
        self.compute_c();

        // k => deepest node seen so far with C == k, first one wins ties
        let mut best: HashMap<usize, (usize, Span)> = HashMap::new();
        {
            let tree = &*self;
            tree.pre_order(|node| {
                if tree.is_leaf(node) {
                    return;
                }
                let depth = tree.string_depth(node);
                let k = tree.c(node).expect("C computed above");
                let deepest = best.get(&k).map(|&(depth, _)| depth).unwrap_or(0);
                if depth > deepest {
                    best.insert(k, (depth, tree.span(node)));
                }
            });
        }

        let kmax = match best.keys().max() {
            Some(&k) if k >= 2 => k,
            _ => return Vec::new(),
        };

        let mut rows = Vec::new();
        let mut max_len = 0;
        let mut max_span = None;
        for k in (2..=kmax).rev() {
            if let Some(&(len, span)) = best.get(&k) {
                if len > max_len {
                    max_len = len;
                    max_span = Some(span);
                }
            }
            if let Some(span) = max_span {
                rows.push((k, max_len, span));
            }
        }
        rows.reverse();
        rows
    }

    /// Returns every maximal repeat as the number of distinct sequences it
    /// occurs in and its span.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "xabxac".chars());
    /// tree.add("B", "awyawxawxz".chars());
    ///
    /// let mut rows: Vec<(usize, String)> = tree
    ///     .maximal_repeats()
    ///     .iter()
    ///     .map(|&(c, ref span)| (c, tree.span_string(span)))
    ///     .collect();
    /// rows.sort();
    /// assert_eq!(
    ///     rows,
    ///     vec![
    ///         (1, "a w".to_string()),
    ///         (1, "a w x".to_string()),
    ///         (2, "a".to_string()),
    ///         (2, "x".to_string()),
    ///         (2, "x a".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn maximal_repeats(&mut self) -> Vec<(usize, Span)> {
        self.compute_c();
        self.compute_left_diverse();

        let mut repeats = Vec::new();
        let children: SmallVec<[NodeId; 8]> = self.internal(ROOT).children.ids().collect();
        for child in children {
            self.maximal_repeats_node(child, &mut repeats);
        }
        repeats
    }

    // ------------------------------------------------------------------
    // node inspection

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        node == ROOT
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_leaf()
    }

    /// The parent of a node; the root is its own parent unless an online
    /// build rewired it to the auxiliary state.
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].parent()
    }

    /// The children of a node in child-map order; empty for leaves.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.nodes[node.0].as_internal() {
            Some(internal) => internal.children.ids().collect(),
            None => Vec::new(),
        }
    }

    /// Number of symbols on the path from the root to this node.
    pub fn string_depth(&self, node: NodeId) -> usize {
        self.depth(node)
    }

    /// The path span of a node, end resolved.
    pub fn span(&self, node: NodeId) -> Span {
        let record = &self.nodes[node.0];
        let end = self.resolve_end(record.seq(), record.span_end());
        Span::new(record.seq(), record.start(), end)
    }

    /// The suffix link of an internal node, if set.
    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].as_internal().and_then(|n| n.suffix_link)
    }

    /// `C(v)` after `compute_c`; leaves count as one.
    pub fn c(&self, node: NodeId) -> Option<usize> {
        match self.nodes[node.0] {
            Node::Leaf(_) => Some(1),
            Node::Internal(ref n) => n.c,
        }
    }

    /// Left diversity after `compute_left_diverse`; `None` for leaves,
    /// which are never left diverse.
    pub fn is_left_diverse(&self, node: NodeId) -> Option<bool> {
        self.nodes[node.0].as_internal().and_then(|n| n.left_diverse)
    }

    /// Depth-first number assigned by `prepare_lca`.
    pub fn lca_id(&self, node: NodeId) -> u32 {
        self.nodes[node.0].lca_id()
    }

    /// The id of the sequence a leaf belongs to.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a leaf.
    pub fn leaf_sequence_id(&self, node: NodeId) -> &I {
        assert!(self.is_leaf(node), "not a leaf node");
        self.sequences[self.nodes[node.0].seq()].id()
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// The symbols of a span, terminator included if covered.
    pub fn symbols<'s>(&'s self, span: &Span) -> impl Iterator<Item = Symbol<&'s T>> + 's {
        let seq = &self.sequences[span.seq];
        (span.start..span.end).map(move |i| seq.at(i))
    }

    // ------------------------------------------------------------------
    // crate internals shared with the builders

    pub(crate) fn insert_sequence(&mut self, id: I, data: Vec<T>) -> usize {
        assert!(
            !self.index_of.contains_key(&id),
            "sequence id already in the tree"
        );
        let index = self.sequences.len();
        self.index_of.insert(id.clone(), index);
        self.sequences.push(Sequence::new(id, index, data));
        self.lca = None;
        index
    }

    pub(crate) fn push_symbol(&mut self, seq: usize, symbol: T) {
        self.sequences[seq].push(symbol);
    }

    pub(crate) fn seq_at(&self, seq: usize, index: usize) -> Symbol<&T> {
        self.sequences[seq].at(index)
    }

    pub(crate) fn seq_len(&self, seq: usize) -> usize {
        self.sequences[seq].len()
    }

    pub(crate) fn resolve_end(&self, seq: usize, end: SpanEnd) -> usize {
        match end {
            SpanEnd::Fixed(end) => end,
            SpanEnd::Open => match self.phase {
                Some((phase_seq, phase)) if phase_seq == seq => phase,
                _ => self.sequences[seq].len(),
            },
        }
    }

    pub(crate) fn depth(&self, node: NodeId) -> usize {
        let record = &self.nodes[node.0];
        self.resolve_end(record.seq(), record.span_end()) - record.start()
    }

    pub(crate) fn internal(&self, node: NodeId) -> &InternalNode<T> {
        self.nodes[node.0]
            .as_internal()
            .expect("expected an internal node")
    }

    pub(crate) fn internal_mut(&mut self, node: NodeId) -> &mut InternalNode<T> {
        self.nodes[node.0]
            .as_internal_mut()
            .expect("expected an internal node")
    }

    pub(crate) fn push_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn new_leaf(
        &mut self,
        parent: NodeId,
        seq: usize,
        start: usize,
        end: SpanEnd,
    ) -> NodeId {
        self.push_node(Node::new_leaf(parent, seq, start, end))
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, key: Symbol<T>, child: NodeId) {
        debug_assert!(
            self.internal(parent).children.get(key.as_ref()).is_none(),
            "child slot already occupied"
        );
        self.internal_mut(parent).children.insert(key, child);
    }

    pub(crate) fn child(&self, parent: NodeId, key: Symbol<&T>) -> Option<NodeId> {
        self.internal(parent).children.get(key)
    }

    pub(crate) fn set_suffix_link(&mut self, node: NodeId, target: NodeId) {
        self.internal_mut(node).suffix_link = Some(target);
    }

    pub(crate) fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        self.nodes[node.0].set_parent(parent);
    }

    /// Searches for the cursor's symbols starting at `from`, whose path
    /// must spell a prefix of the cursor.
    pub(crate) fn find_path(&self, from: NodeId, cursor: &Cursor<T>) -> PathMatch {
        let mut node = from;
        let mut matched = self.depth(from);
        while matched < cursor.len() {
            // a fully matched leaf has no continuation; only reachable
            // while its sequence is still growing
            let record = match self.nodes[node.0].as_internal() {
                Some(internal) => internal,
                None => return (node, matched, None),
            };
            let child = match record.children.get(self.cursor_at(cursor, matched)) {
                Some(child) => child,
                None => return (node, matched, None),
            };

            let child_depth = self.depth(child);
            let (child_seq, child_start) = {
                let child_record = &self.nodes[child.0];
                (child_record.seq(), child_record.start())
            };
            let limit = child_depth.min(cursor.len());
            let entered = matched;
            while matched < limit
                && self.cursor_at(cursor, matched) == self.seq_at(child_seq, child_start + matched)
            {
                matched += 1;
            }
            assert!(matched > entered, "no progress on edge match");

            if matched < child_depth {
                // the path ends between node and child
                return (node, matched, Some(child));
            }
            node = child;
        }
        (node, matched, None)
    }

    /// Splits the edge `parent -> child` so that the new node has string
    /// depth `new_len`, and returns the new node.
    pub(crate) fn split_edge(&mut self, parent: NodeId, new_len: usize, child: NodeId) -> NodeId {
        let parent_depth = self.depth(parent);
        let child_depth = self.depth(child);
        assert!(
            parent_depth < new_len && new_len < child_depth,
            "split depth {} outside {}..{}",
            new_len,
            parent_depth,
            child_depth
        );

        let (seq, start) = {
            let record = &self.nodes[child.0];
            (record.seq(), record.start())
        };
        let edge_start = start + parent_depth;
        let edge_end = start + new_len;

        let new_node = self.push_node(Node::new_internal(parent, seq, start, edge_end));
        let parent_key = self.seq_at(seq, edge_start).cloned();
        let child_key = self.seq_at(seq, edge_end).cloned();
        self.internal_mut(parent).children.insert(parent_key, new_node);
        self.internal_mut(new_node).children.insert(child_key, child);
        self.nodes[child.0].set_parent(new_node);

        debug!(
            "split edge into node {} at depth {}, new node {}",
            child.0, new_len, new_node.0
        );
        new_node
    }

    fn cursor_at<'s>(&'s self, cursor: &'s Cursor<T>, index: usize) -> Symbol<&'s T> {
        match *cursor {
            Cursor::Pattern(pattern) => Symbol::Regular(&pattern[index]),
            Cursor::Suffix { seq, start, .. } => self.seq_at(seq, start + index),
        }
    }

    fn collect_positions(&self, node: NodeId, positions: &mut Vec<(I, Span)>) {
        match self.nodes[node.0] {
            Node::Leaf(ref leaf) => {
                let end = self.resolve_end(leaf.seq, leaf.end);
                positions.push((
                    self.sequences[leaf.seq].id().clone(),
                    Span::new(leaf.seq, leaf.start, end),
                ));
            }
            Node::Internal(ref internal) => {
                for child in internal.children.ids() {
                    self.collect_positions(child, positions);
                }
            }
        }
    }

    fn pre_order_node<F: FnMut(NodeId)>(&self, node: NodeId, f: &mut F) {
        f(node);
        if let Node::Internal(ref internal) = self.nodes[node.0] {
            for child in internal.children.ids() {
                self.pre_order_node(child, f);
            }
        }
    }

    fn post_order_node<F: FnMut(NodeId)>(&self, node: NodeId, f: &mut F) {
        if let Node::Internal(ref internal) = self.nodes[node.0] {
            for child in internal.children.ids() {
                self.post_order_node(child, f);
            }
        }
        f(node);
    }

    fn compute_c_node(&mut self, node: NodeId, nseq: usize) -> BitVec {
        if self.nodes[node.0].is_leaf() {
            let mut ids = BitVec::from_elem(nseq, false);
            ids.set(self.nodes[node.0].seq(), true);
            return ids;
        }

        let children: SmallVec<[NodeId; 8]> = self.internal(node).children.ids().collect();
        let mut ids = BitVec::from_elem(nseq, false);
        for child in children {
            let child_ids = self.compute_c_node(child, nseq);
            ids.or(&child_ids);
        }
        self.internal_mut(node).c = Some(ids.iter().filter(|&bit| bit).count());
        ids
    }

    /// Returns the left characters below `node`, or `None` once the
    /// subtree is known to be left diverse.
    fn left_diverse_node(&mut self, node: NodeId) -> Option<HashSet<Symbol<T>>> {
        if self.nodes[node.0].is_leaf() {
            let seq = self.nodes[node.0].seq();
            let start = self.nodes[node.0].start();
            if start > 0 {
                let mut left = HashSet::new();
                left.insert(self.seq_at(seq, start - 1).cloned());
                return Some(left);
            }
            // a suffix starting at 0 has no left character
            return None;
        }

        let children: SmallVec<[NodeId; 8]> = self.internal(node).children.ids().collect();
        let mut diverse = false;
        let mut left = HashSet::new();
        for child in children {
            match self.left_diverse_node(child) {
                None => diverse = true,
                Some(child_left) => left.extend(child_left),
            }
        }
        if left.len() > 1 {
            diverse = true;
        }
        self.internal_mut(node).left_diverse = Some(diverse);
        if diverse {
            None
        } else {
            Some(left)
        }
    }

    fn maximal_repeats_node(&self, node: NodeId, repeats: &mut Vec<(usize, Span)>) {
        if let Node::Internal(ref internal) = self.nodes[node.0] {
            if internal.left_diverse.expect("left diversity computed") {
                repeats.push((
                    internal.c.expect("C computed"),
                    Span::new(internal.seq, internal.start, internal.end),
                ));
            }
            for child in internal.children.ids() {
                self.maximal_repeats_node(child, repeats);
            }
        }
    }
}

impl<T, I> Tree<T, I>
where
    T: Eq + Hash + Clone + fmt::Display,
    I: Eq + Hash + Clone,
{
    /// Renders a span as its symbols separated by blanks, terminators as
    /// `$`.
    pub fn span_string(&self, span: &Span) -> String {
        let mut out = String::new();
        for (i, symbol) in self.symbols(span).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&symbol.to_string());
        }
        out
    }
}

impl<T, I> Default for Tree<T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    fn default() -> Tree<T, I> {
        Tree::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let tree: Tree<char, &str> = Tree::new();
        assert!(!tree.find(&pattern("a")));
        assert!(tree.find_all(&pattern("a")).is_empty());
    }

    #[test]
    fn single_sequence_queries() {
        let mut tree = Tree::new();
        tree.add("A", "xabxac".chars());

        assert!(tree.find(&pattern("xabxac")));
        assert!(tree.find(&pattern("abxa")));
        assert!(!tree.find(&pattern("xabxaa")));

        assert_eq!(tree.find_all(&pattern("a")).len(), 2);
        assert_eq!(tree.find_all(&pattern("xa")).len(), 2);
        assert_eq!(tree.find_all(&pattern("q")).len(), 0);
    }

    #[test]
    fn find_all_reports_full_suffixes() {
        let mut tree = Tree::new();
        tree.add("A", "xabxac".chars());
        tree.add("B", "awyawxacxz".chars());

        let hits: Vec<(&str, String)> = tree
            .find_all(&pattern("xac"))
            .iter()
            .map(|&(id, ref span)| (id, tree.span_string(span)))
            .collect();
        assert_eq!(
            hits,
            vec![
                ("A", "x a c $".to_string()),
                ("B", "x a c x z $".to_string()),
            ]
        );
    }

    #[test]
    fn find_id_distinguishes_sequences() {
        let mut tree = Tree::new();
        tree.add("A", "xabxac".chars());
        tree.add("B", "awyawxacxz".chars());

        assert!(tree.find_id(&"A", &pattern("abx")));
        assert!(!tree.find_id(&"B", &pattern("abx")));
        assert!(tree.find_id(&"B", &pattern("awy")));
    }

    #[test]
    #[should_panic(expected = "sequence id already in the tree")]
    fn duplicate_ids_are_rejected() {
        let mut tree = Tree::new();
        tree.add("A", "ab".chars());
        tree.add("A", "cd".chars());
    }

    #[test]
    fn compute_c_counts_distinct_sequences() {
        let mut tree = Tree::new();
        tree.add("A", "xabxac".chars());
        tree.add("B", "awyawxawxz".chars());
        tree.compute_c();

        assert_eq!(tree.c(tree.root()), Some(2));

        // the node for "x a" occurs in both sequences
        let (node, matched, child) = tree.find_path(ROOT, &Cursor::Pattern(&pattern("xa")));
        let node = child.unwrap_or(node);
        assert_eq!(matched, 2);
        assert_eq!(tree.c(node), Some(2));
    }

    #[test]
    fn compute_c_is_idempotent() {
        let mut tree = Tree::new();
        tree.add("A", "mississippi".chars());
        tree.compute_c();
        let first: Vec<Option<usize>> = {
            let mut out = Vec::new();
            tree.pre_order(|n| out.push(tree.c(n)));
            out
        };
        tree.compute_c();
        let second: Vec<Option<usize>> = {
            let mut out = Vec::new();
            tree.pre_order(|n| out.push(tree.c(n)));
            out
        };
        assert_eq!(first, second);
    }
}
