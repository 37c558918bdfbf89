//! Constant-time lowest-common-ancestor retrieval.
//!
//! Preprocessing maps the tree onto a complete binary tree through the
//! depth-first numbers: `I(v)` is the number with the highest
//! least-significant set bit in `v`'s subtree, nodes sharing an `I` form a
//! run, and `A(v)` records the run heights found on the root path.  A
//! query then needs a handful of word operations.
//!
//! All numbers are 32 bit; trees with more than `u32::MAX` nodes are
//! rejected during preprocessing.

use std::collections::HashMap;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::node::NodeId;
use crate::tree::Tree;

/// Number of leading zeros in the 32-bit representation of `x`.
pub fn nlz(x: u32) -> u32 {
    x.leading_zeros()
}

/// Position of the most significant set bit, counting from the right and
/// starting at 0; -1 for zero.
pub fn msb(x: u32) -> i32 {
    31 - nlz(x) as i32
}

/// Position of the least significant set bit of `k`, counting from the
/// right and starting at 0; `h(0)` is 32.
///
/// For a path number in the complete binary tree this is the height of the
/// node.
pub fn h(k: u32) -> u32 {
    32 - nlz(!k & k.wrapping_sub(1))
}

/// Mask with the `k + 1` lowest bits reset.
fn keep_above(k: u32) -> u32 {
    (!0u32).checked_shl(k + 1).unwrap_or(0)
}

/// Mask with the `j` lowest bits set.
fn low_bits(j: u32) -> u32 {
    match 1u32.checked_shl(j) {
        Some(bit) => bit - 1,
        None => !0,
    }
}

/// Lookup tables built by `prepare_lca`.
pub(crate) struct Tables<I> {
    /// `I` value of a run to its topmost node.
    runs: HashMap<u32, NodeId>,
    /// Sequence id and suffix start to the leaf spelling that suffix.
    nodemap: HashMap<I, HashMap<usize, NodeId>>,
}

impl<T, I> Tree<T, I>
where
    T: Eq + Hash + Clone,
    I: Eq + Hash + Clone,
{
    /// Preprocesses the tree for constant-time `lca` queries and builds
    /// the leaf map consulted by `leaf`.
    ///
    /// Adding another sequence afterwards discards the preprocessing.
    ///
    /// # Panics
    ///
    /// Panics if the tree has more nodes than fit a 32-bit numbering.
    pub fn prepare_lca(&mut self) {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "tree too large for 32-bit LCA numbering"
        );

        let root = self.root();
        self.number_node(root, 1);

        let mut runs = HashMap::new();
        self.compute_i_and_l(root, &mut runs);
        self.compute_a(root, 0);

        let mut nodemap: HashMap<I, HashMap<usize, NodeId>> = HashMap::new();
        let mut leaves = Vec::new();
        {
            let tree = &*self;
            tree.pre_order(|node| {
                if tree.is_leaf(node) {
                    leaves.push(node);
                }
            });
        }
        for leaf in leaves {
            let id = self.leaf_sequence_id(leaf).clone();
            let start = self.span(leaf).start();
            nodemap.entry(id).or_insert_with(HashMap::new).insert(start, leaf);
        }

        self.lca = Some(Tables { runs, nodemap });
    }

    /// The leaf spelling the suffix of sequence `id` that starts at
    /// `start`.
    ///
    /// # Panics
    ///
    /// Panics if `prepare_lca` has not been called, if `id` is not in the
    /// tree, or if no suffix starts at `start`.
    pub fn leaf(&self, id: &I, start: usize) -> NodeId {
        let tables = self
            .lca
            .as_ref()
            .expect("prepare_lca must be called before leaf lookups");
        *tables
            .nodemap
            .get(id)
            .expect("unknown sequence id")
            .get(&start)
            .expect("no suffix starts at this position")
    }

    /// The lowest common ancestor of `x` and `y`.
    ///
    /// # Panics
    ///
    /// Panics if `prepare_lca` has not been called since the last
    /// sequence was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use gstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("A", "xabxac".chars());
    /// tree.add("B", "awyawxawxz".chars());
    /// tree.prepare_lca();
    ///
    /// let lca = tree.lca(tree.leaf(&"A", 1), tree.leaf(&"B", 3));
    /// assert_eq!(tree.lca_id(lca), 8);
    /// ```
    pub fn lca(&self, x: NodeId, y: NodeId) -> NodeId {
        let tables = self
            .lca
            .as_ref()
            .expect("prepare_lca must be called before lca queries");
        if x == y {
            return x;
        }

        let ix = self.nodes[x.0].i();
        let iy = self.nodes[y.0].i();

        // lca of I(x) and I(y) in the complete binary tree; equal I means
        // x and y share a run and the run head already is that lca
        let b = if ix == iy {
            ix
        } else {
            let k = msb(ix ^ iy) as u32;
            (ix & keep_above(k)) | (1 << k)
        };

        // smallest run height of a common ancestor at or above h(b)
        let ax = self.nodes[x.0].a();
        let ay = self.nodes[y.0].a();
        let j = h(ax & ay & keep_from(h(b)));
        debug_assert!(j < 32, "no common ancestor height");

        let xbar = self.climb_to_height(x, j, tables);
        let ybar = self.climb_to_height(y, j, tables);

        if self.nodes[xbar.0].lca_id() < self.nodes[ybar.0].lca_id() {
            xbar
        } else {
            ybar
        }
    }

    /// The closest ancestor of `node` (or `node` itself) whose run has
    /// height `j`.
    fn climb_to_height(&self, node: NodeId, j: u32, tables: &Tables<I>) -> NodeId {
        let a = self.nodes[node.0].a();
        if h(a) == j {
            return node;
        }
        // the deepest run below height j on the root path; its head's
        // parent is the sought ancestor
        let k = msb(a & low_bits(j)) as u32;
        let iw = (self.nodes[node.0].i() & keep_above(k)) | (1 << k);
        let w = tables
            .runs
            .get(&iw)
            .copied()
            .expect("run head must exist");
        self.parent(w)
    }

    fn number_node(&mut self, node: NodeId, counter: u32) -> u32 {
        self.nodes[node.0].set_lca_id(counter);
        let mut counter = counter + 1;
        let children: SmallVec<[NodeId; 8]> = match self.nodes[node.0].as_internal() {
            Some(internal) => internal.children.ids().collect(),
            None => return counter,
        };
        for child in children {
            counter = self.number_node(child, counter);
        }
        counter
    }

    fn compute_i_and_l(&mut self, node: NodeId, runs: &mut HashMap<u32, NodeId>) -> u32 {
        let children: SmallVec<[NodeId; 8]> = match self.nodes[node.0].as_internal() {
            Some(internal) => internal.children.ids().collect(),
            None => SmallVec::new(),
        };

        let mut imax = self.nodes[node.0].lca_id();
        for child in children {
            let ival = self.compute_i_and_l(child, runs);
            if h(ival) > h(imax) {
                imax = ival;
            }
        }
        self.nodes[node.0].set_i(imax);
        // children insert first, so the topmost node of a run wins
        runs.insert(imax, node);
        imax
    }

    fn compute_a(&mut self, node: NodeId, a_parent: u32) {
        let a = a_parent | (1 << h(self.nodes[node.0].i()));
        self.nodes[node.0].set_a(a);

        let children: SmallVec<[NodeId; 8]> = match self.nodes[node.0].as_internal() {
            Some(internal) => internal.children.ids().collect(),
            None => return,
        };
        for child in children {
            self.compute_a(child, a);
        }
    }
}

/// Mask with the bits below `j` reset.
fn keep_from(j: u32) -> u32 {
    (!0u32).checked_shl(j).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nlz_values() {
        assert_eq!(nlz(0), 32);
        assert_eq!(nlz(0x1), 31);
        assert_eq!(nlz(0xFF), 24);
        assert_eq!(nlz(0xFFFF_FFFF), 0);
    }

    #[test]
    fn msb_values() {
        assert_eq!(msb(0), -1);
        assert_eq!(msb(0xF), 3);
        assert_eq!(msb(0xFF), 7);
        assert_eq!(msb(1), 0);
    }

    #[test]
    fn h_values() {
        assert_eq!(h(0), 32);
        assert_eq!(h(5), 0);
        assert_eq!(h(8), 3);
        assert_eq!(h(1), 0);
        assert_eq!(h(12), 2);
    }

    #[test]
    fn masks() {
        assert_eq!(keep_above(0), !1);
        assert_eq!(keep_above(31), 0);
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(3), 0b111);
        assert_eq!(low_bits(32), !0);
        assert_eq!(keep_from(0), !0);
        assert_eq!(keep_from(32), 0);
    }

    #[test]
    fn lca_of_a_node_with_itself() {
        let mut tree = crate::Tree::new();
        tree.add("A", "xabxac".chars());
        tree.prepare_lca();

        let leaf = tree.leaf(&"A", 2);
        assert_eq!(tree.lca(leaf, leaf), leaf);
    }

    #[test]
    #[should_panic(expected = "prepare_lca must be called")]
    fn lca_requires_preparation() {
        let mut tree = crate::Tree::new();
        tree.add("A", "ab".chars());
        let root = tree.root();
        tree.lca(root, root);
    }

    #[test]
    #[should_panic(expected = "unknown sequence id")]
    fn unknown_id_is_rejected() {
        let mut tree = crate::Tree::new();
        tree.add("A", "ab".chars());
        tree.prepare_lca();
        tree.leaf(&"B", 0);
    }
}
