//! Graphviz rendering, for debugging and the `visualize` binary.

use std::fmt;
use std::hash::Hash;

use crate::node::NodeId;
use crate::tree::Tree;

impl<T, I> Tree<T, I>
where
    T: Eq + Hash + Clone + fmt::Display,
    I: Eq + Hash + Clone + fmt::Display,
{
    /// Renders the tree in Graphviz dot format: internal nodes red, leaves
    /// green, suffix links blue and non-constraining, edges labeled with
    /// their first symbol.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("strict digraph G {\n");
        self.dot_node(self.root(), &mut out);
        out.push_str("}\n");
        out
    }

    fn dot_node(&self, node: NodeId, out: &mut String) {
        let label = self.dot_label(node);

        if self.is_leaf(node) {
            out.push_str(&format!("\"{}\" [color=green];\n", label));
            return;
        }

        out.push_str(&format!("\"{}\" [color=red];\n", label));
        if !self.is_root(node) {
            if let Some(link) = self.suffix_link(node) {
                out.push_str(&format!(
                    "\"{}\" -> \"{}\" [color=blue; constraint=false];\n",
                    label,
                    self.dot_label(link)
                ));
            }
        }
        let children: Vec<_> = self.internal(node).children.iter()
            .map(|(symbol, child)| (symbol.cloned(), child))
            .collect();
        for (symbol, child) in children {
            out.push_str(&format!(
                "\"{}\" -> \"{}\" [label=\"{}\"];\n",
                label,
                self.dot_label(child),
                symbol
            ));
            self.dot_node(child, out);
        }
    }

    fn dot_label(&self, node: NodeId) -> String {
        if self.is_root(node) {
            return "root".to_string();
        }
        let span = self.span(node);
        let mut label = self.span_string(&span);
        if self.is_leaf(node) {
            // one-based start for easier comparison with the literature
            let id = self.leaf_sequence_id(node);
            label.push_str(&format!(" {}:{}", id, span.start() + 1));
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::Tree;

    #[test]
    fn dot_of_a_flat_tree() {
        let mut tree = Tree::new();
        tree.add("A", "ab".chars());

        let expected = indoc!(
            r#"
            strict digraph G {
            "root" [color=red];
            "root" -> "a b $ A:1" [label="a"];
            "a b $ A:1" [color=green];
            "root" -> "b $ A:2" [label="b"];
            "b $ A:2" [color=green];
            "root" -> "$ A:3" [label="$"];
            "$ A:3" [color=green];
            }
            "#
        );
        assert_eq!(tree.to_dot(), expected);
    }

    #[test]
    fn dot_shows_suffix_links() {
        let mut tree = Tree::new();
        tree.add("A", "xax".chars());

        let dot = tree.to_dot();
        assert!(dot.contains("color=blue"));
        assert!(dot.contains("color=green"));
        assert!(dot.contains("color=red"));
    }
}
