#![allow(dead_code)]

use gstree::{mccreight, naive, ukkonen, Tree};

pub type CharTree = Tree<char, &'static str>;

pub const BUILDERS: [&str; 3] = ["naive", "mccreight", "ukkonen"];

pub fn pattern(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub fn add_with_builder(tree: &mut CharTree, id: &'static str, s: &str, builder: &str) {
    match builder {
        "naive" => tree.add_with(id, s.chars(), &mut naive::Builder::new()),
        "mccreight" => tree.add_with(id, s.chars(), &mut mccreight::Builder::new()),
        "ukkonen" => tree.add_with(id, s.chars(), &mut ukkonen::Builder::new()),
        other => panic!("unknown builder {}", other),
    }
}

pub fn build(pairs: &[(&'static str, &str)], builder: &str) -> CharTree {
    let mut tree = Tree::new();
    for &(id, s) in pairs {
        add_with_builder(&mut tree, id, s, builder);
    }
    tree
}

/// Runs a check against the same input built by each of the three
/// builders.
pub fn for_each_builder<F>(pairs: &[(&'static str, &str)], mut check: F)
where
    F: FnMut(&'static str, CharTree),
{
    for &name in &BUILDERS {
        check(name, build(pairs, name));
    }
}
