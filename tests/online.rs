mod common;

use common::pattern;
use gstree::{Online, Tree};

#[test]
fn tree_is_ready_between_pushes() {
    let mut tree = Tree::new();
    let mut online = Online::open(&mut tree, "A");

    online.extend("xabxac".chars());
    assert!(online.tree().find(&pattern("xac")));
    assert!(online.tree().find(&pattern("xabxac")));
    assert!(!online.tree().find(&pattern("xaca")));

    online.extend("abc".chars());
    online.finish();

    assert!(tree.find(&pattern("xacabc")));
    assert!(tree.find(&pattern("xabxacabc")));
    assert!(!tree.find(&pattern("xacabcd")));
}

#[test]
fn every_prefix_step_is_an_implicit_tree() {
    let text = "mississippi";
    let mut tree = Tree::new();
    let mut online = Online::open(&mut tree, "A");

    for (i, symbol) in text.chars().enumerate() {
        online.push(symbol);
        let seen = &text[..=i];
        // every substring of the processed prefix is present
        for start in 0..seen.len() {
            for end in (start + 1)..=seen.len() {
                assert!(
                    online.tree().find(&pattern(&seen[start..end])),
                    "missing {:?} after {} symbols",
                    &seen[start..end],
                    i + 1
                );
            }
        }
        // nothing longer than the prefix is
        if i + 2 <= text.len() {
            assert!(!online.tree().find(&pattern(&text[..i + 2])));
        }
    }
    online.finish();

    assert_eq!(tree.find_all(&pattern("ssi")).len(), 2);
    assert_eq!(tree.find_all(&pattern("i")).len(), 4);
}

#[test]
fn online_and_batch_agree() {
    let mut online_tree = Tree::new();
    let mut online = Online::open(&mut online_tree, "A");
    online.extend("xyxaxaxa".chars());
    online.finish();

    let mut batch_tree = Tree::new();
    batch_tree.add("A", "xyxaxaxa".chars());

    let mut online_labels = Vec::new();
    online_tree.pre_order(|node| {
        online_labels.push(online_tree.span_string(&online_tree.span(node)));
    });
    let mut batch_labels = Vec::new();
    batch_tree.pre_order(|node| {
        batch_labels.push(batch_tree.span_string(&batch_tree.span(node)));
    });
    assert_eq!(online_labels, batch_labels);
}

#[test]
fn second_sequence_can_be_streamed() {
    let mut tree = Tree::new();
    tree.add("A", "xabxac".chars());

    let mut online = Online::open(&mut tree, "B");
    for symbol in "awyawxawxz".chars() {
        online.push(symbol);
    }
    assert!(online.tree().find(&pattern("awxawx")));
    online.finish();

    assert!(tree.find_id(&"A", &pattern("abx")));
    assert!(tree.find_id(&"B", &pattern("awx")));
    assert!(!tree.find_id(&"B", &pattern("abx")));
}
