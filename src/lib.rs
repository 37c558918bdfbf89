//! A generalized suffix tree over sequences of hashable symbols.
//!
//! The tree holds all suffixes of any number of added sequences, each
//! closed by its own terminator, and answers substring queries, common
//! substring and maximal repeat enumeration, and constant-time lowest
//! common ancestor queries after preprocessing.
//!
//! Three construction algorithms are provided: a naive quadratic one, and
//! the linear-time algorithms of McCreight (offline) and Ukkonen (online).
//! They produce identical trees; `Tree::add` uses Ukkonen's, processing
//! symbols as they are pulled from the iterator, and `Online` exposes the
//! same machinery symbol by symbol.
//!
//! # Examples
//!
//! ```
//! use gstree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.add("A", "xabxac".chars());
//! tree.add("B", "awyawxawxz".chars());
//!
//! assert!(tree.find(&['a', 'b', 'x']));
//! assert!(tree.find(&['a', 'w', 'x']));
//! assert!(!tree.find(&['a', 'b', 'c']));
//! ```

pub mod builder;
mod dot;
pub mod lca;
pub mod mccreight;
pub mod naive;
mod node;
mod path;
mod tree;
pub mod ukkonen;

pub use crate::builder::{Builder, Progress, SeqIndex};
pub use crate::node::NodeId;
pub use crate::path::{Span, Symbol};
pub use crate::tree::Tree;
pub use crate::ukkonen::Online;
