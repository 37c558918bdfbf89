use structopt::StructOpt;

use gstree::{mccreight, naive, ukkonen, Tree};

#[derive(StructOpt)]
#[structopt(
    name = "visualize",
    about = "Print a generalized suffix tree in Graphviz dot format"
)]
struct Options {
    /// Construction algorithm: naive, mccreight or ukkonen
    #[structopt(short = "b", long = "builder", default_value = "mccreight")]
    builder: String,
    /// Sequences to insert, one id S0, S1, ... per sequence
    #[structopt(name = "SEQUENCE", required = true)]
    sequences: Vec<String>,
}

fn main() {
    let options = Options::from_args();

    let mut tree: Tree<char, String> = Tree::new();
    for (index, sequence) in options.sequences.iter().enumerate() {
        let id = format!("S{}", index);
        match options.builder.as_str() {
            "naive" => tree.add_with(id, sequence.chars(), &mut naive::Builder::new()),
            "mccreight" => tree.add_with(id, sequence.chars(), &mut mccreight::Builder::new()),
            "ukkonen" => tree.add_with(id, sequence.chars(), &mut ukkonen::Builder::new()),
            other => panic!("unknown builder {:?}, expected naive, mccreight or ukkonen", other),
        }
    }

    print!("{}", tree.to_dot());
}
