//! CLI commands for graphkit

pub mod dispatch;
pub mod info;
pub mod order;
pub mod paths;
pub mod traverse;

use graphkit_core::graph::Graph;

/// Records header line shared by every command
pub fn records_header(mode: &str, graph: &Graph<u64>, extra: &str) -> String {
    let mut header = format!(
        "H graphkit=1 records=1 mode={} vertices={} edges={}",
        mode,
        graph.num_vertices(),
        graph.num_edges()
    );
    if !extra.is_empty() {
        header.push(' ');
        header.push_str(extra);
    }
    header
}

/// Print rendered output, adding the trailing newline only when missing
pub fn emit(output: &str) {
    if output.is_empty() {
        return;
    }
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
