//! column command: split a dotted column identifier.

use fabkit_core::column::{get_column_leaf, get_column_root_relation, is_column_dotted};

pub fn run_column(ident: &str) {
    println!("root\t{}", get_column_root_relation(ident));
    println!("leaf\t{}", get_column_leaf(ident));
    println!("dotted\t{}", is_column_dotted(ident));
}
