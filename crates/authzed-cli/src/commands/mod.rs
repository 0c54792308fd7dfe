pub mod check;
pub mod run_common;
pub mod sexp;
pub mod source_loader;
pub mod tree;
