pub mod patcher;
pub mod rule;
pub mod walker;

pub use patcher::{patch_file, patch_tree};
pub use rule::Rule;
pub use walker::{source_files, GO_SUFFIX};
