//! 练习分组与目录组装

pub mod assembler;
pub mod grouper;

pub use assembler::{assemble_catalogue, CatalogueAssembler};
pub use grouper::{group_into_exercises, DEFAULT_GROUP_SIZE};
