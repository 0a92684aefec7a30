//! Infrastructure layer - storage backends and catalog files

pub mod catalog_file;
pub mod storage;
