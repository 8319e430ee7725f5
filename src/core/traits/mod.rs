pub mod access;
pub mod archive;
