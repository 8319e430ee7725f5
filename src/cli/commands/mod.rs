pub mod download;
pub mod pattern;
pub mod view;
