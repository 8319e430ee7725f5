pub mod zip_archiver;
