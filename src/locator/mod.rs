//! Store discovery: locating the newest conversation snapshot on disk.

pub mod latest_file;

pub use latest_file::find_latest_file;
