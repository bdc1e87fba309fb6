pub mod fs;

pub use fs::read_to_string;
