pub mod directory;

pub use directory::ContactDirectory;
