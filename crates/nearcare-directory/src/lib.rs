pub mod client;
pub mod error;
pub mod types;

pub use client::DirectoryClient;
pub use error::DirectoryError;
