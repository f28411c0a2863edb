mod client;
mod types;


pub use client::*;
pub use reqwest::StatusCode;
pub use types::*;
