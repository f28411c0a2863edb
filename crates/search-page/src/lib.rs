mod config;
mod console;
mod controller;
mod debounce;
mod state;
mod view;

#[cfg(test)]
mod test_utils;

pub use config::*;
pub use console::*;
pub use controller::*;
pub use debounce::*;
pub use state::*;
pub use view::*;
