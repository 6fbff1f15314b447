mod gallery;
mod pipeline;
mod state;

pub use gallery::*;
pub use pipeline::*;
pub use state::*;
