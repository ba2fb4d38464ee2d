pub mod addon;
pub mod download;
pub mod request;

pub use addon::*;
pub use download::*;
pub use request::*;
