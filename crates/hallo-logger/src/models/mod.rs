pub mod level;
pub mod message;
pub mod options;

pub use level::*;
pub use message::*;
pub use options::*;
