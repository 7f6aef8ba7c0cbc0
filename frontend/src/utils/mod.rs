mod error;
mod feed;
mod session;

pub use error::*;
pub use feed::*;
pub use session::*;
