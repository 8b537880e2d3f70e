mod feed;
mod map;

pub use feed::*;
pub use map::*;
