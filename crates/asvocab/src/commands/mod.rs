pub mod inspect;
pub mod normalize;
pub mod types;

pub use inspect::*;
pub use normalize::*;
pub use types::*;
