pub mod card;
pub mod normalized;

pub use card::*;
pub use normalized::*;
