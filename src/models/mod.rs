pub mod card;
pub mod era;
pub mod price;
pub mod view;

pub use card::*;
pub use era::*;
pub use price::*;
pub use view::*;
