//! Fibonacci Solitaire rules engine. Keep this crate free of IO.

pub mod cards;
pub mod deck;
pub mod events;
pub mod fibonacci;
pub mod rng;
pub mod round;
pub mod session;

pub use cards::*;
pub use deck::*;
pub use events::*;
pub use fibonacci::*;
pub use rng::*;
pub use round::*;
pub use session::*;
