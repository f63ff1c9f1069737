pub mod interaction;
pub mod order;
pub mod token;

pub use interaction::{InteractionInput, Tag};
pub use order::{ClobState, Order, PairState};
pub use token::{TokenState, Vault};
