pub mod commit_randomness;
pub mod enter;
pub mod initialize_pool;
pub mod pick_winner;
pub mod view;

pub use commit_randomness::*;
pub use enter::*;
pub use initialize_pool::*;
pub use pick_winner::*;
pub use view::*;
