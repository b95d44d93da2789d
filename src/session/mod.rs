pub mod game;
pub mod history;
pub mod score;

pub use game::{GameSession, DEFAULT_SIDE};
pub use history::History;
pub use score::Score;
