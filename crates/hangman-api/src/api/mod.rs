//! API module

mod extract;
mod handlers;
mod routes;
mod state;

pub use extract::AppJson;
pub use handlers::{get_start, health_check, post_guess_letter, post_guess_word, root_greeting};
pub use routes::{create_router, run_server};
pub use state::AppState;
