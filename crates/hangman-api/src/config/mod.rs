//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_SECRET_WORD, ENV_BIND_ADDR, ENV_EXPOSE_WORD, ENV_SECRET_WORD,
};
pub use env::Config;
