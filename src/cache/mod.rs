//! Persistence of the single-block base set

pub mod constants;
mod core;
mod errors;
mod record;

pub use constants::{CACHE_VERSION, DEFAULT_CACHE_PATH};
pub use core::{load, load_or_generate, store, try_load};
pub use errors::CacheError;
