// Configuration constants for the cache module
pub const CACHE_VERSION: u32 = 3;
pub const DEFAULT_CACHE_PATH: &str = "block_cache.json";
