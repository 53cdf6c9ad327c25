// Configuration constants for the generator module
pub const DEFAULT_DIGITS: [u8; 4] = [9, 1, 7, 8];
pub const DIGITS_PER_BLOCK: usize = 4;
