// Configuration constants for the solver module
pub const TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MAX_BLOCKS: usize = 7;
pub const MAX_PER_LEVEL: usize = 50_000;
pub const BIG_THRESHOLD: f64 = 1000.0;
pub const DEFAULT_EXPONENTS: [i32; 2] = [-1, 2];
