pub mod config;
pub mod console;
pub mod draw;
pub mod errors;
pub mod input;
pub mod log;
pub mod scoring;
pub mod session;
pub mod ticket;

pub use config::*;
pub use console::Console;
pub use draw::*;
pub use errors::*;
pub use scoring::*;
pub use session::*;
pub use ticket::*;

// ── Constants ─────────────────────────────────────────────────────────────
pub const TICKET_PRICE: u64 = 1_000;    // one ticket per 1,000 won
pub const TICKET_SIZE:  usize = 6;
pub const MAX_AMOUNT:   u64 = 9_007_199_254_740_000; // largest 1,000 multiple below 2^53, exact in f64
pub const MIN_NUMBER:   u8 = 1;
pub const MAX_NUMBER:   u8 = 45;

// ── Prize Table (won per winning ticket) ─────────────────────────────────
pub const PRIZE_THREE:      u64 = 5_000;
pub const PRIZE_FOUR:       u64 = 50_000;
pub const PRIZE_FIVE:       u64 = 1_500_000;
pub const PRIZE_FIVE_BONUS: u64 = 30_000_000;
pub const PRIZE_SIX:        u64 = 2_000_000_000;
