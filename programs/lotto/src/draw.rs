use anchor_lang::prelude::*;
use rand::RngCore;

use crate::{ticket::Ticket, MAX_NUMBER, MIN_NUMBER, TICKET_SIZE};

/// Where purchased tickets come from. One call per ticket, in purchase order.
pub trait NumberSource {
    fn pick_ticket(&mut self) -> Result<Ticket>;
}

// ── Seeded Draw ───────────────────────────────────────────────────────────
// Every ticket is derived from the session seed and its purchase index:
//   Blake3( seed || index_le ) in XOF mode, read as little-endian u32 words.
// Each word is rejection-sampled into a partial Fisher-Yates shuffle of 1..=45,
// so the 6 picks are uniform and without replacement. Same seed, same tickets.

pub struct SeededDraw {
    seed:  [u8; 32],
    index: u64,
}

impl SeededDraw {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, index: 0 }
    }

    /// Fresh seed from the OS-backed thread RNG.
    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self::new(seed)
    }

    /// Reproducible seed from a free-form phrase.
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(*blake3::hash(phrase.as_bytes()).as_bytes())
    }

    /// First 8 hex digits of Blake3(seed); identifies a run without exposing the seed.
    pub fn fingerprint(&self) -> String {
        blake3::hash(&self.seed).to_hex()[..8].to_string()
    }

    pub fn tickets_drawn(&self) -> u64 {
        self.index
    }
}

impl NumberSource for SeededDraw {
    fn pick_ticket(&mut self) -> Result<Ticket> {
        let picks = draw_numbers(&self.seed, self.index);
        self.index = self.index.wrapping_add(1);
        Ticket::new(&picks.map(i64::from))
    }
}

fn draw_numbers(seed: &[u8; 32], index: u64) -> [u8; TICKET_SIZE] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(seed);
    hasher.update(&index.to_le_bytes());
    let mut stream = hasher.finalize_xof();

    let mut pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
    for i in 0..TICKET_SIZE {
        let remaining = (pool.len() - i) as u32;
        let j = i + uniform_below(&mut stream, remaining) as usize;
        pool.swap(i, j);
    }

    let mut picks = [0u8; TICKET_SIZE];
    picks.copy_from_slice(&pool[..TICKET_SIZE]);
    picks
}

/// Unbiased value in `0..bound`: words in the ragged top zone are redrawn.
fn uniform_below(stream: &mut blake3::OutputReader, bound: u32) -> u32 {
    let zone = u32::MAX - (u32::MAX % bound);
    let mut word = [0u8; 4];
    loop {
        stream.fill(&mut word);
        let x = u32::from_le_bytes(word);
        if x < zone {
            return x % bound;
        }
    }
}
