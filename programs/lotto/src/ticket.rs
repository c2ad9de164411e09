use anchor_lang::prelude::*;
use std::fmt;

use crate::{errors::LottoError, MAX_AMOUNT, MAX_NUMBER, MIN_NUMBER, TICKET_PRICE, TICKET_SIZE};

// ── Purchase ──────────────────────────────────────────────────────────────

/// A validated purchase: the amount paid and how many tickets it buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub amount: u64,
    pub count:  u64,
}

impl Purchase {
    /// Any finite amount is accepted as input; fractions fail the multiple rule.
    /// Amounts are capped where every 1,000 multiple is still exact in `f64`.
    pub fn new(amount: f64) -> Result<Self> {
        require!(amount > 0.0,                        LottoError::AmountNotPositive);
        require!(amount <= MAX_AMOUNT as f64,         LottoError::AmountTooLarge);
        require!(amount % TICKET_PRICE as f64 == 0.0, LottoError::AmountNotTicketMultiple);
        let amount = amount as u64;
        Ok(Self { amount, count: amount / TICKET_PRICE })
    }
}

// ── Ticket ────────────────────────────────────────────────────────────────

/// Six distinct numbers in 1..=45, kept sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [u8; TICKET_SIZE],
}

impl Ticket {
    pub fn new(values: &[i64]) -> Result<Self> {
        require!(values.len() == TICKET_SIZE, LottoError::WrongTicketSize);
        require!(values.iter().all(|&v| in_range(v)), LottoError::NumberOutOfRange);

        let mut numbers = [0u8; TICKET_SIZE];
        for (slot, &v) in numbers.iter_mut().zip(values) {
            *slot = v as u8;
        }
        numbers.sort_unstable();
        require!(numbers.windows(2).all(|w| w[0] != w[1]), LottoError::DuplicateNumber);

        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8; TICKET_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// How many of this ticket's numbers appear in `other`.
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers.iter().filter(|&&n| other.contains(n)).count()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

// ── Winning Set ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningSet {
    pub numbers: Ticket,
    pub bonus:   u8,
}

impl WinningSet {
    pub fn new(numbers: Ticket, bonus: i64) -> Result<Self> {
        // Duplicate is reported before range.
        let collides = u8::try_from(bonus).map_or(false, |b| numbers.contains(b));
        require!(!collides,        LottoError::BonusInWinningNumbers);
        require!(in_range(bonus),  LottoError::NumberOutOfRange);
        Ok(Self { numbers, bonus: bonus as u8 })
    }
}

fn in_range(value: i64) -> bool {
    (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&value)
}
