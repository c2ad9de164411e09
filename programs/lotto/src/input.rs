//! Line parsers for the three prompts. Each turns one raw console line into a
//! validated value or the rule it broke.

use anchor_lang::prelude::*;

use crate::{
    errors::LottoError,
    ticket::{Purchase, Ticket, WinningSet},
    TICKET_SIZE,
};

/// Any finite decimal, e.g. `1000`, `1000.0`, `1e3`. Each field applies its own
/// integer rules afterwards.
pub fn parse_number(raw: &str) -> Result<f64> {
    let value = raw.trim().parse::<f64>().map_err(|_| LottoError::NotANumber)?;
    require!(value.is_finite(), LottoError::NotANumber);
    Ok(value)
}

/// Lotto numbers must be whole; a fraction can never be in 1..=45.
fn whole_number(value: f64) -> Result<i64> {
    require!(value.fract() == 0.0 && value.abs() < i64::MAX as f64, LottoError::NumberOutOfRange);
    Ok(value as i64)
}

pub fn parse_amount(raw: &str) -> Result<Purchase> {
    Purchase::new(parse_number(raw)?)
}

/// `1,2,3,4,5,6` with optional spaces around each number.
pub fn parse_winning_numbers(raw: &str) -> Result<Ticket> {
    let values = raw
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>>>()?;
    require!(values.len() == TICKET_SIZE, LottoError::WrongTicketSize);

    let values = values
        .into_iter()
        .map(whole_number)
        .collect::<Result<Vec<_>>>()?;
    Ticket::new(&values)
}

pub fn parse_bonus(raw: &str, numbers: Ticket) -> Result<WinningSet> {
    let bonus = whole_number(parse_number(raw)?)?;
    WinningSet::new(numbers, bonus)
}
