use anchor_lang::prelude::*;
use std::io::{BufRead, Write};

use crate::{
    console::Console,
    draw::NumberSource,
    input::{parse_amount, parse_bonus, parse_winning_numbers},
    scoring::{MatchTally, Report},
    ticket::{Purchase, Ticket, WinningSet},
};

pub const AMOUNT_PROMPT:  &str = "구입금액을 입력해 주세요.";
pub const WINNING_PROMPT: &str = "\n당첨 번호를 입력해 주세요.";
pub const BONUS_PROMPT:   &str = "\n보너스 번호를 입력해주세요.";

// Up-front reservation for the ticket list; larger purchases grow as they print.
const TICKET_RESERVE: u64 = 1_024;

/// Everything a finished session decided, for callers that want more than the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub purchase: Purchase,
    pub tickets:  Vec<Ticket>,
    pub winning:  WinningSet,
    pub report:   Report,
}

/// One pass of the game: buy, draw, enter the winning set, report.
pub struct Session<S, R, W> {
    console: Console<R, W>,
    source:  S,
}

impl<S: NumberSource, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(console: Console<R, W>, source: S) -> Self {
        Self { console, source }
    }

    pub fn play(&mut self) -> Result<SessionOutcome> {
        let purchase = self.console.retry(AMOUNT_PROMPT, parse_amount)?;
        msg!("purchase accepted: amount={} tickets={}", purchase.amount, purchase.count);

        let tickets = self.issue_tickets(&purchase)?;
        let winning = self.enter_winning_set()?;

        let tally = MatchTally::from_tickets(&tickets, &winning);
        let report = Report::new(tally, &purchase)?;
        msg!(
            "tally: winners={} total_prize={} profit={}%",
            tally.winners(), report.total_prize, report.profit_text()
        );

        self.console.print("\n당첨 통계")?;
        self.console.print("---")?;
        self.console.print(report)?;

        Ok(SessionOutcome { purchase, tickets, winning, report })
    }

    /// Draws and prints each ticket as soon as it is bought.
    fn issue_tickets(&mut self, purchase: &Purchase) -> Result<Vec<Ticket>> {
        self.console.print(format_args!("\n{}개를 구매했습니다.", purchase.count))?;
        let mut tickets = Vec::with_capacity(purchase.count.min(TICKET_RESERVE) as usize);
        for _ in 0..purchase.count {
            let ticket = self.source.pick_ticket()?;
            self.console.print(ticket)?;
            tickets.push(ticket);
        }
        Ok(tickets)
    }

    fn enter_winning_set(&mut self) -> Result<WinningSet> {
        let numbers = self.console.retry(WINNING_PROMPT, parse_winning_numbers)?;
        self.console.retry(BONUS_PROMPT, |line| parse_bonus(line, numbers))
    }

    pub fn into_parts(self) -> (Console<R, W>, S) {
        (self.console, self.source)
    }
}
