use anchor_lang::prelude::*;
use std::fmt;

use crate::{
    errors::LottoError,
    ticket::{Purchase, Ticket, WinningSet},
    PRIZE_FIVE, PRIZE_FIVE_BONUS, PRIZE_FOUR, PRIZE_SIX, PRIZE_THREE,
};

// ── Prize Tiers ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Three,
    Four,
    Five,
    FiveBonus,
    Six,
}

impl Tier {
    /// Report order.
    pub const ALL: [Tier; 5] = [Tier::Three, Tier::Four, Tier::Five, Tier::FiveBonus, Tier::Six];

    /// Below three matches there is no tier. The bonus only splits the 5-match case.
    pub fn resolve(match_count: usize, bonus_matched: bool) -> Option<Tier> {
        match (match_count, bonus_matched) {
            (3, _)     => Some(Tier::Three),
            (4, _)     => Some(Tier::Four),
            (5, false) => Some(Tier::Five),
            (5, true)  => Some(Tier::FiveBonus),
            (6, _)     => Some(Tier::Six),
            _          => None,
        }
    }

    pub fn prize(self) -> u64 {
        match self {
            Tier::Three     => PRIZE_THREE,
            Tier::Four      => PRIZE_FOUR,
            Tier::Five      => PRIZE_FIVE,
            Tier::FiveBonus => PRIZE_FIVE_BONUS,
            Tier::Six       => PRIZE_SIX,
        }
    }

    fn condition(self) -> &'static str {
        match self {
            Tier::Three     => "3개 일치",
            Tier::Four      => "4개 일치",
            Tier::Five      => "5개 일치",
            Tier::FiveBonus => "5개 일치, 보너스 볼 일치",
            Tier::Six       => "6개 일치",
        }
    }
}

/// Scores one ticket. Pure: the same inputs always land in the same tier.
pub fn score(ticket: &Ticket, winning: &WinningSet) -> Option<Tier> {
    let matched = ticket.match_count(&winning.numbers);
    Tier::resolve(matched, ticket.contains(winning.bonus))
}

// ── Match Tally ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub three:      u64,
    pub four:       u64,
    pub five:       u64,
    pub five_bonus: u64,
    pub six:        u64,
}

impl MatchTally {
    pub fn from_tickets(tickets: &[Ticket], winning: &WinningSet) -> Self {
        let mut tally = Self::default();
        for tier in tickets.iter().filter_map(|t| score(t, winning)) {
            tally.record(tier);
        }
        tally
    }

    pub fn record(&mut self, tier: Tier) {
        let slot = match tier {
            Tier::Three     => &mut self.three,
            Tier::Four      => &mut self.four,
            Tier::Five      => &mut self.five,
            Tier::FiveBonus => &mut self.five_bonus,
            Tier::Six       => &mut self.six,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Three     => self.three,
            Tier::Four      => self.four,
            Tier::Five      => self.five,
            Tier::FiveBonus => self.five_bonus,
            Tier::Six       => self.six,
        }
    }

    pub fn winners(&self) -> u64 {
        Tier::ALL.iter().map(|&t| self.count(t)).sum()
    }

    /// Σ(count × prize), checked.
    pub fn total_prize(&self) -> Result<u64> {
        Tier::ALL.iter().try_fold(0u64, |acc, &tier| {
            self.count(tier)
                .checked_mul(tier.prize())
                .and_then(|won| acc.checked_add(won))
                .ok_or_else(|| LottoError::PrizeOverflow.into())
        })
    }
}

/// Winnings as a percentage of what was paid. `Purchase` guarantees a non-zero amount.
pub fn profit_percentage(total_prize: u64, purchase: &Purchase) -> f64 {
    total_prize as f64 / purchase.amount as f64 * 100.0
}

/// Tenths of a non-negative `f64`, taken from its exact binary value with ties
/// going up. This is the rounding of `Number.prototype.toFixed(1)`: `31.25` gives
/// 313, while `0.15` (stored just below the half) gives 1.
fn tenths_half_up(value: f64) -> u128 {
    if value.fract() == 0.0 {
        return value as u128 * 10;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = match biased {
        0 => (fraction, -1074),
        _ => (fraction | (1u64 << 52), biased - 1075),
    };
    // Non-integral, so exponent < 0 and value == mantissa / 2^shift.
    let shift = (-exponent) as u32;
    if shift >= 120 {
        return 0;
    }
    let scaled = mantissa as u128 * 10;
    (scaled + (1u128 << (shift - 1))) >> shift
}

// ── Report ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub tally:       MatchTally,
    pub total_prize: u64,
    pub purchase:    Purchase,
}

impl Report {
    pub fn new(tally: MatchTally, purchase: &Purchase) -> Result<Self> {
        let total_prize = tally.total_prize()?;
        Ok(Self { tally, total_prize, purchase: *purchase })
    }

    pub fn profit(&self) -> f64 {
        profit_percentage(self.total_prize, &self.purchase)
    }

    /// Percentage to one decimal place with ties going up, e.g. `31.25` → `31.3`.
    pub fn profit_text(&self) -> String {
        let tenths = tenths_half_up(self.profit());
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tier in Tier::ALL {
            writeln!(
                f,
                "{} ({}원) - {}개",
                tier.condition(),
                group_thousands(tier.prize()),
                self.tally.count(tier)
            )?;
        }
        write!(f, "총 수익률은 {}%입니다.", self.profit_text())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(values: [i64; 6]) -> Ticket {
        Ticket::new(&values).unwrap()
    }

    fn purchase(amount: u64) -> Purchase {
        Purchase::new(amount as f64).unwrap()
    }

    fn profit_with(tally: MatchTally, amount: u64) -> String {
        Report::new(tally, &purchase(amount)).unwrap().profit_text()
    }

    fn winning() -> WinningSet {
        WinningSet::new(ticket([1, 2, 3, 4, 5, 6]), 7).unwrap()
    }

    #[test]
    fn tiers_follow_match_count_and_bonus() {
        let w = winning();
        assert_eq!(score(&ticket([1, 2, 3, 4, 5, 7]), &w), Some(Tier::FiveBonus));
        assert_eq!(score(&ticket([1, 2, 3, 4, 5, 8]), &w), Some(Tier::Five));
        assert_eq!(score(&ticket([1, 2, 3, 7, 8, 9]), &w), Some(Tier::Three));
        assert_eq!(score(&ticket([1, 2, 3, 4, 7, 8]), &w), Some(Tier::Four));
        assert_eq!(score(&ticket([6, 5, 4, 3, 2, 1]), &w), Some(Tier::Six));
    }

    #[test]
    fn fewer_than_three_matches_are_dropped() {
        let w = winning();
        assert_eq!(score(&ticket([1, 2, 7, 8, 9, 10]), &w), None);
        assert_eq!(score(&ticket([1, 40, 41, 42, 43, 44]), &w), None);
        assert_eq!(score(&ticket([40, 41, 42, 43, 44, 45]), &w), None);

        let tally = MatchTally::from_tickets(&[ticket([1, 2, 7, 8, 9, 10])], &w);
        assert_eq!(tally, MatchTally::default());
        assert_eq!(tally.winners(), 0);
    }

    #[test]
    fn both_five_match_tiers_are_counted() {
        let w = winning();
        let tickets = [
            ticket([1, 2, 3, 4, 5, 7]),
            ticket([1, 2, 3, 4, 5, 8]),
            ticket([1, 2, 3, 4, 6, 9]),
        ];
        let tally = MatchTally::from_tickets(&tickets, &w);
        assert_eq!(tally.five_bonus, 1);
        assert_eq!(tally.five, 2);
        assert_eq!(tally.winners(), 3);
    }

    #[test]
    fn scoring_is_idempotent() {
        let w = winning();
        let tickets = [
            ticket([1, 2, 3, 7, 8, 9]),
            ticket([1, 2, 3, 4, 10, 11]),
            ticket([20, 21, 22, 23, 24, 25]),
        ];
        let first = MatchTally::from_tickets(&tickets, &w);
        let second = MatchTally::from_tickets(&tickets, &w);
        assert_eq!(first, second);
        assert_eq!(first.three, 1);
        assert_eq!(first.four, 1);
    }

    #[test]
    fn payout_of_one_three_match_on_fourteen_tickets() {
        let tally = MatchTally { three: 1, ..Default::default() };
        let report = Report::new(tally, &purchase(14_000)).unwrap();
        assert_eq!(report.total_prize, 5_000);
        assert_eq!(report.profit_text(), "35.7");
        assert!((report.profit() - 35.714).abs() < 0.001);
    }

    #[test]
    fn payout_of_one_three_match_on_sixteen_tickets_rounds_up() {
        let tally = MatchTally { three: 1, ..Default::default() };
        assert_eq!(profit_with(tally, 16_000), "31.3");
    }

    #[test]
    fn exact_halves_round_up() {
        let one_three = MatchTally { three: 1, ..Default::default() };
        assert_eq!(profit_with(one_three, 80_000), "6.3");
        assert_eq!(profit_with(one_three, 400_000), "1.3");
        assert_eq!(profit_with(one_three, 2_000_000), "0.3");
        assert_eq!(profit_with(one_three, 8_000), "62.5");

        let three_threes = MatchTally { three: 3, ..Default::default() };
        assert_eq!(profit_with(three_threes, 2_000_000), "0.8");
        let nine_threes = MatchTally { three: 9, ..Default::default() };
        assert_eq!(profit_with(nine_threes, 2_000_000), "2.3");
    }

    #[test]
    fn halves_below_the_stored_value_round_down() {
        // 15000 / 10000000 * 100 is stored as 0.1499999...
        let three_threes = MatchTally { three: 3, ..Default::default() };
        assert_eq!(profit_with(three_threes, 10_000_000), "0.1");
    }

    #[test]
    fn tenths_of_exact_values() {
        assert_eq!(tenths_half_up(0.0), 0);
        assert_eq!(tenths_half_up(31.25), 313);
        assert_eq!(tenths_half_up(31.24), 312);
        assert_eq!(tenths_half_up(0.05), 1);
        assert_eq!(tenths_half_up(1e-300), 0);
        assert_eq!(tenths_half_up(200_000_000.0), 2_000_000_000);
    }

    #[test]
    fn below_half_rounds_down() {
        let one_three = MatchTally { three: 1, ..Default::default() };
        assert_eq!(profit_with(one_three, 3_000), "166.7");
        assert_eq!(profit_with(one_three, 7_000), "71.4");
        assert_eq!(profit_with(one_three, 100_000_000), "0.0");
    }

    #[test]
    fn large_percentages_keep_all_digits() {
        let jackpot = MatchTally { six: 1, ..Default::default() };
        assert_eq!(profit_with(jackpot, 1_000), "200000000.0");
        let both = MatchTally { five: 1, five_bonus: 1, ..Default::default() };
        assert_eq!(profit_with(both, 2_000), "1575000.0");
    }

    #[test]
    fn total_prize_sums_every_tier() {
        let tally = MatchTally { three: 2, four: 1, five: 1, five_bonus: 1, six: 1 };
        assert_eq!(tally.total_prize().unwrap(), 10_000 + 50_000 + 1_500_000 + 30_000_000 + 2_000_000_000);
    }

    #[test]
    fn total_prize_reports_overflow() {
        let tally = MatchTally { six: u64::MAX / 1_000, ..Default::default() };
        assert!(tally.total_prize().is_err());
    }

    #[test]
    fn report_lists_every_tier_then_profit() {
        let tally = MatchTally { three: 1, ..Default::default() };
        let report = Report::new(tally, &purchase(8_000)).unwrap();
        let expected = "\
3개 일치 (5,000원) - 1개
4개 일치 (50,000원) - 0개
5개 일치 (1,500,000원) - 0개
5개 일치, 보너스 볼 일치 (30,000,000원) - 0개
6개 일치 (2,000,000,000원) - 0개
총 수익률은 62.5%입니다.";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn zero_winnings_render_as_zero_percent() {
        let report = Report::new(MatchTally::default(), &purchase(3_000)).unwrap();
        assert_eq!(report.profit_text(), "0.0");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5_000), "5,000");
        assert_eq!(group_thousands(2_000_000_000), "2,000,000,000");
    }
}
