use anchor_lang::prelude::*;
use anchor_lang::error::Error;

#[error_code]
pub enum LottoError {
    #[msg("숫자만 입력 가능합니다.")]
    NotANumber,
    #[msg("0보다 큰 금액을 입력해 주세요.")]
    AmountNotPositive,
    #[msg("1장 당 1000원입니다.")]
    AmountNotTicketMultiple,
    #[msg("구입금액이 너무 큽니다.")]
    AmountTooLarge,

    #[msg("로또 번호는 6개여야 합니다.")]
    WrongTicketSize,
    #[msg("1부터 45까지의 숫자만 입력 가능합니다.")]
    NumberOutOfRange,
    #[msg("로또 번호는 중복될 수 없습니다.")]
    DuplicateNumber,
    #[msg("보너스 번호와 당첨 번호가 중복됩니다.")]
    BonusInWinningNumbers,

    #[msg("Console input closed")]
    InputClosed,
    #[msg("Console i/o failed")]
    ConsoleIo,
    #[msg("Prize total overflowed")]
    PrizeOverflow,
    #[msg("Unknown log sink (expected off or stderr)")]
    InvalidLogSink,
}

/// The `#[msg]` text carried by an error, without Anchor's origin banner.
pub fn rule_message(err: &Error) -> String {
    match err {
        Error::AnchorError(e)  => e.error_msg.clone(),
        Error::ProgramError(e) => e.program_error.to_string(),
    }
}

/// Short rule identifier for diagnostics, e.g. `DuplicateNumber`.
pub fn rule_name(err: &Error) -> String {
    match err {
        Error::AnchorError(e)  => e.error_name.clone(),
        Error::ProgramError(e) => format!("{:?}", e.program_error),
    }
}
