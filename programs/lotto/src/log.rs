//! Routing for `msg!` diagnostics.
//!
//! Off-chain, `msg!` lands in the Solana syscall stubs, whose default prints to
//! stdout and would interleave with the game transcript. `install` swaps in
//! stubs that honour the configured [`LogSink`].

use anchor_lang::solana_program::program_stubs::{set_syscall_stubs, SyscallStubs};

use crate::config::LogSink;

pub const LOG_PREFIX: &str = "[lotto]";

struct SinkStubs {
    sink: LogSink,
}

impl SyscallStubs for SinkStubs {
    fn sol_log(&self, message: &str) {
        if self.sink == LogSink::Stderr {
            eprintln!("{LOG_PREFIX} {message}");
        }
    }
}

pub fn install(sink: LogSink) {
    set_syscall_stubs(Box::new(SinkStubs { sink }));
}
