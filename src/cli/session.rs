//! Interactive command loop
//!
//! Each command is independent: it loads the sheet, acts on the record set
//! and, if it changed anything, writes the sheet back before the next prompt.
//! Command failures are reported on the error stream and the loop carries on.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::display::{format_banner, format_help, format_transaction_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, TransactionId};
use crate::services::Ledger;
use crate::storage::SheetStore;

use super::command::Command;
use super::input::TokenReader;

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running command loop over some input, output and error streams
pub struct Session<R, W, E> {
    store: SheetStore,
    input: TokenReader<R>,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Create a session reading commands from `input`
    pub fn new(store: SheetStore, input: R, out: W, err: E) -> Self {
        Self {
            store,
            input: TokenReader::new(input),
            out,
            err,
        }
    }

    /// Print the banner and process commands until `quit`, `exit` or end of input
    pub fn run(&mut self) -> LedgerResult<()> {
        self.out.write_all(format_banner().as_bytes())?;
        while self.step()? == Flow::Continue {}
        self.out.flush()?;
        Ok(())
    }

    /// Prompt for and execute a single command
    ///
    /// Only failures to talk to the terminal are returned; everything else is
    /// reported to the error stream.
    pub fn step(&mut self) -> LedgerResult<Flow> {
        write!(self.out, "\nFltcli> ")?;
        self.out.flush()?;

        let Some(token) = self.input.next_token()? else {
            return Ok(Flow::Quit);
        };

        let command = match token.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(%command, mutating = command.is_mutating(), "dispatching command");

        let result = match command {
            Command::Help => self
                .out
                .write_all(format_help().as_bytes())
                .map(|_| Flow::Continue)
                .map_err(LedgerError::from),
            Command::Quit => Ok(Flow::Quit),
            Command::Add => self.add(),
            Command::Delete => self.delete(),
            Command::Find => self.find(),
            Command::Modify => self.modify(),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> LedgerResult<Flow> {
        writeln!(
            self.out,
            "Input the date, the reason, the amount, the path, the counterparty, the note of transaction in turns."
        )?;
        self.sub_prompt(Command::Add)?;

        let Some([date, reason, amount, path, counterparty, note]) = self.input.next_tokens::<6>()?
        else {
            return Ok(Flow::Quit);
        };

        let mut ledger = self.load_ledger()?;
        ledger.add(NewTransaction {
            date,
            reason,
            amount,
            path,
            counterparty,
            note,
        })?;
        self.store.save(ledger.transactions())?;

        writeln!(self.out, "Add transaction success!")?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> LedgerResult<Flow> {
        writeln!(self.out, "Input the id of the target transaction.")?;
        self.sub_prompt(Command::Delete)?;

        let Some(token) = self.input.next_token()? else {
            return Ok(Flow::Quit);
        };
        let id: TransactionId = token.parse()?;

        let mut ledger = self.load_ledger()?;
        ledger.delete(id)?;
        self.store.save(ledger.transactions())?;

        writeln!(self.out, "Delete transaction success!")?;
        Ok(Flow::Continue)
    }

    fn find(&mut self) -> LedgerResult<Flow> {
        writeln!(self.out, "Input the keyword of the target transactions.")?;
        self.sub_prompt(Command::Find)?;

        let Some(keyword) = self.input.next_token()? else {
            return Ok(Flow::Quit);
        };

        let ledger = self.load_ledger()?;
        let found = ledger.find(&keyword)?;
        self.out
            .write_all(format_transaction_list(found).as_bytes())?;
        Ok(Flow::Continue)
    }

    fn modify(&mut self) -> LedgerResult<Flow> {
        writeln!(
            self.out,
            "Input the id, the item, the newdata of the target transaction in order."
        )?;
        self.sub_prompt(Command::Modify)?;

        let Some([id, field, value]) = self.input.next_tokens::<3>()? else {
            return Ok(Flow::Quit);
        };
        let id: TransactionId = id.parse()?;

        let mut ledger = self.load_ledger()?;
        let changed = ledger.modify(id, &field, &value)?;
        self.store.save(ledger.transactions())?;

        for _ in 0..changed {
            writeln!(self.out, "Modify transaction success!")?;
        }
        Ok(Flow::Continue)
    }

    /// Load the sheet, falling back to an empty ledger when it is not an array
    fn load_ledger(&mut self) -> LedgerResult<Ledger> {
        match self.store.load() {
            Ok(transactions) => Ok(Ledger::from_transactions(transactions)),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "continuing with an empty ledger");
                self.report(&e)?;
                Ok(Ledger::new())
            }
            Err(e) => Err(e),
        }
    }

    fn sub_prompt(&mut self, command: Command) -> LedgerResult<()> {
        write!(self.out, "Fltcli {}> ", command)?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, error: &LedgerError) -> LedgerResult<()> {
        writeln!(self.err, "Error: {}", error)?;
        self.err.flush()?;
        Ok(())
    }
}
