//! Human-facing run narration on stdout.
//!
//! The progress bar is a row of stars under the percentage scale, with a
//! spinner character at the end that turns once per state page. Write errors
//! are ignored: this output is advisory and nothing depends on it.

use ledger_rpc_client::LedgerHeader;
use ledger_snapshot::{PageProgress, SnapshotObserver, PROGRESS_SCALE, PROGRESS_UNITS};
use std::io::Write;

const SPINNER: [char; 4] = ['\\', '|', '/', '-'];

/// Backspace, blank, backspace: erases the spinner character.
const ERASE: &str = "\x08 \x08";

/// Narrates a snapshot run to a terminal-like writer.
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
    out: W,
    stars: u64,
    phase: usize,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stars: 0,
            phase: 0,
        }
    }

    /// Stars drawn so far.
    pub fn stars(&self) -> u64 {
        self.stars
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> SnapshotObserver for ConsoleProgress<W> {
    fn header_fetched(&mut self, _header: &LedgerHeader) {
        self.line("Got header");
    }

    fn transactions_fetched(&mut self, count: usize) {
        self.line(&format!("Got {count} transaction(s)"));
    }

    fn no_transactions(&mut self) {
        self.line("No transactions");
    }

    fn state_started(&mut self) {
        self.line("Getting state tree:");
        self.line(PROGRESS_SCALE);
    }

    fn page_received(&mut self, progress: &PageProgress) {
        let target = progress.units.min(PROGRESS_UNITS);
        let _ = self.out.write_all(ERASE.as_bytes());
        while self.stars < target {
            let _ = self.out.write_all(b"*");
            self.stars += 1;
        }
        self.phase += 1;
        let _ = write!(self.out, "{}", SPINNER[self.phase % SPINNER.len()]);
        let _ = self.out.flush();
    }

    fn state_finished(&mut self, entries: u64) {
        let _ = writeln!(self.out, "\x08 ");
        self.line(&format!("{entries} state entries"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(units: u64) -> PageProgress {
        PageProgress {
            page: 1,
            page_entries: 0,
            total_entries: 0,
            units,
        }
    }

    #[test]
    fn stars_follow_units_and_never_pass_the_scale() {
        let mut console = ConsoleProgress::new(Vec::new());
        console.page_received(&page(10));
        assert_eq!(console.stars(), 10);
        console.page_received(&page(4));
        assert_eq!(console.stars(), 10);
        console.page_received(&page(123));
        assert_eq!(console.stars(), PROGRESS_UNITS);

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text.matches('*').count() as u64, PROGRESS_UNITS);
        assert!(text.ends_with('-'));
    }

    #[test]
    fn narrates_each_stage() {
        let mut console = ConsoleProgress::new(Vec::new());
        console.transactions_fetched(3);
        console.state_started();
        console.state_finished(800);

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.starts_with("Got 3 transaction(s)\nGetting state tree:\n0%--10%"));
        assert!(text.ends_with("800 state entries\n"));
    }
}
