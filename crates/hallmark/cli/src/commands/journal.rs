//! Journal command

use super::Session;
use crate::error::CliResult;
use crate::output;
use hallmark_runtime::Receipt;

fn describe(receipt: &Receipt) -> String {
    let status = match &receipt.result {
        Ok(outcome) => format!("ok {outcome:?}"),
        Err(err) => format!("err u{} ({err})", err.code()),
    };
    format!(
        "#{:<4} seq {:<6} {:<16} {:<44} {}",
        receipt.index,
        receipt.sequence,
        receipt.call.name(),
        receipt.caller,
        status
    )
}

/// Print journal receipts from `from`, at most `limit` (0 = all)
pub fn execute(from: u64, limit: usize, session: &Session) -> CliResult<String> {
    let deployment = session.load()?;
    let receipts = deployment.journal().range(from, limit);
    let text = if receipts.is_empty() {
        "No receipts".to_string()
    } else {
        receipts.iter().map(describe).collect::<Vec<_>>().join("\n")
    };
    output::render(session.format, &receipts, text)
}
