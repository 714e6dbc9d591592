//! The interactive console session.
//!
//! Prompt for a domain, run the lookups, print the report, then wait for
//! Enter before returning.

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::config::{LookupStrategy, CONTINUE_PROMPT, DOMAIN_PROMPT, INPUT_ERROR_PREFIX};
use crate::dns::{lookup_domain, DnsResolver};
use crate::error_handling::InputError;
use crate::report::ResultsReport;

use super::input::{read_domain, read_line};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The report was printed and the final Enter was read.
    Completed,
    /// Reading from the console failed; a diagnostic was printed instead.
    InputClosed,
}

/// Runs one prompt, lookup and report cycle over the given console streams.
///
/// Console read failures are not errors: they print
/// `Error reading input: <cause>` and end the session with
/// [`SessionOutcome::InputClosed`]. Lookup failures are part of the report.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub async fn run_session<R, W, D>(
    reader: &mut R,
    writer: &mut W,
    resolver: &D,
    strategy: LookupStrategy,
) -> Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    D: DnsResolver + ?Sized,
{
    write_console(writer, DOMAIN_PROMPT).await?;
    let domain = match read_domain(reader).await {
        Ok(domain) => domain,
        Err(e) => return report_input_error(writer, e).await,
    };

    info!("Querying records for {domain}");
    let outcome = lookup_domain(resolver, &domain, strategy).await;

    let errors = outcome.errors();
    if errors.len() > 1 {
        for dropped in &errors[1..] {
            debug!("Not reported: {dropped}");
        }
    }

    let report = ResultsReport::from_outcome(&domain, &outcome);
    write_console(writer, &report.to_string()).await?;

    write_console(writer, CONTINUE_PROMPT).await?;
    if let Err(e) = read_line(reader).await {
        return report_input_error(writer, e).await;
    }
    write_console(writer, "\n").await?;

    Ok(SessionOutcome::Completed)
}

async fn report_input_error<W>(writer: &mut W, err: InputError) -> Result<SessionOutcome>
where
    W: AsyncWrite + Unpin,
{
    debug!("Console read failed: {err}");
    write_console(writer, &format!("{INPUT_ERROR_PREFIX} {err}\n")).await?;
    Ok(SessionOutcome::InputClosed)
}

async fn write_console<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write to console")?;
    writer.flush().await.context("Failed to flush console")?;
    Ok(())
}
