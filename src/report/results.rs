//! Console rendering of a lookup batch.

use std::fmt;

use crate::dns::LookupOutcome;
use crate::error_handling::LookupError;

/// The console report for one domain.
///
/// With an error, the report is a single `Error for <domain>: <error>` line
/// and no records are shown, even for lookups that succeeded. Without one, it
/// lists every non-empty category in the order MX, CNAME, TXT, NS, addresses.
/// Empty categories are left out entirely.
pub struct ResultsReport<'a> {
    domain: &'a str,
    outcome: &'a LookupOutcome,
    error: Option<&'a LookupError>,
}

impl<'a> ResultsReport<'a> {
    /// Builds a report with an explicitly chosen error.
    pub fn new(
        domain: &'a str,
        outcome: &'a LookupOutcome,
        error: Option<&'a LookupError>,
    ) -> Self {
        Self {
            domain,
            outcome,
            error,
        }
    }

    /// Builds a report whose error is the outcome's first-priority failure.
    pub fn from_outcome(domain: &'a str, outcome: &'a LookupOutcome) -> Self {
        Self::new(domain, outcome, outcome.first_error())
    }
}

/// The records of a slot, or nothing if that lookup failed.
fn records<T>(slot: &Result<Vec<T>, LookupError>) -> &[T] {
    slot.as_deref().unwrap_or(&[])
}

impl fmt::Display for ResultsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(err) = self.error {
            return writeln!(f, "Error for {}: {}", self.domain, err);
        }

        writeln!(f, "Results for {}", self.domain)?;

        let mx = records(&self.outcome.mx);
        if !mx.is_empty() {
            writeln!(f, "\nMX Records:")?;
            for record in mx {
                writeln!(f, "  Host: {}, Priority: {}", record.host, record.preference)?;
            }
        }

        // An empty target and a missing alias both mean "no section"
        if let Ok(cname) = &self.outcome.cname {
            if !cname.is_empty() {
                writeln!(f, "\nCNAME Record:")?;
                writeln!(f, "  {cname}")?;
            }
        }

        let txt = records(&self.outcome.txt);
        if !txt.is_empty() {
            writeln!(f, "\nTXT Records:")?;
            for record in txt {
                writeln!(f, "  {record}")?;
            }
        }

        let ns = records(&self.outcome.ns);
        if !ns.is_empty() {
            writeln!(f, "\nNS Records:")?;
            for record in ns {
                writeln!(f, "  {}", record.host)?;
            }
        }

        let addresses = records(&self.outcome.addresses);
        if !addresses.is_empty() {
            writeln!(f, "\nIP Addresses:")?;
            for addr in addresses {
                writeln!(f, "  {addr}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{MxRecord, NsRecord};
    use crate::error_handling::LookupKind;

    fn empty_outcome() -> LookupOutcome {
        LookupOutcome {
            mx: Ok(Vec::new()),
            cname: Ok(String::new()),
            txt: Ok(Vec::new()),
            ns: Ok(Vec::new()),
            addresses: Ok(Vec::new()),
        }
    }

    fn failure(kind: LookupKind, domain: &str) -> LookupError {
        LookupError::new(kind, domain, anyhow::anyhow!("no such host"))
    }

    #[test]
    fn test_mx_and_addresses_only() {
        let outcome = LookupOutcome {
            mx: Ok(vec![MxRecord::new("mail.example.com", 10)]),
            addresses: Ok(vec!["93.184.216.34".to_string()]),
            ..empty_outcome()
        };
        let report = ResultsReport::from_outcome("example.com", &outcome).to_string();
        assert_eq!(
            report,
            "Results for example.com\n\
             \nMX Records:\n  Host: mail.example.com, Priority: 10\n\
             \nIP Addresses:\n  93.184.216.34\n"
        );
    }

    #[test]
    fn test_all_sections_in_fixed_order() {
        let outcome = LookupOutcome {
            mx: Ok(vec![MxRecord::new("mx.example.com.", 5)]),
            cname: Ok("alias.example.net.".to_string()),
            txt: Ok(vec!["v=spf1 -all".to_string()]),
            ns: Ok(vec![NsRecord::new("a.iana-servers.net.")]),
            addresses: Ok(vec!["2606:2800:220:1::".to_string()]),
        };
        let report = ResultsReport::from_outcome("example.com", &outcome).to_string();

        let headers: Vec<&str> = report
            .lines()
            .filter(|line| line.ends_with(':') && !line.starts_with(' '))
            .collect();
        assert_eq!(
            headers,
            vec![
                "MX Records:",
                "CNAME Record:",
                "TXT Records:",
                "NS Records:",
                "IP Addresses:"
            ]
        );
        assert!(report.contains("\nCNAME Record:\n  alias.example.net.\n"));
        assert!(report.contains("\nNS Records:\n  a.iana-servers.net.\n"));
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let outcome = LookupOutcome {
            txt: Ok(vec![
                "second".to_string(),
                "first".to_string(),
                "second".to_string(),
            ]),
            ..empty_outcome()
        };
        let report = ResultsReport::from_outcome("example.com", &outcome).to_string();
        assert_eq!(
            report,
            "Results for example.com\n\nTXT Records:\n  second\n  first\n  second\n"
        );
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let outcome = empty_outcome();
        let report = ResultsReport::from_outcome("example.com", &outcome).to_string();
        assert_eq!(report, "Results for example.com\n");
    }

    #[test]
    fn test_error_suppresses_all_records() {
        let outcome = LookupOutcome {
            mx: Ok(vec![MxRecord::new("mail.example.com", 10)]),
            txt: Err(failure(LookupKind::Txt, "example.com")),
            addresses: Ok(vec!["93.184.216.34".to_string()]),
            ..empty_outcome()
        };
        let report = ResultsReport::from_outcome("example.com", &outcome).to_string();
        assert_eq!(
            report,
            "Error for example.com: TXT lookup failed for example.com: no such host\n"
        );
    }

    #[test]
    fn test_error_priority_in_report() {
        let domain = "nonexistent-domain-xyz123.invalid";
        let outcome = LookupOutcome {
            mx: Err(failure(LookupKind::Mx, domain)),
            cname: Err(failure(LookupKind::Cname, domain)),
            txt: Err(failure(LookupKind::Txt, domain)),
            ns: Err(failure(LookupKind::Ns, domain)),
            addresses: Err(failure(LookupKind::Host, domain)),
        };
        let report = ResultsReport::from_outcome(domain, &outcome).to_string();
        assert_eq!(
            report,
            "Error for nonexistent-domain-xyz123.invalid: MX lookup failed for \
             nonexistent-domain-xyz123.invalid: no such host\n"
        );
        assert_eq!(report.lines().count(), 1);
    }

    #[test]
    fn test_explicit_error_overrides_outcome() {
        let outcome = empty_outcome();
        let err = failure(LookupKind::Ns, "example.com");
        let report = ResultsReport::new("example.com", &outcome, Some(&err)).to_string();
        assert!(report.starts_with("Error for example.com: NS lookup failed"));
    }
}
