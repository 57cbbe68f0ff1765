//! Validate all posts

use anyhow::Result;

use crate::content::ValidationReport;
use crate::Folio;

/// Validate every post and report all problems at once.
///
/// Fails when any post cannot be loaded, and on slug warnings with `strict`.
pub fn run(folio: &Folio, strict: bool) -> Result<()> {
    let report = folio.repository().check()?;
    print!("{}", format_report(&report));

    if !report.is_ok() {
        anyhow::bail!(
            "{} of {} posts failed validation",
            report.errors.len(),
            report.scanned
        );
    }
    if strict && !report.is_clean() {
        anyhow::bail!("{} slug warnings (strict mode)", report.warnings.len());
    }

    Ok(())
}

/// Summary of a validation report
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = format!(
        "Checked {} posts: {} ok, {} errors, {} warnings\n",
        report.scanned,
        report.posts.len(),
        report.errors.len(),
        report.warnings.len()
    );
    for error in &report.errors {
        out.push_str(&format!("  error: {}\n", error));
    }
    for warning in &report.warnings {
        out.push_str(&format!("  warning: {}\n", warning));
    }
    out
}
