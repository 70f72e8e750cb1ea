//! CLI result presenter.

use std::io::{self, Write};
use std::time::Duration;

use nttmul_core::digits::DigitVector;
use nttmul_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_result, write_product};
use crate::ui::{print_error, print_header};

/// CLI result presenter.
///
/// The product goes to stdout on its own line; details and comparisons go to
/// stderr.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Write the details block for one product.
    pub fn write_details(
        &self,
        out: &mut dyn Write,
        algorithm: &str,
        product: &DigitVector,
        duration: Duration,
    ) -> io::Result<()> {
        writeln!(out, "Algorithm: {algorithm}")?;
        writeln!(out, "Duration: {}", format_duration(duration))?;
        writeln!(
            out,
            "Product digits: {}",
            format_number(product.significant_len().max(1))
        )
    }

    /// Write the comparison table. Nothing is written in quiet mode.
    pub fn write_comparison(
        &self,
        out: &mut dyn Write,
        results: &[CalculationResult],
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        writeln!(out, "\nComparison Results:")?;
        writeln!(out, "{:-<60}", "")?;
        for result in results {
            let (status, preview) = match &result.outcome {
                Ok(product) => ("OK", format_result(product, self.verbose)),
                Err(e) => ("ERROR", e.to_string()),
            };
            writeln!(
                out,
                "  {:<12} {:>10} [{}] {}",
                result.algorithm,
                format_duration(result.duration),
                status,
                preview,
            )?;
        }
        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        product: &DigitVector,
        duration: Duration,
        details: bool,
    ) {
        if details && !self.quiet {
            print_header("Details");
            let _ = self.write_details(&mut io::stderr(), algorithm, product, duration);
        }
        let _ = write_product(&mut io::stdout().lock(), product);
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        let _ = self.write_comparison(&mut io::stderr(), results);
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
