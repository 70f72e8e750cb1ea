//! Application entry point and dispatch.

use anyhow::{Context, Result};

use nttmul_cli::output::write_to_file;
use nttmul_cli::presenter::CLIResultPresenter;
use nttmul_cli::ui::print_success;
use nttmul_core::digits::DigitVector;
use nttmul_core::memory_budget::MemoryEstimate;
use nttmul_core::registry::DefaultFactory;
use nttmul_orchestration::interfaces::ResultPresenter;
use nttmul_orchestration::multiplier_selection::get_multipliers_to_run;
use nttmul_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};

use crate::config::AppConfig;
use crate::input::collect_operands;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        nttmul_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options()?;

    let (a, b) = collect_operands(&config.operands, std::io::stdin().lock())?;
    let a = DigitVector::parse(&a)?;
    let b = DigitVector::parse(&b)?;
    tracing::debug!(len_a = a.len(), len_b = b.len(), "operands parsed");

    MemoryEstimate::estimate(a.len(), b.len()).check(opts.memory_limit)?;

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, &a, &b, &opts);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }
    analyze_comparison_results(&results)?;
    if results.len() > 1 && !config.quiet {
        print_success("all multipliers agree");
    }

    let Some((result, product)) = results
        .iter()
        .find_map(|r| r.product().map(|p| (r, p)))
    else {
        anyhow::bail!("no product computed");
    };
    presenter.present_result(&result.algorithm, product, result.duration, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, product)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
