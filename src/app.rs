use std::path::Path;

use tracing::debug;

use crate::cli::{BatchArgs, Cli, Commands};
use crate::core::{DateRange, HeaderLoader};
use crate::error::AppError;
use crate::header::{Variant, get_variant, variants};
use crate::output::{
    InspectTableOptions, ReportSink, StdoutSink, output_acquirers_json, output_inspect_json,
    print_acquirers_table, print_inspect_table,
};
use crate::store::FsStore;
use crate::utils::parse_date;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: FsStore,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        let store = FsStore::new(cli.pattern.as_deref())?;
        Ok(CommandContext { cli, store })
    }

    fn sink(&self) -> StdoutSink {
        StdoutSink::new(self.cli.json)
    }
}

/// Resolve an acquirer key or alias
fn resolve_variant(name: &str) -> Result<&'static dyn Variant, AppError> {
    get_variant(name).ok_or_else(|| AppError::UnknownAcquirer {
        input: name.to_string(),
        known: variants().map(|v| v.name()).collect::<Vec<_>>().join(", "),
    })
}

fn check_dir(dir: &Path) -> Result<(), AppError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(AppError::NotADirectory {
            path: dir.to_path_buf(),
        })
    }
}

fn range_lines(ranges: &[DateRange]) -> Vec<String> {
    ranges.iter().map(ToString::to_string).collect()
}

fn handle_rename(
    variant: &dyn Variant,
    batch: &BatchArgs,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let loader = HeaderLoader::new(&ctx.store, variant);
    let outcomes = loader.rename_all(&batch.dir)?;
    if outcomes.is_empty() && !ctx.cli.json {
        println!("No files found in {}.", batch.dir.display());
        return Ok(());
    }
    let lines: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
    ctx.sink().emit(&lines)
}

fn handle_periods(
    variant: &dyn Variant,
    batch: &BatchArgs,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let loader = HeaderLoader::new(&ctx.store, variant);
    let periods = loader.period_grouped(&batch.dir)?;
    if periods.is_empty() && !ctx.cli.json {
        println!("No valid {} files found.", variant.display_name());
        return Ok(());
    }
    ctx.sink().emit(&range_lines(&periods))
}

fn handle_gaps(
    variant: &dyn Variant,
    batch: &BatchArgs,
    init: &str,
    end: &str,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let init = parse_date(init)?;
    let end = parse_date(end)?;
    let loader = HeaderLoader::new(&ctx.store, variant);
    let gaps = loader.gap_grouped(&batch.dir, init, end)?;
    if gaps.is_empty() && !ctx.cli.json {
        println!("No gaps found.");
        return Ok(());
    }
    ctx.sink().emit(&range_lines(&gaps))
}

fn handle_inspect(
    variant: &dyn Variant,
    batch: &BatchArgs,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let loader = HeaderLoader::new(&ctx.store, variant);
    let rows = loader.inspect(&batch.dir)?;
    if ctx.cli.json {
        println!("{}", output_inspect_json(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No files found in {}.", batch.dir.display());
        return Ok(());
    }
    print_inspect_table(
        &rows,
        InspectTableOptions {
            use_color: ctx.cli.use_color(),
            variant_label: variant.display_name(),
        },
    );
    Ok(())
}

fn handle_acquirers(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        println!("{}", output_acquirers_json(variants())?);
    } else {
        print_acquirers_table(variants(), ctx.cli.use_color());
    }
    Ok(())
}

/// Resolve the acquirer and check the directory of a batch command
fn prepare(batch: &BatchArgs) -> Result<&'static dyn Variant, AppError> {
    let variant = resolve_variant(&batch.acquirer)?;
    check_dir(&batch.dir)?;
    debug!(
        variant = variant.name(),
        dir = %batch.dir.display(),
        "running batch command"
    );
    Ok(variant)
}

/// Run the parsed command
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        Commands::Rename(batch) => handle_rename(prepare(batch)?, batch, ctx),
        Commands::Periods(batch) => handle_periods(prepare(batch)?, batch, ctx),
        Commands::Gaps { batch, init, end } => {
            handle_gaps(prepare(batch)?, batch, init, end, ctx)
        }
        Commands::Inspect(batch) => handle_inspect(prepare(batch)?, batch, ctx),
        Commands::Acquirers => handle_acquirers(ctx),
    }
}
