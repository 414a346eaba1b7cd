use comfy_table::Cell;
use serde::Serialize;

use crate::codec::Strategy;
use crate::core::HeaderSummary;
use crate::header::Variant;
use crate::output::format::{
    create_styled_table, format_day, format_period, header_cell, number_cell, or_dash, status_cell,
};

pub(crate) struct InspectTableOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) variant_label: &'a str,
}

pub(crate) fn print_inspect_table(rows: &[HeaderSummary], options: InspectTableOptions<'_>) {
    let use_color = options.use_color;
    println!("\n  {} headers\n", options.variant_label);

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("File", use_color),
        header_cell("Acquirer", use_color),
        header_cell("Headquarter", use_color),
        header_cell("Statement", use_color),
        header_cell("Period", use_color),
        header_cell("Processed", use_color),
        header_cell("Repro", use_color),
        header_cell("Layout", use_color),
        header_cell("Status", use_color),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.file),
            Cell::new(or_dash(row.acquirer.as_deref())),
            number_cell(&or_dash(row.headquarter.map(|h| format!("{h:010}")))),
            Cell::new(or_dash(row.statement_id.as_deref())),
            Cell::new(format_period(row.period_init, row.period_end)),
            Cell::new(format_day(row.processing_date)),
            Cell::new(or_dash(row.reprocessed.map(|r| if r { "R" } else { "N" }))),
            number_cell(&or_dash(row.layout_version)),
            status_cell(&row.status, row.is_valid(), use_color),
        ]);
    }

    println!("{table}");

    let valid = rows.iter().filter(|r| r.is_valid()).count();
    println!("\n  {valid} of {} files valid", rows.len());
}

pub(crate) fn output_inspect_json(rows: &[HeaderSummary]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[derive(Serialize)]
struct AcquirerEntry {
    name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    encoding: &'static str,
}

fn encoding_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Positional => "fixed-width",
        Strategy::Delimited => "comma-separated",
    }
}

fn acquirer_entries<'a>(variants: impl Iterator<Item = &'a dyn Variant>) -> Vec<AcquirerEntry> {
    variants
        .map(|v| AcquirerEntry {
            name: v.name(),
            display_name: v.display_name(),
            aliases: v.aliases(),
            encoding: encoding_label(v.strategy()),
        })
        .collect()
}

pub(crate) fn print_acquirers_table<'a>(
    variants: impl Iterator<Item = &'a dyn Variant>,
    use_color: bool,
) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Acquirer", use_color),
        header_cell("Aliases", use_color),
        header_cell("Statement", use_color),
        header_cell("Encoding", use_color),
    ]);
    for entry in acquirer_entries(variants) {
        table.add_row(vec![
            Cell::new(entry.name),
            Cell::new(entry.aliases.join(", ")),
            Cell::new(entry.display_name),
            Cell::new(entry.encoding),
        ]);
    }
    println!("{table}");
}

pub(crate) fn output_acquirers_json<'a>(
    variants: impl Iterator<Item = &'a dyn Variant>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&acquirer_entries(variants))
}
