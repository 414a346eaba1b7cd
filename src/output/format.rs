use chrono::NaiveDate;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::RANGE_DATE_FORMAT;

/// Bold header cell, cyan when colored
pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color { cell.fg(Color::Cyan) } else { cell }
}

/// Right-aligned cell for numeric columns
pub(super) fn number_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Status cell: green when the file is valid, red otherwise
pub(super) fn status_cell(text: &str, valid: bool, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    match (use_color, valid) {
        (false, _) => cell,
        (true, true) => cell.fg(Color::Green),
        (true, false) => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

// ╞═╪═╡ -> ├─┼─┤
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// UTF-8 table with solid inner borders and a single-line header rule
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Dash for missing values
pub(super) fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub(super) fn format_day(date: Option<NaiveDate>) -> String {
    or_dash(date.map(|d| d.format(RANGE_DATE_FORMAT)))
}

/// "10/03/2021" for a single day, "01/03/2021 - 05/03/2021" for a range
pub(super) fn format_period(init: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (init, end) {
        (Some(i), Some(e)) if i == e => format_day(Some(i)),
        (None, None) => "-".to_string(),
        _ => format!("{} - {}", format_day(init), format_day(end)),
    }
}
