//! Canonical settlement file names
//!
//! `{ACQUIRER}-{HEADQUARTER}-{STATEMENT}-{INIT}-{END}-{R|N}-{PROCESSED}-L{LAYOUT}.txt`

use crate::header::Header;
use crate::utils::name_date;

/// Canonical file name for a decoded header
pub(crate) fn target_name(header: &dyn Header) -> String {
    let action = if header.is_reprocessed() { "R" } else { "N" };
    format!(
        "{}-{:010}-{}-{}-{}-{}-{}-L{:03}.txt",
        header.acquirer(),
        header.headquarter(),
        header.statement_id(),
        name_date(header.period_init()),
        name_date(header.period_end()),
        action,
        name_date(header.processing_date()),
        header.layout_version()
    )
}
