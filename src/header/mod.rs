//! Acquirer header layer
//!
//! Each acquirer/statement type implements `Variant`, which decodes the first
//! line of a settlement file into a `Header`. Headers expose the same
//! accessors regardless of layout so renaming and coverage never look at
//! acquirer-specific fields.

pub(crate) mod cielo;
pub(crate) mod getnet;
pub(crate) mod rede;
pub(crate) mod registry;

use chrono::NaiveDate;

use crate::codec::Strategy;
use crate::error::{DecodeError, PeriodError};

/// Canonical view of a decoded header line
pub(crate) trait Header {
    /// Merchant headquarter (establishment) number
    fn headquarter(&self) -> i64;

    fn processing_date(&self) -> Option<NaiveDate>;

    fn period_init(&self) -> Option<NaiveDate>;

    fn period_end(&self) -> Option<NaiveDate>;

    /// Statement code embedded in the file ("03", "EEVC", ...)
    fn statement_id(&self) -> String;

    fn layout_version(&self) -> i8;

    /// Acquirer code used in canonical file names
    fn acquirer(&self) -> String;

    fn is_reprocessed(&self) -> bool;

    /// Every calendar day this file covers
    fn period_dates(&self) -> Result<Vec<NaiveDate>, PeriodError>;

    /// Whether the line really is a header of the declared statement type
    fn is_valid(&self) -> bool;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedHeader = Box<dyn Header>;

/// A header layout selectable by acquirer key
pub(crate) trait Variant: Send + Sync {
    /// Unique key used on the command line (e.g. "cielovendas")
    fn name(&self) -> &'static str;

    /// Display name for output
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Short aliases for the command line
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn strategy(&self) -> Strategy;

    /// Decode one header line into a fresh header
    fn decode(&self, line: &str) -> Result<BoxedHeader, DecodeError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedVariant = Box<dyn Variant>;

/// Look up the code a statement name must carry
pub(crate) fn statement_code(
    table: &'static [(&'static str, &'static str)],
    statement: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == statement)
        .map(|(_, code)| *code)
}

/// Case-insensitive substring test
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub(crate) use registry::{get_variant, variants};
