//! Rede (Redecard) EEVC / EEVD / EEFI headers
//!
//! Credit and financial statements are fixed-width and differ only in the
//! width of the description column; debit statements are comma-separated.
//! All three keep the statement code and layout version inside one opaque
//! 20-character trailer such as "V2.01 - 09/06 - EEVC".

use chrono::NaiveDate;

use crate::codec::{FieldSpec, Strategy, decode};
use crate::error::{DecodeError, PeriodError};

use super::{BoxedHeader, Header, Variant, contains_ignore_case, statement_code};

#[derive(Debug, Default)]
pub(crate) struct RedeFields {
    #[allow(dead_code)]
    register_type: i8,
    headquarter: i64,
    processing_date: Option<NaiveDate>,
    period_date: Option<NaiveDate>,
    acquirer: String,
    #[allow(dead_code)]
    statement_description: String,
    #[allow(dead_code)]
    headquarter_name: String,
    #[allow(dead_code)]
    sequence: i32,
    processing_type: String,
    layout_version: String,
}

type Spec = FieldSpec<RedeFields>;

static CREDIT_SCHEMA: &[Spec] = &[
    Spec::int("RegisterType", 8, 3, |h, v| h.register_type = v as i8),
    Spec::date("ProcessingDate", "ddmmyyyy", |h, v| h.processing_date = Some(v)),
    Spec::text("Acquirer", 8, |h, v| h.acquirer = v),
    Spec::text("StatementDescription", 30, |h, v| h.statement_description = v),
    Spec::text("HeadquarterName", 22, |h, v| h.headquarter_name = v),
    Spec::int("Sequence", 32, 6, |h, v| h.sequence = v as i32),
    Spec::int("Headquarter", 64, 9, |h, v| h.headquarter = v),
    Spec::text("ProcessingType", 15, |h, v| h.processing_type = v),
    Spec::text("LayoutVersion", 20, |h, v| h.layout_version = v),
];

static FINANCIAL_SCHEMA: &[Spec] = &[
    Spec::int("RegisterType", 8, 3, |h, v| h.register_type = v as i8),
    Spec::date("ProcessingDate", "ddmmyyyy", |h, v| h.processing_date = Some(v)),
    Spec::text("Acquirer", 8, |h, v| h.acquirer = v),
    Spec::text("StatementDescription", 34, |h, v| h.statement_description = v),
    Spec::text("HeadquarterName", 22, |h, v| h.headquarter_name = v),
    Spec::int("Sequence", 32, 6, |h, v| h.sequence = v as i32),
    Spec::int("Headquarter", 64, 9, |h, v| h.headquarter = v),
    Spec::text("ProcessingType", 15, |h, v| h.processing_type = v),
    Spec::text("LayoutVersion", 20, |h, v| h.layout_version = v),
];

// Widths are unused for comma-separated lines.
static DEBIT_SCHEMA: &[Spec] = &[
    Spec::int("RegisterType", 8, 0, |h, v| h.register_type = v as i8),
    Spec::int("Headquarter", 64, 0, |h, v| h.headquarter = v),
    Spec::date("ProcessingDate", "ddmmyyyy", |h, v| h.processing_date = Some(v)),
    Spec::date("PeriodDate", "ddmmyyyy", |h, v| h.period_date = Some(v)),
    Spec::text("StatementDescription", 0, |h, v| h.statement_description = v),
    Spec::text("Acquirer", 0, |h, v| h.acquirer = v),
    Spec::text("HeadquarterName", 0, |h, v| h.headquarter_name = v),
    Spec::int("Sequence", 32, 0, |h, v| h.sequence = v as i32),
    Spec::text("ProcessingType", 0, |h, v| h.processing_type = v),
    Spec::text("LayoutVersion", 0, |h, v| h.layout_version = v),
];

static CREDIT_STATEMENTS: &[(&str, &str)] = &[("credito", "EEVC")];
static DEBIT_STATEMENTS: &[(&str, &str)] = &[("debito", "EEVD")];
static FINANCIAL_STATEMENTS: &[(&str, &str)] = &[("financeiro", "EEFI")];

/// One of the three Rede statement layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RedeLayout {
    Credit,
    Debit,
    Financial,
}

impl RedeLayout {
    fn schema(self) -> &'static [Spec] {
        match self {
            RedeLayout::Credit => CREDIT_SCHEMA,
            RedeLayout::Debit => DEBIT_SCHEMA,
            RedeLayout::Financial => FINANCIAL_SCHEMA,
        }
    }

    pub(crate) fn strategy(self) -> Strategy {
        match self {
            RedeLayout::Debit => Strategy::Delimited,
            RedeLayout::Credit | RedeLayout::Financial => Strategy::Positional,
        }
    }

    fn statements(self) -> &'static [(&'static str, &'static str)] {
        match self {
            RedeLayout::Credit => CREDIT_STATEMENTS,
            RedeLayout::Debit => DEBIT_STATEMENTS,
            RedeLayout::Financial => FINANCIAL_STATEMENTS,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RedeHeader {
    layout: RedeLayout,
    statement: &'static str,
    fields: RedeFields,
}

impl RedeHeader {
    pub(crate) fn parse(
        layout: RedeLayout,
        statement: &'static str,
        line: &str,
    ) -> Result<Self, DecodeError> {
        let decoded = decode(layout.schema(), layout.strategy(), line)?;
        tracing::trace!(
            consumed = decoded.consumed,
            chars = line.chars().count(),
            "rede header decoded"
        );
        Ok(RedeHeader {
            layout,
            statement,
            fields: decoded.record,
        })
    }

    /// Date the statement refers to
    fn reference_date(&self) -> Option<NaiveDate> {
        match self.layout {
            RedeLayout::Debit => self.fields.period_date,
            RedeLayout::Credit | RedeLayout::Financial => self.fields.processing_date,
        }
    }
}

impl Header for RedeHeader {
    fn headquarter(&self) -> i64 {
        self.fields.headquarter
    }

    fn processing_date(&self) -> Option<NaiveDate> {
        self.fields.processing_date
    }

    fn period_init(&self) -> Option<NaiveDate> {
        self.reference_date()
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.reference_date()
    }

    /// Characters 16..20 of the layout trailer, empty when it is shorter
    fn statement_id(&self) -> String {
        let trailer = &self.fields.layout_version;
        if trailer.chars().count() < 20 {
            return String::new();
        }
        trailer.chars().skip(16).take(4).collect()
    }

    /// Major version digit right after the leading "V"
    fn layout_version(&self) -> i8 {
        self.fields
            .layout_version
            .chars()
            .nth(1)
            .and_then(|c| c.to_digit(10))
            .map_or(0, |d| d as i8)
    }

    fn acquirer(&self) -> String {
        self.fields.acquirer.trim().to_uppercase()
    }

    fn is_reprocessed(&self) -> bool {
        contains_ignore_case(&self.fields.processing_type, "repro")
    }

    fn period_dates(&self) -> Result<Vec<NaiveDate>, PeriodError> {
        self.reference_date()
            .map(|d| vec![d])
            .ok_or(PeriodError::EmptyPeriod)
    }

    fn is_valid(&self) -> bool {
        self.fields.processing_date.is_some()
            && contains_ignore_case(&self.fields.acquirer, "rede")
            && !self.fields.layout_version.is_empty()
            && statement_code(self.layout.statements(), self.statement)
                .is_some_and(|code| self.fields.layout_version.contains(code))
    }
}

/// Rede layout bound to one statement name
pub(crate) struct RedeVariant {
    name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    layout: RedeLayout,
    statement: &'static str,
}

impl RedeVariant {
    pub(crate) fn new(
        name: &'static str,
        display_name: &'static str,
        aliases: &'static [&'static str],
        layout: RedeLayout,
        statement: &'static str,
    ) -> Self {
        RedeVariant {
            name,
            display_name,
            aliases,
            layout,
            statement,
        }
    }
}

impl Variant for RedeVariant {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn strategy(&self) -> Strategy {
        self.layout.strategy()
    }

    fn decode(&self, line: &str) -> Result<BoxedHeader, DecodeError> {
        Ok(Box::new(RedeHeader::parse(
            self.layout,
            self.statement,
            line,
        )?))
    }
}
