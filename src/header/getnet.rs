//! Getnet header (type 0 record)

use chrono::NaiveDate;

use crate::codec::{FieldSpec, Strategy, decode};
use crate::error::{DecodeError, PeriodError};

use super::{BoxedHeader, Header, Variant, contains_ignore_case};

/// Registered CNPJ of Getnet, carried by every genuine header
const GETNET_CNPJ: &str = "10440482000154";

const GETNET_CODE: &str = "GETNET";

#[derive(Debug, Default)]
pub(crate) struct GetnetFields {
    #[allow(dead_code)]
    register_type: i8,
    processing_date: Option<NaiveDate>,
    #[allow(dead_code)]
    processing_hour: String,
    period_date: Option<NaiveDate>,
    #[allow(dead_code)]
    file_version: String,
    headquarter: String,
    acquirer_cnpj: String,
    acquirer: String,
    #[allow(dead_code)]
    sequence: i32,
    #[allow(dead_code)]
    acquirer_code: String,
    layout_version: String,
}

type Spec = FieldSpec<GetnetFields>;

const GETNET_STRATEGY: Strategy = Strategy::Positional;

static GETNET_SCHEMA: &[Spec] = &[
    Spec::int("RegisterType", 8, 1, |h, v| h.register_type = v as i8),
    Spec::date("ProcessingDate", "ddmmyyyy", |h, v| h.processing_date = Some(v)),
    Spec::text("ProcessingHour", 6, |h, v| h.processing_hour = v),
    Spec::date("PeriodDate", "ddmmyyyy", |h, v| h.period_date = Some(v)),
    Spec::text("FileVersion", 8, |h, v| h.file_version = v),
    Spec::text("Headquarter", 15, |h, v| h.headquarter = v),
    Spec::text("AcquirerCnpj", 14, |h, v| h.acquirer_cnpj = v),
    Spec::text("Acquirer", 20, |h, v| h.acquirer = v),
    Spec::int("Sequence", 32, 9, |h, v| h.sequence = v as i32),
    Spec::text("AcquirerCode", 2, |h, v| h.acquirer_code = v),
    Spec::text("LayoutVersion", 25, |h, v| h.layout_version = v),
];

#[derive(Debug)]
pub(crate) struct GetnetHeader {
    fields: GetnetFields,
}

impl GetnetHeader {
    pub(crate) fn parse(line: &str) -> Result<Self, DecodeError> {
        let decoded = decode(GETNET_SCHEMA, GETNET_STRATEGY, line)?;
        tracing::trace!(
            consumed = decoded.consumed,
            chars = line.chars().count(),
            "getnet header decoded"
        );
        Ok(GetnetHeader {
            fields: decoded.record,
        })
    }
}

impl Header for GetnetHeader {
    /// The headquarter column is left-aligned text; 0 when not numeric
    fn headquarter(&self) -> i64 {
        self.fields.headquarter.trim().parse().unwrap_or(0)
    }

    fn processing_date(&self) -> Option<NaiveDate> {
        self.fields.processing_date
    }

    fn period_init(&self) -> Option<NaiveDate> {
        self.fields.period_date
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.fields.period_date
    }

    fn statement_id(&self) -> String {
        GETNET_CODE.to_string()
    }

    fn layout_version(&self) -> i8 {
        0
    }

    fn acquirer(&self) -> String {
        GETNET_CODE.to_string()
    }

    fn is_reprocessed(&self) -> bool {
        false
    }

    fn period_dates(&self) -> Result<Vec<NaiveDate>, PeriodError> {
        self.fields
            .period_date
            .map(|d| vec![d])
            .ok_or(PeriodError::EmptyPeriod)
    }

    fn is_valid(&self) -> bool {
        self.fields.processing_date.is_some()
            && contains_ignore_case(&self.fields.acquirer, "getnet")
            && !self.fields.layout_version.is_empty()
            && self.fields.acquirer_cnpj == GETNET_CNPJ
    }
}

pub(crate) struct GetnetVariant;

impl Variant for GetnetVariant {
    fn name(&self) -> &'static str {
        "getnet"
    }

    fn display_name(&self) -> &'static str {
        "Getnet"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["gn"]
    }

    fn strategy(&self) -> Strategy {
        GETNET_STRATEGY
    }

    fn decode(&self, line: &str) -> Result<BoxedHeader, DecodeError> {
        Ok(Box::new(GetnetHeader::parse(line)?))
    }
}
