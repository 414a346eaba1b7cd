//! Cielo EDI header (type 0 record)
//!
//! Fixed-width line shared by every Cielo statement. The statement kind a
//! file is expected to be (sales, financial, ...) comes from the chosen
//! acquirer key, and must match the two-digit statement id in the line.

use chrono::NaiveDate;

use crate::codec::{FieldSpec, Strategy, decode};
use crate::consts::REPROCESSED_SEQUENCE;
use crate::error::{DecodeError, PeriodError};
use crate::utils::expand_days;

use super::{BoxedHeader, Header, Variant, contains_ignore_case, statement_code};

#[derive(Debug, Default)]
pub(crate) struct CieloFields {
    #[allow(dead_code)]
    register_type: i8,
    headquarter: i64,
    processing_date: Option<NaiveDate>,
    period_init: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    sequence: i32,
    acquirer: String,
    statement_id: i8,
    #[allow(dead_code)]
    transmission: String,
    #[allow(dead_code)]
    postal_box: String,
    layout_version: i8,
}

type Spec = FieldSpec<CieloFields>;

const CIELO_STRATEGY: Strategy = Strategy::Positional;

// Integer setters narrow values the codec already range-checked.
static CIELO_SCHEMA: &[Spec] = &[
    Spec::int("RegisterType", 8, 1, |h, v| h.register_type = v as i8),
    Spec::int("Headquarter", 64, 10, |h, v| h.headquarter = v),
    Spec::date("ProcessingDate", "yyyymmdd", |h, v| h.processing_date = Some(v)),
    Spec::date("PeriodInit", "yyyymmdd", |h, v| h.period_init = Some(v)),
    Spec::date("PeriodEnd", "yyyymmdd", |h, v| h.period_end = Some(v)),
    Spec::int("Sequence", 32, 7, |h, v| h.sequence = v as i32),
    Spec::text("Acquirer", 5, |h, v| h.acquirer = v),
    Spec::int("StatementId", 8, 2, |h, v| h.statement_id = v as i8),
    Spec::text("Transmission", 1, |h, v| h.transmission = v),
    Spec::text("PostalBox", 20, |h, v| h.postal_box = v),
    Spec::int("LayoutVersion", 8, 3, |h, v| h.layout_version = v as i8),
];

/// Statement names a Cielo file can be declared as, with the id it carries
static CIELO_STATEMENTS: &[(&str, &str)] = &[
    ("vendas", "03"),
    ("financeiro", "04"),
    ("antecipacoes", "06"),
    ("alelo", "10"),
];

#[derive(Debug)]
pub(crate) struct CieloHeader {
    statement: &'static str,
    fields: CieloFields,
}

impl CieloHeader {
    pub(crate) fn parse(statement: &'static str, line: &str) -> Result<Self, DecodeError> {
        let decoded = decode(CIELO_SCHEMA, CIELO_STRATEGY, line)?;
        tracing::trace!(
            consumed = decoded.consumed,
            chars = line.chars().count(),
            "cielo header decoded"
        );
        Ok(CieloHeader {
            statement,
            fields: decoded.record,
        })
    }
}

impl Header for CieloHeader {
    fn headquarter(&self) -> i64 {
        self.fields.headquarter
    }

    fn processing_date(&self) -> Option<NaiveDate> {
        self.fields.processing_date
    }

    fn period_init(&self) -> Option<NaiveDate> {
        self.fields.period_init
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.fields.period_end
    }

    fn statement_id(&self) -> String {
        format!("{:02}", self.fields.statement_id)
    }

    fn layout_version(&self) -> i8 {
        self.fields.layout_version
    }

    fn acquirer(&self) -> String {
        self.fields.acquirer.trim().to_string()
    }

    fn is_reprocessed(&self) -> bool {
        self.fields.sequence == REPROCESSED_SEQUENCE
    }

    fn period_dates(&self) -> Result<Vec<NaiveDate>, PeriodError> {
        expand_days(self.fields.period_init, self.fields.period_end)
    }

    fn is_valid(&self) -> bool {
        self.fields.processing_date.is_some()
            && contains_ignore_case(&self.fields.acquirer, "cielo")
            && self.fields.layout_version != 0
            && statement_code(CIELO_STATEMENTS, self.statement)
                .is_some_and(|code| code == self.statement_id())
    }
}

/// Cielo layout bound to one statement kind
pub(crate) struct CieloVariant {
    name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    statement: &'static str,
}

impl CieloVariant {
    pub(crate) fn new(
        name: &'static str,
        display_name: &'static str,
        aliases: &'static [&'static str],
        statement: &'static str,
    ) -> Self {
        CieloVariant {
            name,
            display_name,
            aliases,
            statement,
        }
    }
}

impl Variant for CieloVariant {
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
        CIELO_STRATEGY
    }

    fn decode(&self, line: &str) -> Result<BoxedHeader, DecodeError> {
        Ok(Box::new(CieloHeader::parse(self.statement, line)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const FINANCIAL: &str =
        "910238632322021063020210630202106300008358CIELO04I                    014";

    fn header(statement: &'static str, fields: CieloFields) -> CieloHeader {
        CieloHeader { statement, fields }
    }

    fn valid_fields() -> CieloFields {
        CieloFields {
            processing_date: Some(ymd(2021, 6, 30)),
            period_init: Some(ymd(2021, 6, 30)),
            period_end: Some(ymd(2021, 6, 30)),
            acquirer: "CIELO".to_string(),
            statement_id: 4,
            layout_version: 14,
            ..CieloFields::default()
        }
    }

    #[test]
    fn variant_decodes_with_its_advertised_strategy() {
        let variant = CieloVariant::new("cielofinanceiro", "Cielo financial", &[], "financeiro");
        assert_eq!(variant.strategy(), CIELO_STRATEGY);
        let h = variant.decode(FINANCIAL).unwrap();
        assert_eq!(h.headquarter(), 1_023_863_232);
        assert!(variant.decode(&FINANCIAL.replace('0', ",")).is_err());
    }

    #[test]
    fn decodes_financial_header() {
        let line = format!("{FINANCIAL}{}", " ".repeat(177));
        let h = CieloHeader::parse("financeiro", &line).unwrap();
        assert_eq!(h.fields.register_type, 9);
        assert_eq!(h.headquarter(), 1_023_863_232);
        assert_eq!(h.processing_date(), Some(ymd(2021, 6, 30)));
        assert_eq!(h.period_init(), Some(ymd(2021, 6, 30)));
        assert_eq!(h.period_end(), Some(ymd(2021, 6, 30)));
        assert_eq!(h.fields.sequence, 8358);
        assert_eq!(h.acquirer(), "CIELO");
        assert_eq!(h.statement_id(), "04");
        assert_eq!(h.fields.transmission, "I");
        assert_eq!(h.fields.postal_box, " ".repeat(20));
        assert_eq!(h.layout_version(), 14);
        assert!(!h.is_reprocessed());
        assert!(h.is_valid());
    }

    #[test]
    fn short_line_reports_last_field() {
        let line = &FINANCIAL[..FINANCIAL.len() - 3];
        let err = CieloHeader::parse("financeiro", line).unwrap_err();
        assert_eq!(err.field, "LayoutVersion");
        assert_eq!(err.source, CodecError::UnexpectedEnd);
        assert_eq!(
            err.to_string(),
            "LayoutVersion: unexpected end of text for parsing this field"
        );
    }

    #[test]
    fn bad_date_names_the_field() {
        let line = FINANCIAL.replacen("20210630", "20211330", 1);
        let err = CieloHeader::parse("financeiro", &line).unwrap_err();
        assert_eq!(err.field, "ProcessingDate");
    }

    #[test]
    fn period_dates_range() {
        let mut fields = valid_fields();
        fields.period_init = Some(ymd(2021, 6, 28));
        let h = header("financeiro", fields);
        assert_eq!(
            h.period_dates().unwrap(),
            vec![ymd(2021, 6, 28), ymd(2021, 6, 29), ymd(2021, 6, 30)]
        );
    }

    #[test]
    fn period_dates_errors() {
        let mut empty = valid_fields();
        empty.period_init = None;
        assert_eq!(
            header("financeiro", empty).period_dates(),
            Err(PeriodError::EmptyPeriod)
        );

        let mut inverted = valid_fields();
        inverted.period_init = Some(ymd(2021, 7, 1));
        assert_eq!(
            header("financeiro", inverted).period_dates(),
            Err(PeriodError::InvertedPeriod)
        );
    }

    #[test]
    fn reprocessed_sequence() {
        let mut fields = valid_fields();
        fields.sequence = 9_999_999;
        assert!(header("financeiro", fields).is_reprocessed());
    }

    #[test]
    fn statement_id_is_zero_padded() {
        let mut fields = valid_fields();
        fields.statement_id = 3;
        assert_eq!(header("vendas", fields).statement_id(), "03");
    }

    #[test]
    fn validity_rules() {
        assert!(header("financeiro", valid_fields()).is_valid());
        assert!(!header("vendas", valid_fields()).is_valid());
        assert!(!header("", valid_fields()).is_valid());

        let mut no_date = valid_fields();
        no_date.processing_date = None;
        assert!(!header("financeiro", no_date).is_valid());

        let mut other_acquirer = valid_fields();
        other_acquirer.acquirer = "REDE ".to_string();
        assert!(!header("financeiro", other_acquirer).is_valid());

        let mut lower_case = valid_fields();
        lower_case.acquirer = "cielo".to_string();
        assert!(header("financeiro", lower_case).is_valid());

        let mut no_layout = valid_fields();
        no_layout.layout_version = 0;
        assert!(!header("financeiro", no_layout).is_valid());
    }

    #[test]
    fn alelo_statement() {
        let mut fields = valid_fields();
        fields.statement_id = 10;
        assert!(header("alelo", fields).is_valid());
    }
}
