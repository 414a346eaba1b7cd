//! Header variant registry
//!
//! Every supported acquirer key and the layout it decodes with.

use std::sync::LazyLock;

use super::cielo::CieloVariant;
use super::getnet::GetnetVariant;
use super::rede::{RedeLayout, RedeVariant};
use super::{BoxedVariant, Variant};

/// All registered header variants
static VARIANTS: LazyLock<Vec<BoxedVariant>> = LazyLock::new(|| {
    vec![
        Box::new(CieloVariant::new("cielovendas", "Cielo sales", &["cv"], "vendas")),
        Box::new(CieloVariant::new(
            "cielofinanceiro",
            "Cielo financial",
            &["cf"],
            "financeiro",
        )),
        Box::new(CieloVariant::new(
            "cieloantecipacoes",
            "Cielo anticipations",
            &["ca"],
            "antecipacoes",
        )),
        Box::new(CieloVariant::new("cieloalelo", "Cielo Alelo", &["cal"], "alelo")),
        Box::new(RedeVariant::new(
            "redecredito",
            "Rede credit",
            &["rc"],
            RedeLayout::Credit,
            "credito",
        )),
        Box::new(RedeVariant::new(
            "rededebito",
            "Rede debit",
            &["rd"],
            RedeLayout::Debit,
            "debito",
        )),
        Box::new(RedeVariant::new(
            "redefinanceiro",
            "Rede financial",
            &["rf"],
            RedeLayout::Financial,
            "financeiro",
        )),
        Box::new(GetnetVariant),
    ]
});

/// Get a variant by name or alias
pub(crate) fn get_variant(name: &str) -> Option<&'static dyn Variant> {
    let name_lower = name.to_lowercase();
    VARIANTS.iter().find_map(|v: &BoxedVariant| {
        if v.name() == name_lower || v.aliases().contains(&name_lower.as_str()) {
            Some(v.as_ref())
        } else {
            None
        }
    })
}

/// Every registered variant, in registration order
pub(crate) fn variants() -> impl Iterator<Item = &'static dyn Variant> {
    VARIANTS.iter().map(|v| v.as_ref())
}
