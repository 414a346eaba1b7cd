pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{expand_days, name_date, parse_date};
pub(crate) use logging::init_logging;
