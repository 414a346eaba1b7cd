mod format;
mod inspect;
mod report;

pub(crate) use inspect::{
    InspectTableOptions, output_acquirers_json, output_inspect_json, print_acquirers_table,
    print_inspect_table,
};
pub(crate) use report::{ReportSink, StdoutSink};
