/// Date format of coverage ranges printed by `periods` and `gaps`: "10/03/2021"
pub(crate) const RANGE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format embedded in canonical file names: "2021_03_10"
pub(crate) const NAME_DATE_FORMAT: &str = "%Y_%m_%d";

/// Placeholder for an unset date inside a canonical file name
pub(crate) const NAME_EMPTY_DATE: &str = "0000_00_00";

/// Cielo sequence number marking a reprocessed file
pub(crate) const REPROCESSED_SEQUENCE: i32 = 9_999_999;
