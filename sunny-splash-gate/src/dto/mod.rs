pub mod input;
pub mod output;

use time::Date;

// Calendar dates cross the API as plain `2025-07-01` strings,
// matching the visitDate convention of the signed QR payload.
time::serde::format_description!(pub(crate) visit_date_format, Date, "[year]-[month]-[day]");
