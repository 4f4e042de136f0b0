//! Query input, expression value coercion and the read operation.

mod coercion;
mod operations;
mod types;

pub use coercion::{
    coerce_expression_attribute_values, coerce_text, coerce_value, parse_bool_literal,
};
pub use operations::{build_scan_request, read_ami_id, select_ami_id, AMI_ATTRIBUTE};
pub use types::{ConfigValue, ExpressionValue, QueryInput, QueryOutcome};
