use crate::storage::{Item, ScanRequest, ScanStore};

use super::coercion::coerce_expression_attribute_values;
use super::types::{QueryInput, QueryOutcome};

/// Attribute holding the AMI identifier in matching items.
pub const AMI_ATTRIBUTE: &str = "ami";

/// Builds the scan for a query: coerced values, no name aliasing, no projection.
pub fn build_scan_request(input: &QueryInput) -> ScanRequest {
    ScanRequest::new(
        &input.table_name,
        &input.filter_expression,
        coerce_expression_attribute_values(&input.substitutions),
    )
}

/// Picks the AMI identifier out of scan results.
///
/// Only the first item is looked at; any further matches are ignored.
pub fn select_ami_id(items: &[Item]) -> QueryOutcome {
    let Some(first) = items.first() else {
        return QueryOutcome::NotFound;
    };

    match first.get(AMI_ATTRIBUTE).and_then(|v| v.as_s()) {
        Some(ami_id) => QueryOutcome::Found {
            ami_id: ami_id.to_string(),
        },
        None => QueryOutcome::Failed {
            message: format!("Missing or invalid field: {}", AMI_ATTRIBUTE),
        },
    }
}

/// Runs a single read: build the scan, issue it once, extract the result.
pub async fn read_ami_id(store: &dyn ScanStore, input: &QueryInput) -> QueryOutcome {
    let request = build_scan_request(input);

    tracing::debug!(
        table = %request.table_name,
        filter = %request.filter_expression,
        values = request.expression_attribute_values.len(),
        "Scanning table"
    );

    match store.scan(&request).await {
        Ok(items) => {
            tracing::debug!(items = items.len(), "Scan returned");
            select_ami_id(&items)
        }
        Err(err) => QueryOutcome::Failed {
            message: err.to_string(),
        },
    }
}
