//! JSON import: parse, validate, all-or-nothing.

use crate::error::PipelineError;
use pardoc_record::{validate_value, ParRecord};

/// Parses and validates an imported JSON document. Rejected wholesale on
/// the first layer that fails; a rejected import never yields a partial
/// record, so the caller's current record cannot be half-mutated.
pub fn import_record(bytes: &[u8]) -> Result<ParRecord, PipelineError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let record = validate_value(&value)?;
    log::info!("imported record '{}'", record.project_name);
    Ok(record)
}
