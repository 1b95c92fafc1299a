use crate::codec::{EmployeeCodec, EmployeeRecord, Format, from_records, to_records};
use crate::error::CodecError;
use crate::model::Employee;

/// Pretty-printed JSON array of tagged records.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl EmployeeCodec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, employees: &[Employee]) -> Result<String, CodecError> {
        serde_json::to_string_pretty(&to_records(employees)).map_err(|e| CodecError::Encode {
            format: Format::Json,
            message: e.to_string(),
        })
    }

    fn decode(&self, document: &str) -> Result<Vec<Employee>, CodecError> {
        let records: Vec<EmployeeRecord> =
            serde_json::from_str(document).map_err(|e| CodecError::Decode {
                format: Format::Json,
                message: e.to_string(),
            })?;
        from_records(records)
    }
}
