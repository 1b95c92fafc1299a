//! Wire formats for the employee list.
//!
//! Both formats carry the same schema: a sequence of [`EmployeeRecord`]s,
//! each tagged with its pay model in the `Type` field.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::CodecError;
use crate::model::{Employee, PayModel};

pub mod json;
pub mod xml;

pub use json::JsonCodec;
pub use xml::XmlCodec;

/// Converts a whole employee list to and from one file format.
pub trait EmployeeCodec {
    fn format(&self) -> Format;

    fn encode(&self, employees: &[Employee]) -> Result<String, CodecError>;

    fn decode(&self, document: &str) -> Result<Vec<Employee>, CodecError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Format {
    #[strum(to_string = "XML")]
    Xml,
    #[strum(to_string = "JSON")]
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
        }
    }

    pub fn codec(self) -> &'static dyn EmployeeCodec {
        match self {
            Format::Xml => &XmlCodec,
            Format::Json => &JsonCodec,
        }
    }

    pub fn encode(self, employees: &[Employee]) -> Result<String, CodecError> {
        self.codec().encode(employees)
    }

    pub fn decode(self, document: &str) -> Result<Vec<Employee>, CodecError> {
        self.codec().decode(document)
    }
}

/// One employee as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EmployeeRecord {
    #[serde(rename = "Type")]
    pub kind: String,
    pub id: i32,
    pub position: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub birthday: String,
    pub salary: f64,
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            kind: employee.pay_model.to_string(),
            id: employee.id,
            position: employee.position.clone(),
            surname: employee.surname.clone(),
            name: employee.name.clone(),
            patronymic: employee.patronymic.clone(),
            birthday: employee.birthday.clone(),
            salary: employee.salary,
        }
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = CodecError;

    /// Restores the stored salary as-is; the catalog is not consulted.
    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let pay_model = PayModel::from_str(&record.kind)
            .map_err(|_| CodecError::UnknownVariant(record.kind.clone()))?;

        Ok(Employee {
            pay_model,
            id: record.id,
            position: record.position,
            surname: record.surname,
            name: record.name,
            patronymic: record.patronymic,
            birthday: record.birthday,
            salary: record.salary,
        })
    }
}

pub(crate) fn to_records(employees: &[Employee]) -> Vec<EmployeeRecord> {
    employees.iter().map(EmployeeRecord::from).collect()
}

pub(crate) fn from_records(records: Vec<EmployeeRecord>) -> Result<Vec<Employee>, CodecError> {
    records.into_iter().map(Employee::try_from).collect()
}
