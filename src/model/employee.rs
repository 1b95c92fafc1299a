use derive_more::Display;
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::error::ValidationError;
use crate::model::position::{Position, PositionCatalog};

/// Average number of working days in a month.
pub const WORKING_DAYS_PER_MONTH: f64 = 20.8;
/// Length of a working day in hours.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Raw input fields, in order: id, position, surname, name, patronymic, birthday.
pub const RAW_FIELD_COUNT: usize = 6;

/// Pay model of an employee. The string form is the type tag written to files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, EnumIter)]
pub enum PayModel {
    Fixed,
    Hourly,
}

impl PayModel {
    /// Monthly salary for this pay model at the given position.
    pub fn salary(self, position: &Position) -> f64 {
        match self {
            PayModel::Fixed => position.fixed_salary + position.bonus,
            PayModel::Hourly => {
                (WORKING_DAYS_PER_MONTH * HOURS_PER_DAY * position.hourly_rate) + position.bonus
            }
        }
    }
}

/// Employee fields as entered, before the position is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub id: i32,
    pub position: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub birthday: String,
}

impl NewEmployee {
    /// Parses whitespace-split input. Fields past the sixth are ignored.
    pub fn from_fields<S: AsRef<str>>(
        fields: &[S],
        catalog: &PositionCatalog,
    ) -> Result<Self, ValidationError> {
        let [id, position, surname, name, patronymic, birthday, ..] = fields else {
            return Err(ValidationError::MissingFields {
                expected: RAW_FIELD_COUNT,
                actual: fields.len(),
            });
        };

        let position = position.as_ref();
        if catalog.find(position).is_none() {
            return Err(ValidationError::UnknownPosition(position.to_string()));
        }

        let id = id.as_ref();
        let id = id
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidId(id.to_string()))?;

        Ok(Self {
            id,
            position: position.to_string(),
            surname: surname.as_ref().to_string(),
            name: name.as_ref().to_string(),
            patronymic: patronymic.as_ref().to_string(),
            birthday: birthday.as_ref().to_string(),
        })
    }
}

/// An employee of the organization.
///
/// `salary` is fixed when the employee is created and never recomputed,
/// including after a load from file.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub pay_model: PayModel,
    pub id: i32,
    pub position: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub birthday: String,
    pub salary: f64,
}

impl Employee {
    pub fn create(
        pay_model: PayModel,
        fields: NewEmployee,
        catalog: &PositionCatalog,
    ) -> Result<Self, ValidationError> {
        let position = catalog
            .find(&fields.position)
            .ok_or_else(|| ValidationError::UnknownPosition(fields.position.clone()))?;
        let salary = pay_model.salary(position);

        Ok(Self {
            pay_model,
            id: fields.id,
            position: fields.position,
            surname: fields.surname,
            name: fields.name,
            patronymic: fields.patronymic,
            birthday: fields.birthday,
            salary,
        })
    }

    /// Every text field must be stored trimmed; the markup format cannot
    /// carry surrounding whitespace.
    pub fn check_fields(&self) -> Result<(), ValidationError> {
        let fields = [
            ("position", &self.position),
            ("surname", &self.surname),
            ("name", &self.name),
            ("patronymic", &self.patronymic),
            ("birthday", &self.birthday),
        ];
        match fields.into_iter().find(|(_, value)| value.trim() != value.as_str()) {
            Some((field, value)) => Err(ValidationError::PaddedField {
                field,
                value: value.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn full_name(&self) -> FullName<'_> {
        FullName {
            surname: &self.surname,
            name: &self.name,
            patronymic: &self.patronymic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} {} {}", surname, name, patronymic)]
pub struct FullName<'a> {
    pub surname: &'a str,
    pub name: &'a str,
    pub patronymic: &'a str,
}
