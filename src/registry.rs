use std::collections::HashSet;

use crate::error::{RegistryError, ValidationError};
use crate::model::{Employee, FullName, NewEmployee, OrderingRule, PayModel, PositionCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted,
    Empty,
}

/// The employees of one organization, in insertion order until sorted.
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: PositionCatalog,
    employees: Vec<Employee>,
}

impl Registry {
    pub fn new(catalog: PositionCatalog) -> Self {
        Self {
            catalog,
            employees: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &PositionCatalog {
        &self.catalog
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains_id(&self, id: i32) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Parses raw input fields, builds the employee and inserts it.
    pub fn hire<S: AsRef<str>>(
        &mut self,
        pay_model: PayModel,
        fields: &[S],
    ) -> Result<&Employee, ValidationError> {
        let new = NewEmployee::from_fields(fields, &self.catalog)?;
        let employee = Employee::create(pay_model, new, &self.catalog)?;
        self.insert(employee)
    }

    /// Appends the employee and returns the stored copy.
    pub fn insert(&mut self, employee: Employee) -> Result<&Employee, ValidationError> {
        employee.check_fields()?;
        if self.contains_id(employee.id) {
            return Err(ValidationError::DuplicateId(employee.id));
        }
        let index = self.employees.len();
        self.employees.push(employee);
        Ok(&self.employees[index])
    }

    /// Swaps in a freshly loaded list. On error the current list is kept.
    pub fn replace_all(&mut self, employees: Vec<Employee>) -> Result<(), ValidationError> {
        employees.iter().try_for_each(Employee::check_fields)?;
        let mut seen = HashSet::with_capacity(employees.len());
        if let Some(dup) = employees.iter().find(|e| !seen.insert(e.id)) {
            return Err(ValidationError::DuplicateId(dup.id));
        }
        self.employees = employees;
        Ok(())
    }

    pub fn sort(&mut self) -> SortOutcome {
        self.sort_with(&OrderingRule::default())
    }

    pub fn sort_with(&mut self, rule: &OrderingRule) -> SortOutcome {
        if self.employees.is_empty() {
            return SortOutcome::Empty;
        }
        self.employees.sort_by(|a, b| rule.compare(a, b));
        SortOutcome::Sorted
    }

    pub fn average_salary(&self) -> Result<f64, RegistryError> {
        if self.employees.is_empty() {
            return Err(RegistryError::Empty);
        }
        let total: f64 = self.employees.iter().map(|e| e.salary).sum();
        Ok(total / self.employees.len() as f64)
    }

    /// Full names of the first `n` employees.
    pub fn top_n_by_name(&self, n: usize) -> Result<Vec<FullName<'_>>, RegistryError> {
        self.require(n)?;
        Ok(self.employees[..n].iter().map(Employee::full_name).collect())
    }

    /// Ids of exactly the last `n` employees, paired with their 1-based
    /// position in the list.
    pub fn bottom_n_by_id(&self, n: usize) -> Result<Vec<(usize, i32)>, RegistryError> {
        self.require(n)?;
        let start = self.employees.len() - n;
        Ok(self.employees[start..]
            .iter()
            .enumerate()
            .map(|(offset, e)| (start + offset + 1, e.id))
            .collect())
    }

    fn require(&self, needed: usize) -> Result<(), RegistryError> {
        if self.employees.len() < needed {
            return Err(RegistryError::InsufficientEmployees {
                needed,
                available: self.employees.len(),
            });
        }
        Ok(())
    }
}
