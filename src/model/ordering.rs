use std::cmp::Ordering;

use crate::model::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Salary,
    Surname,
    Name,
    Patronymic,
}

impl SortKey {
    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortKey::Salary => a.salary.total_cmp(&b.salary),
            SortKey::Surname => a.surname.cmp(&b.surname),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Patronymic => a.patronymic.cmp(&b.patronymic),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Lexicographic comparison over an ordered list of keys. The first key
/// that tells two employees apart decides; later keys only break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingRule {
    keys: Vec<(SortKey, Direction)>,
}

impl OrderingRule {
    pub fn new(keys: Vec<(SortKey, Direction)>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[(SortKey, Direction)] {
        &self.keys
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        self.keys
            .iter()
            .map(|(key, direction)| direction.apply(key.compare(a, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Highest salary first, then surname, name and patronymic alphabetically.
impl Default for OrderingRule {
    fn default() -> Self {
        Self::new(vec![
            (SortKey::Salary, Direction::Descending),
            (SortKey::Surname, Direction::Ascending),
            (SortKey::Name, Direction::Ascending),
            (SortKey::Patronymic, Direction::Ascending),
        ])
    }
}
