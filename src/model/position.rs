use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A job position and the pay parameters attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub name: String,
    pub bonus: f64,
    pub fixed_salary: f64,
    pub hourly_rate: f64,
}

impl Position {
    pub fn new(name: impl Into<String>, bonus: f64, fixed_salary: f64, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            bonus,
            fixed_salary,
            hourly_rate,
        }
    }
}

/// Seed positions every organization starts with.
static STANDARD_POSITIONS: Lazy<PositionCatalog> = Lazy::new(|| {
    PositionCatalog::new(vec![
        Position::new("Programmer", 6000.0, 70000.0, 420.0),
        Position::new("Manager", 4000.0, 38000.0, 230.0),
        Position::new("Designer", 4500.0, 55000.0, 330.0),
        Position::new("Tester", 5000.0, 60000.0, 360.0),
        Position::new("GameDesigner", 5500.0, 65000.0, 390.0),
    ])
});

/// Read-only lookup of positions by name.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionCatalog {
    positions: Vec<Position>,
}

impl PositionCatalog {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn standard() -> Self {
        STANDARD_POSITIONS.clone()
    }

    /// Exact, case-sensitive match on the position name.
    pub fn find(&self, name: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
