pub mod employee;
pub mod ordering;
pub mod position;

pub use employee::{Employee, FullName, NewEmployee, PayModel};
pub use ordering::{Direction, OrderingRule, SortKey};
pub use position::{Position, PositionCatalog};
