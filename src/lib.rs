//! Employee registry with two pay models, a fixed salary ordering and
//! lossless XML/JSON persistence.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod shell;
pub mod storage;
pub mod utils;

pub use codec::Format;
pub use error::{CodecError, RegistryError, StorageError, ValidationError};
pub use model::{Employee, PayModel, Position, PositionCatalog};
pub use registry::{Registry, SortOutcome};
