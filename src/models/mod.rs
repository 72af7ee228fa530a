//! Flexible job shop domain models.
//!
//! Entities are plain values referenced by position: an operation names
//! its job and eligible machines by index, and a precedence names its
//! operations by index. Dense tensors hold the per-pair data.
//!
//! # Domain Mappings
//!
//! | u-fjsp | Manufacturing | Healthcare | Logistics |
//! |--------|--------------|------------|-----------|
//! | Job | Order | Patient Case | Shipment |
//! | Operation | Routing Step | Procedure | Transport Leg |
//! | Machine | Machine/Cell | Room | Truck |

mod job;
mod machine;
mod operation;
mod precedence;
mod tensor;

pub use job::Job;
pub use machine::Machine;
pub use operation::Operation;
pub use precedence::{Anchor, ParsePrecedenceTypeError, PrecedenceType, Relation};
pub use tensor::{Matrix, Tensor3};
