//! Schema module - Design data, boundary and candidate layout types.

mod boundary;
mod design;
mod error;
mod layout;
mod weights;

pub use boundary::*;
pub use design::*;
pub use error::*;
pub use layout::*;
pub use weights::*;

/// Nine-space reference dwelling, in centimetres.
#[cfg(test)]
pub(crate) fn reference_spec() -> DesignSpecification {
    DesignSpecification::from_json(include_str!("../../data/reference_dwelling.json"))
        .expect("reference dwelling parses")
}
