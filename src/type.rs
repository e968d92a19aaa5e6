use std::fmt::Debug;

use num_traits::Float;

/// A trait for floating-point types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Queries
/// report true Euclidean distances and use an infinite sentinel for the empty
/// tree, so coordinates are restricted to the float types that provide both.
pub trait IndexableFloat: private::Sealed + Float + Debug + Send + Sync {}

impl IndexableFloat for f32 {}
impl IndexableFloat for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
