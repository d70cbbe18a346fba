//! The demonstration content behind each menu entry. Every routine takes the
//! output stream and narrates a handful of real collection operations; none
//! of them keep state between runs.

pub mod advanced;
pub mod applications;
pub mod basics;
pub mod builders;
pub mod comparison;
pub mod frozen;
pub mod iteration;
pub mod methods;
pub mod operations;
pub mod performance;
