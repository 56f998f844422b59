//! Operations run by the native engine.
//!
//! Each operation's output dimension follows its [`OutputPolicy`]: most return the promoted
//! dimension of their inputs, while the engine computes a few in the plane only.

mod binary;
mod operation;
mod policy;
mod unary;

pub use binary::{apply_binary, BinaryOps};
pub use operation::{BinaryOperation, UnaryOperation};
pub use policy::{output_dimension, output_policy, OutputPolicy};
pub use unary::{apply_unary, UnaryOps};
