//! Java AST builders for generating classes, enums and their members.
//!
//! These provide a high-level API for constructing Java syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod enums;
mod imports;
mod javadoc;
mod members;
mod methods;

pub use class::Class;
pub use enums::JavaEnum;
pub use imports::Import;
pub use javadoc::Javadoc;
pub use members::{Constant, Field};
pub use methods::{Method, Param};
