//! Document and identifier types for the EMR ledger

mod common;
mod entity;
mod grant;
mod record;

pub use common::*;
pub use entity::*;
pub use grant::*;
pub use record::*;
