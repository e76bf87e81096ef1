pub mod artwork;
pub mod common;
pub mod generate;
pub mod interaction;
pub mod profile;

pub use artwork::*;
pub use common::*;
pub use generate::*;
pub use interaction::*;
pub use profile::*;
