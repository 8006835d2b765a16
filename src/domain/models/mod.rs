pub mod bucket;
pub mod config;
pub mod environment;
pub mod intrinsic;
pub mod output;
pub mod policy;
pub mod stack;
pub mod template;

pub use bucket::*;
pub use config::*;
pub use environment::*;
pub use intrinsic::{Expr, Pseudo};
pub use output::*;
pub use policy::*;
pub use stack::*;
pub use template::*;
