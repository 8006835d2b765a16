mod assembly_errors;
mod synth_errors;
mod validation_errors;

pub use assembly_errors::*;
pub use synth_errors::*;
pub use validation_errors::*;
