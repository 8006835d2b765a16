pub mod stack_service;
pub mod synthesis_service;

pub use stack_service::StackService;
pub use synthesis_service::SynthesisService;
