use crate::domain::{
    models::{StackConfig, StackDeclaration, StackEnvironment},
    value_objects::StackName,
};

/// Service port for declaring a stack
pub trait StackService: Send + Sync + 'static {
    /// Declare the stack's resources and outputs.
    ///
    /// Pure: the same name, environment and config always give the same
    /// declaration. Performs no validation.
    fn construct(
        &self,
        stack_name: StackName,
        environment: StackEnvironment,
        config: &StackConfig,
    ) -> StackDeclaration;
}
