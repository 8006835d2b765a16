use crate::domain::{
    errors::SynthResult,
    models::{CloudFormationTemplate, StackDeclaration},
};

/// Service port for turning a declaration into a deployable template
pub trait SynthesisService: Send + Sync + 'static {
    /// Validate the declaration and render it as a CloudFormation template
    fn synthesize(&self, declaration: &StackDeclaration) -> SynthResult<CloudFormationTemplate>;
}
