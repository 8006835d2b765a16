mod bucket_stack_template;
mod template_synthesizer;

pub use bucket_stack_template::{BucketStackTemplate, BUCKET_CONSTRUCT_ID, OBJECT_ACCESS_ACTIONS};
pub use template_synthesizer::{
    TemplateSynthesizer, AUTO_DELETE_RESOURCE_TYPE, AUTO_DELETE_TAG_KEY,
    BUCKET_POLICY_RESOURCE_TYPE, BUCKET_RESOURCE_TYPE,
};
