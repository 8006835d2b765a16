/// Target account and region of a stack, passed through to the template
/// without interpretation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackEnvironment {
    pub account: Option<String>,
    pub region: Option<String>,
}

impl StackEnvironment {
    pub fn new(account: Option<String>, region: Option<String>) -> Self {
        Self { account, region }
    }

    /// Environment-agnostic stacks resolve account and region at deploy time
    pub fn is_agnostic(&self) -> bool {
        self.account.is_none() && self.region.is_none()
    }

    /// `aws://<account>/<region>` as written to the assembly manifest
    pub fn to_uri(&self) -> String {
        format!(
            "aws://{}/{}",
            self.account.as_deref().unwrap_or("unknown-account"),
            self.region.as_deref().unwrap_or("unknown-region")
        )
    }
}
