use std::borrow::Cow;

/// A specialized [`FertilityError`] enum of this crate.
#[fhub_derive::fhub_error]
pub enum FertilityError {
    /// Rejected query: non-finite reading, humidity outside `0..=100`, or an unknown label.
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A knowledge base violates its structural invariants.
    #[error("Invalid knowledge base{}: {message}", format_context(.context))]
    InvalidKnowledgeBase { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Knowledge base config error{}: {source}", format_context(.context))]
    Config { source: fhub_kernel::config::ConfigError, context: Option<Cow<'static, str>> },
}

impl FertilityError {
    pub(crate) fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }

    pub(crate) fn invalid_knowledge_base(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidKnowledgeBase { message: message.into(), context: None }
    }
}
