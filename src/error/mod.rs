use thiserror::Error;

/// Error type produced by backend implementations.
///
/// The composition layer never inspects backend failures; they are carried
/// through [`ComposeError::Backend`] untouched.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ComposeError {
    /// A render method was invoked before `configure` ever succeeded on the
    /// builder. Caller bug, not a runtime condition to recover from.
    #[error("{method} called before configure()")]
    NotConfigured { method: &'static str },

    /// `configure` received a value whose type violates a recognized
    /// option's constraint. The whole configure call fails; nothing is
    /// partially resolved.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// A render path required a templating engine but none was wired at
    /// construction time. Deployment defect, not a per-request condition.
    #[error("body rendering requires a templating engine, none was wired")]
    MissingTemplating,

    /// Translation or templating backend failure, propagated unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A configurator failed while decorating a message. The remainder of
    /// its chain does not run.
    #[error("configurator failed: {0}")]
    Configurator(#[source] BackendError),
}

impl ComposeError {
    pub(crate) fn invalid_option(option: &'static str, reason: impl Into<String>) -> Self {
        ComposeError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposeError>;
