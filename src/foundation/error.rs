pub type ArclineResult<T> = Result<T, ArclineError>;

#[derive(thiserror::Error, Debug)]
pub enum ArclineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArclineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ArclineError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ArclineError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ArclineError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
