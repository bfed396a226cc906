use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setting some displayed value is derived from was not configured.
    #[error("required setting `{key}` is not configured")]
    ConfigurationMissing { key: &'static str },

    #[error("build hash has {len} characters, at least 8 are needed for the short hash")]
    BuildHashTooShort { len: usize },

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(err = %self, "request failed");

        let body = match &self {
            Self::ConfigurationMissing { .. } | Self::BuildHashTooShort { .. } => self.to_string(),
            Self::Render(_) => "Internal server error".to_owned(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
