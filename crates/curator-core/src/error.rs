use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read form file {path}: {source}")]
    FormFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form file: {0}")]
    FormFileParse(#[source] serde_yaml::Error),
}
