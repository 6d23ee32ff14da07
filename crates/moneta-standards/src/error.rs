#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("embedded currency metadata is missing required column: {name}")]
    MissingColumn { name: String },

    #[error("failed to parse embedded currency metadata: {message}")]
    Csv { message: String },
}

impl From<csv::Error> for StandardsError {
    fn from(source: csv::Error) -> Self {
        Self::Csv {
            message: source.to_string(),
        }
    }
}
