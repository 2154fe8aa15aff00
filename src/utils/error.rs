use thiserror::Error;

#[derive(Error, Debug)]
pub enum MvnoError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("XML parsing failed: {0}")]
    XmlError(#[from] quick_xml::DeError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse {field} from '{value}': {reason}")]
    ParseError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required property: {field}")]
    IncompleteRecordError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to retrieve data for user {user_id}: {source}")]
    RetrievalError {
        user_id: String,
        #[source]
        source: Box<MvnoError>,
    },
}

impl MvnoError {
    /// Wraps a lower-level failure with the user id being processed. This is
    /// the only error shape that crosses the use-case boundary.
    pub fn retrieval(user_id: impl Into<String>, source: MvnoError) -> Self {
        MvnoError::RetrievalError {
            user_id: user_id.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, MvnoError>;
