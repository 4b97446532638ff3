/// Errors detected or surfaced by the client-side deletion flow.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The delete control is missing a required attribute.
    #[error("Delete control has no `{0}` attribute")]
    MissingAttribute(&'static str),

    /// The identifier attribute is not a positive base-10 integer.
    #[error("Invalid product identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The endpoint answered with an error body.
    #[error("Endpoint error ({status}): {message}")]
    Endpoint {
        /// HTTP status code.
        status: u16,
        /// The endpoint's `message` field.
        message: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Text shown to the user through the notification surface.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::MissingAttribute(_) => {
                "Erro: dados do produto ausentes no botão de exclusão".to_string()
            }
            ClientError::InvalidIdentifier(_) => "Erro: ID do produto inválido".to_string(),
            ClientError::Endpoint { message, .. } => message.clone(),
            ClientError::Transport(_) => "Erro ao conectar com o servidor".to_string(),
        }
    }
}
