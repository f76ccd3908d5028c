use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de entrada/saída: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro HTTP: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("Resposta sem sucesso da fonte de dados: {0}")]
    Status(u16),

    #[error("Erro de serialização: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Slot de gráfico desconhecido: {0}")]
    UnknownSlot(String),

    #[error("Falha no backend de renderização: {0}")]
    Render(String),

    #[error("{0}")]
    Custom(String),
}

impl From<ureq::Error> for AppError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => AppError::Status(code),
            other => AppError::Http(Box::new(other)),
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_message() {
        let err = AppError::UnknownSlot("chart_x".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Slot de gráfico desconhecido: chart_x\"");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            AppError::Status(503).to_string(),
            "Resposta sem sucesso da fonte de dados: 503"
        );
    }
}
