use std::time::Duration;

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::AppError;
use crate::parser::{Record, RecordEnvelope};

/// Origem da coleção de registros.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<Record>, AppError>;
}

/// GET num endpoint JSON que responde `{ "data": [...] }`.
pub struct HttpRecordSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        HttpRecordSource {
            url: url.into(),
            agent,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.dados_url.clone(),
            Duration::from_secs(config.timeout_segundos),
        )
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch(&self) -> Result<Vec<Record>, AppError> {
        let response = self
            .agent
            .get(&self.url)
            .set("Cache-Control", "no-store")
            .call()?;
        if !(200..300).contains(&response.status()) {
            return Err(AppError::Status(response.status()));
        }
        let body = response.into_string()?;
        let envelope: RecordEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordOrigin {
    Vazio,
    Fonte,
    Amostra,
}

/// Coleção de registros em memória, carregada de uma fonte com a amostra
/// embutida como reserva; os registros não mudam depois de carregados.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    origin: RecordOrigin,
}

impl Default for RecordStore {
    fn default() -> Self {
        RecordStore {
            records: Vec::new(),
            origin: RecordOrigin::Vazio,
        }
    }
}

impl RecordStore {
    pub fn from_records(records: Vec<Record>) -> Self {
        RecordStore {
            records,
            origin: RecordOrigin::Fonte,
        }
    }

    /// Substitui a coleção pelo que a fonte devolve. Qualquer falha da fonte
    /// é registrada no log e trocada pela amostra embutida; nunca chega a
    /// quem chamou.
    pub fn load(&mut self, source: &dyn RecordSource) -> RecordOrigin {
        match source.fetch() {
            Ok(records) => {
                log::info!("{} registros carregados da fonte", records.len());
                self.records = records;
                self.origin = RecordOrigin::Fonte;
            }
            Err(e) => {
                log::warn!("Fonte de dados indisponível ({}), usando amostra embutida", e);
                self.records = sample_records();
                self.origin = RecordOrigin::Amostra;
            }
        }
        self.origin
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn origin(&self) -> RecordOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sample(zona: &str, mes: &str, status: &str, quantidade: i64) -> Record {
    Record {
        zona: zona.into(),
        mes: mes.into(),
        status: status.into(),
        quantidade,
        ..Record::default()
    }
}

/// Amostra embutida, usada quando a fonte não pode ser lida.
pub fn sample_records() -> Vec<Record> {
    vec![
        sample("CENTRAL", "JANEIRO", "CONCLUÍDO", 42),
        sample("NORTE", "FEVEREIRO", "CONCLUÍDO", 12),
        sample("OESTE", "MARÇO", "EM ANÁLISE", 5),
        sample("SUL", "ABRIL", "PENDENTE", 33),
        sample("SUL", "MAIO", "CONCLUÍDO", 28),
        sample("CENTRAL", "JUNHO", "EM ANÁLISE", 16),
        sample("CENTRAL", "JULHO", "PENDENTE", 11),
        sample("CENTRAL", "AGOSTO", "CONCLUÍDO", 7),
    ]
}
