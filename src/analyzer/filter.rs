use serde::{Deserialize, Serialize};

use crate::parser::Record;

/// Critérios opcionais de igualdade exata; `None` (ou texto vazio) aceita qualquer valor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub zona: Option<String>,
    pub mes: Option<String>,
    pub status: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        active(&self.zona).is_none() && active(&self.mes).is_none() && active(&self.status).is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        accepts(&self.zona, &record.zona)
            && accepts(&self.mes, &record.mes)
            && accepts(&self.status, &record.status)
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|v| !v.is_empty())
}

fn accepts(criterion: &Option<String>, value: &str) -> bool {
    match active(criterion) {
        Some(expected) => expected == value,
        None => true,
    }
}

/// Mantém os registros que atendem a todos os critérios presentes, na ordem original.
pub fn filter_records(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}
