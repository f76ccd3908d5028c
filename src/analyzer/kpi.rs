use serde::Serialize;

use crate::parser::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total: usize,
    pub quantidade: i64,
    pub media: f64,
    pub tendencia: String,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Indicador de tendência. Provisório: nenhuma tendência é calculada ainda.
pub fn tendencia(_records: &[Record]) -> String {
    "0%".to_string()
}

pub fn compute_kpis(records: &[Record]) -> Kpis {
    let total = records.len();
    let quantidade: i64 = records.iter().map(|r| r.quantidade).sum();
    let media = if total == 0 {
        0.0
    } else {
        round2(quantidade as f64 / total as f64)
    };

    Kpis {
        total,
        quantidade,
        media,
        tendencia: tendencia(records),
    }
}
