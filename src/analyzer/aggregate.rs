use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::{Field, Record, PLACEHOLDER};

/// Ordem canônica dos meses em toda agregação mensal.
pub const MESES_ORDENADOS: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARÇO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

/// Série (rótulo, contagem) co-indexada. Nunca vazia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl AggregateResult {
    pub fn placeholder() -> Self {
        AggregateResult {
            labels: vec![PLACEHOLDER.to_string()],
            values: vec![0],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

pub fn is_canonical_month(mes: &str) -> bool {
    MESES_ORDENADOS.contains(&mes)
}

/// Conta os registros por rótulo de `field`.
///
/// Meses voltam sempre como os 12 rótulos canônicos, com zeros; valores fora
/// do conjunto canônico são descartados. Os demais campos saem ordenados por
/// rótulo, e uma contagem vazia vira o marcador único ("—", 0).
pub fn aggregate(records: &[Record], field: Field) -> AggregateResult {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for r in records {
        *counts.entry(r.label(field)).or_insert(0) += 1;
    }

    if field == Field::Mes {
        return AggregateResult {
            labels: MESES_ORDENADOS.iter().map(|m| m.to_string()).collect(),
            values: MESES_ORDENADOS
                .iter()
                .map(|m| counts.get(*m).copied().unwrap_or(0))
                .collect(),
        };
    }

    if counts.is_empty() {
        return AggregateResult::placeholder();
    }

    let (labels, values) = counts.into_iter().unzip();
    AggregateResult { labels, values }
}
