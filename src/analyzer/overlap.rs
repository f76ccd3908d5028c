//! Sobreposição estilo Venn entre a zona líder (A) e até dois status escolhidos (B, C).
//!
//! O número de regiões depende apenas dos status configurados:
//! - B ausente → {A}
//! - B presente, C ausente ou igual a B (sem diferenciar caixa) → {A}, {B}, {A∩B}
//! - B e C presentes e distintos → {A}, {B}, {C}, {A∩B}, {A∩C}, {B∩C}, {A∩B∩C}
//!
//! Cada registro tem um único campo `status`, então dois conjuntos de status
//! distintos nunca compartilham registros: {B∩C} e {A∩B∩C} valem sempre 0.

use serde::Serialize;

use super::aggregate::aggregate;
use crate::parser::{Field, Record};

pub const SEPARADOR_INTERSECAO: &str = " ∩ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SetId {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "campo", content = "valor", rename_all = "camelCase")]
pub enum Membership {
    /// Igualdade exata com o rótulo da zona ("—" para zona vazia).
    Zona(String),
    /// Igualdade de status sem diferenciar caixa.
    Status(String),
}

impl Membership {
    pub fn contains(&self, record: &Record) -> bool {
        match self {
            Membership::Zona(zona) => record.label(Field::Zona) == *zona,
            Membership::Status(status) => same_status(&record.status, status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDescriptor {
    pub id: SetId,
    pub label: String,
    pub membership: Membership,
}

impl SetDescriptor {
    fn count(&self, records: &[Record]) -> u64 {
        records.iter().filter(|r| self.membership.contains(r)).count() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapRegion {
    pub sets: Vec<SetId>,
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlapMode {
    UmConjunto,
    DoisConjuntos,
    TresConjuntos,
}

impl OverlapMode {
    pub fn region_count(self) -> usize {
        match self {
            OverlapMode::UmConjunto => 1,
            OverlapMode::DoisConjuntos => 3,
            OverlapMode::TresConjuntos => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopZone {
    pub zona: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    pub mode: OverlapMode,
    /// Seleções B e C como recebidas, mesmo quando C não gera conjunto próprio.
    pub status_b: Option<String>,
    pub status_c: Option<String>,
    pub sets: Vec<SetDescriptor>,
    pub regions: Vec<OverlapRegion>,
}

impl OverlapResult {
    pub fn set(&self, id: SetId) -> Option<&SetDescriptor> {
        self.sets.iter().find(|s| s.id == id)
    }
}

fn same_status(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

/// Zona com mais registros. Empates ficam com a primeira em ordem alfabética;
/// sem registros dá ("—", 0).
pub fn top_zone(records: &[Record]) -> TopZone {
    let counts = aggregate(records, Field::Zona);
    let mut best: Option<(&str, u64)> = None;
    for (zona, count) in counts.pairs() {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((zona, count));
        }
    }
    let (zona, count) = best.unwrap_or(("—", 0));
    TopZone {
        zona: zona.to_string(),
        count,
    }
}

/// Registros cujo status coincide com `b` e com `c`. Só é diferente de zero
/// quando `b` e `c` são iguais sem diferenciar caixa, que é o modo de dois
/// conjuntos; o modo de três conjuntos nunca chega a esse caso.
pub fn shared_status_count(records: &[Record], b: &str, c: &str) -> usize {
    records
        .iter()
        .filter(|r| same_status(&r.status, b) && same_status(&r.status, c))
        .count()
}

fn region(sets: &[&SetDescriptor], value: u64) -> OverlapRegion {
    OverlapRegion {
        sets: sets.iter().map(|s| s.id).collect(),
        label: sets
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(SEPARADOR_INTERSECAO),
        value,
    }
}

fn intersection(records: &[Record], a: &SetDescriptor, other: &SetDescriptor) -> u64 {
    records
        .iter()
        .filter(|r| a.membership.contains(r) && other.membership.contains(r))
        .count() as u64
}

pub fn compute_overlap(
    records: &[Record],
    status_b: Option<&str>,
    status_c: Option<&str>,
) -> OverlapResult {
    let top = top_zone(records);
    let status_b = status_b.filter(|s| !s.is_empty());
    let status_c = status_c.filter(|s| !s.is_empty());
    let selecionados = (status_b.map(str::to_string), status_c.map(str::to_string));
    let set_a = SetDescriptor {
        id: SetId::A,
        label: top.zona.clone(),
        membership: Membership::Zona(top.zona.clone()),
    };

    let Some(b) = status_b else {
        return OverlapResult {
            mode: OverlapMode::UmConjunto,
            status_b: selecionados.0,
            status_c: selecionados.1,
            regions: vec![region(&[&set_a], top.count)],
            sets: vec![set_a],
        };
    };

    let set_b = SetDescriptor {
        id: SetId::B,
        label: b.to_string(),
        membership: Membership::Status(b.to_string()),
    };
    let b_count = set_b.count(records);
    let ab = intersection(records, &set_a, &set_b);

    let c = match status_c {
        Some(c) if !same_status(b, c) => c,
        _ => {
            return OverlapResult {
                mode: OverlapMode::DoisConjuntos,
                status_b: selecionados.0,
                status_c: selecionados.1,
                regions: vec![
                    region(&[&set_a], top.count),
                    region(&[&set_b], b_count),
                    region(&[&set_a, &set_b], ab),
                ],
                sets: vec![set_a, set_b],
            };
        }
    };

    let set_c = SetDescriptor {
        id: SetId::C,
        label: c.to_string(),
        membership: Membership::Status(c.to_string()),
    };
    let c_count = set_c.count(records);
    let ac = intersection(records, &set_a, &set_c);

    OverlapResult {
        mode: OverlapMode::TresConjuntos,
        status_b: selecionados.0,
        status_c: selecionados.1,
        regions: vec![
            region(&[&set_a], top.count),
            region(&[&set_b], b_count),
            region(&[&set_c], c_count),
            region(&[&set_a, &set_b], ab),
            region(&[&set_a, &set_c], ac),
            region(&[&set_b, &set_c], 0),
            region(&[&set_a, &set_b, &set_c], 0),
        ],
        sets: vec![set_a, set_b, set_c],
    }
}
