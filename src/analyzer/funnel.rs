//! Funil de atendimento simulado.
//!
//! As etapas NÃO são medidas: são uma cascata decrescente fixa aplicada à
//! contagem filtrada, no lugar de um acompanhamento real por etapa.

use serde::Serialize;

/// Rótulos das etapas e a fração da contagem que cada uma recebe.
pub const ETAPAS: [(&str, f64); 4] = [
    ("Solicitações", 1.0),
    ("Triadas", 0.75),
    ("Em Execução", 0.45),
    ("Concluídas", 0.30),
];

/// Exibido no lugar de um funil todo zerado.
pub const FUNIL_PADRAO: [u64; 4] = [40, 30, 18, 12];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub label: String,
    pub value: u64,
}

pub fn simulate_funnel(n: usize) -> Vec<FunnelStage> {
    let computed: Vec<u64> = ETAPAS
        .iter()
        .map(|(_, ratio)| (n as f64 * ratio).round().max(0.0) as u64)
        .collect();

    let values: Vec<u64> = if computed.iter().all(|v| *v == 0) {
        FUNIL_PADRAO.to_vec()
    } else {
        computed
    };

    ETAPAS
        .iter()
        .zip(values)
        .map(|((label, _), value)| FunnelStage {
            label: label.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(n: usize) -> Vec<u64> {
        simulate_funnel(n).into_iter().map(|s| s.value).collect()
    }

    #[test]
    fn test_cascade_of_forty() {
        assert_eq!(values(40), vec![40, 30, 18, 12]);
    }

    #[test]
    fn test_zero_uses_fallback() {
        assert_eq!(values(0), vec![40, 30, 18, 12]);
    }

    #[test]
    fn test_rounding_to_nearest() {
        // 10 → 10, 7.5 → 8, 4.5 → 5, 3.0 → 3
        assert_eq!(values(10), vec![10, 8, 5, 3]);
        // 1 → 1, 0.75 → 1, 0.45 → 0, 0.3 → 0 : nem tudo zero, sem valores padrão
        assert_eq!(values(1), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_fixed_labels() {
        let labels: Vec<String> = simulate_funnel(5).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Solicitações", "Triadas", "Em Execução", "Concluídas"]);
    }
}
