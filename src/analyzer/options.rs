use std::collections::BTreeSet;

use serde::Serialize;

use super::aggregate::MESES_ORDENADOS;
use crate::parser::Record;

/// Valores oferecidos pelos seletores de filtro e do Venn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub zonas: Vec<String>,
    pub meses: Vec<String>,
    pub status: Vec<String>,
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn filter_options(records: &[Record]) -> FilterOptions {
    FilterOptions {
        zonas: distinct_sorted(records.iter().map(|r| r.zona.as_str())),
        meses: MESES_ORDENADOS
            .iter()
            .filter(|m| records.iter().any(|r| r.mes == **m))
            .map(|m| m.to_string())
            .collect(),
        status: distinct_sorted(records.iter().map(|r| r.status.as_str())),
    }
}

/// Mantém `current` só se ainda estiver entre `offered`.
pub fn keep_if_offered(current: Option<String>, offered: &[String]) -> Option<String> {
    current.filter(|v| offered.iter().any(|o| o == v))
}

/// Status preferido para um seletor do Venn, quando os dados o oferecem.
pub fn default_venn_status(preferred: &str, options: &FilterOptions) -> Option<String> {
    options
        .status
        .iter()
        .find(|s| s.as_str() == preferred)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample_records;

    #[test]
    fn test_options_from_sample() {
        let options = filter_options(&sample_records());
        assert_eq!(options.zonas, vec!["CENTRAL", "NORTE", "OESTE", "SUL"]);
        assert_eq!(options.meses.len(), 8);
        assert_eq!(options.meses[0], "JANEIRO");
        assert_eq!(options.meses[7], "AGOSTO");
        assert_eq!(options.status, vec!["CONCLUÍDO", "EM ANÁLISE", "PENDENTE"]);
    }

    #[test]
    fn test_months_follow_canonical_order() {
        let records: Vec<Record> = ["DEZEMBRO", "ABRIL", "abril", ""]
            .iter()
            .map(|m| Record {
                mes: m.to_string(),
                ..Record::default()
            })
            .collect();
        assert_eq!(filter_options(&records).meses, vec!["ABRIL", "DEZEMBRO"]);
    }

    #[test]
    fn test_default_venn_status() {
        let options = filter_options(&sample_records());
        assert_eq!(
            default_venn_status("CONCLUÍDO", &options),
            Some("CONCLUÍDO".to_string())
        );
        assert_eq!(default_venn_status("CANCELADO", &options), None);
    }

    #[test]
    fn test_keep_if_offered() {
        let offered = vec!["SUL".to_string()];
        assert_eq!(keep_if_offered(Some("SUL".into()), &offered), Some("SUL".into()));
        assert_eq!(keep_if_offered(Some("NORTE".into()), &offered), None);
        assert_eq!(keep_if_offered(None, &offered), None);
    }
}
