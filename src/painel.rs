//! Recomputação completa do painel a partir dos registros e das seleções.

use serde::Serialize;

use crate::analyzer::{
    aggregate, compute_kpis, compute_overlap, filter_records, simulate_funnel, Kpis,
};
use crate::chart::spec::{category_chart, columns_chart, funnel_chart, overlap_chart};
use crate::chart::{ChartSpec, PaletteSettings, Slot};
use crate::parser::{Field, Record};
use crate::state::Selecoes;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Painel {
    pub kpis: Kpis,
    pub graficos: Vec<ChartSpec>,
}

pub fn build_painel(records: &[Record], selecoes: &Selecoes, palette: &PaletteSettings) -> Painel {
    let dados = filter_records(records, &selecoes.filtros);

    let por_zona = aggregate(&dados, Field::Zona);
    let por_mes = aggregate(&dados, Field::Mes);
    let por_status = aggregate(&dados, Field::Status);

    let overlap = compute_overlap(
        &dados,
        selecoes.venn_b.as_deref(),
        selecoes.venn_c.as_deref(),
    );

    let graficos = vec![
        category_chart(Slot::Zona, &por_zona, selecoes.chart(Slot::Zona), palette),
        category_chart(Slot::Mes, &por_mes, selecoes.chart(Slot::Mes), palette),
        category_chart(Slot::Status, &por_status, selecoes.chart(Slot::Status), palette),
        funnel_chart(
            &simulate_funnel(dados.len()),
            selecoes.chart(Slot::Funil),
            palette,
        ),
        columns_chart(&por_zona, selecoes.chart(Slot::Colunas), palette),
        overlap_chart(&overlap, selecoes.chart(Slot::Medidor), palette),
    ];

    Painel {
        kpis: compute_kpis(&dados),
        graficos,
    }
}
