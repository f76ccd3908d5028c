use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::kind::{ChartKind, Orientation, ResolvedChart, SlotContext};
use super::palette::PaletteSettings;
use crate::analyzer::{AggregateResult, FunnelStage, OverlapRegion, OverlapResult, SetId};
use crate::error::AppError;

/// Borda usada nas regiões do Venn.
pub const BORDA_VENN: &str = "rgba(0,0,0,.15)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Zona,
    Mes,
    Status,
    Funil,
    Colunas,
    Medidor,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Zona,
        Slot::Mes,
        Slot::Status,
        Slot::Funil,
        Slot::Colunas,
        Slot::Medidor,
    ];

    pub fn container_id(self) -> &'static str {
        match self {
            Slot::Zona => "chart_zona",
            Slot::Mes => "chart_mes",
            Slot::Status => "chart_status",
            Slot::Funil => "chart_funil",
            Slot::Colunas => "chart_colunas",
            Slot::Medidor => "chart_medidor",
        }
    }

    pub fn context(self) -> SlotContext {
        match self {
            Slot::Zona | Slot::Mes | Slot::Status => SlotContext::Categoria,
            Slot::Funil => SlotContext::Funil,
            Slot::Colunas => SlotContext::Colunas,
            Slot::Medidor => SlotContext::Venn,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

impl FromStr for Slot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.container_id() == s)
            .ok_or_else(|| AppError::UnknownSlot(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tipo", content = "itens", rename_all = "camelCase")]
pub enum ChartData {
    Values(Vec<u64>),
    Regions(Vec<OverlapRegion>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Values(v) => v.len(),
            ChartData::Regions(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tudo o que um backend precisa para desenhar um slot.
/// `labels`, `data`, `colors` e `border_colors` são co-indexados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub slot: Slot,
    pub kind: ChartKind,
    pub orientation: Option<Orientation>,
    pub title: String,
    pub labels: Vec<String>,
    pub data: ChartData,
    pub colors: Vec<String>,
    pub border_colors: Vec<String>,
}

fn values_spec(
    slot: Slot,
    chart: ResolvedChart,
    title: String,
    labels: Vec<String>,
    values: Vec<u64>,
    palette: &PaletteSettings,
) -> ChartSpec {
    let (colors, border_colors) = palette.css(values.len());
    ChartSpec {
        slot,
        kind: chart.kind,
        orientation: chart.orientation,
        title,
        labels,
        data: ChartData::Values(values),
        colors,
        border_colors,
    }
}

/// Gráfico de contagem da primeira linha (zona, mês ou status).
pub fn category_chart(
    slot: Slot,
    aggregate: &AggregateResult,
    chart: ResolvedChart,
    palette: &PaletteSettings,
) -> ChartSpec {
    let title = match slot {
        Slot::Mes => "Por Mês",
        Slot::Status => "Por Status",
        _ => "Por Zona",
    };
    values_spec(
        slot,
        chart,
        title.to_string(),
        aggregate.labels.clone(),
        aggregate.values.clone(),
        palette,
    )
}

pub fn funnel_chart(
    stages: &[FunnelStage],
    chart: ResolvedChart,
    palette: &PaletteSettings,
) -> ChartSpec {
    let title = match chart.kind {
        ChartKind::Funnel => "Funil de Atendimento",
        ChartKind::Pie => "Funil (Pizza)",
        _ => "Funil (Barras horizontais)",
    };
    values_spec(
        Slot::Funil,
        chart,
        title.to_string(),
        stages.iter().map(|s| s.label.clone()).collect(),
        stages.iter().map(|s| s.value).collect(),
        palette,
    )
}

/// Distribuição por zona na segunda linha.
pub fn columns_chart(
    aggregate: &AggregateResult,
    chart: ResolvedChart,
    palette: &PaletteSettings,
) -> ChartSpec {
    let title = match (chart.kind, chart.orientation) {
        (ChartKind::Pie, _) => "Distribuição por Zona (Pizza)",
        (ChartKind::Line, _) => "Distribuição por Zona (Linha)",
        (ChartKind::Bar, Some(Orientation::Horizontal)) => {
            "Distribuição por Zona (Barras horizontais)"
        }
        _ => "Diagrama de Colunas (Vertical)",
    };
    values_spec(
        Slot::Colunas,
        chart,
        title.to_string(),
        aggregate.labels.clone(),
        aggregate.values.clone(),
        palette,
    )
}

fn venn_title(overlap: &OverlapResult) -> String {
    let mut title = String::from("Venn — Zona: ");
    if let Some(a) = overlap.set(SetId::A) {
        title.push_str(&a.label);
    }
    if let Some(b) = &overlap.status_b {
        title.push_str(&format!(" • B: {}", b));
    }
    if let Some(c) = &overlap.status_c {
        title.push_str(&format!(" • C: {}", c));
    }
    title
}

/// Slot de sobreposição: regiões como diagrama de Venn, ou seus valores em barras/pizza.
pub fn overlap_chart(
    overlap: &OverlapResult,
    chart: ResolvedChart,
    palette: &PaletteSettings,
) -> ChartSpec {
    let labels: Vec<String> = overlap.regions.iter().map(|r| r.label.clone()).collect();

    if chart.kind == ChartKind::Venn {
        let (colors, _) = palette.css(overlap.regions.len());
        return ChartSpec {
            slot: Slot::Medidor,
            kind: ChartKind::Venn,
            orientation: None,
            title: venn_title(overlap),
            border_colors: vec![BORDA_VENN.to_string(); colors.len()],
            colors,
            labels,
            data: ChartData::Regions(overlap.regions.clone()),
        };
    }

    let title = if chart.kind == ChartKind::Pie {
        "Venn (Pizza – conjuntos/interseções)"
    } else {
        "Venn (Barras – conjuntos/interseções)"
    };
    values_spec(
        Slot::Medidor,
        chart,
        title.to_string(),
        labels,
        overlap.regions.iter().map(|r| r.value).collect(),
        palette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{compute_overlap, simulate_funnel};
    use crate::parser::Record;

    fn rec(zona: &str, status: &str) -> Record {
        Record {
            zona: zona.into(),
            status: status.into(),
            ..Record::default()
        }
    }

    #[test]
    fn test_slot_ids_roundtrip() {
        for slot in Slot::ALL {
            assert_eq!(slot.container_id().parse::<Slot>().unwrap(), slot);
        }
        assert!(matches!(
            "chart_kpi".parse::<Slot>(),
            Err(AppError::UnknownSlot(_))
        ));
    }

    #[test]
    fn test_category_palette_matches_labels() {
        let agg = AggregateResult {
            labels: vec!["CENTRAL".into(), "SUL".into(), "NORTE".into()],
            values: vec![3, 2, 1],
        };
        let spec = category_chart(
            Slot::Zona,
            &agg,
            ResolvedChart::bar(Orientation::Horizontal),
            &PaletteSettings::default(),
        );
        assert_eq!(spec.title, "Por Zona");
        assert_eq!(spec.colors.len(), spec.labels.len());
        assert_eq!(spec.border_colors.len(), spec.labels.len());
        assert_eq!(spec.data.len(), 3);
        assert_eq!(spec.orientation, Some(Orientation::Horizontal));
    }

    #[test]
    fn test_funnel_titles() {
        let stages = simulate_funnel(40);
        let p = PaletteSettings::default();
        assert_eq!(
            funnel_chart(&stages, ResolvedChart::new(ChartKind::Funnel), &p).title,
            "Funil de Atendimento"
        );
        let bars = funnel_chart(&stages, ResolvedChart::bar(Orientation::Horizontal), &p);
        assert_eq!(bars.title, "Funil (Barras horizontais)");
        assert_eq!(bars.data, ChartData::Values(vec![40, 30, 18, 12]));
    }

    #[test]
    fn test_venn_spec_carries_regions() {
        let data = vec![rec("CENTRAL", "CONCLUÍDO"), rec("SUL", "EM ANÁLISE")];
        let overlap = compute_overlap(&data, Some("CONCLUÍDO"), Some("EM ANÁLISE"));
        let spec = overlap_chart(
            &overlap,
            ResolvedChart::new(ChartKind::Venn),
            &PaletteSettings::default(),
        );
        assert_eq!(spec.title, "Venn — Zona: CENTRAL • B: CONCLUÍDO • C: EM ANÁLISE");
        assert_eq!(spec.labels.len(), 7);
        assert_eq!(spec.colors.len(), 7);
        assert!(spec.border_colors.iter().all(|b| b == BORDA_VENN));
        assert!(matches!(spec.data, ChartData::Regions(ref r) if r.len() == 7));
    }

    #[test]
    fn test_venn_title_shows_every_selection() {
        let data = vec![rec("CENTRAL", "CONCLUÍDO")];
        let p = PaletteSettings::default();
        let venn = ResolvedChart::new(ChartKind::Venn);

        let dois = compute_overlap(&data, Some("CONCLUÍDO"), Some("concluído"));
        assert_eq!(dois.regions.len(), 3);
        assert_eq!(
            overlap_chart(&dois, venn, &p).title,
            "Venn — Zona: CENTRAL • B: CONCLUÍDO • C: concluído"
        );

        let so_c = compute_overlap(&data, None, Some("PENDENTE"));
        assert_eq!(overlap_chart(&so_c, venn, &p).title, "Venn — Zona: CENTRAL • C: PENDENTE");
    }

    #[test]
    fn test_overlap_as_pie_uses_values() {
        let data = vec![rec("CENTRAL", "CONCLUÍDO")];
        let overlap = compute_overlap(&data, None, None);
        let spec = overlap_chart(
            &overlap,
            ResolvedChart::new(ChartKind::Pie),
            &PaletteSettings::default(),
        );
        assert_eq!(spec.title, "Venn (Pizza – conjuntos/interseções)");
        assert_eq!(spec.labels, vec!["CENTRAL"]);
        assert_eq!(spec.data, ChartData::Values(vec![1]));
    }

    #[test]
    fn test_spec_serializes_for_backend() {
        let spec = columns_chart(
            &AggregateResult::placeholder(),
            ResolvedChart::bar(Orientation::Vertical),
            &PaletteSettings::default(),
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["slot"], "colunas");
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["orientation"], "vertical");
        assert_eq!(json["data"]["tipo"], "values");
        assert_eq!(json["borderColors"][0], "hsl(0 60% 45%)");
    }
}
