use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Funnel,
    Venn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Tipo de gráfico escolhido para um slot. A orientação só vale para barras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChart {
    pub kind: ChartKind,
    pub orientation: Option<Orientation>,
}

impl ResolvedChart {
    pub const fn new(kind: ChartKind) -> Self {
        ResolvedChart {
            kind,
            orientation: None,
        }
    }

    pub const fn bar(orientation: Orientation) -> Self {
        ResolvedChart {
            kind: ChartKind::Bar,
            orientation: Some(orientation),
        }
    }

    pub fn is_horizontal_bar(&self) -> bool {
        self.kind == ChartKind::Bar && self.orientation == Some(Orientation::Horizontal)
    }
}

/// Família de seletor que um slot expõe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotContext {
    /// Contagens da primeira linha (zona, mês, status).
    Categoria,
    Funil,
    Colunas,
    Venn,
}

pub type KeywordTable = &'static [(&'static str, ResolvedChart)];

const H: Orientation = Orientation::Horizontal;
const V: Orientation = Orientation::Vertical;

const CATEGORIA: KeywordTable = &[
    ("pizza", ResolvedChart::new(ChartKind::Pie)),
    ("linha", ResolvedChart::new(ChartKind::Line)),
    ("barra", ResolvedChart::bar(H)),
];

const FUNIL: KeywordTable = &[
    ("funil", ResolvedChart::new(ChartKind::Funnel)),
    ("pizza", ResolvedChart::new(ChartKind::Pie)),
    ("barra", ResolvedChart::bar(H)),
];

const COLUNAS: KeywordTable = &[
    ("pizza", ResolvedChart::new(ChartKind::Pie)),
    ("linha", ResolvedChart::new(ChartKind::Line)),
    ("horizontal", ResolvedChart::bar(H)),
    ("coluna", ResolvedChart::bar(V)),
    ("vertical", ResolvedChart::bar(V)),
];

const VENN: KeywordTable = &[
    ("pizza", ResolvedChart::new(ChartKind::Pie)),
    ("barra", ResolvedChart::bar(H)),
    ("venn", ResolvedChart::new(ChartKind::Venn)),
];

impl SlotContext {
    /// Tabela ordenada de palavras-chave; vence a primeira contida no seletor.
    pub fn keywords(self) -> KeywordTable {
        match self {
            SlotContext::Categoria => CATEGORIA,
            SlotContext::Funil => FUNIL,
            SlotContext::Colunas => COLUNAS,
            SlotContext::Venn => VENN,
        }
    }

    /// Resultado para seletor vazio ou desconhecido: sempre barras.
    pub fn default_chart(self) -> ResolvedChart {
        match self {
            SlotContext::Colunas => ResolvedChart::bar(V),
            _ => ResolvedChart::bar(H),
        }
    }

    /// Opções exibidas ao usuário para este slot.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            SlotContext::Categoria => &["Barra", "Linha", "Pizza"],
            SlotContext::Funil => &["Funil de atendimento", "Barras horizontais", "Pizza"],
            SlotContext::Colunas => &["Colunas (vertical)", "Barras horizontais", "Linha", "Pizza"],
            SlotContext::Venn => &["Venn (3 conjuntos)", "Barras (interseções)", "Pizza (interseções)"],
        }
    }
}

/// Converte o texto livre do seletor em tipo de gráfico, sem diferenciar caixa.
///
/// Os gráficos de categoria da primeira linha sempre desenham barras horizontais.
pub fn resolve_chart_type(selector: Option<&str>, context: SlotContext) -> ResolvedChart {
    let text = selector.unwrap_or("").trim().to_lowercase();
    let resolved = if text.is_empty() {
        context.default_chart()
    } else {
        context
            .keywords()
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, chart)| *chart)
            .unwrap_or_else(|| context.default_chart())
    };

    if context == SlotContext::Categoria && resolved.kind == ChartKind::Bar {
        return ResolvedChart::bar(H);
    }
    resolved
}
