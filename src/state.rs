use std::collections::BTreeMap;

use crate::analyzer::{FilterCriteria, FilterOptions};
use crate::chart::{resolve_chart_type, ChartRegistry, PaletteSettings, ResolvedChart, Slot};
use crate::config::DashboardConfig;
use crate::source::RecordStore;

/// Escolhas atuais do usuário. Os tipos de gráfico ficam guardados já resolvidos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selecoes {
    pub filtros: FilterCriteria,
    pub tipos: BTreeMap<Slot, ResolvedChart>,
    pub venn_b: Option<String>,
    pub venn_c: Option<String>,
}

impl Selecoes {
    pub fn chart(&self, slot: Slot) -> ResolvedChart {
        self.tipos
            .get(&slot)
            .copied()
            .unwrap_or_else(|| resolve_chart_type(None, slot.context()))
    }
}

/// Todo o estado mutável do painel, de posse da única thread de eventos.
pub struct AppState {
    pub config: DashboardConfig,
    pub store: RecordStore,
    pub opcoes: FilterOptions,
    pub selecoes: Selecoes,
    pub registry: ChartRegistry,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        AppState {
            config,
            store: RecordStore::default(),
            opcoes: FilterOptions::default(),
            selecoes: Selecoes::default(),
            registry: ChartRegistry::new(),
        }
    }

    pub fn palette(&self) -> PaletteSettings {
        PaletteSettings::from(&self.config)
    }
}
