use serde::Serialize;

use crate::analyzer::options::{default_venn_status, keep_if_offered};
use crate::analyzer::{filter_options, FilterCriteria, Kpis};
use crate::chart::{ChartSpec, RenderBackend, Slot};
use crate::error::AppError;
use crate::painel::build_painel;
use crate::source::{RecordOrigin, RecordSource};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PainelResumo {
    pub origem: RecordOrigin,
    pub kpis: Kpis,
    pub graficos: Vec<ChartSpec>,
    /// Slots efetivamente desenhados; slots sem contêiner ficam de fora.
    pub renderizados: Vec<Slot>,
}

/// Recalcula cada slot a partir dos registros e seleções atuais e
/// substitui cada gráfico desenhado.
pub fn aplicar(
    state: &mut AppState,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    let painel = build_painel(state.store.records(), &state.selecoes, &state.palette());

    let mut renderizados = Vec::with_capacity(painel.graficos.len());
    for spec in &painel.graficos {
        if state.registry.dispatch(backend, spec)? {
            renderizados.push(spec.slot);
        }
    }
    log::debug!(
        "Painel recalculado: {} registros filtrados, {} gráficos",
        painel.kpis.total,
        renderizados.len()
    );

    Ok(PainelResumo {
        origem: state.store.origin(),
        kpis: painel.kpis,
        graficos: painel.graficos,
        renderizados,
    })
}

/// Carrega os registros, atualiza as opções dos seletores e redesenha.
pub fn carregar(
    state: &mut AppState,
    source: &dyn RecordSource,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    state.store.load(source);
    let opcoes = filter_options(state.store.records());

    let filtros = std::mem::take(&mut state.selecoes.filtros);
    state.selecoes.filtros = FilterCriteria {
        zona: keep_if_offered(filtros.zona, &opcoes.zonas),
        mes: keep_if_offered(filtros.mes, &opcoes.meses),
        status: keep_if_offered(filtros.status, &opcoes.status),
    };

    let venn_b = keep_if_offered(state.selecoes.venn_b.take(), &opcoes.status);
    let venn_c = keep_if_offered(state.selecoes.venn_c.take(), &opcoes.status);
    state.selecoes.venn_b =
        venn_b.or_else(|| default_venn_status(&state.config.venn_status_b, &opcoes));
    state.selecoes.venn_c =
        venn_c.or_else(|| default_venn_status(&state.config.venn_status_c, &opcoes));

    state.opcoes = opcoes;
    aplicar(state, backend)
}

/// Limpa os três filtros e redesenha.
pub fn limpar(
    state: &mut AppState,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    state.selecoes.filtros = FilterCriteria::default();
    aplicar(state, backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::dispatcher::recording::RecordingBackend;
    use crate::config::DashboardConfig;
    use crate::parser::Record;

    struct Offline;

    impl RecordSource for Offline {
        fn fetch(&self) -> Result<Vec<Record>, AppError> {
            Err(AppError::Custom("sem rede".into()))
        }
    }

    struct Fixed(Vec<Record>);

    impl RecordSource for Fixed {
        fn fetch(&self) -> Result<Vec<Record>, AppError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_carregar_offline_uses_sample_and_venn_defaults() {
        let mut state = AppState::new(DashboardConfig::default());
        let mut backend = RecordingBackend::new();

        let resumo = carregar(&mut state, &Offline, &mut backend).unwrap();
        assert_eq!(resumo.origem, RecordOrigin::Amostra);
        assert_eq!(resumo.kpis.total, 8);
        assert_eq!(resumo.renderizados.len(), 6);
        assert_eq!(state.selecoes.venn_b.as_deref(), Some("CONCLUÍDO"));
        assert_eq!(state.selecoes.venn_c.as_deref(), Some("EM ANÁLISE"));
        assert_eq!(state.opcoes.zonas.len(), 4);
    }

    #[test]
    fn test_reload_drops_filters_no_longer_offered() {
        let mut state = AppState::new(DashboardConfig::default());
        let mut backend = RecordingBackend::new();
        carregar(&mut state, &Offline, &mut backend).unwrap();
        state.selecoes.filtros.zona = Some("OESTE".into());
        state.selecoes.filtros.status = Some("PENDENTE".into());

        let only_sul = Fixed(vec![Record {
            zona: "SUL".into(),
            status: "PENDENTE".into(),
            ..Record::default()
        }]);
        let resumo = carregar(&mut state, &only_sul, &mut backend).unwrap();
        assert_eq!(state.selecoes.filtros.zona, None);
        assert_eq!(state.selecoes.filtros.status.as_deref(), Some("PENDENTE"));
        assert_eq!(state.selecoes.venn_b, None);
        assert_eq!(resumo.kpis.total, 1);
        assert_eq!(backend.live_count(), 6);
    }

    #[test]
    fn test_limpar_resets_filters() {
        let mut state = AppState::new(DashboardConfig::default());
        let mut backend = RecordingBackend::new();
        carregar(&mut state, &Offline, &mut backend).unwrap();
        state.selecoes.filtros.zona = Some("CENTRAL".into());
        assert_eq!(aplicar(&mut state, &mut backend).unwrap().kpis.total, 4);

        let resumo = limpar(&mut state, &mut backend).unwrap();
        assert_eq!(resumo.kpis.total, 8);
        assert!(state.selecoes.filtros.is_empty());
    }

    #[test]
    fn test_repeated_apply_does_not_accumulate_charts() {
        let mut state = AppState::new(DashboardConfig::default());
        let mut backend = RecordingBackend::new();
        carregar(&mut state, &Offline, &mut backend).unwrap();
        for _ in 0..5 {
            aplicar(&mut state, &mut backend).unwrap();
        }
        assert_eq!(backend.live_count(), 6);
        assert_eq!(backend.journal.borrow().destroyed.len(), 30);
    }

    #[test]
    fn test_missing_containers_are_skipped() {
        let mut state = AppState::new(DashboardConfig::default());
        let mut backend = RecordingBackend::new();
        backend.missing.insert("chart_medidor");
        backend.missing.insert("chart_funil");

        let resumo = carregar(&mut state, &Offline, &mut backend).unwrap();
        assert_eq!(resumo.graficos.len(), 6);
        assert_eq!(
            resumo.renderizados,
            vec![Slot::Zona, Slot::Mes, Slot::Status, Slot::Colunas]
        );
    }
}
