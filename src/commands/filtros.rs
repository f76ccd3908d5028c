use crate::analyzer::{FilterCriteria, FilterOptions};
use crate::chart::RenderBackend;
use crate::error::AppError;
use crate::state::AppState;

use super::painel::{aplicar, PainelResumo};

/// Valores chegam exatamente como oferecidos em `opcoes`; só "" vira `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn opcoes(state: &AppState) -> FilterOptions {
    state.opcoes.clone()
}

pub fn definir_filtros(
    state: &mut AppState,
    filtros: FilterCriteria,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    state.selecoes.filtros = FilterCriteria {
        zona: non_empty(filtros.zona),
        mes: non_empty(filtros.mes),
        status: non_empty(filtros.status),
    };
    aplicar(state, backend)
}

/// Escolhe os status dos conjuntos B e C do Venn; vazio significa ausente.
pub fn definir_venn(
    state: &mut AppState,
    status_b: Option<String>,
    status_c: Option<String>,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    state.selecoes.venn_b = non_empty(status_b);
    state.selecoes.venn_c = non_empty(status_c);
    aplicar(state, backend)
}
