use crate::chart::{resolve_chart_type, RenderBackend, ResolvedChart, Slot};
use crate::error::AppError;
use crate::state::AppState;

use super::painel::{aplicar, PainelResumo};

/// Opções oferecidas pelo seletor de tipo de gráfico de um slot.
pub fn vocabulario(slot_id: &str) -> Result<&'static [&'static str], AppError> {
    let slot: Slot = slot_id.parse()?;
    Ok(slot.context().vocabulary())
}

/// Resolve o texto do seletor de `slot_id` em tipo de gráfico e redesenha.
pub fn definir_tipo(
    state: &mut AppState,
    slot_id: &str,
    texto: &str,
    backend: &mut dyn RenderBackend,
) -> Result<PainelResumo, AppError> {
    let slot: Slot = slot_id.parse()?;
    let resolved: ResolvedChart = resolve_chart_type(Some(texto), slot.context());
    state.selecoes.tipos.insert(slot, resolved);
    aplicar(state, backend)
}
