use std::collections::BTreeMap;

use super::spec::{ChartSpec, Slot};
use crate::error::AppError;

/// Gráfico desenhado pelo backend. Deve ser destruído antes de redesenhar o slot.
pub trait RenderHandle {
    fn destroy(&mut self);
}

/// Renderizador externo (página Chart.js, terminal, gerador de imagens...).
pub trait RenderBackend {
    /// Se a página tem um destino para este contêiner.
    fn has_container(&self, container_id: &str) -> bool;

    fn render(
        &mut self,
        container_id: &str,
        spec: &ChartSpec,
    ) -> Result<Box<dyn RenderHandle>, AppError>;
}

/// Gráficos vivos, no máximo um por slot.
#[derive(Default)]
pub struct ChartRegistry {
    handles: BTreeMap<Slot, Box<dyn RenderHandle>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Envia `spec` ao backend, destruindo antes o gráfico anterior do slot.
    ///
    /// Retorna `Ok(false)` quando o backend não tem contêiner para o slot: o
    /// slot é ignorado e o gráfico atual, se houver, fica como está.
    pub fn dispatch(
        &mut self,
        backend: &mut dyn RenderBackend,
        spec: &ChartSpec,
    ) -> Result<bool, AppError> {
        let container_id = spec.slot.container_id();
        if !backend.has_container(container_id) {
            log::debug!("Contêiner {} ausente, gráfico ignorado", container_id);
            return Ok(false);
        }

        self.release(spec.slot);
        let handle = backend.render(container_id, spec)?;
        self.handles.insert(spec.slot, handle);
        Ok(true)
    }

    pub fn release(&mut self, slot: Slot) -> bool {
        match self.handles.remove(&slot) {
            Some(mut handle) => {
                handle.destroy();
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        while let Some((_, mut handle)) = self.handles.pop_first() {
            handle.destroy();
        }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.handles.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for ChartRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
