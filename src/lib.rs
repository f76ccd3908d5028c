pub mod analyzer;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod painel;
pub mod parser;
pub mod source;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use std::path::Path;

use config::load_config;
use source::HttpRecordSource;

/// Monta o estado do painel a partir do arquivo de configuração, carrega os
/// registros do endpoint configurado (ou a amostra embutida) e desenha cada slot.
pub fn run(
    config_path: &Path,
    backend: &mut dyn chart::RenderBackend,
) -> Result<(AppState, commands::PainelResumo), AppError> {
    let config = load_config(config_path)?;
    let source = HttpRecordSource::from_config(&config);
    let mut state = AppState::new(config);
    let resumo = commands::painel::carregar(&mut state, &source, backend)?;
    Ok((state, resumo))
}

// ─── E2E Integration Tests ──────────────────────────────────────────────────
