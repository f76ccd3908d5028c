use std::path::Path;

use crate::config::{save_config, DashboardConfig};
use crate::error::AppError;
use crate::state::AppState;

pub fn get_config(state: &AppState) -> DashboardConfig {
    state.config.clone()
}

/// Substitui a configuração e a grava em `path`. Os gráficos usam a nova
/// paleta na próxima recomputação.
pub fn update_config(
    state: &mut AppState,
    config: DashboardConfig,
    path: &Path,
) -> Result<(), AppError> {
    save_config(path, &config)?;
    state.config = config;
    Ok(())
}
