use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const ENV_DADOS_URL: &str = "SUTRAM_DADOS_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub dados_url: String,
    pub timeout_segundos: u64,
    pub saturacao: u8,
    pub luminosidade: u8,
    pub escurecimento_borda: u8,
    pub venn_status_b: String,
    pub venn_status_c: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            dados_url: "http://127.0.0.1:5000/dados.json".into(),
            timeout_segundos: 10,
            saturacao: 60,
            luminosidade: 65,
            escurecimento_borda: 20,
            venn_status_b: "CONCLUÍDO".into(),
            venn_status_c: "EM ANÁLISE".into(),
        }
    }
}

/// Lê a configuração de um arquivo com um objeto JSON.
///
/// Arquivo ausente dá os valores padrão. Chaves desconhecidas são ignoradas e
/// um valor de formato errado mantém o padrão da chave. `SUTRAM_DADOS_URL`
/// substitui `dadosUrl` quando definida.
pub fn load_config(path: &Path) -> Result<DashboardConfig, AppError> {
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        config_from_value(&value)
    } else {
        DashboardConfig::default()
    };

    if let Ok(url) = std::env::var(ENV_DADOS_URL) {
        if !url.trim().is_empty() {
            config.dados_url = url.trim().to_string();
        }
    }

    log::info!("Configuração carregada (fonte: {})", config.dados_url);
    Ok(config)
}

pub fn config_from_value(value: &Value) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    let Some(map) = value.as_object() else {
        return config;
    };

    for (key, value) in map {
        match key.as_str() {
            "dadosUrl" => {
                if let Some(v) = value.as_str() {
                    config.dados_url = v.to_string();
                }
            }
            "timeoutSegundos" => {
                config.timeout_segundos = value.as_u64().unwrap_or(config.timeout_segundos)
            }
            "saturacao" => config.saturacao = percent(value).unwrap_or(config.saturacao),
            "luminosidade" => config.luminosidade = percent(value).unwrap_or(config.luminosidade),
            "escurecimentoBorda" => {
                config.escurecimento_borda = percent(value).unwrap_or(config.escurecimento_borda)
            }
            "vennStatusB" => {
                if let Some(v) = value.as_str() {
                    config.venn_status_b = v.to_string();
                }
            }
            "vennStatusC" => {
                if let Some(v) = value.as_str() {
                    config.venn_status_c = v.to_string();
                }
            }
            _ => {}
        }
    }

    config
}

fn percent(value: &Value) -> Option<u8> {
    value.as_u64().filter(|v| *v <= 100).map(|v| v as u8)
}

pub fn save_config(path: &Path, config: &DashboardConfig) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}
