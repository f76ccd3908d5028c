pub mod config;
pub mod filtros;
pub mod graficos;
pub mod painel;

pub use painel::PainelResumo;
