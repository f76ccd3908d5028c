use serde::{Deserialize, Serialize};

use super::deserializers::de;

/// Rótulo usado no lugar de um campo vazio nas contagens.
pub const PLACEHOLDER: &str = "—";

/// Uma solicitação de serviço, como servida por `/dados.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub registro: String,
    #[serde(default, deserialize_with = "de::iso_date")]
    pub data_entrada: String,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub solicitante: String,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub endereco: String,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub zona: String,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub objeto: String,
    #[serde(default, deserialize_with = "de::lenient_quantidade")]
    pub quantidade: i64,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub mes: String,
    #[serde(default, deserialize_with = "de::lenient_text")]
    pub status: String,
}

/// Envelope do endpoint de registros: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct RecordEnvelope {
    #[serde(default)]
    pub data: Vec<Record>,
}

/// Campos pelos quais um gráfico pode agrupar os registros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Registro,
    DataEntrada,
    Solicitante,
    Endereco,
    Zona,
    Objeto,
    Quantidade,
    Mes,
    Status,
}

impl Record {
    /// Valor do campo como rótulo de categoria; texto vazio e quantidade zero viram "—".
    pub fn label(&self, field: Field) -> String {
        let text = match field {
            Field::Registro => self.registro.as_str(),
            Field::DataEntrada => self.data_entrada.as_str(),
            Field::Solicitante => self.solicitante.as_str(),
            Field::Endereco => self.endereco.as_str(),
            Field::Zona => self.zona.as_str(),
            Field::Objeto => self.objeto.as_str(),
            Field::Mes => self.mes.as_str(),
            Field::Status => self.status.as_str(),
            Field::Quantidade => {
                return if self.quantidade == 0 {
                    PLACEHOLDER.to_string()
                } else {
                    self.quantidade.to_string()
                };
            }
        };
        if text.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lenient_record() {
        let json = r#"{
            "registro": 1042,
            "data_entrada": "04/03/2025",
            "zona": "CENTRAL",
            "quantidade": "3,5",
            "mes": "MARÇO",
            "status": null
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.registro, "1042");
        assert_eq!(r.data_entrada, "2025-03-04");
        assert_eq!(r.quantidade, 3);
        assert_eq!(r.status, "");
        assert_eq!(r.solicitante, "");
    }

    #[test]
    fn test_envelope_without_data() {
        let env: RecordEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_label_placeholder() {
        let r = Record {
            zona: "SUL".into(),
            ..Record::default()
        };
        assert_eq!(r.label(Field::Zona), "SUL");
        assert_eq!(r.label(Field::Status), "—");
        assert_eq!(r.label(Field::Quantidade), "—");
    }
}
