use chrono::NaiveDate;

const ISO_DATE_FMT: &str = "%Y-%m-%d";
const BR_DATE_FMT: &str = "%d/%m/%Y";

/// Converte uma data de entrada em NaiveDate.
/// Aceita "YYYY-MM-DD", "DD/MM/YYYY" e data-hora ISO ("2025-03-04T10:00:00").
/// Retorna None para texto vazio ou ilegível.
pub fn parse_data_entrada(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FMT) {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, BR_DATE_FMT) {
        return Some(d);
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, ISO_DATE_FMT).ok())
}

/// Converte uma quantidade que pode usar vírgula decimal ("3,7" → 3). A fração é truncada.
pub fn parse_quantidade(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}

/// Desserializadores para `#[serde(deserialize_with = "de::...")]`.
pub mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{parse_data_entrada, parse_quantidade, ISO_DATE_FMT};

    fn value_to_text(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    /// "CENTRAL" → "CENTRAL", 42 → "42", null → ""
    pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_text(value))
    }

    /// 12 → 12, 12.9 → 12, "3,5" → 3, null / "abc" → 0
    pub fn lenient_quantidade<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Value::String(s) => parse_quantidade(s),
            _ => None,
        };
        Ok(parsed.unwrap_or(0))
    }

    /// "04/03/2025" → "2025-03-04", "2025-03-04T08:00:00" → "2025-03-04", "ontem" → ""
    pub fn iso_date<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let text = value_to_text(value);
        Ok(parse_data_entrada(&text)
            .map(|d| d.format(ISO_DATE_FMT).to_string())
            .unwrap_or_default())
    }
}
