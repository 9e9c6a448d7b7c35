use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// Opaque identifier of a device.
///
/// Catalogs use either numbers or strings here; both are compared
/// through their textual form.
pub enum DeviceId {
    Number(Number),
    Text(String),
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceId::Number(number) => write_number(number, f),
            DeviceId::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
/// Year a device came out, written as `2007` or as free text like `"Q3 2001"`.
pub enum Year {
    Number(Number),
    Text(String),
}

impl Year {
    /// Whether there is anything to show for this year.
    pub fn is_empty(&self) -> bool {
        match self {
            Year::Number(number) => number.as_f64() == Some(0.0),
            Year::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(number) => write_number(number, f),
            Year::Text(text) => f.write_str(text),
        }
    }
}

/// Writes whole floats without a fractional part, so `2001.0` reads `2001`.
fn write_number(number: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            write!(f, "{}", value as i64)
        }
        _ => fmt::Display::fmt(number, f),
    }
}

/// Reads a piece of text. Numbers and booleans keep their JSON text form,
/// anything else is treated as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Some(value.to_string()),
        _ => None,
    })
}

/// Reads a `T`, treating a value of the wrong shape as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Reads a list of strings, treating anything that is not an array as absent.
///
/// Elements which are not strings are kept in their JSON text form.
pub(crate) fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => text,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_displays_like_the_source_text() {
        let year: Year = serde_json::from_str("1998").unwrap();
        assert_eq!(year.to_string(), "1998");

        let year: Year = serde_json::from_str("\"Q3 2001\"").unwrap();
        assert_eq!(year.to_string(), "Q3 2001");
    }

    #[test]
    fn whole_float_years_display_as_integers() {
        let year: Year = serde_json::from_str("2001.0").unwrap();
        assert_eq!(year.to_string(), "2001");

        let year: Year = serde_json::from_str("2007.5").unwrap();
        assert_eq!(year.to_string(), "2007.5");

        let id: DeviceId = serde_json::from_str("7.0").unwrap();
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn zero_and_blank_years_are_empty() {
        assert!(serde_json::from_str::<Year>("0").unwrap().is_empty());
        assert!(serde_json::from_str::<Year>("\"  \"").unwrap().is_empty());
        assert!(!serde_json::from_str::<Year>("2010").unwrap().is_empty());
    }

    #[test]
    fn numeric_and_text_ids_share_a_textual_form() {
        let numeric: DeviceId = serde_json::from_str("42").unwrap();
        let text: DeviceId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(numeric.to_string(), text.to_string());
    }
}
