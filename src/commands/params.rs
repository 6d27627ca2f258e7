use serde_json::Value;

use super::{InvalidParameter, ParamKind, ParamSpec};

pub(crate) fn get_optional_i64(params: &Value, key: &str, default: i64) -> i64 {
    params.get(key).and_then(Value::as_i64).unwrap_or(default)
}

impl ParamSpec {
    pub fn integer(name: &str, description: &str, min: i64, max: i64, default: i64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: false,
            kind: ParamKind::Integer,
            min,
            max,
            default,
        }
    }

    pub fn odd_integer(name: &str, description: &str, min: i64, max: i64, default: i64) -> Self {
        Self {
            kind: ParamKind::OddInteger,
            ..Self::integer(name, description, min, max, default)
        }
    }

    /// Reads this parameter from a JSON object, silently applying the
    /// range and parity rules.
    pub fn read(&self, params: &Value) -> i64 {
        let (value, _) = self.normalize(get_optional_i64(params, &self.name, self.default));
        value
    }

    /// Interprets free-form prompt input.
    ///
    /// Unparseable text yields the default; anything else is clamped to
    /// `[min, max]` and bumped to odd when required. The returned warning
    /// describes the first adjustment made.
    pub fn resolve_text(&self, input: &str) -> (i64, Option<InvalidParameter>) {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => self.normalize(value),
            Err(_) => (
                self.default,
                Some(InvalidParameter::NotNumeric {
                    name: self.name.clone(),
                    input: trimmed.to_string(),
                    fallback: self.default,
                }),
            ),
        }
    }

    fn normalize(&self, value: i64) -> (i64, Option<InvalidParameter>) {
        let clamped = value.clamp(self.min, self.max);
        let mut warning = (clamped != value).then(|| InvalidParameter::OutOfRange {
            name: self.name.clone(),
            value,
            min: self.min,
            max: self.max,
            clamped,
        });

        if self.kind == ParamKind::OddInteger && clamped % 2 == 0 {
            let adjusted = if clamped < self.max {
                clamped + 1
            } else {
                clamped - 1
            };
            if warning.is_none() {
                warning = Some(InvalidParameter::EvenKernel {
                    name: self.name.clone(),
                    value: clamped,
                    adjusted,
                });
            }
            return (adjusted, warning);
        }
        (clamped, warning)
    }
}
