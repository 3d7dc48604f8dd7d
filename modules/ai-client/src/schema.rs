use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Trait for types that can be requested as Gemini structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a `responseSchema` accepted by the Gemini API.
    ///
    /// Gemini takes an OpenAPI 3.0 subset:
    /// 1. upper-case type names (`STRING`, `ARRAY`, `OBJECT`)
    /// 2. `nullable: true` instead of `["string", "null"]` type unions
    /// 3. no `$schema`, `title`, `definitions` or `additionalProperties` keys
    /// 4. fully inlined schemas (no `$ref` references)
    fn gemini_schema() -> Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        let definitions = value.get("definitions").cloned();
        if let Some(defs) = definitions {
            inline_refs(&mut value, &defs);
        }
        to_openapi_subset(&mut value);

        value
    }

    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

const UNSUPPORTED_KEYS: &[&str] = &[
    "$schema",
    "title",
    "definitions",
    "additionalProperties",
    "default",
];

fn to_openapi_subset(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in UNSUPPORTED_KEYS {
                map.remove(*key);
            }
            normalize_type(map);
            for (key, v) in map.iter_mut() {
                match (key.as_str(), v) {
                    // Property names are data, not schema keywords.
                    ("properties", Value::Object(props)) => {
                        for prop in props.values_mut() {
                            to_openapi_subset(prop);
                        }
                    }
                    (_, v) => to_openapi_subset(v),
                }
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                to_openapi_subset(item);
            }
        }
        _ => {}
    }
}

fn normalize_type(map: &mut Map<String, Value>) {
    let Some(ty) = map.get("type").cloned() else {
        return;
    };

    match ty {
        Value::String(name) => {
            map.insert("type".to_string(), Value::String(name.to_uppercase()));
        }
        Value::Array(names) => {
            let non_null: Vec<&str> = names
                .iter()
                .filter_map(|n| n.as_str())
                .filter(|n| *n != "null")
                .collect();
            if non_null.len() < names.len() {
                map.insert("nullable".to_string(), Value::Bool(true));
            }
            if let Some(first) = non_null.first() {
                map.insert("type".to_string(), Value::String(first.to_uppercase()));
            } else {
                map.remove("type");
            }
        }
        _ => {}
    }
}

fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(type_name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        inline_refs(value, definitions);
                        return;
                    }
                }
            }

            if let Some(Value::Array(all_of)) = map.get("allOf").cloned() {
                if let [single] = all_of.as_slice() {
                    *value = single.clone();
                    inline_refs(value, definitions);
                    return;
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}
