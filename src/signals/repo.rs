//! Visão tipada de um item da listagem de repositórios.

use serde_json::Value;

/// Campos de um repositório relevantes para a avaliação.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoSummary {
    /// Nome do repositório.
    pub name: Option<String>,

    /// Estrelas.
    pub stars: u64,

    /// Linguagem principal.
    pub language: Option<String>,

    /// Tem descrição não vazia.
    pub has_description: bool,

    /// Tem licença declarada.
    pub has_license: bool,
}

impl RepoSummary {
    /// Converte um item JSON. Itens que não são objetos retornam `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        Some(Self {
            name: non_empty_str(obj.get("name")),
            stars: obj.get("stargazers_count").map(count).unwrap_or(0),
            language: non_empty_str(obj.get("language")),
            has_description: non_empty_str(obj.get("description")).is_some(),
            has_license: obj.get("license").is_some_and(is_present),
        })
    }

    /// Descrição e licença presentes.
    pub fn is_complete(&self) -> bool {
        self.has_description && self.has_license
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Contagem não negativa; floats são truncados, o resto vale zero.
fn count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
        .unwrap_or(0)
}

/// `license` vem como objeto (ou `null`); aceita também string não vazia.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}
