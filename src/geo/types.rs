use serde::Deserialize;

/// First-level administrative region (a Brazilian state, "UF").
///
/// `code` is the short unique identifier used both as the selection key and
/// as the lookup parameter for municipalities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subdivision {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub code: String,
}

/// Second-level administrative region. `id` is only meaningful within the
/// result set of its owning subdivision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Municipality {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
}

impl Subdivision {
    pub fn new(id: u32, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
        }
    }
}

impl Municipality {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
