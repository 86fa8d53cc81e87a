//! Wire shapes of the HR API's OData v2 JSON responses.

use serde::Deserialize;

/// `{ "d": { "results": [...] } }`. Missing levels decode as an empty set.
#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    #[serde(default = "ODataResults::default")]
    pub d: ODataResults<T>,
}

#[derive(Debug, Deserialize)]
pub struct ODataResults<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for ODataResults<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

impl<T> ODataCollection<T> {
    pub fn into_results(self) -> Vec<T> {
        self.d.results
    }
}

/// One `PerPhone` entity. Only the field the portal needs is decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneRecord {
    #[serde(rename = "personIdExternal")]
    pub person_id_external: Option<String>,
}
