use gamma_kernel::store::Source;
use gamma_stores::honorifics::{Honorific, HonorificsStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    /// Honorific value such as `DR`; see [`gamma_stores::honorifics`].
    #[serde(default)]
    pub honorific: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub honorific: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl Client {
    /// `Dr. Jane Doe`, or `Jane Doe` without an honorific.
    pub fn display_name<S>(&self, honorifics: &HonorificsStore<S>) -> String
    where
        S: Source<Item = Honorific>,
    {
        let name = format!("{} {}", self.first_name, self.last_name);
        match self.honorific.as_deref().filter(|h| !h.is_empty()) {
            Some(value) => format!("{} {name}", honorifics.label_for(value)),
            None => name,
        }
    }
}
