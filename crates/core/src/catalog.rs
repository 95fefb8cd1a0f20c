use serde::Deserialize;
use thiserror::Error;

/// Externalized message templates. The engine itself is language-agnostic;
/// the wording of its replies comes entirely from this catalog, so deployments
/// can swap phrasing without touching comparison logic.
///
/// Templates use three placeholders: `{label}`, `{delta}`, `{unit}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageCatalog {
    /// Two-item verdict, e.g. `500mlの方が90mlオトク`.
    pub advantage_two: String,
    /// Leading clause for one or three-plus items, e.g. `500mlが一番オトク`.
    pub advantage_many: String,
    /// Appended once per losing item, e.g. `、350mlは3.0ml損`.
    pub loss_clause: String,
    /// User-visible reply when the engine returns an error.
    pub fallback: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("template `{template}` is missing required placeholder `{placeholder}`")]
    MissingPlaceholder { template: &'static str, placeholder: &'static str },
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            advantage_two: "{label}の方が{delta}{unit}オトク".to_string(),
            advantage_many: "{label}が一番オトク".to_string(),
            loss_clause: "、{label}は{delta}{unit}損".to_string(),
            fallback: "エラー".to_string(),
        }
    }
}

impl MessageCatalog {
    pub fn render_advantage_two(&self, label: &str, delta: &str, unit: &str) -> String {
        render(&self.advantage_two, label, delta, unit)
    }

    pub fn render_advantage_many(&self, label: &str) -> String {
        render(&self.advantage_many, label, "", "")
    }

    pub fn render_loss_clause(&self, label: &str, delta: &str, unit: &str) -> String {
        render(&self.loss_clause, label, delta, unit)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        require(&self.advantage_two, "advantage_two", "{label}")?;
        require(&self.advantage_two, "advantage_two", "{delta}")?;
        require(&self.advantage_many, "advantage_many", "{label}")?;
        require(&self.loss_clause, "loss_clause", "{label}")?;
        require(&self.loss_clause, "loss_clause", "{delta}")?;
        Ok(())
    }
}

fn render(template: &str, label: &str, delta: &str, unit: &str) -> String {
    template.replace("{label}", label).replace("{delta}", delta).replace("{unit}", unit)
}

fn require(
    template: &str,
    name: &'static str,
    placeholder: &'static str,
) -> Result<(), CatalogError> {
    if template.contains(placeholder) {
        Ok(())
    } else {
        Err(CatalogError::MissingPlaceholder { template: name, placeholder })
    }
}
