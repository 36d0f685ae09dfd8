//! Data models for the catalog.

/// A product row from the catalog file.
///
/// Fields are whatever the file's header row declares, kept as text in file
/// order. No schema is enforced: columns the renderer doesn't know about pass
/// through untouched, and a row may omit trailing columns.
#[derive(Debug, Clone, Default)]
pub struct Product {
    fields: Vec<(String, String)>,
}

impl Product {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Get a field's value by header name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Product display name.
    pub fn name(&self) -> &str {
        self.get("Name").unwrap_or_default()
    }

    /// Product image URL.
    pub fn image(&self) -> &str {
        self.get("Image").unwrap_or_default()
    }

    /// Stock-keeping unit.
    pub fn sku(&self) -> &str {
        self.get("SKU").unwrap_or_default()
    }

    /// Display model: `Model`, falling back to `Model Number` when `Model` is
    /// absent or empty.
    pub fn model(&self) -> &str {
        match self.get("Model") {
            Some(model) if !model.is_empty() => model,
            _ => self.model_number(),
        }
    }

    /// The serial the claim flow submits. Always the `Model Number` column.
    pub fn model_number(&self) -> &str {
        self.get("Model Number").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(fields: &[(&str, &str)]) -> Product {
        Product::new(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_model_prefers_model_field() {
        let p = product(&[("Model", "LP-100"), ("Model Number", "20231003-005-001")]);
        assert_eq!(p.model(), "LP-100");
    }

    #[test]
    fn test_model_falls_back_when_absent() {
        let p = product(&[("Model Number", "20231003-005-001")]);
        assert_eq!(p.model(), "20231003-005-001");
    }

    #[test]
    fn test_model_falls_back_when_empty() {
        let p = product(&[("Model", ""), ("Model Number", "20231003-005-001")]);
        assert_eq!(p.model(), "20231003-005-001");
    }

    #[test]
    fn test_unknown_fields_default_to_empty() {
        let p = product(&[]);
        assert_eq!(p.name(), "");
        assert_eq!(p.image(), "");
        assert_eq!(p.sku(), "");
        assert_eq!(p.model(), "");
    }
}
