use std::collections::BTreeMap;

use crate::form::BrandForm;

pub const BRAND_NAME_FIELD: &str = "brandName";
pub const BRAND_NAME_REQUIRED: &str = "Brand name is required";

/// Field name → error message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

/// Validate the form. Only the brand name is checked; entity names and URLs
/// are accepted as typed.
#[must_use]
pub fn validate(form: &BrandForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if form.brand_name.trim().is_empty() {
        errors.insert(BRAND_NAME_FIELD, BRAND_NAME_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Platform, SocialLinks};

    fn form_with_brand(name: &str) -> BrandForm {
        BrandForm {
            brand_name: name.to_string(),
            ..BrandForm::default()
        }
    }

    #[test]
    fn blank_brand_names_are_rejected() {
        for name in ["", " ", "\t\n", "   "] {
            let errors = validate(&form_with_brand(name));
            assert_eq!(
                errors.get(BRAND_NAME_FIELD),
                Some(BRAND_NAME_REQUIRED),
                "brand {name:?} should be rejected"
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn non_blank_brand_is_valid() {
        assert!(validate(&form_with_brand("Acme")).is_empty());
        assert!(validate(&form_with_brand("  Acme  ")).is_empty());
    }

    #[test]
    fn entity_contents_do_not_affect_validation() {
        let mut form = form_with_brand("Acme");
        form.influencers.add();
        let mut links = SocialLinks::default();
        links.set(Platform::Youtube, "not a url at all");
        form.competitors.push("", links);

        assert!(validate(&form).is_empty());
    }
}
