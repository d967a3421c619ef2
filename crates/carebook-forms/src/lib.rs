//! carebook-forms
//!
//! Checklist form definitions. Pure data: each form is an ordered list of
//! field descriptors plus the table that locates its answers in the server
//! payload.

pub mod error;
pub mod forms;
pub mod values;

use carebook_core::mapping::ServerMapping;
use carebook_core::models::field::FieldDescriptor;
use carebook_core::models::value::ValueMap;
use carebook_core::validation::{validate_schema, SchemaIssue};

use error::FormError;
use values::ValueIssue;

/// Trait implemented by each bundled checklist form.
pub trait FormSchema: Send + Sync {
    /// URL slug used by the backend (e.g. "burial_instructions").
    fn slug(&self) -> &str;

    /// Human-readable name (e.g. "Burial Instructions").
    fn name(&self) -> &str;

    /// Field descriptors in display order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Where each answer lives in the server payload. Defaults to a flat
    /// object keyed by field id.
    fn server_mapping(&self) -> Result<ServerMapping, FormError> {
        Ok(ServerMapping::identity(self.fields()))
    }

    fn validate(&self) -> Vec<SchemaIssue> {
        validate_schema(self.fields())
    }

    /// Check a set of answers against this form's fields.
    fn validate_values(&self, values: &ValueMap) -> Vec<ValueIssue> {
        values::validate_values(self.slug(), self.fields(), values)
    }

    /// Like [`validate_values`](Self::validate_values), failing on the first issue.
    fn ensure_values(&self, values: &ValueMap) -> Result<(), FormError> {
        match self.validate_values(values).into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}

/// Return all registered forms.
pub fn all_forms() -> Vec<Box<dyn FormSchema>> {
    vec![
        Box::new(forms::burial_instructions::BurialInstructions),
        Box::new(forms::caregiver_information::CaregiverInformation),
        Box::new(forms::insurance_policy_documents::InsurancePolicyDocuments),
    ]
}

/// Look up a form by slug.
pub fn get_form(slug: &str) -> Result<Box<dyn FormSchema>, FormError> {
    all_forms()
        .into_iter()
        .find(|f| f.slug() == slug)
        .ok_or_else(|| FormError::UnknownForm(slug.to_string()))
}
