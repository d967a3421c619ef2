use carebook_core::models::field::FieldDescriptor;

use crate::FormSchema;

/// Caregiver Information checklist.
pub struct CaregiverInformation;

impl FormSchema for CaregiverInformation {
    fn slug(&self) -> &str {
        "caregiver_information"
    }

    fn name(&self) -> &str {
        "Caregiver Information"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::heading("primary", "Primary Caregiver"),
                FieldDescriptor::radio(
                    "relationship",
                    "Relationship to care recipient",
                    &["Spouse", "Adult child", "Other relative", "Friend", "Paid caregiver"],
                )
                .under("primary"),
                FieldDescriptor::radio("lives_with", "Lives with care recipient", &["Yes", "No"])
                    .under("primary"),
                FieldDescriptor::radio(
                    "hours_per_week",
                    "Hours of care per week",
                    &["Under 10", "10-20", "21-40", "Over 40"],
                )
                .under("primary"),
                FieldDescriptor::group("employment", "Employment").under("primary"),
                FieldDescriptor::checkbox("employed", "Caregiver is employed")
                    .under("primary")
                    .child_of("employment"),
                FieldDescriptor::checkbox("fmla_requested", "Family and Medical Leave requested")
                    .under("primary")
                    .child_of("employed"),
                FieldDescriptor::link("FMLA overview: https://www.dol.gov/agencies/whd/fmla")
                    .under("primary")
                    .child_of("employed"),
                FieldDescriptor::heading("strain", "Caregiver Strain"),
                FieldDescriptor::checkbox("sleep_disrupted", "Sleep is disrupted").under("strain"),
                FieldDescriptor::checkbox("physical_strain", "Care is physically straining")
                    .under("strain"),
                FieldDescriptor::checkbox("financial_strain", "Financial strain").under("strain"),
                FieldDescriptor::checkbox("emotional_adjustment", "Emotional adjustments")
                    .under("strain"),
                FieldDescriptor::heading("support", "Support Services"),
                FieldDescriptor::group("respite", "Respite care").under("support"),
                FieldDescriptor::checkbox("respite_in_home", "In-home respite")
                    .under("support")
                    .child_of("respite"),
                FieldDescriptor::checkbox("respite_adult_day", "Adult day program")
                    .under("support")
                    .child_of("respite"),
                FieldDescriptor::checkbox("support_group", "Attends a support group")
                    .under("support"),
                FieldDescriptor::link(
                    "Find local services at https://eldercare.acl.gov or call 1-800-677-1116",
                )
                .under("support"),
            ]
        });
        &FIELDS
    }
}
