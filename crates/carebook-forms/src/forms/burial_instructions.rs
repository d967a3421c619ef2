use carebook_core::models::field::FieldDescriptor;

use crate::FormSchema;

/// Burial Instructions checklist.
/// Final arrangements, the people to notify and where the paperwork is kept.
pub struct BurialInstructions;

impl FormSchema for BurialInstructions {
    fn slug(&self) -> &str {
        "burial_instructions"
    }

    fn name(&self) -> &str {
        "Burial Instructions"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::heading("arrangements", "Final Arrangements"),
                FieldDescriptor::radio(
                    "disposition",
                    "Preferred disposition",
                    &["Burial", "Cremation", "Donation to science", "Undecided"],
                )
                .under("arrangements"),
                FieldDescriptor::group("funeral_home", "Funeral home").under("arrangements"),
                FieldDescriptor::checkbox("funeral_home_selected", "Funeral home selected")
                    .under("arrangements")
                    .child_of("funeral_home"),
                FieldDescriptor::checkbox("prepaid_contract", "Pre-paid contract in place")
                    .under("arrangements")
                    .child_of("funeral_home_selected"),
                FieldDescriptor::checkbox("contract_copy_on_file", "Copy of contract on file")
                    .under("arrangements")
                    .child_of("prepaid_contract"),
                FieldDescriptor::group("service", "Service").under("arrangements"),
                FieldDescriptor::radio(
                    "service_type",
                    "Type of service",
                    &["Religious", "Secular", "Graveside only", "No service"],
                )
                .under("arrangements")
                .child_of("service"),
                FieldDescriptor::checkbox("clergy_contacted", "Clergy or officiant contacted")
                    .under("arrangements")
                    .child_of("service"),
                FieldDescriptor::checkbox("obituary_drafted", "Obituary drafted")
                    .under("arrangements")
                    .child_of("service"),
                FieldDescriptor::checkbox("veteran", "Care recipient is a veteran")
                    .under("arrangements"),
                FieldDescriptor::link(
                    "Veterans burial benefits: https://www.va.gov/burials-memorials/",
                )
                .under("arrangements")
                .child_of("veteran"),
                FieldDescriptor::checkbox("dd214_located", "DD-214 discharge papers located")
                    .under("arrangements")
                    .child_of("veteran"),
                FieldDescriptor::heading("notifications", "People to Notify"),
                FieldDescriptor::checkbox("family_list", "Family contact list prepared")
                    .under("notifications"),
                FieldDescriptor::checkbox("employer_notified", "Employer or pension administrator")
                    .under("notifications"),
                FieldDescriptor::checkbox("ssa_notified", "Social Security Administration")
                    .under("notifications"),
                FieldDescriptor::link("Report a death: https://www.ssa.gov/benefits/survivors/")
                    .under("notifications")
                    .child_of("ssa_notified"),
                FieldDescriptor::heading("documents", "Documents"),
                FieldDescriptor::group("vital_records", "Vital records").under("documents"),
                FieldDescriptor::checkbox("birth_certificate", "Birth certificate")
                    .under("documents")
                    .child_of("vital_records"),
                FieldDescriptor::checkbox("marriage_certificate", "Marriage certificate")
                    .under("documents")
                    .child_of("vital_records"),
                FieldDescriptor::radio(
                    "will_location",
                    "Location of will",
                    &["Attorney", "Safe deposit box", "Home", "No will"],
                )
                .under("documents"),
                FieldDescriptor::checkbox("cemetery_deed", "Cemetery plot deed")
                    .under("documents"),
            ]
        });
        &FIELDS
    }
}
