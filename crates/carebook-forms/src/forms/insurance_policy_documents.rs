use carebook_core::mapping::ServerMapping;
use carebook_core::models::field::FieldDescriptor;

use crate::error::FormError;
use crate::FormSchema;

/// Insurance Policy Documents checklist.
/// The backend nests answers per policy, so this form maps them explicitly.
pub struct InsurancePolicyDocuments;

impl FormSchema for InsurancePolicyDocuments {
    fn slug(&self) -> &str {
        "insurance_policy_documents"
    }

    fn name(&self) -> &str {
        "Insurance Policy Documents"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::heading("health", "Health Coverage"),
                FieldDescriptor::checkbox("medicare", "Medicare").under("health"),
                FieldDescriptor::checkbox("medicare_card", "Medicare card copied")
                    .under("health")
                    .child_of("medicare"),
                FieldDescriptor::radio(
                    "medicare_supplement",
                    "Supplemental coverage",
                    &["Medigap", "Medicare Advantage", "None"],
                )
                .under("health")
                .child_of("medicare"),
                FieldDescriptor::checkbox("medicaid", "Medicaid").under("health"),
                FieldDescriptor::link("Eligibility rules: https://www.medicaid.gov/medicaid/eligibility")
                    .under("health")
                    .child_of("medicaid"),
                FieldDescriptor::heading("long_term", "Long-Term Care"),
                FieldDescriptor::checkbox("ltc_policy", "Long-term care policy").under("long_term"),
                FieldDescriptor::checkbox("ltc_elimination_met", "Elimination period met")
                    .under("long_term")
                    .child_of("ltc_policy"),
                FieldDescriptor::radio(
                    "ltc_benefit",
                    "Benefit type",
                    &["Reimbursement", "Indemnity", "Cash"],
                )
                .under("long_term")
                .child_of("ltc_policy"),
                FieldDescriptor::heading("life", "Life Insurance"),
                FieldDescriptor::checkbox("life_policy", "Life insurance policy").under("life"),
                FieldDescriptor::checkbox("beneficiary_current", "Beneficiary designation current")
                    .under("life")
                    .child_of("life_policy"),
                FieldDescriptor::checkbox("policy_location_known", "Policy location known")
                    .under("life")
                    .child_of("life_policy"),
            ]
        });
        &FIELDS
    }

    fn server_mapping(&self) -> Result<ServerMapping, FormError> {
        Ok(ServerMapping::from_pairs(&[
            ("medicare", "/health/medicare/enrolled"),
            ("medicare_card", "/health/medicare/cardCopied"),
            ("medicare_supplement", "/health/medicare/supplement"),
            ("medicaid", "/health/medicaid/enrolled"),
            ("ltc_policy", "/longTermCare/hasPolicy"),
            ("ltc_elimination_met", "/longTermCare/eliminationPeriodMet"),
            ("ltc_benefit", "/longTermCare/benefitType"),
            ("life_policy", "/life/hasPolicy"),
            ("beneficiary_current", "/life/beneficiaryCurrent"),
            ("policy_location_known", "/life/policyLocationKnown"),
        ])?)
    }
}
