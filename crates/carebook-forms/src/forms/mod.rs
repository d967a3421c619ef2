pub mod burial_instructions;
pub mod caregiver_information;
pub mod insurance_policy_documents;
