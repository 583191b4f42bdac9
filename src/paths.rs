//! Fixed path segments of the Companies House REST API.

pub const COMPANY: &str = "company";
pub const OFFICERS: &str = "officers";
pub const REGISTERS: &str = "registers";
pub const CHARGES: &str = "charges";
pub const EXEMPTIONS: &str = "exemptions";
pub const FILING_HISTORY: &str = "filing-history";
pub const INSOLVENCY: &str = "insolvency";
pub const DISQUALIFIED_OFFICERS_CORPORATE: &str = "disqualified-officers/corporate";
pub const DISQUALIFIED_OFFICERS_NATURAL: &str = "disqualified-officers/natural";
pub const UK_ESTABLISHMENTS: &str = "uk-establishments";
pub const PSC: &str = "persons-with-significant-control";
pub const PSC_STATEMENTS: &str = "persons-with-significant-control-statements";
pub const SUPER_SECURE: &str = "super-secure";
pub const SUPER_SECURE_BENEFICIAL_OWNER: &str = "super-secure-beneficial-owner";
pub const LEGAL_PERSON: &str = "legal-person";
pub const LEGAL_PERSON_BENEFICIAL_OWNER: &str = "legal-person-beneficial-owner";
pub const INDIVIDUAL: &str = "individual";
pub const INDIVIDUAL_BENEFICIAL_OWNER: &str = "individual-beneficial-owner";
pub const CORPORATE_ENTITY: &str = "corporate-entity";
pub const CORPORATE_ENTITY_BENEFICIAL_OWNER: &str = "corporate-entity-beneficial-owner";
pub const APPOINTMENTS: &str = "appointments";
pub const ADVANCED_COMPANY_SEARCH: &str = "advanced-search/companies";
pub const SEARCH_ALL: &str = "search";
pub const SEARCH_COMPANIES: &str = "search/companies";
pub const SEARCH_OFFICERS: &str = "search/officers";
pub const SEARCH_DISQUALIFIED_OFFICERS: &str = "search/disqualified-officers";
pub const SEARCH_COMPANIES_ALPHABETICALLY: &str = "alphabetic-search/companies";
pub const SEARCH_DISSOLVED_COMPANIES: &str = "dissolved-search/companies";
