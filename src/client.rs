use reqwest::Client;
use serde_json::Value;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    paths,
};

type Query = Vec<(&'static str, String)>;

fn push_param<T: ToString>(query: &mut Query, name: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        query.push((name, value.to_string()));
    }
}

/// Optional parameters for paginated list endpoints.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub items_per_page: Option<u32>,
    pub start_index: Option<u32>,
}

impl PageOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "items_per_page", self.items_per_page.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        query
    }
}

/// Optional parameters for the company officer list.
#[derive(Debug, Clone, Default)]
pub struct OfficerListOptions {
    pub items_per_page: Option<u32>,
    /// Which officer type the registers view returns: `directors`,
    /// `secretaries` or `llp-members`. Only honoured when `register_view`
    /// is true.
    pub register_type: Option<String>,
    pub register_view: Option<bool>,
    pub start_index: Option<u32>,
    /// `appointed_on`, `resigned_on` or `surname`.
    pub order_by: Option<String>,
}

impl OfficerListOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "items_per_page", self.items_per_page.as_ref());
        push_param(&mut query, "register_type", self.register_type.as_ref());
        push_param(&mut query, "register_view", self.register_view.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        push_param(&mut query, "order_by", self.order_by.as_ref());
        query
    }
}

/// Optional parameters for the company filing history list.
#[derive(Debug, Clone, Default)]
pub struct FilingHistoryOptions {
    /// One or more comma-separated categories to filter by (inclusive).
    pub category: Option<String>,
    pub items_per_page: Option<u32>,
    pub start_index: Option<u32>,
}

impl FilingHistoryOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "category", self.category.as_ref());
        push_param(&mut query, "items_per_page", self.items_per_page.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        query
    }
}

/// Optional parameters for persons-with-significant-control lists.
#[derive(Debug, Clone, Default)]
pub struct PscListOptions {
    pub items_per_page: Option<u32>,
    pub start_index: Option<u32>,
    /// When the register is held at Companies House and this is true, only
    /// active or election-period PSCs are returned, with full dates of birth.
    pub register_view: Option<bool>,
}

impl PscListOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "items_per_page", self.items_per_page.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        push_param(&mut query, "register_view", self.register_view.as_ref());
        query
    }
}

/// Optional parameters for company search.
#[derive(Debug, Clone, Default)]
pub struct SearchCompaniesOptions {
    pub items_per_page: Option<u32>,
    pub start_index: Option<u32>,
    /// Space-separated restriction options, e.g.
    /// `active-companies legally-equivalent-company-name`.
    pub restrictions: Option<String>,
}

impl SearchCompaniesOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "items_per_page", self.items_per_page.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        push_param(&mut query, "restrictions", self.restrictions.as_ref());
        query
    }
}

/// Optional parameters for alphabetical company search.
#[derive(Debug, Clone, Default)]
pub struct AlphabeticalSearchOptions {
    /// `ordered_alpha_key_with_id` used for paging upwards.
    pub search_above: Option<String>,
    /// `ordered_alpha_key_with_id` used for paging downwards.
    pub search_below: Option<String>,
    /// Maximum number of results, 1 to 100.
    pub size: Option<u32>,
}

impl AlphabeticalSearchOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "search_above", self.search_above.as_ref());
        push_param(&mut query, "search_below", self.search_below.as_ref());
        push_param(&mut query, "size", self.size.as_ref());
        query
    }
}

/// Optional parameters for dissolved company search.
#[derive(Debug, Clone, Default)]
pub struct DissolvedSearchOptions {
    pub search_above: Option<String>,
    pub search_below: Option<String>,
    pub size: Option<u32>,
    /// Used by the `best-match` and `previous-name-dissolved` search types.
    pub start_index: Option<u32>,
}

impl DissolvedSearchOptions {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "search_above", self.search_above.as_ref());
        push_param(&mut query, "search_below", self.search_below.as_ref());
        push_param(&mut query, "size", self.size.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        query
    }
}

/// Filters for the advanced company search endpoint. All fields are
/// optional; comma-delimit multiple values where the API allows it.
#[derive(Debug, Clone, Default)]
pub struct AdvancedSearchFilters {
    pub company_name_includes: Option<String>,
    pub company_name_excludes: Option<String>,
    pub company_status: Option<String>,
    pub company_subtype: Option<String>,
    pub company_type: Option<String>,
    pub dissolved_from: Option<String>,
    pub dissolved_to: Option<String>,
    pub incorporated_from: Option<String>,
    pub incorporated_to: Option<String>,
    pub location: Option<String>,
    pub sic_codes: Option<String>,
    pub size: Option<u32>,
    pub start_index: Option<u32>,
}

impl AdvancedSearchFilters {
    fn query(&self) -> Query {
        let mut query = Query::new();
        push_param(&mut query, "company_name_includes", self.company_name_includes.as_ref());
        push_param(&mut query, "company_name_excludes", self.company_name_excludes.as_ref());
        push_param(&mut query, "company_status", self.company_status.as_ref());
        push_param(&mut query, "company_subtype", self.company_subtype.as_ref());
        push_param(&mut query, "company_type", self.company_type.as_ref());
        push_param(&mut query, "dissolved_from", self.dissolved_from.as_ref());
        push_param(&mut query, "dissolved_to", self.dissolved_to.as_ref());
        push_param(&mut query, "incorporated_from", self.incorporated_from.as_ref());
        push_param(&mut query, "incorporated_to", self.incorporated_to.as_ref());
        push_param(&mut query, "location", self.location.as_ref());
        push_param(&mut query, "sic_codes", self.sic_codes.as_ref());
        push_param(&mut query, "size", self.size.as_ref());
        push_param(&mut query, "start_index", self.start_index.as_ref());
        query
    }
}

/// Client for the Companies House REST API.
///
/// Each method is a stateless request/response round trip: it builds one
/// authenticated GET request, sends it, and returns the decoded JSON body
/// unmodified. Cloning is cheap and clones share the underlying HTTP
/// connection pool.
#[derive(Debug, Clone)]
pub struct CompaniesHouse {
    config: ClientConfig,
    http: Client,
}

impl CompaniesHouse {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client with a caller-supplied HTTP transport, e.g. one with
    /// a custom timeout.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, http })
    }

    /// Create a client from the process environment. See
    /// [`ClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Send a GET request for the given path segments and return the decoded
    /// body. All endpoint methods funnel through here.
    async fn get(&self, segments: &[&str], query: &Query) -> Result<Value> {
        let base = self.config.base_url()?;
        let mut url = base.trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }

        let mut request = self
            .http
            .get(&url)
            .basic_auth(&self.config.api_key, None::<&str>);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get the basic profile of a company.
    pub async fn company_profile(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number], &Query::new()).await
    }

    /// Get the registers information of a company.
    pub async fn company_registers(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::REGISTERS], &Query::new()).await
    }

    /// List the charges of a company.
    pub async fn company_charges(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::CHARGES], &Query::new()).await
    }

    /// Get a single charge of a company.
    pub async fn company_charge(&self, company_number: &str, charge_id: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::CHARGES, charge_id], &Query::new())
            .await
    }

    /// Get the filing history list of a company.
    pub async fn company_filing_history(
        &self,
        company_number: &str,
        options: &FilingHistoryOptions,
    ) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::FILING_HISTORY], &options.query())
            .await
    }

    /// Get a single filing history item of a company.
    pub async fn company_filing_history_item(
        &self,
        company_number: &str,
        transaction_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::FILING_HISTORY, transaction_id],
            &Query::new(),
        )
        .await
    }

    /// Get the insolvency information of a company.
    pub async fn company_insolvency(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::INSOLVENCY], &Query::new()).await
    }

    /// Get the exemptions information of a company.
    pub async fn company_exemptions(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::EXEMPTIONS], &Query::new()).await
    }

    /// List the UK establishments of a company.
    pub async fn company_uk_establishments(&self, company_number: &str) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::UK_ESTABLISHMENTS], &Query::new())
            .await
    }

    /// List the officers of a company.
    pub async fn company_officers(
        &self,
        company_number: &str,
        options: &OfficerListOptions,
    ) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::OFFICERS], &options.query()).await
    }

    /// Get a single officer appointment of a company.
    pub async fn company_officer_appointment(
        &self,
        company_number: &str,
        officer_id: &str,
        appointment_id: &str,
    ) -> Result<Value> {
        self.get(
            &[
                paths::COMPANY,
                company_number,
                paths::OFFICERS,
                officer_id,
                paths::APPOINTMENTS,
                appointment_id,
            ],
            &Query::new(),
        )
        .await
    }

    /// List the appointments of an officer.
    pub async fn officer_appointments(
        &self,
        officer_id: &str,
        options: &PageOptions,
    ) -> Result<Value> {
        self.get(&[paths::OFFICERS, officer_id, paths::APPOINTMENTS], &options.query()).await
    }

    /// Get the disqualifications of a corporate officer.
    pub async fn corporate_officer_disqualifications(&self, officer_id: &str) -> Result<Value> {
        self.get(&[paths::DISQUALIFIED_OFFICERS_CORPORATE, officer_id], &Query::new()).await
    }

    /// Get the disqualifications of a natural officer.
    pub async fn natural_officer_disqualifications(&self, officer_id: &str) -> Result<Value> {
        self.get(&[paths::DISQUALIFIED_OFFICERS_NATURAL, officer_id], &Query::new()).await
    }

    /// List the persons with significant control of a company.
    pub async fn persons_with_significant_control(
        &self,
        company_number: &str,
        options: &PscListOptions,
    ) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::PSC], &options.query()).await
    }

    /// List the persons-with-significant-control statements of a company.
    pub async fn persons_with_significant_control_statements(
        &self,
        company_number: &str,
        options: &PscListOptions,
    ) -> Result<Value> {
        self.get(&[paths::COMPANY, company_number, paths::PSC_STATEMENTS], &options.query())
            .await
    }

    /// Get a single person-with-significant-control statement.
    pub async fn person_with_significant_control_statement(
        &self,
        company_number: &str,
        statement_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::PSC_STATEMENTS, statement_id],
            &Query::new(),
        )
        .await
    }

    /// Get details of a super secure person with significant control.
    pub async fn super_secure_person_with_significant_control(
        &self,
        company_number: &str,
        super_secure_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::PSC, paths::SUPER_SECURE, super_secure_id],
            &Query::new(),
        )
        .await
    }

    /// Get details of a super secure beneficial owner.
    pub async fn super_secure_beneficial_owner(
        &self,
        company_number: &str,
        super_secure_id: &str,
    ) -> Result<Value> {
        self.get(
            &[
                paths::COMPANY,
                company_number,
                paths::PSC,
                paths::SUPER_SECURE_BENEFICIAL_OWNER,
                super_secure_id,
            ],
            &Query::new(),
        )
        .await
    }

    /// Get details of a legal person with significant control.
    pub async fn legal_person_with_significant_control(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::PSC, paths::LEGAL_PERSON, psc_id],
            &Query::new(),
        )
        .await
    }

    /// Get details of a legal person beneficial owner.
    pub async fn legal_person_beneficial_owner(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[
                paths::COMPANY,
                company_number,
                paths::PSC,
                paths::LEGAL_PERSON_BENEFICIAL_OWNER,
                psc_id,
            ],
            &Query::new(),
        )
        .await
    }

    /// Get details of an individual person with significant control.
    pub async fn individual_person_with_significant_control(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::PSC, paths::INDIVIDUAL, psc_id],
            &Query::new(),
        )
        .await
    }

    /// Get details of an individual beneficial owner.
    pub async fn individual_beneficial_owner(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[
                paths::COMPANY,
                company_number,
                paths::PSC,
                paths::INDIVIDUAL_BENEFICIAL_OWNER,
                psc_id,
            ],
            &Query::new(),
        )
        .await
    }

    /// Get details of a corporate entity with significant control.
    pub async fn corporate_entity_with_significant_control(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[paths::COMPANY, company_number, paths::PSC, paths::CORPORATE_ENTITY, psc_id],
            &Query::new(),
        )
        .await
    }

    /// Get details of a corporate entity beneficial owner.
    pub async fn corporate_entity_beneficial_owner(
        &self,
        company_number: &str,
        psc_id: &str,
    ) -> Result<Value> {
        self.get(
            &[
                paths::COMPANY,
                company_number,
                paths::PSC,
                paths::CORPORATE_ENTITY_BENEFICIAL_OWNER,
                psc_id,
            ],
            &Query::new(),
        )
        .await
    }

    /// Search companies, officers and disqualified officers in one query.
    pub async fn search_all(&self, q: &str, options: &PageOptions) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        self.get(&[paths::SEARCH_ALL], &query).await
    }

    /// Search company information.
    pub async fn search_companies(
        &self,
        q: &str,
        options: &SearchCompaniesOptions,
    ) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        self.get(&[paths::SEARCH_COMPANIES], &query).await
    }

    /// Search officer information.
    pub async fn search_officers(&self, q: &str, options: &PageOptions) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        self.get(&[paths::SEARCH_OFFICERS], &query).await
    }

    /// Search disqualified officer information.
    pub async fn search_disqualified_officers(
        &self,
        q: &str,
        options: &PageOptions,
    ) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        self.get(&[paths::SEARCH_DISQUALIFIED_OFFICERS], &query).await
    }

    /// Search for companies by name, ordered alphabetically.
    pub async fn search_companies_alphabetically(
        &self,
        q: &str,
        options: &AlphabeticalSearchOptions,
    ) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        self.get(&[paths::SEARCH_COMPANIES_ALPHABETICALLY], &query).await
    }

    /// Search for dissolved companies.
    ///
    /// `search_type` is one of `alphabetical`, `best-match` or
    /// `previous-name-dissolved`.
    pub async fn search_dissolved_companies(
        &self,
        q: &str,
        search_type: &str,
        options: &DissolvedSearchOptions,
    ) -> Result<Value> {
        let mut query = options.query();
        query.push(("q", q.to_string()));
        query.push(("search_type", search_type.to_string()));
        self.get(&[paths::SEARCH_DISSOLVED_COMPANIES], &query).await
    }

    /// Perform an advanced company search.
    pub async fn advanced_company_search(
        &self,
        filters: &AdvancedSearchFilters,
    ) -> Result<Value> {
        self.get(&[paths::ADVANCED_COMPANY_SEARCH], &filters.query()).await
    }
}

#[cfg(test)]
mod tests;
