//! Generated operations for The Companies API.
//!
//! This module is generated from the OpenAPI schema; do not edit by hand.
//! It supplies the default operations table consumed by the dispatcher —
//! per logical operation name, the path template, HTTP method and the
//! parameter names that belong in the path.

use once_cell::sync::Lazy;

use crate::operations::{Operation, OperationsMap};

macro_rules! op {
    ($map:expr, $name:literal, $method:literal, $path:literal) => {
        $map.insert(
            $name,
            Operation {
                path: $path,
                method: $method,
                path_params: &[],
            },
        );
    };
    ($map:expr, $name:literal, $method:literal, $path:literal, [$($param:literal),+]) => {
        $map.insert(
            $name,
            Operation {
                path: $path,
                method: $method,
                path_params: &[$($param),+],
            },
        );
    };
}

static OPERATIONS: Lazy<OperationsMap> = Lazy::new(|| {
    let mut map = OperationsMap::new();

    // Health
    op!(map, "fetchApiHealth", "GET", "/");

    // Companies
    op!(map, "searchCompanies", "GET", "/v2/companies");
    op!(map, "searchCompaniesPost", "POST", "/v2/companies");
    op!(map, "countCompanies", "GET", "/v2/companies/count");
    op!(map, "countCompaniesPost", "POST", "/v2/companies/count");
    op!(map, "searchCompaniesByName", "GET", "/v2/companies/by-name");
    op!(map, "searchCompaniesByPrompt", "POST", "/v2/companies/by-prompt");
    op!(map, "searchSimilarCompanies", "GET", "/v2/companies/similar");
    op!(map, "fetchCompany", "GET", "/v2/companies/{domain}", ["domain"]);
    op!(map, "fetchCompanyByEmail", "GET", "/v2/companies/by-email/{email}", ["email"]);
    op!(map, "fetchCompanyBySocial", "GET", "/v2/companies/by-social/{social}", ["social"]);
    op!(map, "fetchCompanyEmailPatterns", "GET", "/v2/companies/{domain}/email-patterns", ["domain"]);
    op!(map, "askCompany", "POST", "/v2/companies/{domain}/ask", ["domain"]);
    op!(map, "fetchCompanyContext", "GET", "/v2/companies/{domain}/context", ["domain"]);
    op!(map, "fetchCompanyAnalytics", "GET", "/v2/companies/analytics");
    op!(map, "exportCompaniesAnalytics", "POST", "/v2/companies/analytics/export");

    // Industries and technologies
    op!(map, "fetchIndustries", "GET", "/v2/industries");
    op!(map, "searchIndustriesSimilar", "GET", "/v2/industries/similar");
    op!(map, "fetchTechnologies", "GET", "/v2/technologies");

    // Locations and job titles
    op!(map, "fetchCities", "GET", "/v2/locations/cities");
    op!(map, "fetchCounties", "GET", "/v2/locations/counties");
    op!(map, "fetchStates", "GET", "/v2/locations/states");
    op!(map, "fetchCountries", "GET", "/v2/locations/countries");
    op!(map, "fetchContinents", "GET", "/v2/locations/continents");
    op!(map, "enrichJobTitles", "GET", "/v2/job-titles/enrich");

    // Lists
    op!(map, "fetchLists", "GET", "/v2/lists");
    op!(map, "createList", "POST", "/v2/lists");
    op!(map, "fetchList", "GET", "/v2/lists/{listId}", ["listId"]);
    op!(map, "updateList", "PUT", "/v2/lists/{listId}", ["listId"]);
    op!(map, "deleteList", "DELETE", "/v2/lists/{listId}", ["listId"]);
    op!(map, "fetchCompaniesInList", "GET", "/v2/lists/{listId}/companies", ["listId"]);
    op!(map, "toggleCompaniesInList", "PATCH", "/v2/lists/{listId}/companies/toggle", ["listId"]);

    // Teams
    op!(map, "fetchTeam", "GET", "/v2/team");
    op!(map, "updateTeamMember", "PUT", "/v2/team/{teamMemberId}", ["teamMemberId"]);

    // Actions
    op!(map, "fetchActions", "GET", "/v2/actions");
    op!(map, "requestAction", "POST", "/v2/actions/request");
    op!(map, "retryAction", "PUT", "/v2/actions/{actionId}/retry", ["actionId"]);

    // User
    op!(map, "fetchUser", "GET", "/v2/user");

    map
});

/// The default operations table, keyed by operation name.
pub fn operations_map() -> &'static OperationsMap {
    &OPERATIONS
}
