//! Endpoint selection for the directory screens. The backend exposes a plain
//! listing endpoint with path-segment paging and a separate search endpoint
//! with query parameters; which one a fetch hits depends only on whether a
//! search term is committed.

use crate::features::listing::state::ListQuery;

/// Endpoint pair for one record type.
pub(crate) struct ListEndpoints {
    /// Listing endpoint, paged as `{list}/{page}/{limit}`.
    pub list: &'static str,
    /// Search endpoint, parameterized as `?search=&page=&limit=`.
    pub search: &'static str,
}

/// A resolved request: path plus query parameters.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ApiCall {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl ListEndpoints {
    /// Chooses the listing or search endpoint for the given query.
    pub fn call(&self, query: &ListQuery) -> ApiCall {
        match &query.search {
            None => ApiCall {
                path: format!("{}/{}/{}", self.list, query.page, query.limit),
                params: Vec::new(),
            },
            Some(term) => ApiCall {
                path: self.search.to_string(),
                params: vec![
                    ("search", term.clone()),
                    ("page", query.page.to_string()),
                    ("limit", query.limit.to_string()),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListEndpoints;
    use crate::features::listing::state::ListQuery;

    const ENDPOINTS: ListEndpoints = ListEndpoints {
        list: "/admin/getusers",
        search: "/admin/searchuser",
    };

    #[test]
    fn plain_listing_uses_path_segments() {
        let call = ENDPOINTS.call(&ListQuery {
            page: 2,
            limit: 10,
            search: None,
        });

        assert_eq!(call.path, "/admin/getusers/2/10");
        assert!(call.params.is_empty());
    }

    #[test]
    fn search_uses_query_parameters() {
        let call = ENDPOINTS.call(&ListQuery {
            page: 1,
            limit: 10,
            search: Some("acme".to_string()),
        });

        assert_eq!(call.path, "/admin/searchuser");
        assert_eq!(
            call.params,
            vec![
                ("search", "acme".to_string()),
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
