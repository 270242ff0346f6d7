//! One module per backend resource, mirroring the route layout of the API.
//!
//! Every function takes the [`ApiClient`](crate::ApiClient) explicitly,
//! decodes the body through the envelope parser, and hands back a fully
//! validated `ApiResponse` value.

pub mod anime;
pub mod entity;
pub mod light_novel;
pub mod manga;
pub mod statistic;
pub mod upload;

use contracts::enums::SortOrder;

/// Pagination window every list endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub current_page: u64,
    pub limit_per_page: u64,
}

impl PageRequest {
    pub fn new(current_page: u64, limit_per_page: u64) -> Self {
        Self {
            current_page,
            limit_per_page,
        }
    }

    fn push_params(&self, params: &mut Vec<(&'static str, String)>) {
        params.push(("currentPage", self.current_page.to_string()));
        params.push(("limitPerPage", self.limit_per_page.to_string()));
    }
}

fn push_opt(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>) {
    if let Some(value) = value {
        params.push((key, value));
    }
}

fn push_sort(
    params: &mut Vec<(&'static str, String)>,
    sort_by: &Option<String>,
    sort_order: Option<SortOrder>,
) {
    push_opt(params, "sortBy", sort_by.clone());
    push_opt(params, "sortOrder", sort_order.map(|o| o.as_str().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_emits_camel_case_params() {
        let mut params = Vec::new();
        PageRequest::new(2, 15).push_params(&mut params);
        assert_eq!(
            params,
            vec![
                ("currentPage", "2".to_string()),
                ("limitPerPage", "15".to_string())
            ]
        );
    }

    #[test]
    fn optional_params_are_skipped_when_absent() {
        let mut params = Vec::new();
        push_opt(&mut params, "q", None);
        push_sort(&mut params, &None, Some(SortOrder::Desc));
        assert_eq!(params, vec![("sortOrder", "desc".to_string())]);
    }
}
