use std::str::FromStr;

use crate::models::enums::DirectoryOrder;
use crate::models::{DirectoryFilter, DirectoryRpcParams};

/// Translate a directory filter into `admin_list_users` parameters.
///
/// Blank search text is dropped rather than sent as `""`. An unknown order
/// token is dropped so the procedure applies its own default.
/// Pagination passes through untouched.
pub fn build_rpc_params(filter: &DirectoryFilter) -> DirectoryRpcParams {
    DirectoryRpcParams {
        q: non_blank(filter.q.as_deref()),
        role: non_blank(filter.role.as_deref()),
        sex: filter.sex.map(|s| s.as_str().to_string()),
        status: filter.status.map(|s| s.as_str().to_string()),
        order: filter
            .order
            .as_deref()
            .and_then(|o| DirectoryOrder::from_str(o).ok())
            .map(|o| o.as_str().to_string()),
        limit: filter.limit,
        offset: filter.offset,
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Sex, UserStatus};

    #[test]
    fn whitespace_query_is_absent() {
        let params = build_rpc_params(&DirectoryFilter {
            q: Some("  ".into()),
            ..Default::default()
        });
        assert_eq!(params.q, None);
    }

    #[test]
    fn query_is_trimmed() {
        let params = build_rpc_params(&DirectoryFilter {
            q: Some("  rojas ".into()),
            ..Default::default()
        });
        assert_eq!(params.q.as_deref(), Some("rojas"));
    }

    #[test]
    fn every_order_token_maps_to_itself() {
        for order in DirectoryOrder::ALL {
            let params = build_rpc_params(&DirectoryFilter {
                order: Some(order.as_str().into()),
                ..Default::default()
            });
            assert_eq!(params.order.as_deref(), Some(order.as_str()));
        }
    }

    #[test]
    fn unknown_order_defers_to_remote_default() {
        let params = build_rpc_params(&DirectoryFilter {
            order: Some("popularity_desc".into()),
            ..Default::default()
        });
        assert_eq!(params.order, None);
        assert_eq!(build_rpc_params(&DirectoryFilter::default()).order, None);
    }

    #[test]
    fn pagination_is_not_coerced() {
        let empty = build_rpc_params(&DirectoryFilter::default());
        assert_eq!(empty.limit, None);
        assert_eq!(empty.offset, None);

        let params = build_rpc_params(&DirectoryFilter {
            limit: Some(0),
            offset: Some(40),
            ..Default::default()
        });
        assert_eq!(params.limit, Some(0));
        assert_eq!(params.offset, Some(40));
    }

    #[test]
    fn enums_become_tokens() {
        let params = build_rpc_params(&DirectoryFilter {
            sex: Some(Sex::PrefiereNoDecir),
            status: Some(UserStatus::Inactive),
            role: Some("Doctor".into()),
            ..Default::default()
        });
        assert_eq!(params.sex.as_deref(), Some("prefiere_no_decir"));
        assert_eq!(params.status.as_deref(), Some("inactive"));
        assert_eq!(params.role.as_deref(), Some("Doctor"));
    }

    #[test]
    fn absent_params_serialize_as_null() {
        let json = serde_json::to_value(build_rpc_params(&DirectoryFilter::default())).unwrap();
        assert!(json["q"].is_null());
        assert!(json["order"].is_null());
        assert!(json.as_object().unwrap().contains_key("limit"));
    }
}
