//! Tests for the schema module

use super::*;
use crate::types::Method;

const ID: Parameter = Parameter {
    name: "id",
    description: "A newsletter ID",
    type_name: "string",
    required: true,
    default: None,
};

const LIMIT: Parameter = Parameter {
    name: "limit",
    description: "Items per page",
    type_name: "number",
    required: false,
    default: Some("10"),
};

const OPERATION: Operation = Operation {
    name: "newsletters.get",
    description: "Get newsletter",
    method: Method::GET,
    path: "/newsletter/:id",
    path_params: &[ID],
    query_params: &[LIMIT],
    body_params: &[],
    returns: &[
        ResponseShape {
            status: 200,
            type_name: "Newsletter",
        },
        ResponseShape {
            status: 404,
            type_name: "Error(RESOURCE_NOT_FOUND)",
        },
    ],
    auth: Auth::None,
};

#[test]
fn test_parameter_lookup() {
    assert_eq!(OPERATION.parameter("id").unwrap().type_name, "string");
    assert_eq!(OPERATION.parameter("limit").unwrap().default, Some("10"));
    assert!(OPERATION.parameter("missing").is_none());
}

#[test]
fn test_declared_statuses() {
    assert!(OPERATION.declares_status(200));
    assert!(OPERATION.declares_status(404));
    assert!(!OPERATION.declares_status(500));
    assert_eq!(OPERATION.success_shape().unwrap().type_name, "Newsletter");
}

#[test]
fn test_auth_tri_state() {
    assert!(!Auth::None.required());
    assert!(Auth::AnyToken.required());
    assert!(Auth::Scope("tokens.list.own").required());

    assert_eq!(Auth::None.scope(), None);
    assert_eq!(Auth::AnyToken.scope(), None);
    assert_eq!(
        Auth::Scope("tokens.list.own").scope(),
        Some("tokens.list.own")
    );
}
