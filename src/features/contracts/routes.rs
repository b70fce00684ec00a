use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::contracts::handlers;
use crate::features::contracts::services::{ContractService, UserContractService};

/// Contract routes (behind auth middleware). Reads need any signed-in
/// user, writes and acceptances need an admin.
pub fn routes(
    contract_service: Arc<ContractService>,
    user_contract_service: Arc<UserContractService>,
) -> Router {
    let contracts = Router::new()
        .route(
            "/api/contracts",
            get(handlers::list_contracts).post(handlers::create_contract),
        )
        .route(
            "/api/contracts/{id}",
            get(handlers::get_contract)
                .put(handlers::update_contract)
                .delete(handlers::delete_contract),
        )
        .with_state(contract_service);

    let acceptances = Router::new()
        .route(
            "/api/users/{id}/contracts",
            get(handlers::list_user_contracts).post(handlers::create_user_contract),
        )
        .route(
            "/api/user-contracts/{id}",
            get(handlers::get_user_contract)
                .put(handlers::update_user_contract)
                .delete(handlers::delete_user_contract),
        )
        .with_state(user_contract_service);

    contracts.merge(acceptances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contracts::models::Contract;
    use crate::features::contracts::repositories::{
        MockContractRepository, MockUserContractRepository,
    };
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::{create_customer_user, create_editor_user, with_user};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn app(contracts: MockContractRepository) -> Router {
        let contracts = Arc::new(contracts);
        routes(
            Arc::new(ContractService::new(contracts.clone())),
            Arc::new(UserContractService::new(
                Arc::new(MockUserContractRepository::new()),
                contracts,
                Arc::new(MockUserRepository::new()),
            )),
        )
    }

    #[tokio::test]
    async fn test_any_signed_in_user_can_read() {
        let mut repo = MockContractRepository::new();
        repo.expect_list().returning(|_| {
            Ok((
                vec![Contract {
                    id: Uuid::now_v7(),
                    title: "Rental terms".to_string(),
                    code: "RENTAL_TERMS".to_string(),
                    content: "text".to_string(),
                    version: 2,
                    is_active: true,
                    audit: AuditTrail::created(None),
                }],
                1,
            ))
        });

        let server = TestServer::new(with_user(app(repo), create_customer_user())).unwrap();
        let response = server.get("/api/contracts").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["version"], 2);
    }

    #[tokio::test]
    async fn test_read_without_user_is_401() {
        let server = TestServer::new(app(MockContractRepository::new())).unwrap();
        server.get("/api/contracts").await.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_editor_cannot_create_contract() {
        let mut repo = MockContractRepository::new();
        repo.expect_insert().never();

        let server = TestServer::new(with_user(app(repo), create_editor_user())).unwrap();
        let response = server
            .post("/api/contracts")
            .json(&json!({"title": "Terms", "code": "TERMS", "content": "text"}))
            .await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_editor_cannot_record_acceptance() {
        let server = TestServer::new(with_user(
            app(MockContractRepository::new()),
            create_editor_user(),
        ))
        .unwrap();

        let response = server
            .post(&format!("/api/users/{}/contracts", Uuid::now_v7()))
            .json(&json!({"contract_id": Uuid::now_v7()}))
            .await;

        response.assert_status_forbidden();
    }
}
