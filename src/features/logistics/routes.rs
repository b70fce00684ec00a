use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::logistics::handlers;
use crate::features::logistics::services::{
    ChannelService, WarehouseConnectionService, WarehouseService,
};

/// Services backing the logistics routes
#[derive(Clone)]
pub struct LogisticsServices {
    pub warehouses: Arc<WarehouseService>,
    pub channels: Arc<ChannelService>,
    pub connections: Arc<WarehouseConnectionService>,
}

/// Warehouse and channel administration (admin only, behind auth middleware)
pub fn routes(services: &LogisticsServices) -> Router {
    let warehouses = Router::new()
        .route(
            "/api/warehouses",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        .route(
            "/api/warehouses/{id}",
            get(handlers::get_warehouse)
                .put(handlers::update_warehouse)
                .delete(handlers::delete_warehouse),
        )
        .with_state(services.warehouses.clone());

    let channels = Router::new()
        .route(
            "/api/channels",
            get(handlers::list_channels).post(handlers::create_channel),
        )
        .route(
            "/api/channels/{id}",
            get(handlers::get_channel)
                .put(handlers::update_channel)
                .delete(handlers::delete_channel),
        )
        .with_state(services.channels.clone());

    let connections = Router::new()
        .route(
            "/api/warehouses/{id}/connections",
            get(handlers::list_warehouse_connections).post(handlers::create_warehouse_connection),
        )
        .route(
            "/api/warehouse-connections/{id}",
            get(handlers::get_warehouse_connection)
                .put(handlers::update_warehouse_connection)
                .delete(handlers::delete_warehouse_connection),
        )
        .with_state(services.connections.clone());

    warehouses.merge(channels).merge(connections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::logistics::repositories::{
        MockChannelRepository, MockWarehouseConnectionRepository, MockWarehouseRepository,
    };
    use crate::shared::test_helpers::{create_editor_user, with_admin_auth, with_user};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn app(warehouses: MockWarehouseRepository) -> Router {
        let warehouses = Arc::new(warehouses);
        let channels = Arc::new(MockChannelRepository::new());
        let services = LogisticsServices {
            warehouses: Arc::new(WarehouseService::new(warehouses.clone())),
            channels: Arc::new(ChannelService::new(channels.clone())),
            connections: Arc::new(WarehouseConnectionService::new(
                Arc::new(MockWarehouseConnectionRepository::new()),
                warehouses,
                channels,
            )),
        };
        routes(&services)
    }

    #[tokio::test]
    async fn test_editor_cannot_list_warehouses() {
        let server = TestServer::new(with_user(
            app(MockWarehouseRepository::new()),
            create_editor_user(),
        ))
        .unwrap();

        server.get("/api/warehouses").await.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_connections_of_unknown_warehouse_is_404() {
        let mut repo = MockWarehouseRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let server = TestServer::new(with_admin_auth(app(repo))).unwrap();
        let response = server
            .post(&format!("/api/warehouses/{}/connections", Uuid::now_v7()))
            .json(&json!({"channel_id": Uuid::now_v7()}))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_invalid_code_is_400() {
        let mut repo = MockWarehouseRepository::new();
        repo.expect_insert().never();

        let server = TestServer::new(with_admin_auth(app(repo))).unwrap();
        let response = server
            .post("/api/warehouses")
            .json(&json!({"name": "Depot", "code": "depot 1", "city": "Izmir"}))
            .await;

        response.assert_status_bad_request();
    }
}
