mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::{AuthService, PasswordService, TokenService};
use crate::features::catalog::repositories::{
    PgBrandRepository, PgCategoryRepository, PgFeaturedCategoryRepository, PgPriceRepository,
    PgSubCategoryRepository,
};
use crate::features::catalog::{
    routes as catalog_routes, BrandService, CatalogServices, CategoryService,
    FeaturedCategoryService, PriceService, SubCategoryService,
};
use crate::features::contact_forms::repositories::PgContactFormRepository;
use crate::features::contact_forms::{routes as contact_forms_routes, ContactFormService};
use crate::features::content::repositories::{
    PgBlogRepository, PgFaqRepository, PgFeatureRepository, PgFooterItemRepository,
    PgMenuItemRepository, PgSliderRepository,
};
use crate::features::content::{
    routes as content_routes, BlogService, ContentServices, FaqService, FeatureService,
    FooterItemService, MenuItemService, SliderService,
};
use crate::features::contracts::repositories::{PgContractRepository, PgUserContractRepository};
use crate::features::contracts::{routes as contracts_routes, ContractService, UserContractService};
use crate::features::logistics::repositories::{
    PgChannelRepository, PgWarehouseConnectionRepository, PgWarehouseRepository,
};
use crate::features::logistics::{
    routes as logistics_routes, ChannelService, LogisticsServices, WarehouseConnectionService,
    WarehouseService,
};
use crate::features::users::repositories::{PgAddressRepository, PgUserRepository};
use crate::features::users::{routes as users_routes, AddressService, UserService};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::{middleware::from_fn, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Liveness plus a database round trip
async fn health_check(State(pool): State<PgPool>) -> StatusCode {
    match database::ping(&pool).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let address_repo = Arc::new(PgAddressRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let contract_repo = Arc::new(PgContractRepository::new(pool.clone()));
    let warehouse_repo = Arc::new(PgWarehouseRepository::new(pool.clone()));
    let channel_repo = Arc::new(PgChannelRepository::new(pool.clone()));

    // Auth
    let password_service = Arc::new(PasswordService::new(config.auth.password_hash_rounds));
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        Arc::clone(&password_service),
        Arc::clone(&token_service),
    ));
    tracing::info!("Auth services initialized");

    // Users
    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        Arc::clone(&password_service),
    ));
    let address_service = Arc::new(AddressService::new(address_repo, user_repo.clone()));

    if let (Some(email), Some(password)) = (
        config.bootstrap.admin_email.as_deref(),
        config.bootstrap.admin_password.as_deref(),
    ) {
        if !user_service
            .bootstrap_admin(email, password)
            .await
            .map_err(|e| anyhow::anyhow!("Admin bootstrap failed: {}", e))?
        {
            tracing::debug!("Users exist, skipping admin bootstrap");
        }
    }
    tracing::info!("User services initialized");

    let catalog = CatalogServices {
        categories: Arc::new(CategoryService::new(category_repo.clone())),
        sub_categories: Arc::new(SubCategoryService::new(
            Arc::new(PgSubCategoryRepository::new(pool.clone())),
            category_repo.clone(),
        )),
        featured_categories: Arc::new(FeaturedCategoryService::new(
            Arc::new(PgFeaturedCategoryRepository::new(pool.clone())),
            category_repo,
        )),
        brands: Arc::new(BrandService::new(Arc::new(PgBrandRepository::new(
            pool.clone(),
        )))),
        prices: Arc::new(PriceService::new(Arc::new(PgPriceRepository::new(
            pool.clone(),
        )))),
    };
    tracing::info!("Catalog services initialized");

    let content = ContentServices {
        sliders: Arc::new(SliderService::new(Arc::new(PgSliderRepository::new(
            pool.clone(),
        )))),
        blogs: Arc::new(BlogService::new(Arc::new(PgBlogRepository::new(
            pool.clone(),
        )))),
        faqs: Arc::new(FaqService::new(Arc::new(PgFaqRepository::new(pool.clone())))),
        features: Arc::new(FeatureService::new(Arc::new(PgFeatureRepository::new(
            pool.clone(),
        )))),
        footer_items: Arc::new(FooterItemService::new(Arc::new(
            PgFooterItemRepository::new(pool.clone()),
        ))),
        menu_items: Arc::new(MenuItemService::new(Arc::new(PgMenuItemRepository::new(
            pool.clone(),
        )))),
    };
    tracing::info!("Content services initialized");

    let contract_service = Arc::new(ContractService::new(contract_repo.clone()));
    let user_contract_service = Arc::new(UserContractService::new(
        Arc::new(PgUserContractRepository::new(pool.clone())),
        contract_repo,
        user_repo,
    ));
    tracing::info!("Contract services initialized");

    let logistics = LogisticsServices {
        warehouses: Arc::new(WarehouseService::new(warehouse_repo.clone())),
        channels: Arc::new(ChannelService::new(channel_repo.clone())),
        connections: Arc::new(WarehouseConnectionService::new(
            Arc::new(PgWarehouseConnectionRepository::new(pool.clone())),
            warehouse_repo,
            channel_repo,
        )),
    };
    tracing::info!("Logistics services initialized");

    let contact_form_service = Arc::new(ContactFormService::new(Arc::new(
        PgContactFormRepository::new(pool.clone()),
    )));
    tracing::info!("Contact form service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require bearer token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&auth_service)))
        .merge(users_routes::routes(user_service, address_service))
        .merge(catalog_routes::protected_routes(&catalog))
        .merge(content_routes::protected_routes(&content))
        .merge(contracts_routes::routes(
            contract_service,
            user_contract_service,
        ))
        .merge(logistics_routes::routes(&logistics))
        .merge(contact_forms_routes::protected_routes(Arc::clone(
            &contact_form_service,
        )))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    let health_route = Router::new()
        .route("/health", axum::routing::get(health_check))
        .with_state(pool.clone());

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(catalog_routes::public_routes(&catalog))
        .merge(content_routes::public_routes(&content))
        .merge(contact_forms_routes::public_routes(contact_form_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
