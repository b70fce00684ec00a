use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::{auth, catalog, contact_forms, content, contracts, logistics, users};
use crate::shared::audit::AuditTrail;
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        auth::handlers::refresh_token,
        auth::handlers::change_password,
        // Users and addresses
        users::handlers::list_user_addresses,
        users::handlers::create_address,
        users::handlers::get_address,
        users::handlers::update_address,
        users::handlers::delete_address,
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
        // Catalog
        catalog::handlers::list_brands,
        catalog::handlers::get_brand,
        catalog::handlers::create_brand,
        catalog::handlers::update_brand,
        catalog::handlers::delete_brand,
        catalog::handlers::list_categories,
        catalog::handlers::get_category,
        catalog::handlers::create_category,
        catalog::handlers::update_category,
        catalog::handlers::delete_category,
        catalog::handlers::list_featured_categories,
        catalog::handlers::get_featured_category,
        catalog::handlers::create_featured_category,
        catalog::handlers::update_featured_category,
        catalog::handlers::delete_featured_category,
        catalog::handlers::list_prices,
        catalog::handlers::get_price,
        catalog::handlers::create_price,
        catalog::handlers::update_price,
        catalog::handlers::delete_price,
        catalog::handlers::list_sub_categories,
        catalog::handlers::get_sub_category,
        catalog::handlers::create_sub_category,
        catalog::handlers::update_sub_category,
        catalog::handlers::delete_sub_category,
        // Site content
        content::handlers::list_blogs,
        content::handlers::get_blog,
        content::handlers::create_blog,
        content::handlers::update_blog,
        content::handlers::delete_blog,
        content::handlers::list_faqs,
        content::handlers::get_faq,
        content::handlers::create_faq,
        content::handlers::update_faq,
        content::handlers::delete_faq,
        content::handlers::list_features,
        content::handlers::get_feature,
        content::handlers::create_feature,
        content::handlers::update_feature,
        content::handlers::delete_feature,
        content::handlers::list_footer_items,
        content::handlers::get_footer_item,
        content::handlers::create_footer_item,
        content::handlers::update_footer_item,
        content::handlers::delete_footer_item,
        content::handlers::list_menu_items,
        content::handlers::get_menu_item,
        content::handlers::create_menu_item,
        content::handlers::update_menu_item,
        content::handlers::delete_menu_item,
        content::handlers::list_sliders,
        content::handlers::get_slider,
        content::handlers::create_slider,
        content::handlers::update_slider,
        content::handlers::delete_slider,
        // Contracts
        contracts::handlers::list_contracts,
        contracts::handlers::get_contract,
        contracts::handlers::create_contract,
        contracts::handlers::update_contract,
        contracts::handlers::delete_contract,
        contracts::handlers::list_user_contracts,
        contracts::handlers::create_user_contract,
        contracts::handlers::get_user_contract,
        contracts::handlers::update_user_contract,
        contracts::handlers::delete_user_contract,
        // Logistics
        logistics::handlers::list_channels,
        logistics::handlers::get_channel,
        logistics::handlers::create_channel,
        logistics::handlers::update_channel,
        logistics::handlers::delete_channel,
        logistics::handlers::list_warehouse_connections,
        logistics::handlers::create_warehouse_connection,
        logistics::handlers::get_warehouse_connection,
        logistics::handlers::update_warehouse_connection,
        logistics::handlers::delete_warehouse_connection,
        logistics::handlers::list_warehouses,
        logistics::handlers::get_warehouse,
        logistics::handlers::create_warehouse,
        logistics::handlers::update_warehouse,
        logistics::handlers::delete_warehouse,
        // Contact forms
        contact_forms::handlers::submit_contact_form,
        contact_forms::handlers::list_contact_forms,
        contact_forms::handlers::get_contact_form,
        contact_forms::handlers::mark_contact_form_read,
        contact_forms::handlers::delete_contact_form,
    ),
    components(
        schemas(
            // Shared
            Meta,
            AuditTrail,
            auth::model::AuthenticatedUser,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::ChangePasswordDto,
            auth::dtos::RefreshTokenResponseDto,
            auth::dtos::AuthResponseDto,
            // Users and addresses
            users::dtos::AddressResponseDto,
            users::dtos::CreateAddressDto,
            users::dtos::UpdateAddressDto,
            users::dtos::UserResponseDto,
            users::dtos::CreateUserDto,
            users::dtos::UpdateUserDto,
            // Catalog
            catalog::dtos::BrandResponseDto,
            catalog::dtos::CreateBrandDto,
            catalog::dtos::UpdateBrandDto,
            catalog::dtos::CategoryResponseDto,
            catalog::dtos::CreateCategoryDto,
            catalog::dtos::UpdateCategoryDto,
            catalog::dtos::FeaturedCategoryResponseDto,
            catalog::dtos::CreateFeaturedCategoryDto,
            catalog::dtos::UpdateFeaturedCategoryDto,
            catalog::dtos::PriceResponseDto,
            catalog::dtos::CreatePriceDto,
            catalog::dtos::UpdatePriceDto,
            catalog::dtos::SubCategoryResponseDto,
            catalog::dtos::CreateSubCategoryDto,
            catalog::dtos::UpdateSubCategoryDto,
            // Site content
            content::dtos::BlogResponseDto,
            content::dtos::CreateBlogDto,
            content::dtos::UpdateBlogDto,
            content::dtos::FaqResponseDto,
            content::dtos::CreateFaqDto,
            content::dtos::UpdateFaqDto,
            content::dtos::FeatureResponseDto,
            content::dtos::CreateFeatureDto,
            content::dtos::UpdateFeatureDto,
            content::dtos::FooterItemResponseDto,
            content::dtos::CreateFooterItemDto,
            content::dtos::UpdateFooterItemDto,
            content::dtos::MenuItemResponseDto,
            content::dtos::CreateMenuItemDto,
            content::dtos::UpdateMenuItemDto,
            content::dtos::SliderResponseDto,
            content::dtos::CreateSliderDto,
            content::dtos::UpdateSliderDto,
            // Contracts
            contracts::dtos::ContractResponseDto,
            contracts::dtos::CreateContractDto,
            contracts::dtos::UpdateContractDto,
            contracts::dtos::UserContractResponseDto,
            contracts::dtos::CreateUserContractDto,
            contracts::dtos::UpdateUserContractDto,
            // Logistics
            logistics::dtos::ChannelResponseDto,
            logistics::dtos::CreateChannelDto,
            logistics::dtos::UpdateChannelDto,
            logistics::dtos::WarehouseConnectionResponseDto,
            logistics::dtos::CreateWarehouseConnectionDto,
            logistics::dtos::UpdateWarehouseConnectionDto,
            logistics::dtos::WarehouseResponseDto,
            logistics::dtos::CreateWarehouseDto,
            logistics::dtos::UpdateWarehouseDto,
            // Contact forms
            contact_forms::dtos::ContactFormResponseDto,
            contact_forms::dtos::CreateContactFormDto,
            contact_forms::dtos::MarkContactFormReadDto,
        )
    ),
    tags(
        (name = "auth", description = "Login, token refresh and password change"),
        (name = "users", description = "User accounts (admin only)"),
        (name = "addresses", description = "User addresses (admin only)"),
        (name = "categories", description = "Rental categories"),
        (name = "sub-categories", description = "Sub-categories of a category"),
        (name = "featured-categories", description = "Categories promoted on the home page"),
        (name = "brands", description = "Brands"),
        (name = "prices", description = "Price ranges for catalog filters"),
        (name = "sliders", description = "Home page sliders"),
        (name = "blogs", description = "Blog posts"),
        (name = "faqs", description = "Frequently asked questions"),
        (name = "features", description = "Feature highlights"),
        (name = "footer-items", description = "Footer links grouped by column"),
        (name = "menu-items", description = "Main menu entries"),
        (name = "contracts", description = "Rental agreement documents"),
        (name = "user-contracts", description = "Contract acceptances per user (admin only)"),
        (name = "warehouses", description = "Warehouses (admin only)"),
        (name = "channels", description = "Sales channels (admin only)"),
        (name = "warehouse-connections", description = "Warehouse to channel links (admin only)"),
        (name = "contact-forms", description = "Contact page messages"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Rental Catalog Admin API",
        version = "0.1.0",
        description = "Back-office API for the rental catalog and storefront content",
    )
)]
pub struct ApiDoc;

/// Registers the bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_protected_and_public_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/contact-forms/{id}/read"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/categories/{id}/sub-categories"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_info_override() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Staging");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
