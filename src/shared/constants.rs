/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - full access including users, contracts and logistics
pub const ROLE_ADMIN: &str = "admin";

/// Editor role - can manage catalog and site content
pub const ROLE_EDITOR: &str = "editor";

/// Customer role - storefront account, no admin surface access
pub const ROLE_CUSTOMER: &str = "customer";

/// All roles a user record may carry
pub const ROLES: [&str; 3] = [ROLE_ADMIN, ROLE_EDITOR, ROLE_CUSTOMER];

// =============================================================================
// HEADERS
// =============================================================================

/// Response header carrying the reissued access token (sliding expiration)
pub const REFRESHED_TOKEN_HEADER: &str = "x-refreshed-token";
