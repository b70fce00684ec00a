pub mod auth_handler;

pub use auth_handler::{
    __path_change_password, __path_get_me, __path_login, __path_refresh_token, change_password,
    get_me, login, refresh_token,
};
