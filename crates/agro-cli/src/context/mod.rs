mod app_context;
mod auth_context;
mod guard;

pub use app_context::AppContext;
pub use auth_context::AuthContext;
pub use guard::admit;
