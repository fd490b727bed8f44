// handlers/mod.rs - Request handlers
//
// proxy:  the one handler behind every route descriptor (/api/users, /api/meetings, ...)
// login:  POST /api/login, local token issuance
// system: service descriptor and liveness

pub mod login;
pub mod proxy;
pub mod system;

pub use login::login;
pub use proxy::proxy;
pub use system::{health, root};
