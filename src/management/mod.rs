mod session;

pub use session::SESSION_COOKIE;
pub use session::SessionManager;
pub use session::session_cookie;
