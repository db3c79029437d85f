/// Health check route that returns `{"status": "healthy"}` while the server is running.
pub mod health;

/// Greeting route.
pub mod hello_world;

/// Shared 405 handler for methods a route does not serve.
pub mod method_not_allowed;

pub use health::*;
pub use hello_world::*;
pub use method_not_allowed::*;
