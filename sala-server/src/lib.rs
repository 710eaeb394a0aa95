//! Sala Server - restaurant front-of-house backend
//!
//! # Architecture
//!
//! - **Database** (`db`): embedded SurrealDB storage, one repository per
//!   collection; joins are assembled inside the repositories so handlers
//!   and the ordering core only see resolved read models
//! - **Ordering core** (`ordering`): pure pricing and status derivation
//! - **Catalog** (`catalog`): ingredient availability against inventory
//! - **Auth** (`auth`): JWT + Argon2
//! - **Message bus** (`message`): per-resource change notification
//! - **HTTP API** (`api`): RESTful endpoints
//!
//! # Module structure
//!
//! ```text
//! sala-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT service, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # availability check
//! ├── db/            # models and repositories
//! ├── message/       # change-notification bus
//! ├── ordering/      # pricing and status engine
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod message;
pub mod ordering;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use message::MessageBus;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____       __
  / ___/____ _/ /___ _
  \__ \/ __ `/ / __ `/
 ___/ / /_/ / / /_/ /
/____/\__,_/_/\__,_/
    "#
    );
}
