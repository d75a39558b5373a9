//! Luna Kiosk - single-terminal self-ordering demo
//!
//! Customer and staff flows are two callers of one in-process store; there
//! is no server, no database and no authentication. State lives in memory
//! and is mirrored wholesale to a JSON blob on every mutation.
//!
//! # Module structure
//!
//! ```text
//! kiosk/src/
//! ├── config.rs      # Environment-driven configuration
//! ├── logging.rs     # tracing subscriber setup
//! ├── catalog.rs     # Built-in default menu
//! ├── store/         # AppStore: commands over menu/cart/orders
//! ├── money.rs       # Decimal pricing and receipt tax split
//! ├── table.rs       # Table/QR resolution and scan sessions
//! ├── persist.rs     # JSON blob mirror
//! └── receipt.rs     # Plain-text receipt rendering
//! ```

pub mod catalog;
pub mod config;
pub mod logging;
pub mod money;
pub mod persist;
pub mod receipt;
pub mod store;
pub mod table;

// Re-export 公共类型
pub use config::Config;
pub use persist::{Mirror, PersistedState};
pub use store::{AppStore, StoreError, StoreResult};
pub use table::{ScanPoll, ScanSession, resolve_table_text, table_qr_image_url};

pub fn print_banner() {
    println!(
        r#"
    __
   / /   __  ______  ____ _
  / /   / / / / __ \/ __ `/
 / /___/ /_/ / / / / /_/ /
/_____/\__,_/_/ /_/\__,_/

 The Luna Shop · Self-Ordering Kiosk
"#
    );
}
