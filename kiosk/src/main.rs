//! Scripted kiosk walkthrough
//!
//! One thin view over the store: resolves a table from a scanned QR,
//! builds a cart, checks out, then runs the staff side of the same order.
//! State survives runs through the JSON mirror in the data directory.

use kiosk::table::{ScanPoll, ScanSession, table_qr_image_url};
use kiosk::{AppStore, Config, Mirror, logging, print_banner, receipt};
use shared::{OrderStatus, PaymentStatus};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logging::init_logger(&config.log_level);

    print_banner();
    tracing::info!("Luna kiosk starting...");

    let mut store = AppStore::open(Mirror::at_dir(&config.data_dir));

    // --- Customer flow ---------------------------------------------------
    // Simulated camera frames: a miss, a junk decode, then the table QR.
    let table_qr = format!("{}?table=7", config.base_url);
    let frames = [None, Some("not-a-qr"), Some(table_qr.as_str())];

    let mut session = ScanSession::start();
    for frame in frames {
        if let ScanPoll::Matched(table) = session.offer(frame) {
            tracing::info!(%table, "table QR accepted");
            store.set_table(table);
        }
    }

    store.add_to_cart("m1"); // Nasi Lemak
    store.add_to_cart("m2"); // Teh Tarik
    store.add_to_cart("m2");
    store.set_note("m2", "less sugar");
    tracing::info!(subtotal = %store.cart_subtotal(), lines = store.cart().len(), "cart ready");

    let order = store.checkout()?;
    println!("{}", receipt::render(&order));

    // --- Staff flow ------------------------------------------------------
    store.update_status(&order.id, OrderStatus::Preparing)?;
    store.update_status(&order.id, OrderStatus::Ready)?;
    store.update_status(&order.id, OrderStatus::Delivered)?;
    store.set_payment_status(&order.id, PaymentStatus::Paid)?;

    tracing::info!(
        orders = store.orders().len(),
        qr = %table_qr_image_url(&config.base_url, store.table()),
        "walkthrough complete"
    );
    Ok(())
}
