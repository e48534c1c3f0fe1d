pub const STOCK_REPLY: &str = "The current stock is 15 units.";
pub const ORDER_REPLY: &str = "You can place an order by providing the SKU.";

/// Canned answer for messages mentioning "stock" or "order" (checked in that
/// order, case-insensitively). `None` lets the message reach the model.
pub fn handle_inventory_query(message: &str) -> Option<&'static str> {
    if message.is_empty() {
        return None;
    }

    let message = message.to_lowercase();

    if message.contains("stock") {
        return Some(STOCK_REPLY);
    }

    if message.contains("order") {
        return Some(ORDER_REPLY);
    }

    None
}
