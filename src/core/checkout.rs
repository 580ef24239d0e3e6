//! Checkout business logic - The cart-to-sale transaction.
//!
//! This module turns a client-supplied cart into a persisted sale under an
//! all-or-nothing guarantee. The whole sequence - validate every line against
//! authoritative stock, insert the sale and its line items, decrement each
//! product's stock - runs inside one database transaction. Stock decrements
//! use a guarded atomic update (`stock = stock - qty WHERE stock >= qty`) so
//! that two concurrent checkouts racing for the same product can never both
//! win: the loser's guard misses, the transaction rolls back, and the caller
//! gets an [`Error::InsufficientStock`] with the quantity still available.

use crate::{
    entities::{Product, Sale, product, sale, sale_line},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, Set, TransactionTrait, prelude::*, sea_query::Expr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One client-supplied cart entry: a desired product, quantity, and the unit
/// price as quoted to the client. This is a client-asserted snapshot, not an
/// authoritative read; the checkout re-reads stock (and, under
/// [`PricePolicy::Catalog`], price) from the store before deciding anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product the customer wants to buy
    pub product_id: i64,
    /// Requested quantity, must be positive
    pub quantity: i32,
    /// Unit price as displayed to the client at cart time
    pub unit_price: f64,
}

/// Result of a successful checkout, suitable for a receipt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Identifier of the newly created sale
    pub sale_id: i64,
    /// Amount charged, equal to the sum of the line subtotals
    pub total: f64,
}

/// Which price the sale is charged at.
///
/// Trusting the client-quoted price allows price tampering, so the choice is
/// the caller's to make explicitly; new code should prefer
/// [`PricePolicy::Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricePolicy {
    /// Charge the unit price supplied in the cart
    ClientQuoted,
    /// Re-read the authoritative catalog price inside the transaction
    Catalog,
}

/// Processes a cart purchase for `buyer_id` as a single atomic transaction.
///
/// The caller must have already authenticated the buyer and confirmed the
/// customer role; this function does not authenticate. On success a sale row
/// and one line per cart entry exist, and every referenced product's stock
/// has decreased by exactly the requested quantity. On any failure nothing
/// in the store has changed.
///
/// # Errors
/// - [`Error::EmptyCart`] if the cart has no lines
/// - [`Error::InvalidQuantity`] if any line requests a non-positive quantity
/// - [`Error::ProductNotFound`] if any line references an unknown product
/// - [`Error::InsufficientStock`] if stock cannot cover any line, including
///   when a concurrent checkout takes the stock between validation and
///   decrement
/// - [`Error::Database`] for underlying store failures (transaction rolled
///   back; the caller may retry)
pub async fn checkout(
    db: &DatabaseConnection,
    buyer_id: i64,
    cart: &[CartLine],
    price_policy: PricePolicy,
) -> Result<Receipt> {
    if cart.is_empty() {
        return Err(Error::EmptyCart);
    }

    for line in cart {
        if line.quantity <= 0 {
            return Err(Error::InvalidQuantity {
                product_id: line.product_id,
                quantity: line.quantity,
            });
        }
    }

    // Everything from here runs under one transaction. Early returns drop
    // the handle, which rolls the transaction back.
    let txn = db.begin().await?;

    // Validate every line against authoritative stock and resolve the unit
    // price to charge. Failing before any write keeps the failure paths
    // side-effect free.
    let mut priced_lines = Vec::with_capacity(cart.len());
    for line in cart {
        let product = Product::find_by_id(line.product_id)
            .one(&txn)
            .await?
            .ok_or(Error::ProductNotFound {
                product_id: line.product_id,
            })?;

        if product.stock < line.quantity {
            return Err(Error::InsufficientStock {
                product_id: line.product_id,
                name: product.name,
                available: product.stock,
                requested: line.quantity,
            });
        }

        let unit_price = match price_policy {
            PricePolicy::ClientQuoted => line.unit_price,
            PricePolicy::Catalog => product.price,
        };
        priced_lines.push((line, unit_price, product.name));
    }

    let total: f64 = priced_lines
        .iter()
        .map(|(line, unit_price, _)| unit_price * f64::from(line.quantity))
        .sum();

    let sale = sale::ActiveModel {
        user_id: Set(buyer_id),
        timestamp: Set(chrono::Utc::now()),
        total: Set(total),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for (line, unit_price, name) in priced_lines {
        let subtotal = unit_price * f64::from(line.quantity);
        sale_line::ActiveModel {
            sale_id: Set(sale.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
            unit_price: Set(unit_price),
            subtotal: Set(subtotal),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        decrement_stock_guarded(&txn, line, name).await?;
        debug!(
            product_id = line.product_id,
            quantity = line.quantity,
            subtotal,
            "checkout line recorded"
        );
    }

    // The single success path
    txn.commit().await?;

    info!(sale_id = sale.id, buyer_id, total, "checkout committed");
    Ok(Receipt {
        sale_id: sale.id,
        total,
    })
}

/// Atomically decrements a product's stock, guarded against oversell.
///
/// Issues `UPDATE products SET stock = stock - qty WHERE id = ? AND
/// stock >= qty`. The guard re-checks availability at write time against the
/// row's committed value, so a concurrent checkout that already took the
/// stock makes this update match zero rows. In that case the current stock
/// is re-read for the error payload and the caller's transaction rolls back.
async fn decrement_stock_guarded<C>(txn: &C, line: &CartLine, name: String) -> Result<()>
where
    C: ConnectionTrait,
{
    let update = Product::update_many()
        .col_expr(
            product::Column::Stock,
            Expr::col(product::Column::Stock).sub(line.quantity),
        )
        .filter(product::Column::Id.eq(line.product_id))
        .filter(product::Column::Stock.gte(line.quantity))
        .exec(txn)
        .await?;

    if update.rows_affected == 0 {
        // A concurrent checkout won the race between our validation read and
        // this write. Report what is actually left.
        let available = Product::find_by_id(line.product_id)
            .one(txn)
            .await?
            .map_or(0, |p| p.stock);
        return Err(Error::InsufficientStock {
            product_id: line.product_id,
            name,
            available,
            requested: line.quantity,
        });
    }

    Ok(())
}

/// Retrieves a sale and its line items, or None if the sale does not exist.
///
/// Used to render receipts and purchase history; lines come back in
/// insertion order.
pub async fn get_sale_with_lines(
    db: &DatabaseConnection,
    sale_id: i64,
) -> Result<Option<(sale::Model, Vec<sale_line::Model>)>> {
    let Some(sale) = Sale::find_by_id(sale_id).one(db).await? else {
        return Ok(None);
    };
    let lines = sale.find_related(crate::entities::SaleLine).all(db).await?;
    Ok(Some((sale, lines)))
}
