//! Validation adapters on futures and streams.

#![cfg(feature = "stream")]

use chainval::prelude::*;
use futures::future::{ok, ready};
use futures::stream::{self, StreamExt};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    sku: String,
    quantity: u32,
}

fn order(id: u32, sku: &str, quantity: u32) -> Result<Order, ValidationError> {
    Ok(Order {
        id,
        sku: sku.to_string(),
        quantity,
    })
}

#[tokio::test]
async fn future_passes_when_validation_passes() {
    let value = ready(Ok::<_, ValidationError>("Something"))
        .validate(|v, it| {
            v.is_not_blank(it, || "Should pass")?;
            Ok(())
        })
        .await;
    assert_eq!(value, Ok("Something"));
}

#[tokio::test]
async fn future_fails_when_validation_does_not_pass() {
    let value = ready(Ok::<_, ValidationError>("   "))
        .validate(|v, it| {
            v.is_not_blank(it, || "Should not pass")?;
            Ok(())
        })
        .await;
    assert_eq!(value.unwrap_err().message, "Should not pass");
}

#[tokio::test]
async fn future_async_validation() {
    let value = ok::<_, ValidationError>("Something")
        .validate_async(|v, it| {
            v.is_true(ok(!it.is_blank()), || "Should not pass");
        })
        .await;
    assert_eq!(value, Ok("Something"));

    let value = ok::<_, ValidationError>("   ")
        .validate_async(|v, it| {
            v.is_true(ok(!it.is_blank()), || "Should not pass");
        })
        .await;
    assert!(value.is_err());
}

#[tokio::test]
async fn stream_passes_every_valid_element() {
    let orders: Vec<_> = stream::iter([order(1, "A-1", 2), order(2, "B-7", 1)])
        .validate(|v, o| {
            v.is_not_blank(&o.sku, || format!("order {} has no sku", o.id))?
                .is_true(o.quantity > 0, || format!("order {} is empty", o.id))?;
            Ok(())
        })
        .collect()
        .await;
    assert_eq!(orders, vec![order(1, "A-1", 2), order(2, "B-7", 1)]);
}

#[tokio::test]
async fn stream_ends_with_first_failure() {
    let orders: Vec<_> = stream::iter([order(1, "A-1", 2), order(2, "B-7", 0), order(3, "", 1)])
        .validate(|v, o| {
            v.is_not_blank(&o.sku, || format!("order {} has no sku", o.id))?
                .is_true(o.quantity > 0, || format!("order {} is empty", o.id))?;
            Ok(())
        })
        .collect()
        .await;
    assert_eq!(
        orders,
        vec![
            order(1, "A-1", 2),
            Err(ValidationError::failed("order 2 is empty"))
        ]
    );
}

#[tokio::test]
async fn stream_async_validation_ends_with_first_failure() {
    let orders: Vec<_> = stream::iter([order(1, "A-1", 2), order(2, "  ", 1), order(3, "C-3", 1)])
        .validate_async(|v, o| {
            let sku = o.sku.clone();
            v.is_false(ok(sku.trim().is_empty()), || "Should not pass")
                .unless(o.quantity > 1, |v| {
                    v.synchronous(move |v| {
                        v.is_not_blank(&sku, || "sku must not be blank")?;
                        Ok(())
                    });
                });
        })
        .collect()
        .await;
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1], Err(ValidationError::failed("Should not pass")));
}
