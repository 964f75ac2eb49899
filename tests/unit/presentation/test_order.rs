use assert_json_diff::assert_json_include;
use chrono::{TimeZone, Utc};
use serde_json::json;
use tastytrade_model::presentation::order::{ComplexOrder, Order, OrderResponse};

fn order_json() -> serde_json::Value {
    json!({
        "id": 350012,
        "account-number": "5WT00001",
        "time-in-force": "Day",
        "order-type": "Limit",
        "size": 1,
        "underlying-symbol": "SPY",
        "underlying-instrument-type": "Equity",
        "price": "1.45",
        "price-effect": "Credit",
        "stop-trigger": "",
        "status": "Filled",
        "cancellable": false,
        "editable": false,
        "edited": false,
        "received-at": "2024-03-15T14:30:00.123+00:00",
        "updated-at": 1710513005000i64,
        "terminal-at": "2024-03-15T14:30:05.000+00:00",
        "legs": [
            {
                "instrument-type": "Equity Option",
                "symbol": "SPY   240315P00500000",
                "quantity": "1",
                "remaining-quantity": "0",
                "action": "Sell to Open",
                "fills": [
                    {
                        "ext-group-fill-id": "G1",
                        "ext-exec-id": "E1",
                        "fill-id": "F1",
                        "quantity": "1",
                        "fill-price": "1.45",
                        "filled-at": "2024-03-15T14:30:05.000+00:00",
                        "destination-venue": "CBOE"
                    }
                ]
            }
        ]
    })
}

#[test]
fn test_order_decodes_legs_and_fills() {
    let order: Order = serde_json::from_value(order_json()).unwrap();
    assert_eq!(order.id, 350012);
    assert_eq!(order.price.value(), 1.45);
    assert_eq!(order.stop_trigger.value(), 0.0);
    assert_eq!(order.updated_at, 1710513005000);
    assert_eq!(order.legs.len(), 1);

    let leg = &order.legs[0];
    assert_eq!(leg.action, "Sell to Open");
    assert_eq!(leg.remaining_quantity.value(), 0.0);
    assert_eq!(leg.filled_quantity(), 1.0);
    assert_eq!(leg.fills[0].fill_price.value(), 1.45);
    assert_eq!(
        leg.fills[0].filled_at,
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap()
    );
    assert_eq!(order.order_rule, None);
}

#[test]
fn test_order_malformed_fill_price_fails_order() {
    let mut payload = order_json();
    payload["legs"][0]["fills"][0]["fill-price"] = json!("1.45.0");
    let err = serde_json::from_value::<Order>(payload).unwrap_err();
    assert!(err.to_string().contains("1.45.0"));
}

#[test]
fn test_order_rule_conditions() {
    let mut payload = order_json();
    payload["order-rule"] = json!({
        "route-after": "2024-03-15T15:00:00.000+00:00",
        "order-conditions": [
            {
                "id": "c1",
                "action": "route",
                "symbol": "SPY",
                "instrument-type": "Equity",
                "indicator": "last",
                "comparator": "gte",
                "threshold": "505.5",
                "is-threshold-based-on-notional": false,
                "triggered-value": "",
                "price-components": [
                    {
                        "symbol": "SPY",
                        "instrument-type": "Equity",
                        "quantity": "1",
                        "quantity-direction": "Long"
                    }
                ]
            }
        ]
    });
    let order: Order = serde_json::from_value(payload).unwrap();
    let rule = order.order_rule.unwrap();
    assert!(rule.route_after.is_some());
    assert_eq!(rule.order_conditions[0].threshold.value(), 505.5);
    assert_eq!(rule.order_conditions[0].triggered_value.value(), 0.0);
    assert_eq!(rule.order_conditions[0].price_components[0].quantity.value(), 1.0);
}

#[test]
fn test_complex_order_type_key() {
    let complex: ComplexOrder = serde_json::from_value(json!({
        "id": 88,
        "account-number": "5WT00001",
        "type": "OTOCO",
        "ratio-price-threshold": "",
        "orders": [order_json()],
        "trigger-order": order_json(),
        "related-orders": [
            {"id": 350012, "complex-order-id": 88, "status": "Filled"}
        ]
    }))
    .unwrap();
    assert_eq!(complex.complex_type, "OTOCO");
    assert_eq!(complex.orders.len(), 1);
    assert_eq!(complex.trigger_order.unwrap().id, 350012);
    assert_eq!(complex.related_orders[0].complex_order_id, 88);

    let serialized = serde_json::to_value(ComplexOrder {
        complex_type: "OCO".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(serialized["type"], "OCO");
}

#[test]
fn test_order_response_dry_run() {
    let response: OrderResponse = serde_json::from_value(json!({
        "order": order_json(),
        "warnings": [{"code": "tif_next_valid_sesssion", "message": "Market is closed"}],
        "buying-power-effect": {
            "change-in-margin-requirement": "500.0",
            "change-in-margin-requirement-effect": "Debit",
            "change-in-buying-power": "355.0",
            "change-in-buying-power-effect": "Debit",
            "current-buying-power": "10000.0",
            "current-buying-power-effect": "Credit",
            "new-buying-power": "9645.0",
            "new-buying-power-effect": "Credit",
            "isolated-order-margin-requirement": "500.0",
            "isolated-order-margin-requirement-effect": "Debit",
            "is-spread": false,
            "impact": "355.0",
            "effect": "Debit"
        },
        "fee-calculation": {
            "regulatory-fees": "0.03",
            "regulatory-fees-effect": "Debit",
            "clearing-fees": "0.1",
            "clearing-fees-effect": "Debit",
            "commission": "1.0",
            "commission-effect": "Debit",
            "proprietary-index-option-fees": "0.0",
            "proprietary-index-option-fees-effect": "None",
            "total-fees": "1.13",
            "total-fees-effect": "Debit"
        }
    }))
    .unwrap();
    assert!(response.order.is_some());
    assert!(response.complex_order.is_none());
    assert_eq!(response.warnings[0].message, "Market is closed");
    assert!(response.errors.is_empty());

    let effect = response.buying_power_effect.unwrap();
    assert_eq!(effect.new_buying_power.value(), 9645.0);
    assert_eq!(effect.effect, "Debit");

    let fees = response.fee_calculation.unwrap();
    assert_eq!(fees.signed_total_fees(), -1.13);
}

#[test]
fn test_order_serializes_kebab_case() {
    let order: Order = serde_json::from_value(order_json()).unwrap();
    assert_json_include!(
        actual: serde_json::to_value(&order).unwrap(),
        expected: json!({
            "account-number": "5WT00001",
            "time-in-force": "Day",
            "price": 1.45,
            "legs": [{"remaining-quantity": 0.0}]
        })
    );
}
