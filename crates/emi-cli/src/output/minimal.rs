use serde_json::Value;

use super::format_scalar;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "emi",
        "monthly_installment",
        "eligible",
        "best_product_id",
        "balance",
    ];

    match result_obj {
        Value::Object(map) => {
            for key in &priority_keys {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_scalar(val));
                        return;
                    }
                }
            }

            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_scalar(val));
            }
        }
        // Schedules and catalogs: the last row carries the answer
        Value::Array(rows) => match rows.last() {
            Some(Value::Object(last)) => {
                let summary: Vec<String> = last
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, format_scalar(v)))
                    .collect();
                println!("{}", summary.join(" "));
            }
            Some(other) => println!("{}", format_scalar(other)),
            None => {}
        },
        other => println!("{}", format_scalar(other)),
    }
}
