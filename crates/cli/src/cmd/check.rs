//! Token classification.

use serde_json::json;
use tokenparser_core::{is_date_range_token, is_date_token, is_dynamic_string_token};
use tracing::error;

use super::output;

/// Print the name of every grammar accepting `token`.
pub fn run(token: &str, json: bool) {
    let date = is_date_token(token);
    let range = is_date_range_token(token);
    let string = is_dynamic_string_token(token);

    if json {
        let report = json!({
            "token": token,
            "date": date,
            "range": range,
            "string": string,
        });
        println!("{report}");
    } else {
        for (accepted, name) in [(date, "date"), (range, "range"), (string, "string")] {
            if accepted {
                println!("{name}");
            }
        }
    }

    if !(date || range || string) {
        error!("no token grammar accepts {token}");
        output::fail();
    }
}
