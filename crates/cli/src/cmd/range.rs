use tokenparser_core::contract::date_range_response;

use super::output;

pub fn run(token: &str, json: bool) {
    output::emit(date_range_response(token), json);
}
