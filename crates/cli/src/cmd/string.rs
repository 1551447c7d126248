use tokenparser_core::contract::dynamic_string_response;

use super::output;

pub fn run(token: &str, json: bool) {
    let mut rng = rand::rng();
    output::emit(dynamic_string_response(token, &mut rng), json);
}
