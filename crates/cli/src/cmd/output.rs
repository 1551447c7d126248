//! Shared rendering of parser responses.

use tokenparser_core::contract::{ParsedValue, ParserResponse};
use tokenparser_core::dates::format_date_utc;
use tracing::error;

use crate::logging;

/// Exit status for a token the grammars reject.
pub const TOKEN_FAILURE: i32 = 1;

/// Print `response` and exit with [`TOKEN_FAILURE`] when it is an error.
///
/// With `json` the response contract is printed to stdout either way.
/// Otherwise the bare value goes to stdout and errors are logged.
pub fn emit(response: ParserResponse, json: bool) {
    if json {
        println!("{}", response.to_json());
        if !response.is_success() {
            fail();
        }
        return;
    }

    match response {
        ParserResponse::Parsed(ParsedValue::Text(text)) => println!("{text}"),
        ParserResponse::Parsed(ParsedValue::Range(range)) => {
            println!("{}", format_date_utc(&range.start));
            println!("{}", format_date_utc(&range.end));
        }
        ParserResponse::Error(message) => {
            error!("{message}");
            fail();
        }
    }
}

pub fn fail() -> ! {
    logging::flush();
    std::process::exit(TOKEN_FAILURE);
}
