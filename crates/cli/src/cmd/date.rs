use tokenparser_core::clock::{FixedClock, SystemClock};
use tokenparser_core::contract::date_token_response;
use tracing::debug;

use super::output;
use crate::DateArgs;

pub fn run(args: &DateArgs, json: bool) {
    let response = match args.today {
        Some(today) => {
            debug!(%today, "clock pinned");
            date_token_response(&args.token, &FixedClock::on(today))
        }
        None => date_token_response(&args.token, &SystemClock),
    };
    output::emit(response, json);
}
