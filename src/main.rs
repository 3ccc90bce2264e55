mod args;
mod config;
mod dispatch;
mod endpoint;
mod entry;
mod error;
mod http;
mod logger;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
