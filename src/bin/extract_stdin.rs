//! Reads HTML from stdin and prints the publisher info reply as JSON.
//!
//! Usage: `extract_stdin <requested_url> [resolved_url]`
//!
//! The resolved URL defaults to the requested one. Set `RUST_LOG=debug` to
//! see which rule matched each field.

use std::io::{self, Read};

use publisher_info::publisher::{self, FetchedPage};
use publisher_info::{Error, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("extract_stdin: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(requested_url) = args.next() else {
        eprintln!("usage: extract_stdin <requested_url> [resolved_url] < page.html");
        std::process::exit(2);
    };
    let resolved_url = args.next().unwrap_or_else(|| requested_url.clone());

    let mut body = Vec::new();
    let outcome = match io::stdin().read_to_end(&mut body) {
        Ok(_) => Ok(FetchedPage { resolved_url, body }),
        Err(err) => Err(Error::fetch(err.to_string(), resolved_url)),
    };

    let info = publisher::respond(&requested_url, outcome);
    println!("{}", info.to_json()?);
    Ok(())
}
