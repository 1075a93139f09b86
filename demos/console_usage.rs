//! Walkthrough of the console error flow: a remote call fails, the service
//! layer wraps the failure in a coded error, and the presentation layer
//! renders it with the installed catalog.
//!
//! Run with: cargo run --example console_usage

use console_errors::{
    console_err, install_resolver, internal_err, Catalog, ConsoleError, ErrorCode, Result,
};
use std::error::Error;
use std::io;

/// Stand-in for the remote call to the device.
fn fetch_network_config(interface: &str) -> io::Result<String> {
    match interface {
        "eth0" => Ok("dhcp".to_owned()),
        "wlan9" => Err(io::Error::from(io::ErrorKind::TimedOut)),
        _ => Err(io::Error::from(io::ErrorKind::NotFound)),
    }
}

fn load_interface(interface: &str) -> Result<String> {
    fetch_network_config(interface).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => console_err!(ErrorCode::NotFound, cause = e; interface),
        io::ErrorKind::TimedOut => {
            console_err!(ErrorCode::RequestTimeout, cause = e; format!("interface {interface}"))
        }
        _ => ConsoleError::internal_error_with_cause(e, "Unexpected device reply"),
    })
}

fn render(err: &ConsoleError) {
    println!("  user sees : {}", err);
    let mut line = String::new();
    if err.error_log().write_to(&mut line).is_ok() {
        println!("  log line  : {}", line);
    }
    if let Some(source) = err.source() {
        println!("  caused by : {}", source);
    }
}

fn main() {
    println!("=== Without a catalog ===");
    if let Err(err) = load_interface("wlan0") {
        render(&err);
    }

    install_resolver(Catalog::english());

    println!("\n=== With the English catalog ===");
    for interface in ["eth0", "wlan0", "wlan9"] {
        match load_interface(interface) {
            Ok(mode) => println!("  {interface}: {mode}"),
            Err(err) => render(&err),
        }
    }

    println!("\n=== Internal errors carry literal text ===");
    render(&internal_err!("Snapshot {} could not be decoded", 3));

    println!("\n=== Custom bundle ===");
    let bundle = "NOT_FOUND=No interface named {0}\n";
    match Catalog::from_properties(bundle) {
        Ok(catalog) => {
            let err = ConsoleError::from_parts(ErrorCode::NotFound, None, ["wlan0"]);
            println!("  user sees : {}", err.message_with(&catalog));
        }
        Err(err) => println!("  bad bundle: {}", err),
    }
}
