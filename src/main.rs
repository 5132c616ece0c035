//! Demo binary: build deep links for records, and open one by routing its
//! decoded payload to the registered list view.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use parking_lot::Mutex;
use uuid::Uuid;

use viewlink::{deeplink, Dispatcher, EventRegistry, Payload, Value, ViewDesc};

/// Id the demo list view registers under; deep links target it by name.
const SELECTED_INDEX_ID: &str = "#selectedIndex";

#[derive(Parser)]
#[command(
    name = "viewlink",
    version,
    about = "Build custom-scheme deep links and route their payloads to registered views"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a deep-link URL from scheme, path segments and query pairs.
    Build {
        /// URL scheme, typically the application bundle id.
        #[arg(long, default_value = "com.example.viewlink")]
        scheme: String,
        /// Path segments, in order.
        #[arg(long = "path", default_value = "Children")]
        path: Vec<String>,
        /// Query pairs as key=value.
        #[arg(long = "query", value_parser = parse_pair)]
        query: Vec<(String, String)>,
    },
    /// Parse a deep-link URL and route its record index to the demo view.
    Open {
        /// The deep-link URL to open.
        url: String,
        /// Scheme this app answers to; links with other schemes are
        /// rejected.
        #[arg(long, default_value = "com.example.viewlink")]
        scheme: String,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Build {
            scheme,
            path,
            query,
        } => build(&scheme, &path, &query),
        Command::Open { url, scheme } => open(&url, &scheme),
    }
}

fn build(scheme: &str, path: &[String], query: &[(String, String)]) -> Result<()> {
    let key_values: HashMap<String, String> = query.iter().cloned().collect();
    let url = deeplink::build_url(scheme, path, &key_values)?;
    println!("{url}");
    Ok(())
}

/// The open-URL flow: decode the link, then push the selection straight to
/// the list view that owns the well-known id.
fn open(input: &str, expected_scheme: &str) -> Result<()> {
    let link = deeplink::parse_url(input)?;
    if link.scheme != expected_scheme {
        bail!("link scheme '{}' is not handled by this app", link.scheme);
    }
    if link.path != ["/", "Children"] {
        bail!("no scene registered for path {:?}", link.path);
    }
    let index = link
        .query
        .get("index")
        .context("link carries no 'index' record")?;
    let uuid: Uuid = index
        .parse()
        .with_context(|| format!("'{index}' is not a record index"))?;

    let registry = Arc::new(EventRegistry::new());
    let dispatcher = Dispatcher::new(registry);

    // Stand-in for the composed list view: local selection state, plus a
    // receiver registered under the well-known id.
    let selection: Arc<Mutex<Option<Uuid>>> = Arc::new(Mutex::new(None));
    let view_selection = Arc::clone(&selection);
    let _list_view = ViewDesc::new()
        .with_id(SELECTED_INDEX_ID)
        .on_receive(&dispatcher, move |event| {
            let Some(Value::Uuid(selected)) = event.payload.get("uuid") else {
                return;
            };
            *view_selection.lock() = Some(*selected);
        });

    let mut payload = Payload::new();
    payload.insert("uuid".to_string(), Value::Uuid(uuid));
    tracing::info!(
        target_id = SELECTED_INDEX_ID,
        payload = %serde_json::to_string(&payload)?,
        "routing decoded link"
    );
    let delivered = dispatcher.send(SELECTED_INDEX_ID, payload);

    match (delivered, *selection.lock()) {
        (true, Some(selected)) => println!("selected record {selected}"),
        _ => println!("no view answered the link"),
    }
    Ok(())
}
