//! sitelist - demo driver
//!
//! Builds the item list, scrolls through a few pages and optionally opens a
//! site in a pooled web view.

use std::env;

use sitelist::process::open_in_web_view;
use sitelist::{
    FeedConfig, FeedError, FolderItem, ItemStore, NAME, Result, SiteListError, VERSION,
    WebViewProvider,
};

/// Command line options
#[derive(Debug)]
struct Options {
    pages: usize,
    open: Option<String>,
    show_failures: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pages: 0,
            open: None,
            show_failures: FeedConfig::default().surface_failures,
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: {} [--pages N] [--open ID] [--hide-failures]", NAME);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pages" => {
                let value = iter
                    .next()
                    .ok_or_else(|| SiteListError::Other("--pages needs a value".to_string()))?;
                options.pages = value
                    .parse()
                    .map_err(|_| SiteListError::Other(format!("invalid page count: {}", value)))?;
            }
            "--open" => {
                let id = iter
                    .next()
                    .ok_or_else(|| SiteListError::Other("--open needs an item id".to_string()))?;
                options.open = Some(id.clone());
            }
            "--hide-failures" => options.show_failures = false,
            other => return Err(SiteListError::Other(format!("unknown argument: {}", other))),
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<()> {
    println!("{} v{}", NAME, VERSION);

    let config = FeedConfig::default().with_surface_failures(options.show_failures);
    let mut store = ItemStore::with_config(config);

    // Each pass stands in for the last row scrolling into view
    for _ in 0..options.pages {
        let last_id = match store.last() {
            Some(last) => last.id().to_string(),
            None => break,
        };
        store.on_item_appeared(&last_id);
        report_failure(&mut store);
    }
    report_failure(&mut store);

    for item in store.items() {
        print_item(item, 0);
    }
    println!("{} items loaded", store.len());

    if let Some(id) = options.open {
        let site = store
            .find(&id)
            .and_then(FolderItem::as_site)
            .ok_or(FeedError::UnknownItem(id))?;

        let provider = WebViewProvider::new();
        let web_view = open_in_web_view(&provider, site.url())?;
        println!(
            "Opened {} ({}) in process {} of pool {}",
            site.description(),
            site.url(),
            web_view.process_id().unwrap_or_default(),
            web_view.process_pool().id()
        );
    }

    Ok(())
}

fn report_failure(store: &mut ItemStore) {
    if let Some(failure) = store.failure() {
        println!("⚠️  Web Failure: {}", failure);
        store.dismiss_failure();
    }
}

fn print_item(item: &FolderItem, depth: usize) {
    let indent = "  ".repeat(depth);
    match item {
        FolderItem::Site(site) => println!("{}↗ {} [{}]", indent, site.description(), site.id()),
        FolderItem::Folder(folder) => {
            println!("{}▸ {} [{}]", indent, folder.description(), folder.id());
            for child in folder.items() {
                print_item(child, depth + 1);
            }
        }
    }
}
