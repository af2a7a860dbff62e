use std::collections::BTreeMap;
use std::path::Path;
use std::process;

use inkling_core::catalog::{default_toml, TriggerCatalog};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn open_catalog(file: Option<&str>) -> TriggerCatalog {
    match file {
        Some(path) => die!(
            TriggerCatalog::load(Path::new(path)),
            "Error loading catalog: {}"
        ),
        None => die!(
            TriggerCatalog::from_toml_str(default_toml()),
            "Error parsing embedded catalog: {}"
        ),
    }
}

pub fn export() {
    print!("{}", default_toml());
}

pub fn validate(file: &str) {
    let catalog = die!(
        TriggerCatalog::load(Path::new(file)),
        "Error loading catalog: {}"
    );
    let candidates: usize = catalog
        .trigger_chars()
        .map(|t| catalog.candidates(t).map_or(0, |c| c.len()))
        .sum();
    println!("OK: {} triggers, {} candidates", catalog.len(), candidates);
}

pub fn show(file: Option<&str>, json: bool) {
    let catalog = open_catalog(file);

    if json {
        let map: BTreeMap<String, &[String]> = catalog
            .trigger_chars()
            .filter_map(|t| catalog.candidates(t).map(|c| (t.to_string(), c)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).expect("JSON serialization failed")
        );
    } else {
        for trigger in catalog.trigger_chars() {
            let candidates = catalog.candidates(trigger).unwrap_or(&[]);
            println!("{}  {}", trigger, candidates.join(", "));
        }
    }
}
