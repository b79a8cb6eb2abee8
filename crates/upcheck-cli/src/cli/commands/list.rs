//! `upcheck list` – describe the catalog.

use upcheck_core::catalog::{Variant, PROVIDERS};

pub fn run_list() {
    for p in PROVIDERS {
        let variant = match p.variant {
            Variant::Text => "plain-text",
            Variant::Feed => "feed",
        };
        println!("{} ({}): {}", p.name, variant, p.description);
        for out in p.outputs {
            println!("  {:<9} {}", out.name, out.description);
        }
    }
}
