// build.rs
// Generates the C header for the exported functions

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => dir,
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set, header generation skipped: {e}");
            return;
        }
    };
    let header = PathBuf::from(&crate_dir).join("include").join("eogll.h");

    match cbindgen::generate(&crate_dir) {
        Ok(bindings) => {
            bindings.write_to_file(&header);
            eprintln!("info: Wrote {}", header.display());
        }
        Err(e) => {
            println!("cargo:warning=Failed to generate C header: {e}");
        }
    }
}
