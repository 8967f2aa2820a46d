//! Builds the browser bundle into `dist/`
//!
//! Run from the workspace root with `cargo run -p tanks_wasm --bin pack-wasm`.

use std::{
    io::{self, Write},
    process::{exit, Command, Output},
};

const WASM_LIB: &str = "tanks_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const OUTPUT_DIR: &str = "dist";

fn main() {
    let wasm_path = format!("target/{}/release/{}.wasm", WASM_TARGET, WASM_LIB);

    println!("\n📦 Packaging [[ {} ]] into '{}'\n", WASM_LIB, OUTPUT_DIR);

    let mut build = Command::new("cargo");
    build
        .args(["build", "-p", WASM_LIB, "--lib", "--release"])
        .args(["--target", WASM_TARGET]);
    run_step(&mut build);

    let mut bindgen = Command::new("wasm-bindgen");
    bindgen
        .arg(&wasm_path)
        .args(["--out-dir", OUTPUT_DIR, "--target", "web", "--no-typescript"]);
    run_step(&mut bindgen);

    let mut copy_page = Command::new("cp");
    copy_page
        .arg(format!("{}/index.html", WASM_LIB))
        .arg(format!("{}/", OUTPUT_DIR));
    run_step(&mut copy_page);

    println!("\n⚡ Open ./{}/index.html through any static file server\n", OUTPUT_DIR);
}

fn run_step(command: &mut Command) {
    println!("EXECUTING :: ( {:?} )", command);
    let output = match command.output() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("could not start {:?} :: {}", command.get_program(), e);
            exit(1);
        }
    };

    if !output.status.success() {
        println!("FAILURE ✖");
        forward_output(&output);
        exit(output.status.code().unwrap_or(1));
    }
    println!("SUCCESS ✔");
}

fn forward_output(output: &Output) {
    // best effort, the step already failed
    let _ = io::stdout().write_all(&output.stdout);
    let _ = io::stderr().write_all(&output.stderr);
}
