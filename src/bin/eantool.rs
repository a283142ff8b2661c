use clap::{Parser, Subcommand};
use rust_ean::catalog::{InMemoryCatalog, ProductCatalog};
use rust_ean::decoder::SymbolDecoder;
use rust_ean::detector::GuardLocator;
use rust_ean::encoder::{Rasterizer, RenderOptions};
use rust_ean::error::CatalogError;
use rust_ean::tools::{ascii_bars, describe_outcome, grouped_modules, scan_stats};
use rust_ean::utils::binarization::binarize_row;
use rust_ean::{Code13, ModuleBits, encode};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "eantool", version, about = "RustEAN CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the check digit and module pattern for a 12-digit payload
    Encode { payload: String },
    /// Print a text preview of the bars for a payload
    Render {
        payload: String,
        #[arg(long, default_value_t = 4)]
        rows: usize,
    },
    /// Decode a 95-character 0/1 module string
    DecodeBits { bits: String },
    /// Encode, rasterize, binarize and decode a payload
    Roundtrip {
        payload: String,
        #[arg(long)]
        module_width: Option<usize>,
        #[arg(long)]
        quiet_zone: Option<usize>,
        #[arg(long, default_value_t = 128)]
        threshold: u8,
    },
    /// Verify the check digit of a 13-digit code
    Check { code: String },
    /// Store name/payload pairs in an in-memory catalog and look them up
    CatalogDemo {
        /// Entries as NAME=PAYLOAD
        entries: Vec<String>,
    },
}

fn init_tracing() {
    let level = std::env::var("EAN_LOG")
        .ok()
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Encode { payload } => encode_cmd(&payload),
        Command::Render { payload, rows } => render_cmd(&payload, rows),
        Command::DecodeBits { bits } => decode_bits_cmd(&bits),
        Command::Roundtrip {
            payload,
            module_width,
            quiet_zone,
            threshold,
        } => roundtrip_cmd(&payload, module_width, quiet_zone, threshold),
        Command::Check { code } => check_cmd(&code),
        Command::CatalogDemo { entries } => catalog_demo_cmd(&entries),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn encode_cmd(payload: &str) -> bool {
    match encode(payload) {
        Ok(encoded) => {
            println!("Code:    {}", encoded.code);
            println!("Check:   {}", encoded.code.check_digit());
            println!("Modules: {}", encoded.modules);
            println!("Layout:  {}", grouped_modules(&encoded.modules));
            true
        }
        Err(err) => {
            eprintln!("Encode failed: {}", err);
            false
        }
    }
}

fn render_cmd(payload: &str, rows: usize) -> bool {
    match encode(payload) {
        Ok(encoded) => {
            println!("{}", ascii_bars(&encoded.modules, rows.max(1)));
            println!("{}", encoded.code);
            true
        }
        Err(err) => {
            eprintln!("Encode failed: {}", err);
            false
        }
    }
}

fn decode_bits_cmd(bits: &str) -> bool {
    let modules: ModuleBits = match bits.trim().parse() {
        Ok(modules) => modules,
        Err(err) => {
            eprintln!("Invalid module string: {}", err);
            return false;
        }
    };

    match SymbolDecoder::decode(&modules) {
        Ok(outcome) => {
            println!("Decoded: {}", describe_outcome(&outcome));
            outcome.is_complete()
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            false
        }
    }
}

fn roundtrip_cmd(
    payload: &str,
    module_width: Option<usize>,
    quiet_zone: Option<usize>,
    threshold: u8,
) -> bool {
    let encoded = match encode(payload) {
        Ok(encoded) => encoded,
        Err(err) => {
            eprintln!("Encode failed: {}", err);
            return false;
        }
    };

    let defaults = RenderOptions::from_env();
    let opts = RenderOptions {
        module_width: module_width.unwrap_or(defaults.module_width),
        quiet_zone: quiet_zone.unwrap_or(defaults.quiet_zone),
        ..defaults
    };
    let image = match Rasterizer::render(&encoded.modules, &opts) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Render failed: {}", err);
            return false;
        }
    };
    println!(
        "Raster: {}x{} (module={}px quiet={}px)",
        image.width(),
        image.height(),
        opts.module_width,
        opts.quiet_zone
    );

    let row = rust_ean::pipeline::middle_row(&image);
    let line = binarize_row(row, threshold);
    let stats = scan_stats(&line);
    println!(
        "Scan line: dark_pixels={} total={} dark_ratio={:.2}%",
        stats.dark_pixels,
        stats.total_pixels,
        stats.dark_ratio * 100.0
    );

    let located = match GuardLocator::locate(&line) {
        Ok(located) => located,
        Err(err) => {
            eprintln!("Locate failed: {}", err);
            return false;
        }
    };
    println!(
        "Symbol: pixels {}..={} module_width={:.3}",
        located.start, located.end, located.module_width
    );

    match SymbolDecoder::decode(&located.modules) {
        Ok(outcome) => {
            println!("Encoded: {}", encoded.code);
            println!("Decoded: {}", describe_outcome(&outcome));
            let matched = outcome.code() == Some(&encoded.code);
            println!("Match: {}", if matched { "yes" } else { "no" });
            matched
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            false
        }
    }
}

fn check_cmd(code: &str) -> bool {
    match Code13::parse(code.trim()) {
        Ok(code) if code.has_valid_check_digit() => {
            println!("{}: check digit ok", code);
            true
        }
        Ok(code) => {
            let expected = encode(&code.payload().to_string())
                .map(|e| e.code.check_digit().to_string())
                .unwrap_or_else(|_| "?".into());
            println!(
                "{}: check digit mismatch (found {}, expected {})",
                code,
                code.check_digit(),
                expected
            );
            false
        }
        Err(err) => {
            eprintln!("Invalid code: {}", err);
            false
        }
    }
}

fn catalog_demo_cmd(entries: &[String]) -> bool {
    let catalog = InMemoryCatalog::new();
    let mut ok = true;

    for entry in entries {
        let Some((name, payload)) = entry.split_once('=') else {
            eprintln!("Skipping {:?}: expected NAME=PAYLOAD", entry);
            ok = false;
            continue;
        };
        if name.trim().is_empty() {
            eprintln!("Skipping {:?}: empty name", entry);
            ok = false;
            continue;
        }
        let encoded = match encode(payload.trim()) {
            Ok(encoded) => encoded,
            Err(err) => {
                eprintln!("Skipping {:?}: {}", entry, err);
                ok = false;
                continue;
            }
        };
        match catalog.add(name.trim(), &encoded.code) {
            Ok(record) => println!("Added #{} {} -> {}", record.id, record.name, record.code),
            Err(CatalogError::Duplicate(code)) => println!("Duplicate: {} already stored", code),
            Err(err) => {
                eprintln!("Storage error: {}", err);
                ok = false;
            }
        }
    }

    match catalog.list() {
        Ok(records) => {
            println!("Catalog ({} products, newest first):", records.len());
            for record in records {
                let found = catalog
                    .find_by_code(&record.code)
                    .ok()
                    .flatten()
                    .is_some();
                println!(
                    "  #{} {} {} lookup={}",
                    record.id,
                    record.code,
                    record.name,
                    if found { "ok" } else { "missing" }
                );
            }
        }
        Err(err) => {
            eprintln!("Storage error: {}", err);
            ok = false;
        }
    }
    ok
}
