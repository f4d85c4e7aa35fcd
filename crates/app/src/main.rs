//! huffpack: compress and decompress files with a static Huffman code.

mod config;
mod input_gen;
mod logging;

use config::{Command, Config};
use huffpack_core::codec::{compress_bytes, compress_to, decompress_bytes, decompress_to, estimate_bytes};
use huffpack_core::frequency::{load_source, SourceKind};
use huffpack_core::naming::{compressed_path, decompressed_path};
use huffpack_core::{CodeTable, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    logging::init(config.verbosity);

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    match &config.command {
        Command::Compress { name } if config.dry_run => {
            let (input, kind) = load_source(name);
            let estimate = estimate_bytes(&input)?;

            let source = match kind {
                SourceKind::File => "file",
                SourceKind::Literal => "literal text",
            };
            println!(
                "{} ({}): {} bytes -> {} bytes (dry run, nothing written)",
                name,
                source,
                input.len(),
                estimate.stats.artifact_bytes
            );
            if config.print_codes {
                print_codes(&estimate.codes);
            }
            if config.print_stats {
                estimate.stats.print_summary();
            }
        }

        Command::Compress { name } => {
            let output = config.output_file.clone().unwrap_or_else(|| compressed_path(name));
            let compressed = compress_to(name, &output)?;

            println!("{} -> {}", name, output.display());
            if config.print_codes {
                print_codes(&compressed.codes);
            }
            if config.print_stats {
                compressed.stats.print_summary();
            }
        }

        Command::Decompress { name } => {
            let output = config.output_file.clone().unwrap_or_else(|| decompressed_path(name));
            let decompressed = decompress_to(name, &output)?;

            println!("{} -> {}", name, output.display());
            if config.print_stats {
                decompressed.stats.print_summary();
            }
        }

        Command::Demo => run_demo(config)?,
    }

    Ok(())
}

fn run_demo(config: &Config) -> Result<()> {
    println!("Generating {} bytes of sample data (seed {})", config.demo_bytes, config.seed);
    let input = input_gen::generate_sample_data(config.seed, config.demo_bytes);

    let compressed = compress_bytes(&input)?;
    if let Some(path) = &config.output_file {
        std::fs::write(path, &compressed.artifact)?;
        log::info!("wrote artifact to {}", path.display());
    }

    let decompressed = decompress_bytes(&compressed.artifact)?;

    if config.print_codes {
        print_codes(&compressed.codes);
    }
    if config.print_stats {
        compressed.stats.print_summary();
    }

    if decompressed.bytes == input {
        println!("✓ Round trip OK: {} bytes restored", decompressed.bytes.len());
        Ok(())
    } else {
        println!("✗ Round trip FAILED: output differs from input");
        std::process::exit(1);
    }
}

fn print_codes(codes: &CodeTable) {
    println!("\n=== Code Table ({} symbols) ===", codes.len());
    for (symbol, code) in codes.iter() {
        println!("{:>6}  {:>3}  {}", symbol.to_string(), code.len(), code);
    }
}
