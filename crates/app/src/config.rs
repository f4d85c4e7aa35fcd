//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments and filling in defaults
//! (including randomized demo defaults that are reproducible with a seed).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// What the tool was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compress a file (or, if no such file exists, the name itself)
    Compress { name: String },
    /// Decompress an artifact
    Decompress { name: String },
    /// Compress and restore generated sample data in memory
    Demo,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    // === Files ===
    /// Output path override (None = derive from the input name)
    pub output_file: Option<PathBuf>,

    // === Behavior ===
    /// Compute sizes only, write nothing
    pub dry_run: bool,

    /// Print the code table after compressing
    pub print_codes: bool,

    /// Print the resolved configuration
    pub print_config: bool,

    /// Print the statistics summary
    pub print_stats: bool,

    /// 0 = warnings, 1 = info, 2 = debug, 3+ = trace
    pub verbosity: u8,

    // === Demo ===
    /// Seed for generated sample data
    pub seed: u64,

    /// Size of generated sample data
    pub demo_bytes: usize,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// If --seed is not given, a time-based seed is used for the demo data.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut command: Option<Command> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut demo_bytes: Option<usize> = None;
        let mut dry_run = false;
        let mut print_codes = false;
        let mut print_config = false;
        let mut print_stats = true;
        let mut verbosity = 0u8;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "compress" | "decompress" if command.is_none() => {
                    let verb = args[i].clone();
                    i += 1;
                    if i >= args.len() {
                        return Err(format!("{} requires a name", verb));
                    }
                    let name = args[i].clone();
                    command = Some(if verb == "compress" {
                        Command::Compress { name }
                    } else {
                        Command::Decompress { name }
                    });
                }
                "demo" if command.is_none() => {
                    command = Some(Command::Demo);
                }
                "--out" | "-o" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--demo-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--demo-bytes requires a number".to_string());
                    }
                    demo_bytes = Some(args[i].parse().map_err(|_| "invalid demo-bytes")?);
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "-v" | "--verbose" => {
                    verbosity = verbosity.saturating_add(1);
                }
                "-vv" => {
                    verbosity = verbosity.saturating_add(2);
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let command = command.ok_or("expected a command: compress, decompress or demo")?;

        if dry_run && !matches!(command, Command::Compress { .. }) {
            return Err("--dry-run only applies to compress".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        Ok(Config {
            command,
            output_file,
            dry_run,
            print_codes,
            print_config,
            print_stats,
            verbosity,
            seed,
            demo_bytes: demo_bytes.unwrap_or_else(|| rng.gen_range(4 * 1024..=64 * 1024)),
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.command {
            Command::Compress { name } => println!("Command: compress {:?}", name),
            Command::Decompress { name } => println!("Command: decompress {:?}", name),
            Command::Demo => println!("Command: demo"),
        }
        match &self.output_file {
            Some(path) => println!("Output: {}", path.display()),
            None => println!("Output: (derived from input name)"),
        }
        println!("Dry run: {}", self.dry_run);
        println!("Verbosity: {}", self.verbosity);
        if self.command == Command::Demo {
            println!("Seed: {}", self.seed);
            println!("Sample size: {} bytes", self.demo_bytes);
        }
        println!();
    }
}

fn print_help() {
    println!("huffpack: static Huffman compression");
    println!();
    println!("USAGE:");
    println!("    huffpack compress <NAME> [OPTIONS]");
    println!("    huffpack decompress <NAME> [OPTIONS]");
    println!("    huffpack demo [OPTIONS]");
    println!();
    println!("    compress reads the file NAME; if there is no such file, the text");
    println!("    of NAME itself is compressed. Output goes to NAME.huf.");
    println!("    decompress reads NAME (e.g. example.txt.huf) and writes");
    println!("    example_unc.txt.");
    println!();
    println!("OPTIONS:");
    println!("    --out, -o <PATH>        Output path (default: derived from NAME)");
    println!("    --dry-run               Compress: report sizes, write nothing");
    println!("    --print-codes           Compress: print the code table");
    println!();
    println!("    --seed <N>              Demo: random seed for sample data");
    println!("    --demo-bytes <N>        Demo: sample size (default: random 4-64 KiB)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-stats              Don't print the statistics summary");
    println!("    -v, -vv                 More log output (or set HUFFPACK_LOG)");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress notes.txt             # writes notes.txt.huf");
    println!("    huffpack decompress notes.txt.huf       # writes notes_unc.txt");
    println!("    huffpack compress notes.txt --dry-run   # size estimate only");
    println!("    huffpack demo --seed 42                 # deterministic demo");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compress_command() {
        let config = Config::from_args(&args(&["compress", "notes.txt", "--print-codes"])).unwrap();
        assert_eq!(
            config.command,
            Command::Compress {
                name: "notes.txt".to_string()
            }
        );
        assert!(config.print_codes);
        assert!(config.print_stats);
        assert!(config.output_file.is_none());
    }

    #[test]
    fn test_decompress_with_output() {
        let config = Config::from_args(&args(&["decompress", "a.txt.huf", "-o", "out.txt", "-v"])).unwrap();
        assert_eq!(
            config.command,
            Command::Decompress {
                name: "a.txt.huf".to_string()
            }
        );
        assert_eq!(config.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_demo_is_deterministic_with_seed() {
        let a = Config::from_args(&args(&["demo", "--seed", "42"])).unwrap();
        let b = Config::from_args(&args(&["demo", "--seed", "42"])).unwrap();

        assert_eq!(a.seed, 42);
        assert_eq!(a.demo_bytes, b.demo_bytes);
        assert!((4 * 1024..=64 * 1024).contains(&a.demo_bytes));
    }

    #[test]
    fn test_explicit_demo_bytes() {
        let config = Config::from_args(&args(&["demo", "--demo-bytes", "100", "--no-stats"])).unwrap();
        assert_eq!(config.demo_bytes, 100);
        assert!(!config.print_stats);
    }

    #[test]
    fn test_missing_command() {
        assert!(Config::from_args(&args(&["--dry-run"])).is_err());
        assert!(Config::from_args(&[]).is_err());
    }

    #[test]
    fn test_missing_values() {
        assert!(Config::from_args(&args(&["compress"])).is_err());
        assert!(Config::from_args(&args(&["demo", "--seed"])).is_err());
        assert!(Config::from_args(&args(&["demo", "--seed", "abc"])).is_err());
    }

    #[test]
    fn test_dry_run_only_for_compress() {
        assert!(Config::from_args(&args(&["compress", "x", "--dry-run"])).unwrap().dry_run);
        assert!(Config::from_args(&args(&["decompress", "x.huf", "--dry-run"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = Config::from_args(&args(&["demo", "--fast"])).unwrap_err();
        assert!(err.contains("--fast"));
    }
}
