//! Arranger CLI
//!
//! Generate first-round pairings from a qualification roster, save the
//! bracket sheet, and export tables and printable reports.

use std::env;
use std::path::{Path, PathBuf};

use arranger::{read_roster, save_table, save_text, ArrangeConfig, BracketSheet};
use bracket_core::{generate, MatchKind, SUPPORTED_SIZES};

fn print_usage() {
    println!("Archery Bracket Arranger");
    println!();
    println!("Usage:");
    println!("  arranger generate <roster.csv> [options]");
    println!("  arranger show <sheet.json>");
    println!("  arranger export <sheet.json> [--csv FILE] [--txt FILE]");
    println!();
    println!("Generate options:");
    println!("  --title TEXT    Sheet title");
    println!("  --kind KIND     Match format: individual or team");
    println!("  --config FILE   TOML file with title/kind defaults");
    println!("  --skip-header   Skip one heading row in the roster");
    println!("  --out FILE      Where to save the sheet (default bracket_sheet.json)");
    println!("  --csv FILE      Also export the table as CSV");
    println!("  --txt FILE      Also export the printable report");
    println!();
    println!("Examples:");
    println!("  arranger generate roster.csv --kind team --out sheet.json");
    println!("  arranger export sheet.json --csv bracket.csv --txt bracket.txt");
}

fn parse_kind(spec: &str) -> MatchKind {
    match spec.to_lowercase().as_str() {
        "individual" | "solo" => MatchKind::Individual,
        "team" => MatchKind::Team,
        _ => {
            eprintln!("Unknown match kind: {} (using individual)", spec);
            MatchKind::Individual
        }
    }
}

fn run_generate(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: generate requires a roster file");
        print_usage();
        return;
    }

    let roster_path = PathBuf::from(&args[0]);

    let mut config = ArrangeConfig::default();
    let mut title: Option<String> = None;
    let mut kind: Option<MatchKind> = None;
    let mut skip_header = false;
    let mut out_path = PathBuf::from("bracket_sheet.json");
    let mut csv_path: Option<PathBuf> = None;
    let mut txt_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--title" | "-t" => {
                if i + 1 < args.len() {
                    title = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--kind" | "-k" => {
                if i + 1 < args.len() {
                    kind = Some(parse_kind(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match ArrangeConfig::load(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            return;
                        }
                    }
                    i += 1;
                }
            }
            "--skip-header" => skip_header = true,
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--csv" => {
                if i + 1 < args.len() {
                    csv_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--txt" => {
                if i + 1 < args.len() {
                    txt_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let kind = kind.unwrap_or(config.kind);
    let title = title.unwrap_or(config.title);

    let entrants = match read_roster(&roster_path, skip_header) {
        Ok(entrants) => entrants,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let bracket = match generate(&entrants) {
        Ok(bracket) => bracket,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    if let Some(adj) = &bracket.adjustment {
        let sizes: Vec<String> = SUPPORTED_SIZES.iter().map(|s| s.to_string()).collect();
        eprintln!(
            "Warning: {} entrants does not fill a bracket (recommended sizes: {}).",
            adj.supplied,
            sizes.join(", ")
        );
        eprintln!(
            "Drawing the top {} seeds, cutting the bottom {}.",
            adj.size, adj.dropped
        );
    }

    let sheet = BracketSheet::new(&title, kind, entrants.len() as u32, bracket);

    sheet.print_summary();
    println!("{}", sheet.pairing_table());

    if let Err(e) = sheet.save(&out_path) {
        eprintln!("Error: {}", e);
        return;
    }
    println!("Sheet saved to {}", out_path.display());

    export_files(&sheet, csv_path.as_deref(), txt_path.as_deref());
}

fn run_show(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: show requires a sheet file");
        print_usage();
        return;
    }

    match BracketSheet::load(Path::new(&args[0])) {
        Ok(sheet) => {
            sheet.print_summary();
            println!("{}", sheet.pairing_table());
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn run_export(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: export requires a sheet file");
        print_usage();
        return;
    }

    let sheet = match BracketSheet::load(Path::new(&args[0])) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut csv_path: Option<PathBuf> = None;
    let mut txt_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--csv" => {
                if i + 1 < args.len() {
                    csv_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--txt" => {
                if i + 1 < args.len() {
                    txt_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if csv_path.is_none() && txt_path.is_none() {
        eprintln!("Error: export needs --csv and/or --txt");
        return;
    }

    export_files(&sheet, csv_path.as_deref(), txt_path.as_deref());
}

fn export_files(sheet: &BracketSheet, csv_path: Option<&Path>, txt_path: Option<&Path>) {
    if let Some(path) = csv_path {
        match save_table(path, sheet) {
            Ok(()) => println!("Table exported to {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    if let Some(path) = txt_path {
        match save_text(path, sheet) {
            Ok(()) => println!("Report exported to {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "generate" | "gen" => run_generate(&args[2..]),
        "show" => run_show(&args[2..]),
        "export" => run_export(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
