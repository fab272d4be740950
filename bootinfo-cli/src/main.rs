use anyhow::{Context, Result, bail};
use bootinfo::layouts;
use bootinfo::report::{FieldRecord, report};
use colored::Colorize;
use memmap2::Mmap;
use std::env;
use std::fs::File;
use std::process::ExitCode;

fn print_usage(program: &str) {
    eprintln!(
        "{}{} v{}",
        "Android Things/".blue(),
        "BootInfo".red(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("An utility for parsing the header section of Android boot images.\n");
    eprintln!("{}", "Usage:".cyan());
    eprintln!("   {program} <boot.img> <boot header version>");
}

fn print_record(record: &FieldRecord) {
    // Warnings go to stderr, the record itself to stdout.
    if let Some(warning) = record.warning {
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }
    let label = if record.emphasis {
        record.label.cyan().underline()
    } else {
        record.label.cyan()
    };
    println!("  ▸ {}: {}", label, record.value);
}

fn run(path: &str, version_arg: &str) -> Result<()> {
    let version: u32 = match version_arg.parse() {
        Ok(v) => v,
        Err(_) => bail!("invalid boot header version: 0 <= header_version <= 2"),
    };

    let file = File::open(path).with_context(|| format!("unable to open {path}"))?;
    let mem = unsafe { Mmap::map(&file)? };

    println!("{}:", path.blue());

    // Hand the library exactly the bytes the version's layout occupies; a
    // shorter file surfaces as TruncatedInput.
    let data = match layouts::total_size(version) {
        Some(size) if mem.len() >= size => &mem[..size],
        _ => &mem[..],
    };

    for record in report(version, data)? {
        print_record(&record);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(args.first().map(String::as_str).unwrap_or("bootinfo-cli"));
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}.", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
