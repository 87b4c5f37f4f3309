use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use cannonsim::io::csv;
use cannonsim::io::settings;
use cannonsim::sim;

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Args {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            input_dir: PathBuf::from("input_files"),
            output_dir: PathBuf::from("output_files"),
        }
    }
}

fn parse_args(argv: &[String]) -> Result<Option<Args>, String> {
    let mut args = Args::default();
    let mut iter = argv.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((f, v)) => (f, Some(v.to_string())),
            None => (arg.as_str(), None),
        };

        match flag {
            "-h" | "--help" => return Ok(None),
            "-i" | "--input_dir" | "-o" | "--output_dir" => {
                let value = match inline_value {
                    Some(v) => v,
                    None => iter
                        .next()
                        .cloned()
                        .ok_or_else(|| format!("missing value for {flag}"))?,
                };
                if flag == "-i" || flag == "--input_dir" {
                    args.input_dir = PathBuf::from(value);
                } else {
                    args.output_dir = PathBuf::from(value);
                }
            }
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }

    Ok(Some(args))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [-i|--input_dir <dir>] [-o|--output_dir <dir>]");
    eprintln!();
    eprintln!("Reads <input_dir>/{} (default: input_files),", settings::SETTINGS_FILE);
    eprintln!("writes <output_dir>/{} (default: output_files).", csv::OUTPUT_FILE);
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let params = settings::read_settings_dir(&args.input_dir)?;
    let (result, trajectory) = sim::simulate_trace(&params)?;
    csv::write_result_dir(&args.output_dir, &result)?;

    let steps = trajectory.len() - 1;
    let flight_time = trajectory.last().map_or(0.0, |s| s.time);

    println!();
    println!("====================================================================");
    println!("  CANNONSIM — fixed-step projectile simulation");
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Gravity:       {:>10.3} m/s^2   Mass:           {:>10.3} kg",
        params.gravity, params.mass
    );
    println!(
        "  Velocity:      {:>10.3} m/s     Angle:          {:>10.4} rad",
        params.velocity, params.angle
    );
    println!(
        "  Height:        {:>10.3} m       Air resistance: {:>10.4}",
        params.height, params.air_resistance
    );
    println!("  Time step:     {:>10.4} s", params.time_step);
    println!();
    println!("  Landing");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Distance:      {:>10.6} m", result.distance);
    println!("  Final vx:      {:>10.6} m/s", result.final_vx);
    println!("  Final vy:      {:>10.6} m/s", result.final_vy);
    println!();
    println!(
        "  Simulation: {} steps, dt={} s, flight time {:.2} s",
        steps, params.time_step, flight_time
    );
    println!(
        "  Results written to {}",
        args.output_dir.join(csv::OUTPUT_FILE).display()
    );
    println!("====================================================================");
    println!();

    Ok(())
}

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("cannonsim");

    let args = match parse_args(&argv[1..]) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage(program);
            return;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_when_no_arguments() {
        let args = parse_args(&[]).unwrap().unwrap();
        assert_eq!(args.input_dir, PathBuf::from("input_files"));
        assert_eq!(args.output_dir, PathBuf::from("output_files"));
    }

    #[test]
    fn accepts_short_and_long_flags() {
        let args = parse_args(&argv(&["-i", "in", "--output_dir", "out"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.input_dir, PathBuf::from("in"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn accepts_equals_form() {
        let args = parse_args(&argv(&["--input_dir=in", "--output_dir=out"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.input_dir, PathBuf::from("in"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse_args(&argv(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("unrecognized"));
    }

    #[test]
    fn rejects_flag_without_value() {
        let err = parse_args(&argv(&["-i"])).unwrap_err();
        assert!(err.contains("missing value"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(&argv(&["--help"])).unwrap().is_none());
        assert!(parse_args(&argv(&["-h"])).unwrap().is_none());
    }
}
