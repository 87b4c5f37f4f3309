use std::io::{self, Write};
use std::path::Path;

use crate::sim::state::SimulationResult;

/// Name of the result file inside the output directory.
pub const OUTPUT_FILE: &str = "output.txt";

/// Write the landing state in the cannonsim output format.
///
/// Columns: Dist, lastvx, lastvy — one header line and one data line, each
/// value formatted to 6 decimal places.
pub fn write_result<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(writer, "Dist,lastvx,lastvy")?;
    writeln!(
        writer,
        "{:.6},{:.6},{:.6}",
        result.distance, result.final_vx, result.final_vy
    )?;
    Ok(())
}

/// Write the result file into the given output directory, creating the
/// directory first if it does not exist.
pub fn write_result_dir(output_dir: &Path, result: &SimulationResult) -> io::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let mut file = std::fs::File::create(output_dir.join(OUTPUT_FILE))?;
    write_result(&mut file, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_has_header_and_one_data_row() {
        let result = SimulationResult {
            distance: 123.456789,
            final_vx: 10.5,
            final_vy: -20.25,
        };

        let mut buf = Vec::new();
        write_result(&mut buf, &result).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Dist,lastvx,lastvy");
        assert_eq!(lines[1], "123.456789,10.500000,-20.250000");
    }

    #[test]
    fn values_are_rounded_to_six_decimals() {
        let result = SimulationResult {
            distance: 1.0000004,
            final_vx: 2.0000001,
            final_vy: -0.1234567,
        };

        let mut buf = Vec::new();
        write_result(&mut buf, &result).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.ends_with("1.000000,2.000000,-0.123457\n"));
    }
}
