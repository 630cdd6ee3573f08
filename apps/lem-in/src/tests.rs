//! Unit tests for the lem-in binary.

#[cfg(test)]
mod helpers {
    use lem_core::RunConfig;
    use lem_graph::parse_farm;

    use crate::pipeline::run;

    /// Two lanes of length 2 and 4; three agents finish in four steps.
    pub const FARM: &str = "\
3
##start
s 0 0
a 1 0
x 0 1
y 1 1
z 2 1
##end
e 2 0
s-a
a-e
s-x
x-y
y-z
z-e
";

    pub fn run_text(text: &str, config: &RunConfig) -> anyhow::Result<String> {
        let farm = parse_farm(text)?;
        let mut out = Vec::new();
        run(config, &farm, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use lem_core::{OutputFormat, RunConfig};

    use super::helpers::{FARM, run_text};

    #[test]
    fn echo_then_moves() {
        let out = run_text(FARM, &RunConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        // 15 input lines, blank, 4 steps.
        assert_eq!(lines.len(), 15 + 1 + 4);
        assert_eq!(lines[0], "3");
        assert_eq!(lines[14], "z-e");
        assert_eq!(lines[15], "");
        assert_eq!(&lines[16..], ["L1-a L3-x", "L1-e L2-a L3-y", "L2-e L3-z", "L3-e"]);
    }

    #[test]
    fn quiet_with_headers_and_flow() {
        let config = RunConfig {
            echo_input:      false,
            step_headers:    true,
            report_flow:     true,
            verify_schedule: true,
            ..RunConfig::default()
        };
        let out = run_text(FARM, &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Max flow: 2");
        assert_eq!(lines[1], "Step 1: L1-a L3-x");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn csv_rows() {
        let config = RunConfig {
            output_format: OutputFormat::Csv,
            echo_input:    false,
            ..RunConfig::default()
        };
        let out = run_text(FARM, &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "step,agent,room");
        assert_eq!(lines[1], "1,1,a");
        assert_eq!(lines.len(), 1 + 8);
    }

    #[test]
    fn disconnected_end_is_an_error() {
        let text = "2\n##start\ns 0 0\n##end\ne 1 0\na 2 0\ns-a\n";
        let err = run_text(text, &RunConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no path"), "{err}");
    }

    #[test]
    fn parse_errors_surface() {
        assert!(run_text("0\n##start\ns 0 0\n##end\ne 1 0\ns-e\n", &RunConfig::default()).is_err());
        assert!(run_text("", &RunConfig::default()).is_err());
    }
}

// ── Command line ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cli {
    use std::io::Write;

    use clap::Parser;

    use lem_core::OutputFormat;

    use crate::{Args, try_main};
    use super::helpers::FARM;

    #[test]
    fn defaults_echo_text() {
        let args = Args::try_parse_from(["lem-in", "colony.txt"]).unwrap();
        let config = args.run_config();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.echo_input);
        assert!(!config.verify_schedule);
        config.validate().unwrap();
    }

    #[test]
    fn csv_turns_echo_off() {
        let args = Args::try_parse_from(["lem-in", "--format", "csv", "colony.txt"]).unwrap();
        let config = args.run_config();
        assert!(!config.echo_input);
        config.validate().unwrap();
    }

    #[test]
    fn csv_with_headers_is_rejected() {
        let args =
            Args::try_parse_from(["lem-in", "-f", "CSV", "--step-headers", "colony.txt"]).unwrap();
        assert!(args.run_config().validate().is_err());
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        assert!(Args::try_parse_from(["lem-in", "--format", "json", "colony.txt"]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "lem-in".into(),
            "--quiet".into(),
            dir.path().join("absent.txt").into_os_string(),
        ])
        .unwrap();
        assert!(try_main(args).is_err());
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FARM.as_bytes()).unwrap();
        let args = Args::try_parse_from([
            "lem-in".into(),
            "--quiet".into(),
            "--verify".into(),
            file.path().as_os_str().to_owned(),
        ])
        .unwrap();
        try_main(args).unwrap();
    }
}
