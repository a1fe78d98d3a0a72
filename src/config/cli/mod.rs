//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! evaluar cycle --config evaluar.yaml --state state.json
//! evaluar watch --config evaluar.yaml --state state.json --interval 30
//! evaluar validate evaluar.yaml
//! evaluar status --state state.json --format json
//! ```

mod core;
mod types;

pub use core::{
    apply_overrides, parse_args, Cli, Command, CycleArgs, EngineArgs, StatusArgs, ValidateArgs,
    WatchArgs,
};
pub use types::OutputFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use std::path::PathBuf;

    #[test]
    fn test_parse_cycle_command() {
        let cli = parse_args([
            "evaluar", "cycle", "--config", "e.yaml", "--state", "s.json",
        ])
        .unwrap();
        match cli.command {
            Command::Cycle(args) => {
                assert_eq!(args.engine.config, PathBuf::from("e.yaml"));
                assert_eq!(args.engine.state, PathBuf::from("s.json"));
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.engine.predictions.is_none());
            }
            _ => panic!("Expected Cycle command"),
        }
    }

    #[test]
    fn test_parse_cycle_json_with_overrides() {
        let cli = parse_args([
            "evaluar",
            "cycle",
            "-c",
            "e.yaml",
            "-s",
            "s.json",
            "--format",
            "json",
            "--predictions",
            "/tmp/p.csv",
            "--labels",
            "/tmp/l.csv",
        ])
        .unwrap();
        match cli.command {
            Command::Cycle(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.engine.predictions, Some(PathBuf::from("/tmp/p.csv")));
                assert_eq!(args.engine.labels, Some(PathBuf::from("/tmp/l.csv")));
            }
            _ => panic!("Expected Cycle command"),
        }
    }

    #[test]
    fn test_parse_watch_defaults() {
        let cli = parse_args([
            "evaluar", "watch", "--config", "e.yaml", "--state", "s.json",
        ])
        .unwrap();
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.interval, 60);
                assert_eq!(args.max_cycles, None);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_parse_watch_bounded() {
        let cli = parse_args([
            "evaluar",
            "watch",
            "--config",
            "e.yaml",
            "--state",
            "s.json",
            "--interval",
            "5",
            "--max-cycles",
            "3",
        ])
        .unwrap();
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.interval, 5);
                assert_eq!(args.max_cycles, Some(3));
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_parse_validate_command() {
        let cli = parse_args(["evaluar", "validate", "e.yaml"]).unwrap();
        match cli.command {
            Command::Validate(args) => assert_eq!(args.config, PathBuf::from("e.yaml")),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_status_command() {
        let cli = parse_args(["evaluar", "status", "--state", "s.json", "-f", "json"]).unwrap();
        match cli.command {
            Command::Status(args) => {
                assert_eq!(args.state, PathBuf::from("s.json"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["evaluar", "-v", "--log-json", "validate", "e.yaml"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.log_json);

        let cli = parse_args(["evaluar", "validate", "e.yaml", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_cycle_requires_state() {
        assert!(parse_args(["evaluar", "cycle", "--config", "e.yaml"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_args(["evaluar", "train"]).is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = EngineConfig::new("p.csv", "l.csv");
        let args = EngineArgs {
            config: PathBuf::from("e.yaml"),
            state: PathBuf::from("s.json"),
            predictions: Some(PathBuf::from("other.csv")),
            labels: None,
        };
        apply_overrides(&mut config, &args);

        assert_eq!(config.predictions, PathBuf::from("other.csv"));
        assert_eq!(config.labels, PathBuf::from("l.csv"));
    }
}
