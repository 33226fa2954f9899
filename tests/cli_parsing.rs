use clap::Parser;
use orbit::cli::{Cli, Commands};

#[test]
fn test_parse_serve_overrides() {
    let cli = Cli::try_parse_from(["orbit", "serve", "--host", "0.0.0.0", "--port", "8080", "--db-path", "/tmp/e.db"])
        .unwrap();

    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
            assert_eq!(args.port, Some(8080));
            assert_eq!(args.db_path.as_deref(), Some("/tmp/e.db"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_analyze_positional_text() {
    let cli = Cli::try_parse_from(["orbit", "analyze", "An essay."]).unwrap();

    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.text.as_deref(), Some("An essay."));
            assert!(args.file.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_text_and_file_conflict() {
    let result = Cli::try_parse_from(["orbit", "grammar", "inline", "--file", "essay.txt"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_transform_tone() {
    let cli = Cli::try_parse_from(["orbit", "transform", "--tone", "casual", "I am here"]).unwrap();

    match cli.command {
        Commands::Transform(args) => {
            assert_eq!(args.tone.as_deref(), Some("casual"));
            assert_eq!(args.input.text.as_deref(), Some("I am here"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_transform_tone_defaults_to_none() {
    let cli = Cli::try_parse_from(["orbit", "transform", "text"]).unwrap();
    match cli.command {
        Commands::Transform(args) => assert!(args.tone.is_none()),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["orbit", "stats", "--json", "--config", "orbit.yaml"]).unwrap();
    assert!(cli.json);
    assert_eq!(cli.config.unwrap().to_str(), Some("orbit.yaml"));
    assert!(matches!(cli.command, Commands::Stats));
}

#[test]
fn test_history_limit_default() {
    let cli = Cli::try_parse_from(["orbit", "history"]).unwrap();
    match cli.command {
        Commands::History(args) => assert_eq!(args.limit, 10),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_save_result_must_be_json() {
    assert!(Cli::try_parse_from(["orbit", "save", "text", "--result", "{oops"]).is_err());

    let cli = Cli::try_parse_from(["orbit", "save", "text", "--result", r#"{"clarity": 70}"#]).unwrap();
    match cli.command {
        Commands::Save(args) => assert_eq!(args.result.unwrap()["clarity"], 70),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
