use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tournament").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_simulate_defaults_to_scratch_store() {
    let cli = parse(&["simulate", "--players", "8", "--seed", "3"]);
    match &cli.command {
        Command::Simulate {
            players,
            seed,
            upset_chance,
            save,
            persist,
        } => {
            assert_eq!((*players, *seed), (8, 3));
            assert_eq!(*upset_chance, 0.35);
            assert!(save.is_none());
            assert!(!persist);
        }
        _ => panic!("expected simulate"),
    }
    assert!(uses_scratch_store(&cli.command));
}

#[test]
fn test_persisted_simulation_and_other_commands_open_the_database() {
    assert!(!uses_scratch_store(&parse(&["simulate", "--persist"]).command));
    assert!(!uses_scratch_store(&parse(&["count"]).command));
    assert!(!uses_scratch_store(&parse(&["report", "1", "2"]).command));
}

#[test]
fn test_global_flags_follow_subcommand() {
    let cli = parse(&["standings", "--json", "--database", "sqlite://club.db"]);
    assert_eq!(cli.database.as_deref(), Some("sqlite://club.db"));
    assert!(matches!(cli.command, Command::Standings { json: true }));
}

#[test]
fn test_register_requires_a_name() {
    assert!(Cli::try_parse_from(["tournament", "register"]).is_err());
}
