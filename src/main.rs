use clap::{Parser, Subcommand};
use orst_schema::{CatalogArgs, SessionArgs, ValidateArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the description and complexity of each sorting algorithm
    Catalog(CatalogArgs),

    /// Create a fresh visualization session as JSON
    Session(SessionArgs),

    /// Check a visualization session file against the schema
    Validate(ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Catalog(catalog_args) => catalog_args.run()?,
        Commands::Session(session_args) => session_args.run()?,
        Commands::Validate(validate_args) => validate_args.run()?,
    }

    Ok(())
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::AnsiColor::{Cyan, Green, Magenta, Red, Yellow};

    clap::builder::Styles::styled()
        .usage(ansi(Magenta).bold().underline())
        .header(ansi(Magenta).bold())
        .literal(ansi(Green))
        .invalid(ansi(Red).bold())
        .error(ansi(Red).bold())
        .valid(ansi(Cyan).bold().underline())
        .placeholder(ansi(Yellow))
}

fn ansi(color: anstyle::AnsiColor) -> anstyle::Style {
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(color)))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parse_session_command() {
    let cli = Cli::try_parse_from([
        "orst", "session", "-m", "compare", "-p", "heap", "-s", "radix", "--size", "12",
    ])
    .expect("valid arguments");
    assert!(matches!(cli.commands, Commands::Session(_)));
}

#[test]
fn reject_unknown_algorithm() {
    assert!(Cli::try_parse_from(["orst", "catalog", "--algorithm", "bogo"]).is_err());
}

#[test]
fn validate_needs_a_file() {
    use clap::error::ErrorKind;

    let kind = Cli::try_parse_from(["orst", "validate"]).err().map(|err| err.kind());
    assert_eq!(kind, Some(ErrorKind::MissingRequiredArgument));
    assert!(Cli::try_parse_from(["orst", "validate", "-f", "session.json"]).is_ok());
}
