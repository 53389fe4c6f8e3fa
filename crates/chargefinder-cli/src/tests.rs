use super::*;

#[test]
fn parses_search_command() {
    let cli = Cli::try_parse_from(["chargefinder-cli", "search", "Main St"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref query }) if query == "Main St"
    ));
}

#[test]
fn parses_site_command() {
    let cli = Cli::try_parse_from(["chargefinder-cli", "site", "sf-main-garage"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Site { ref id }) if id == "sf-main-garage"
    ));
}

#[test]
fn parses_cluster_command_with_several_ids() {
    let cli = Cli::try_parse_from(["chargefinder-cli", "cluster", "a-site", "b-site"])
        .expect("expected valid cli args");
    let Some(Commands::Cluster { ids }) = cli.command else {
        panic!("expected cluster command");
    };
    assert_eq!(ids, vec!["a-site", "b-site"]);
}

#[test]
fn cluster_requires_at_least_one_id() {
    assert!(Cli::try_parse_from(["chargefinder-cli", "cluster"]).is_err());
}

#[test]
fn parses_interactive_command() {
    let cli = Cli::try_parse_from(["chargefinder-cli", "interactive"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["chargefinder-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn help_is_handled_by_the_parser() {
    let err = Cli::try_parse_from(["chargefinder-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn find_site_reports_missing_id() {
    let err = find_site(&[], "nowhere").unwrap_err();
    assert!(err.to_string().contains("site 'nowhere' not found"));
}

// -----------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------

#[test]
fn progress_bar_fills_proportionally() {
    assert_eq!(render::progress_bar(0.5, 10), "[#####-----]");
    assert_eq!(render::progress_bar(0.0, 4), "[----]");
    assert_eq!(render::progress_bar(1.0, 4), "[####]");
}

#[test]
fn progress_bar_clamps_out_of_range_fractions() {
    assert_eq!(render::progress_bar(1.5, 4), "[####]");
    assert_eq!(render::progress_bar(-0.5, 4), "[----]");
}

#[test]
fn summary_card_for_empty_site_has_empty_bar() {
    let no_chargers: &[chargefinder_core::ChargerRecord] = &[];
    let card = render::summary_card("Congress Plaza", &summarize(no_chargers));
    assert_eq!(
        card,
        "Congress Plaza\n[--------------------]\n0 OF 0 AVAILABLE, LEVEL 1"
    );
}

#[test]
fn result_row_marks_style() {
    let row = chargefinder_search::ResultRow {
        key: "94103".to_string(),
        kind: chargefinder_search::ResultKind::Location,
        title: "94103".to_string(),
        subtitle: "San Francisco, CA".to_string(),
        style: chargefinder_search::RowStyle::Location,
        progress: None,
    };
    assert_eq!(
        render::result_row(&row),
        "@ 94103 [94103]\n    San Francisco, CA"
    );
}

// -----------------------------------------------------------------------
// Interactive loop
// -----------------------------------------------------------------------

use chargefinder_core::{ChargerLevel, ChargerRecord, ChargerStatus, Coordinates, ZipLocation};
use chargefinder_search::LookupError;

struct FailingLookup;

impl ZipLookup for FailingLookup {
    fn lookup(&self, zipcode: u32) -> Result<Option<ZipLocation>, LookupError> {
        Err(LookupError::Failed {
            zipcode,
            reason: "directory offline".to_string(),
        })
    }
}

fn garage() -> Site {
    Site {
        id: "main-garage".to_string(),
        name: "Main St Garage".to_string(),
        chargers: vec![ChargerRecord::new(
            ChargerStatus::Available,
            ChargerLevel::Level2,
        )],
        coordinates: Coordinates {
            latitude: 37.77,
            longitude: -122.41,
        },
    }
}

fn interactive_output<L: ZipLookup>(sites: &[Site], lookup: L, input: &str) -> String {
    let mut out = Vec::new();
    run_interactive(sites, lookup, std::io::Cursor::new(input), &mut out)
        .expect("interactive loop should not fail");
    String::from_utf8(out).expect("output is utf-8")
}

#[test]
fn interactive_prints_rows_then_reports_selection() {
    let sites = vec![garage()];
    let output = interactive_output(&sites, ZipDirectory::default(), "main\n:select main-garage\n");
    assert_eq!(
        output,
        "+ Main St Garage [main-garage]\n    1 of 1 available, Level 2\nselected Site main-garage\n"
    );
}

#[test]
fn interactive_select_with_unknown_key_reports_it() {
    let sites = vec![garage()];
    let output = interactive_output(&sites, ZipDirectory::default(), "main\n:select  nope \n");
    assert!(output.ends_with("no result with key \"nope\"\n"), "got: {output}");
    assert!(!output.contains("selected"));
}

#[test]
fn interactive_select_before_any_query_finds_nothing() {
    let sites = vec![garage()];
    let output = interactive_output(&sites, ZipDirectory::default(), ":select main-garage\n");
    assert_eq!(output, "no result with key \"main-garage\"\n");
}

#[test]
fn interactive_lookup_failure_is_reported_and_loop_continues() {
    let sites = vec![garage()];
    let output = interactive_output(&sites, FailingLookup, "12345\nmain\n");
    let mut lines = output.lines();
    let first = lines.next().unwrap_or_default();
    assert!(first.starts_with("search failed: "), "got: {first}");
    assert!(first.contains("directory offline"), "got: {first}");
    assert_eq!(lines.next(), Some("+ Main St Garage [main-garage]"));
}

#[test]
fn interactive_reports_empty_result_list() {
    let sites = vec![garage()];
    let output = interactive_output(&sites, ZipDirectory::default(), "nowhere\n");
    assert_eq!(output, "no results for \"nowhere\"\n");
}
