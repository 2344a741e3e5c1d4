mod common;

use common::{race_page, rider, standard_headings, standings_page};
use supercross_results::errors::Error;
use supercross_results::modules::extractor::{extract_race, extract_season, is_triple_crown};
use supercross_results::modules::markup::HtmlDocument;
use supercross_results::modules::models::cell::CellValue;
use supercross_results::modules::models::class::VehicleClass;
use supercross_results::modules::models::race::{RaceRecord, ResultsStatus};

fn extract(html: &str) -> Result<RaceRecord, Error> {
    let document = HtmlDocument::parse(html);
    extract_race(&document, 2019, 1, VehicleClass::Class450, ResultsStatus::Official)
}

#[test]
fn anaheim_example_page() {
    let html = race_page(&standard_headings(), &[rider("1", "1", "Rider A")], false);
    let race = extract(&html).unwrap();

    assert_eq!(race.season, 2019);
    assert_eq!(race.round, 1);
    assert_eq!(race.class, VehicleClass::Class450);
    assert_eq!(race.name, "Anaheim 1");
    assert_eq!(race.city, "Anaheim");
    assert_eq!(race.state, "CA");
    assert_eq!(race.date, "January 5, 2019");
    assert_eq!(race.results_status, ResultsStatus::Official);
    assert!(!race.triple_crown);

    assert_eq!(race.results.len(), 1);
    let first = &race.results[0];
    assert_eq!(first.position, 1);
    assert_eq!(first.number, CellValue::Int(1));
    assert_eq!(first.rider, CellValue::Text("Rider A".to_string()));
    assert_eq!(first.hometown, CellValue::Text("Murrieta, CA".to_string()));
    assert_eq!(first.qualifying, CellValue::Int(2));
    assert_eq!(first.holeshot, CellValue::Text("Y".to_string()));
    assert_eq!(first.laps_led, CellValue::Int(12));
    assert_eq!(first.points, CellValue::Int(26));
}

#[test]
fn positions_follow_row_order() {
    // the site leaves the position blank or repeats it for some rows
    let rows = vec![
        rider("1", "3", "Rider A"),
        rider("", "21", "Rider B"),
        rider("2", "94", "Rider C"),
        rider("DNF", "7", "Rider D"),
    ];
    let race = extract(&race_page(&standard_headings(), &rows, false)).unwrap();

    let positions: Vec<u32> = race.results.iter().map(|result| result.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
    assert_eq!(race.results.len(), rows.len());
    assert_eq!(race.results[3].rider, CellValue::Text("Rider D".to_string()));
}

#[test]
fn cells_are_coerced_or_left_blank() {
    let row = vec![("#", "14"), ("Rider", "Rider E"), ("Points", "DNF"), ("Qual", " 5 ")];
    let race = extract(&race_page(&standard_headings(), &[row], false)).unwrap();
    let result = &race.results[0];

    assert_eq!(result.number, CellValue::Int(14));
    assert_eq!(result.points, CellValue::Text("DNF".to_string()));
    assert_eq!(result.qualifying, CellValue::Int(5));
    assert_eq!(result.bike, CellValue::Text(String::new()));
    assert_eq!(result.holeshot, CellValue::Text(String::new()));
    assert_eq!(result.laps_led, CellValue::Text(String::new()));
}

#[test]
fn missing_date_heading_only_blanks_the_date() {
    let headings = standard_headings();
    let race = extract(&race_page(&headings[..3], &[rider("1", "1", "Rider A")], false)).unwrap();

    assert_eq!(race.name, "Anaheim 1");
    assert_eq!(race.city, "Anaheim");
    assert_eq!(race.state, "CA");
    assert_eq!(race.date, "");
    assert_eq!(race.results.len(), 1);
}

#[test]
fn unmatched_venue_blanks_city_and_state() {
    let headings = vec![
        "Monster Energy AMA Supercross",
        "Daytona",
        "Daytona International Speedway",
        "March 9, 2019",
    ];
    let race = extract(&race_page(&headings, &[], false)).unwrap();

    assert_eq!(race.name, "Daytona");
    assert_eq!(race.city, "");
    assert_eq!(race.state, "");
    assert_eq!(race.date, "March 9, 2019");
    assert!(race.results.is_empty());
}

#[test]
fn triple_crown_is_detected_from_the_main_event_column() {
    let html = race_page(&standard_headings(), &[rider("1", "1", "Rider A")], true);
    let race = extract(&html).unwrap();
    assert!(race.triple_crown);
    assert!(is_triple_crown(&HtmlDocument::parse(&html)));
}

#[test]
fn page_without_table_is_a_structural_error() {
    let html = "<html><body><h4 class=\"header-class\">Series</h4><h4 class=\"header-class\">Anaheim 1</h4></body></html>";
    assert!(matches!(extract(html), Err(Error::StructuralParseError { .. })));

    let document = HtmlDocument::parse(html);
    assert!(matches!(
        extract_season(&document, 2019, VehicleClass::Class250, 17),
        Err(Error::StructuralParseError { .. })
    ));
}

#[test]
fn page_without_headings_is_a_structural_error() {
    let html = "<html><body><table><tr><th>#</th></tr><tr><td data-title=\"#\">1</td></tr></table></body></html>";
    assert!(matches!(extract(html), Err(Error::StructuralParseError { .. })));
}

#[test]
fn extracting_twice_gives_the_same_record() {
    let rows = vec![rider("1", "1", "Rider A"), rider("2", "2", "Rider B")];
    let html = race_page(&standard_headings(), &rows, true);
    assert_eq!(extract(&html).unwrap(), extract(&html).unwrap());
}

#[test]
fn season_standings_fill_one_slot_per_round() {
    let leader = vec![
        ("Position", "1"),
        ("#", "3"),
        ("Rider", "Rider A"),
        ("Hometown", "Morrilton, AR"),
        ("Total Points", "75"),
        ("1", "25"),
        ("2", "25"),
        ("3", "25"),
    ];
    let second = vec![("#", "94"), ("Rider", "Rider B"), ("Total Points", "60"), ("2", "-")];
    let document = HtmlDocument::parse(&standings_page(&[leader, second]));

    let season = extract_season(&document, 2022, VehicleClass::Class450, 3).unwrap();
    assert_eq!(season.season, 2022);
    assert_eq!(season.class, VehicleClass::Class450);
    assert_eq!(season.through_round, 3);
    assert_eq!(season.results.len(), 2);

    let leader = &season.results[0];
    assert_eq!(leader.position, 1);
    assert_eq!(leader.number, CellValue::Int(3));
    assert_eq!(leader.hometown, CellValue::Text("Morrilton, AR".to_string()));
    assert_eq!(leader.total_points, CellValue::Int(75));
    assert_eq!(leader.round_points.len(), 17);
    assert_eq!(leader.round_points[0], CellValue::Int(25));
    assert_eq!(leader.round_points[2], CellValue::Int(25));
    assert!(leader.round_points[3..].iter().all(CellValue::is_empty));

    let second = &season.results[1];
    assert_eq!(second.position, 2);
    assert!(second.hometown.is_empty());
    assert!(second.round_points[0].is_empty());
    assert_eq!(second.round_points[1], CellValue::Text("-".to_string()));
}
