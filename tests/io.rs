// End-to-end tests through the file loaders:
//   parties JSON + votes CSV + results CSV -> projections -> JSON

use std::fs;

use ahash::AHashMap;
use openswing::{
    io::{read_parties, read_results, read_seat_filter, read_votes, to_json_string, write_json},
    Battleground, BattlegroundOptions, Swingometer, SwingometerOptions,
};

const PARTIES: &str = r##"[
    { "id": "LAB", "name": "Labour", "color": "#dc241f" },
    { "id": "CON", "name": "Conservative", "color": "#0087dc" },
    { "id": "LD",  "name": "Liberal Democrat", "color": "#faa61a" }
]"##;

const VOTES: &str = "\
district,LAB,CON,LD
E01,21000,15000,6000
E02,17000,19000,8000
E03,9000,12000,20000
E04,20000,20500,2000
E05,14000,9000,13000
";

const RESULTS: &str = "\
district,winner,final
E01,LAB,true
E02,LAB,false
E03,,false
";

#[test]
fn swingometer_from_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("parties.json"), PARTIES)?;
    fs::write(dir.path().join("votes.csv"), VOTES)?;
    fs::write(dir.path().join("results.csv"), RESULTS)?;
    fs::write(dir.path().join("filter.txt"), "# marginals\nE02\nE04\n")?;

    let parties = read_parties(&dir.path().join("parties.json"))?;
    let districts = read_votes(&dir.path().join("votes.csv"), &parties)?;
    let results = read_results(&dir.path().join("results.csv"), &parties)?;
    let filter = read_seat_filter(&dir.path().join("filter.txt"))?;
    assert_eq!(districts.len(), 5);
    assert_eq!(filter.len(), 2);

    let lab = parties.get("LAB")?.clone();
    let con = parties.get("CON")?.clone();
    let meter = Swingometer::new(lab.clone(), con.clone(), SwingometerOptions::default())?;
    let out = meter.project(&districts, 0.0, &results, Some(&filter))?;

    // E03 is a Lib Dem seat, so only four dots.
    assert_eq!(out.dots.len(), 4);
    assert_eq!(out.dots[0].color, lab.color());
    assert_eq!(out.dots[1].color, lab.color().lighten(0.5));
    assert!(!out.dots[0].in_focus && out.dots[1].in_focus);
    assert_eq!((out.seats_left, out.seats_right), (2, 2));

    let path = dir.path().join("out.json");
    write_json(&out, Some(&path))?;
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(json["left"], "LAB");
    assert_eq!(json["dots"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["dots"][0]["color"], "#dc241f");
    Ok(())
}

#[test]
fn battleground_serializes() -> anyhow::Result<()> {
    let parties = openswing::io::parse_parties(PARTIES)?;
    let districts = openswing::io::parse_votes(VOTES.as_bytes(), &parties)?;

    let ground = Battleground::new(
        parties.get("LAB")?.clone(),
        parties.get("CON")?.clone(),
        parties.get("LD")?.clone(),
        BattlegroundOptions { range_limit: 0.02, bucket_size: 0.01 },
    )?;
    let out = ground.project(&districts, &AHashMap::new(), &Default::default(), None)?;
    assert_eq!(out.dots.len(), 5);
    assert_eq!(out.projected_seats.iter().sum::<usize>(), 5);

    let json: serde_json::Value = serde_json::from_str(&to_json_string(&out)?)?;
    assert_eq!(json["parties"], serde_json::json!(["LAB", "CON", "LD"]));
    assert_eq!(json["lines"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn unreachable_majority_serializes_as_null() -> anyhow::Result<()> {
    let parties = openswing::io::parse_parties(PARTIES)?;
    let districts = openswing::io::parse_votes(b"district,LAB,CON,LD\nA,10,5,50\nB,10,5,50\nC,10,5,1\n", &parties)?;
    let meter = Swingometer::new(parties.get("LAB")?.clone(), parties.get("CON")?.clone(), SwingometerOptions::default())?;
    let out = meter.project(&districts, 0.0, &Default::default(), None)?;
    assert_eq!(out.right_to_win, f64::INFINITY);

    let json: serde_json::Value = serde_json::from_str(&to_json_string(&out)?)?;
    assert!(json["right_to_win"].is_null());
    Ok(())
}
