use std::io::Write;

use tempfile::NamedTempFile;

use fenceline::report::{load_reports, save_reports};
use fenceline::stats::univariate::Sample;
use fenceline::table::reader::{read_csv, EMISSION_COLUMNS};
use fenceline::{clean_pipeline, rank_correlated_columns, Column, Table};

/// Twelve vehicles over the full emissions schema.
///
/// The numeric columns are laid out so the cleaning run is predictable by
/// hand: `Emissions NOx` tracks `WLTP CO2` exactly, `Engine Capacity`
/// tracks it except for one absurd cell, `Emissions CO` runs the other
/// way, the THC columns are noise, and the noise level is constant.
const FIXTURE: &str = "\
Manufacturer,Model,Description,Transmission,Manual or Automatic,Engine Capacity,Fuel Type,Powertrain,Emissions CO [mg/km],Emissions NOx [mg/km],Date of change,THC Emissions [mg/km],THC + NOx Emissions [mg/km],WLTP CO2,Noise Level dB(A)
Vauxhall,M0,1.2 Turbo,M6,M,1000,Petrol,ICE,500,20,12/03/2021,5,30,100,70
Ford,M1,1.0 EcoBoost,A8,A,1100,Petrol,ICE,497,22,,6,28,110,70
Toyota,M2,1.5 Hybrid,M6,M,1200,Petrol,ICE,494,24,14/06/2021,5,32,120,70
BMW,M3,2.0i,A8,A,1300,Petrol,ICE,491,26,,,29,130,70
Vauxhall,M4,1.2 Turbo,M6,M,1400,Petrol,ICE,488,28,01/02/2022,5,31,140,70
Ford,M5,1.5 EcoBlue,A8,A,1500,Petrol,ICE,485,30,,6,28,150,70
Toyota,M6,2.0 Hybrid,M6,M,1600,Petrol,ICE,482,32,30/11/2021,5,33,160,70
BMW,M7,2.0d,A8,A,1700,Diesel,ICE,479,34,,6,30,170,70
Vauxhall,M8,1.5 Diesel,M6,M,1800,Diesel,ICE,476,36,09/09/2021,,29,180,70
Ford,M9,2.0 EcoBlue,A8,A,1900,Diesel,ICE,473,38,,6,32,190,70
Toyota,M10,2.8 D-4D,M6,M,2000,Diesel,ICE,470,40,17/05/2022,5,28,200,70
BMW,M11,3.0d,A8,A,9999,Diesel,ICE,467,42,,6,31,210,70
";

fn fixture_table() -> Table {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    read_csv(file.path(), EMISSION_COLUMNS).unwrap()
}

#[test]
fn the_full_schema_loads_with_inferred_types() {
    let table = fixture_table();

    assert_eq!(table.rows(), 12);
    assert_eq!(table.names().count(), EMISSION_COLUMNS.len());
    assert!(matches!(
        table.column("Manufacturer"),
        Some(Column::Categorical(_))
    ));
    assert!(matches!(
        table.column("Date of change"),
        Some(Column::Categorical(_))
    ));
    assert!(table.column("WLTP CO2").unwrap().is_numeric());

    // empty cells read back as missing, not as zero
    let thc = table.numeric("THC Emissions [mg/km]").unwrap();
    assert_eq!(thc[3], None);
    assert_eq!(thc[8], None);
    assert_eq!(thc.iter().flatten().count(), 10);
}

#[test]
fn ranking_excludes_the_target_and_constant_columns() {
    let table = fixture_table();
    let ranked = rank_correlated_columns(&table, "WLTP CO2", 99).unwrap();

    assert!(ranked.iter().all(|name| name != "WLTP CO2"));
    assert!(ranked.iter().all(|name| name != "Noise Level dB(A)"));

    // NOx tracks the target exactly; engine capacity tracks it except for
    // the one absurd cell; the CO column runs the other way
    assert_eq!(ranked[0], "Emissions NOx [mg/km]");
    assert_eq!(ranked[1], "Engine Capacity");
    assert_eq!(ranked.last().unwrap(), "Emissions CO [mg/km]");
}

#[test]
fn the_pipeline_clamps_only_what_it_selected() {
    let mut table = fixture_table();
    let reports = clean_pipeline(&mut table, "WLTP CO2", 2).unwrap();

    assert_eq!(reports.len(), 2);

    // NOx is linear in the target and has nothing to clamp
    assert_eq!(reports[0].column, "Emissions NOx [mg/km]");
    assert_eq!(reports[0].clamped(), 0);

    // engine capacity: Q1 = 1275, Q3 = 1825, fences 450 and 2650
    assert_eq!(reports[1].column, "Engine Capacity");
    assert_eq!(reports[1].lower, 450.0);
    assert_eq!(reports[1].upper, 2650.0);
    assert_eq!(reports[1].clamped_low, 0);
    assert_eq!(reports[1].clamped_high, 1);
    assert_eq!(table.numeric("Engine Capacity").unwrap()[11], Some(2650.0));

    // the target and the unselected columns are untouched
    let co2 = table.numeric_present("WLTP CO2").unwrap();
    assert_eq!(co2, (0..12).map(|i| 100.0 + 10.0 * i as f64).collect::<Vec<_>>());
    assert_eq!(table.numeric("Emissions CO [mg/km]").unwrap()[0], Some(500.0));
}

#[test]
fn a_second_run_changes_nothing() {
    let mut table = fixture_table();
    clean_pipeline(&mut table, "WLTP CO2", 2).unwrap();

    let cleaned = table.clone();
    let reports = clean_pipeline(&mut table, "WLTP CO2", 2).unwrap();

    assert_eq!(table, cleaned);
    assert!(reports.iter().all(|report| report.clamped() == 0));
}

#[test]
fn reports_survive_a_round_trip_to_disk() {
    let mut table = fixture_table();
    let reports = clean_pipeline(&mut table, "WLTP CO2", 2).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.json");
    save_reports(&path, &reports).unwrap();

    assert_eq!(load_reports(&path).unwrap(), reports);
}

#[test]
fn fuel_type_groups_support_a_two_sample_comparison() {
    let table = fixture_table();
    let groups = table.group_numeric("WLTP CO2", "Fuel Type").unwrap();

    assert_eq!(groups["Petrol"].len(), 7);
    assert_eq!(groups["Diesel"].len(), 5);

    let diesel = Sample::new(&groups["Diesel"]);
    let petrol = Sample::new(&groups["Petrol"]);

    // diesel's mean CO2 sits well above petrol's in this fixture
    assert!(diesel.t(petrol) > 0.0);

    let counts = table.value_counts("Fuel Type").unwrap();
    assert_eq!(
        counts,
        vec![("Petrol".to_owned(), 7), ("Diesel".to_owned(), 5)]
    );
}
