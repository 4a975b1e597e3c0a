use sloperkit::cli::{self, CliArgs};
use sloperkit::{Config, FileNameStyle, GarmentView};
use tempfile::TempDir;

const MEASUREMENTS: &str = include_str!("fixtures/womens.json");

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("jane.json"), MEASUREMENTS).unwrap();
        Config::new()
            .save_to_file(&dir.path().join("config.toml"))
            .unwrap();
        Self { dir }
    }

    fn args(&self, views: Vec<GarmentView>) -> CliArgs {
        CliArgs {
            measurements: self.dir.path().join("jane.json"),
            views,
            out: Some(self.dir.path().join("out")),
            config: Some(self.dir.path().join("config.toml")),
            ..CliArgs::default()
        }
    }
}

#[test]
fn test_draft_writes_one_svg_per_view() {
    let ws = Workspace::new();
    let written = cli::run(&ws.args(vec![
        GarmentView::WomensBodiceFront,
        GarmentView::UnisexPantFront,
    ]))
    .unwrap();

    assert_eq!(
        written,
        vec![
            ws.dir.path().join("out/womens_sloper_bodice_front.svg"),
            ws.dir.path().join("out/unisex_sloper_pants_front.svg"),
        ]
    );
    let svg = std::fs::read_to_string(&written[0]).unwrap();
    assert!(svg.contains("<title>womens_sloper_bodice_front</title>"));
}

#[test]
fn test_all_views_with_json_and_nested_names() {
    let ws = Workspace::new();
    let config_path = ws.dir.path().join("config.toml");
    let mut config = Config::new();
    config.output.file_name_style = FileNameStyle::Nested;
    config.save_to_file(&config_path).unwrap();

    let mut args = ws.args(Vec::new());
    args.all = true;
    args.json = true;
    let written = cli::run(&args).unwrap();

    assert_eq!(written.len(), 2 * GarmentView::ALL.len());
    assert!(ws.dir.path().join("out/mens/sloper/torso/back.svg").exists());
    assert!(ws.dir.path().join("out/unisex/sloper/pants/front.json").exists());

    let updated = Config::load_from_file(&config_path).unwrap();
    assert_eq!(updated.recent_measurement_files.len(), 1);
    assert!(updated.recent_measurement_files[0].ends_with("jane.json"));
}

#[test]
fn test_point_listing_writes_nothing() {
    let ws = Workspace::new();
    let mut args = ws.args(vec![GarmentView::WomensSleeve]);
    args.points = true;
    let written = cli::run(&args).unwrap();
    assert!(written.is_empty());
    assert!(!ws.dir.path().join("out").exists());
}

#[test]
fn test_missing_measurement_file_is_reported() {
    let ws = Workspace::new();
    let mut args = ws.args(vec![GarmentView::MensSleeve]);
    args.measurements = ws.dir.path().join("nobody.json");
    let err = cli::run(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("nobody.json"));
}

#[test]
fn test_point_listing_format() {
    let m = sloperkit::MeasurementSet::from_json_str(MEASUREMENTS).unwrap();
    let pattern = GarmentView::MensTorsoFront.draft(&m).unwrap();
    let listing = cli::format_points(&pattern);
    assert!(listing.starts_with("# mens/sloper/torso/front\n"));
    assert!(listing.contains("0.000 in"));
    assert_eq!(listing.lines().count(), pattern.points.len() + 1);
}
