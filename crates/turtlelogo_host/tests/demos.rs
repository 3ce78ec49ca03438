use turtlelogo::Options;
use turtlelogo_host::{demos, render, script, write_snapshots, Config};

#[test]
fn demos_render_cleanly() {
    let config = Config::default();
    for (name, src) in demos::DEMOS {
        let (canvas, report) = render(src, &config, Options::default());
        assert!(report.skipped.is_empty(), "{name}: {:?}", report.skipped);
        assert!(canvas.paths().count() > 0, "{name} drew nothing");
        assert!(canvas.document().to_string().contains("<path"), "{name}");
    }
}

#[test]
fn demo_procedures() {
    let config = Config::default();
    let (_, report) = render(demos::demo("flower").unwrap(), &config, Options::default());
    assert_eq!(report.procedures, vec!["flower".to_owned(), "petal".to_owned()]);
    assert!(demos::demo("nope").is_none());
}

#[test]
fn saved_drawings_are_written() {
    let config = Config::default();
    let (canvas, _) = render(demos::demo("stairs").unwrap(), &config, Options::default());
    assert_eq!(canvas.saved().len(), 1);

    let dir = std::env::temp_dir().join(format!("turtlelogo-demos-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let written = write_snapshots(&canvas, &dir, &config).unwrap();
    assert_eq!(written, vec![dir.join("turtled_image.svg")]);
    let text = std::fs::read_to_string(&written[0]).unwrap();
    assert!(text.contains("<svg"));
    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn step_limit_stops_long_scripts() {
    let config = Config::default();
    let options = Options {
        max_steps: Some(100),
        ..Options::default()
    };
    let (canvas, report) = render("repeat 100000 [ fd 1 rt 1 ]", &config, options);
    assert!(report.truncated);
    assert!(canvas.paths().count() == 1);
}

#[test]
fn tabbed_scripts_need_loose_spacing() {
    let config = Config::default();
    let src = "repeat\t4\t[fd\t10 rt 90]\r\n";
    let (strict, report) = render(src, &config, Options::default());
    assert_eq!(strict.paths().count(), 0);
    assert!(!report.skipped.is_empty());

    let (loose, report) = render(&script::normalize_spacing(src), &config, Options::default());
    assert!(report.skipped.is_empty());
    assert!(loose.paths().count() > 0);
}
