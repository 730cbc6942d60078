//! End-to-end diagram builds: components composed into a page and serialized
//!
//! Run with logging: RUST_LOG=debug cargo test --features tracing --test diagram -- --nocapture

use pinout::components::{
    Annotation, Diagram, Footprint, Inset, Layout, Leaderline, Legend, PinLabelGroup, TextBlock,
};
use pinout::config::Config;
use pinout::render::Graphic;
use pinout::types::Coords;
use pinout::{BuildError, RenderError};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Value of attribute `attr` on the first element line containing `needle`.
fn attr_of(svg: &str, needle: &str, attr: &str) -> Option<String> {
    let line = svg.lines().find(|l| l.contains(needle))?;
    let pattern = format!("{}=\"", attr);
    let start = line.find(&pattern)? + pattern.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}

fn position_of(svg: &str, needle: &str) -> usize {
    svg.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{svg}"))
}

fn board(config: &Config) -> Result<Diagram, BuildError> {
    let [header, main] = Layout::TwoRows { split: 40.0 }.panels(600.0, 400.0)?;

    let mut header = header.tag("header");
    header.add(TextBlock::new("Example board", 10.0, 5.0).with_class("title").build());

    let chip = Footprint::dip(8, 100.0, 160.0)?
        .with_inset(Inset::from_edges(15.0, 0.0, 15.0, 0.0))?
        .at(250.0, 100.0);
    let pin1 = chip.pin_coords(1)?;
    let pin5 = chip.pin_coords(5)?;
    let pitch = chip.pitch().y;

    let mut main = main;
    main.add(chip.build(config)?);
    main.add(
        PinLabelGroup::new(250.0 + pin1.x - 7.5, 100.0 + pin1.y)
            .pin_pitch(Coords::new(0.0, pitch))
            .label_start(Coords::new(40.0, 0.0))
            .label_pitch(Coords::new(0.0, pitch))
            .scale(Coords::new(-1.0, 1.0))
            .row([("GP0", "gpio"), ("SDA", "i2c")])
            .row([("GP1", "gpio"), ("SCL", "i2c")])
            .row([("GND", "gnd")])
            .row([("GP2", "gpio")])
            .build(config)?,
    );
    main.add(
        PinLabelGroup::new(250.0 + pin5.x + 7.5, 100.0 + pin5.y)
            .pin_pitch(Coords::new(0.0, pitch))
            .label_start(Coords::new(40.0, 0.0))
            .label_pitch(Coords::new(0.0, pitch))
            .row([("VBUS", "pwr")])
            .row([("3V3", "pwr")])
            .row([("GND", "gnd")])
            .row([("RUN", "ctrl")])
            .build(config)?,
    );
    main.add(
        Legend::new(10.0, 220.0)
            .entry("GPIO", "gpio")
            .entry("Ground", "gnd")
            .entry("Power", "pwr")
            .build(config)?,
    );
    main.add(Annotation::new(Coords::new(300.0, 180.0), Coords::new(-90.0, 110.0), "Pin 1\nmarker").build(config)?);

    let mut diagram = Diagram::new(600.0, 400.0)?;
    diagram.add_stylesheet("styles/pinout.css");
    diagram.add_panel(header.build(config)?);
    diagram.add_panel(main.build(config)?);
    Ok(diagram)
}

#[test]
fn full_board_renders() {
    init_tracing();
    let config = Config::new().patched(&json!({
        "pinlabel": { "tags": { "gnd": { "body": { "width": 50 } } } }
    }));
    let diagram = board(&config).expect("board builds");
    let doc = diagram.render().expect("board renders");
    assert_eq!(doc.children.len(), 2);

    let svg = diagram.to_svg().expect("board serializes");
    tracing::debug!(bytes = svg.len(), "rendered board");

    assert!(svg.starts_with("<?xml-stylesheet type=\"text/css\" href=\"styles/pinout.css\"?>"));
    assert_eq!(
        attr_of(&svg, "<svg", "viewBox").as_deref(),
        Some("0 0 600 400")
    );
    assert_eq!(svg.matches("class=\"footprint__pin\"").count(), 8);
    assert_eq!(svg.matches("class=\"pinlabel gpio\"").count(), 3);
    assert!(!svg.contains("NaN") && !svg.contains("inf"));
}

#[test]
fn panel_backgrounds_paint_first() {
    let diagram = board(&Config::new()).unwrap();
    let svg = diagram.to_svg().unwrap();
    let bg = position_of(&svg, "class=\"panel__bg\"");
    let inner = position_of(&svg, "class=\"panel__inner\"");
    let content = position_of(&svg, "class=\"panel__content\"");
    assert!(bg < inner && inner < content, "backgrounds must precede content");
    assert!(position_of(&svg, "class=\"panel header\"") < bg);
}

#[test]
fn mirrored_labels_keep_text_upright() {
    let svg = board(&Config::new()).unwrap().to_svg().unwrap();
    // pin 1 sits 32 below the chip top, left edge at x=250
    assert_eq!(
        attr_of(&svg, "translate(250 132) scale(-1 1)", "class").as_deref(),
        Some("pinlabelgroup")
    );
    assert_eq!(
        attr_of(&svg, "translate(350 132)", "class").as_deref(),
        Some("pinlabelgroup")
    );
    let gp0 = svg.lines().find(|l| l.ends_with(">GP0</text>")).unwrap();
    assert!(gp0.contains("transform=\"scale(-1 1)\""), "{gp0}");
}

#[test]
fn rendering_is_repeatable() {
    let config = Config::new();
    let first = board(&config).unwrap().to_svg().unwrap();
    let second = board(&config).unwrap().to_svg().unwrap();
    assert_eq!(first, second);
}

#[test]
fn tagged_config_reaches_labels() {
    let config = Config::new().patched(&json!({
        "pinlabel": { "tags": { "gnd": { "body": { "width": 50 } } } }
    }));
    let svg = board(&config).unwrap().to_svg().unwrap();
    let gnd_body = svg
        .lines()
        .skip_while(|l| !l.contains("class=\"pinlabel gnd\""))
        .find(|l| l.contains("pinlabel__body"))
        .unwrap();
    assert!(gnd_body.contains("width=\"50\""), "{gnd_body}");
}

#[test]
fn single_label_snapshot() {
    let labels = PinLabelGroup::new(0.0, 20.0)
        .label_start(Coords::new(10.0, 0.0))
        .leaderline(Leaderline::straight())
        .row(["A"])
        .build(&Config::new())
        .unwrap();
    assert_eq!(labels.width(), 90.0);

    let mut diagram = Diagram::new(120.0, 40.0).unwrap();
    diagram.add(labels);
    insta::assert_snapshot!(diagram.to_svg().unwrap(), @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="120" height="40" viewBox="0 0 120 40">
    <g class="pinlabelgroup" transform="translate(0 20)">
    <g class="pinlabelrow">
    <g class="pinlabel">
    <path class="leaderline" d="M 0 0 L 10 0"/>
    <rect class="pinlabel__body" x="10" y="-13" width="80" height="26" rx="3"/>
    <text class="pinlabel__text" x="50" y="0" text-anchor="middle" dominant-baseline="central">A</text>
    </g>
    </g>
    </g>
    </svg>
    "#);
}

#[test]
fn build_errors_name_the_component() {
    let err = Footprint::qfp(30, 100.0, 100.0).unwrap_err();
    assert_eq!(err.to_string(), "QFP pin count 30 is not a positive multiple of 4");

    let mut config = Config::new();
    config
        .set_value("leaderline.direction", json!("hx"))
        .expect("leaderline is an object");
    let err = PinLabelGroup::new(0.0, 0.0)
        .row(["GP0"])
        .build(&config)
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown leaderline direction \"hx\" on pinlabel");

    let err = Annotation::new(Coords::ZERO, Coords::new(10.0, 10.0), "note")
        .overrides(json!({ "leaderline": { "direction": "hx" } }))
        .build(&Config::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown leaderline direction \"hx\" on annotation");
}

#[test]
fn unusable_page_produces_no_svg() {
    let diagram = Diagram::new(0.0, 100.0).unwrap();
    assert!(matches!(diagram.to_svg(), Err(RenderError::InvalidSize { .. })));
}
