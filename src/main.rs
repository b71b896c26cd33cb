use std::io;
use std::process;

use anyhow::{bail, Context, Result};

use shape_animator::{
    export::{snapshot, svg, text},
    player::Player,
    source,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const TEXT_USAGE: &str = "shape-animator text <animation.txt> [output.txt]";
const SVG_USAGE: &str = "shape-animator svg <animation.txt> <output.svg> [speed]";
const SNAPSHOT_USAGE: &str = "shape-animator snapshot <animation.txt> <output.json>";
const PLAY_USAGE: &str = "shape-animator play <animation.txt> [speed]";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("text") => {
            let input = args.next().context(TEXT_USAGE)?;
            text_view(&input, args.next().as_deref())
        }
        Some("svg") => {
            let input = args.next().context(SVG_USAGE)?;
            let output = args.next().context(SVG_USAGE)?;
            let speed = parse_speed(args.next(), SVG_USAGE)?;
            svg_view(&input, &output, speed)
        }
        Some("snapshot") => {
            let input = args.next().context(SNAPSHOT_USAGE)?;
            let output = args.next().context(SNAPSHOT_USAGE)?;
            snapshot_view(&input, &output)
        }
        Some("play") => {
            let input = args.next().context(PLAY_USAGE)?;
            let speed = parse_speed(args.next(), PLAY_USAGE)?;
            play(&input, speed as u64)
        }
        _ => bail!(
            "Shape Animator — tick-indexed 2D animation engine\n\nUsage:\n  {TEXT_USAGE}\n  {SVG_USAGE}\n  {SNAPSHOT_USAGE}\n  {PLAY_USAGE}"
        ),
    }
}

fn parse_speed(arg: Option<String>, usage: &str) -> Result<f64> {
    match arg {
        None => Ok(1.0),
        Some(word) => word
            .parse()
            .with_context(|| format!("`{word}` is not a valid speed\n{usage}")),
    }
}

fn text_view(input: &str, output: Option<&str>) -> Result<()> {
    let animation = load(input)?;
    match output {
        Some(path) => {
            text::export(&animation, path)
                .with_context(|| format!("Failed to write {path}"))?;
            eprintln!("Wrote text description of {input} -> {path}");
        }
        None => text::write_to(&animation, &mut io::stdout())?,
    }
    Ok(())
}

fn svg_view(input: &str, output: &str, speed: f64) -> Result<()> {
    let animation = load(input)?;
    svg::export(&animation, output, speed)
        .with_context(|| format!("Failed to write {output}"))?;
    eprintln!("Wrote SVG for {input} -> {output}");
    Ok(())
}

fn snapshot_view(input: &str, output: &str) -> Result<()> {
    let mut animation = load(input)?;
    snapshot::export(&mut animation, output)
        .with_context(|| format!("Failed to write {output}"))?;
    eprintln!(
        "Baked {} shapes from {input} -> {output}",
        animation.shape_count(),
    );
    Ok(())
}

fn play(input: &str, speed: u64) -> Result<()> {
    let animation = load(input)?;
    let mut player = Player::new(animation, speed)?;
    player.play()
}

fn load(input: &str) -> Result<shape_animator::Animation> {
    source::parse_file(input).with_context(|| format!("Failed to load {input}"))
}
