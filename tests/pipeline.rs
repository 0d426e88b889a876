//! End-to-end checks through the public API.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use weaver::threads::{build_warp, build_weft, NoSlub, SeededSlub};
use weaver::{
    generate, weave, Colour, GradientSpec, GradientStop, Heddle, Layer, LoomSetup, Pedal,
    RenderOptions, TreadlingSequence, WeaveConfig, WeaveDocument, WeaveError,
};

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn red_to_blue(len: usize) -> weaver::ColourSequence {
    let spec = GradientSpec::new([
        GradientStop::new(0.0, Colour::rgb(255, 0, 0)),
        GradientStop::new(1.0, Colour::rgb(0, 0, 255)),
    ])
    .unwrap();
    generate(&spec, len).unwrap()
}

fn always_raised(ends: usize, steps: usize) -> LoomSetup {
    LoomSetup::new(
        vec![Heddle::new(vec![true; ends])],
        vec![Pedal::new(vec![0])],
        TreadlingSequence::from_indices(&vec![&[0usize][..]; steps]),
    )
}

#[test]
fn all_raised_weft_polarity_shows_only_weft() {
    let cfg = WeaveConfig::new(2, 4, 4).unwrap();
    let warp = build_warp(&red_to_blue(5), &cfg, &mut NoSlub);
    let weft = build_weft(&red_to_blue(7), &cfg, &mut NoSlub);

    let cloth = weave(&warp, &weft, &always_raised(4, 4), cfg, Layer::Weft).unwrap();
    assert_eq!(cloth, weft);

    let cloth = weave(&warp, &weft, &always_raised(4, 4), cfg, Layer::Warp).unwrap();
    assert_eq!(cloth, warp);
}

#[test]
fn mismatched_ends_fail_before_weaving() {
    let four = WeaveConfig::new(2, 4, 4).unwrap();
    let five = WeaveConfig::new(2, 5, 4).unwrap();
    let warp = build_warp(&red_to_blue(9), &four, &mut NoSlub);
    let weft = build_weft(&red_to_blue(9), &five, &mut NoSlub);

    let err = weave(&warp, &weft, &always_raised(4, 1), four, Layer::Weft).unwrap_err();
    assert!(matches!(err, WeaveError::DimensionMismatch { .. }));
}

#[test]
fn slubbed_layers_keep_their_size() {
    let cfg = WeaveConfig::new(3, 25, 17).unwrap();
    let colours = red_to_blue(101);
    let mut slub = SeededSlub::new(99).with_odds(2, 2);

    assert_eq!(build_warp(&colours, &cfg, &mut slub).size(), (75, 51));
    assert_eq!(build_weft(&colours, &cfg, &mut slub).size(), (75, 51));
}

#[test]
fn demo_documents_render() {
    for name in ["honeysuckle.weave.yaml", "plain.weave.yaml"] {
        let doc = WeaveDocument::load(&demos_dir().join(name)).unwrap();
        let cfg = doc.config().unwrap();
        let output = doc.render(RenderOptions::default()).unwrap();

        assert_eq!(output.cloth.size(), cfg.size(), "{}", name);
    }
}

#[test]
fn plain_demo_uses_only_thread_colours() {
    let doc = WeaveDocument::load(&demos_dir().join("plain.weave.yaml")).unwrap();
    let output = doc.render(RenderOptions::default()).unwrap();

    let orange = Colour::rgb(255, 100, 0);
    let blue = Colour::rgb(0, 0, 255);
    assert!(output.cloth.pixels().iter().all(|&c| c == orange || c == blue));
    assert!(output.cloth.pixels().contains(&orange));
    assert!(output.cloth.pixels().contains(&blue));
}
