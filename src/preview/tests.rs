use std::path::PathBuf;

use fontpreview_core::SCALABLE_SIZES;

use super::*;
use crate::config::{SampleConfig, ScriptSample};
use crate::font::StyleFlags;
use crate::test_fonts;

const LATIN_SAMPLE: &str = "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz0123456789.,;:!?";

/// Config whose only script sample is Latin.
fn latin_config() -> Config {
    Config {
        samples: SampleConfig {
            scripts: vec![ScriptSample {
                script: "latn".to_owned(),
                sample: LATIN_SAMPLE.to_owned(),
            }],
            ..SampleConfig::default()
        },
        ..Config::default()
    }
}

/// Config with no script samples, so the sample comes from the raw walk.
fn raw_walk_config() -> Config {
    Config {
        samples: SampleConfig {
            scripts: Vec::new(),
            ..SampleConfig::default()
        },
        ..Config::default()
    }
}

fn model(config: Config) -> PreviewModel {
    PreviewModel::with_library(config, FontLibrary::with_dirs(Vec::new()))
}

#[test]
fn missing_file_is_unusable() {
    let mut m = model(Config::default());
    assert!(!m.show_font(&FontSource::file("/nonexistent/NoSuchFont.ttf")));
    assert!(m.state().is_none());
    assert!(m.label().is_none());
    assert!(matches!(
        m.last_error(),
        Some(PreviewError::ResourceUnavailable { .. })
    ));
    assert!(m.at_min());
    assert!(m.at_max());
    assert!(m.layout(DisplayMode::Blocks).is_empty());
}

#[test]
fn unknown_family_is_unusable() {
    let mut m = model(Config::default());
    let source = FontSource::family("Definitely Not Installed", StyleFlags::BOLD);
    assert!(!m.show_font(&source));
    assert!(matches!(m.last_error(), Some(PreviewError::FamilyNotFound { .. })));
}

#[test]
fn non_font_file_is_unusable() {
    let mut m = model(Config::default());
    assert!(!m.show_font(&FontSource::file("Cargo.toml")));
    assert!(m.state().is_none());
}

#[test]
fn zoom_without_font_is_noop() {
    let mut m = model(Config::default());
    assert!(!m.zoom_in());
    assert!(!m.zoom_out());
    assert_eq!(m.zoom_index(), 0);
    assert!(m.current_size().is_none());
    assert!(!m.show_face(1));
}

#[test]
fn latin_font_scenario() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    assert!(m.last_error().is_none());

    let state = m.state().expect("state after successful load");
    assert_eq!(state.sizes.as_slice(), &SCALABLE_SIZES);
    assert!(!state.label.is_empty());

    // Default zoom is the body size (12), not the smallest.
    assert_eq!(m.zoom_index(), 2);
    assert_eq!(m.current_size(), Some(12));
    assert!(!m.at_min());
    assert!(!m.at_max());

    assert!(!state.sample.is_empty());
    assert!(state.sample.chars().all(|ch| LATIN_SAMPLE.contains(ch)));

    assert_eq!(state.sample_runs.len(), state.sizes.len());
    assert_eq!(state.pangram_runs.len(), state.sizes.len());
    assert_eq!(state.curated_runs.len(), 3);
    assert!(state.curated_runs.iter().all(|r| r.size_px == state.body_px));
    for (sized, size) in state.pangram_runs.iter().zip(state.sizes.iter()) {
        assert_eq!(sized.size_px, size);
        assert!(!sized.is_empty());
    }

    let key = crate::font::FaceKey::new(&path, 0);
    let all_runs = state
        .sample_runs
        .iter()
        .chain(&state.curated_runs)
        .chain(&state.pangram_runs)
        .flat_map(|s| &s.runs);
    for run in all_runs {
        assert_eq!(run.face, key);
    }
}

#[test]
fn bitmap_font_uses_only_its_strikes() {
    let mut m = model(Config::default());
    assert!(m.show_font(&FontSource::file(test_fonts::bitmap())));
    let state = m.state().expect("state after successful load");
    assert_eq!(state.sizes.as_slice(), &[8]);
    assert_eq!(state.sample, "AaBbCcDd");

    // The configured 12px body size is not a strike; 8px is used instead.
    assert_eq!(state.body_px, 8);
    assert!(state.curated_runs.iter().all(|r| r.size_px == 8));
    let shaped = state.sample_runs.iter().chain(&state.pangram_runs);
    assert!(shaped.map(|r| r.size_px).all(|px| state.sizes.as_slice().contains(&px)));

    assert_eq!(m.zoom_index(), 0);
    assert_eq!(m.current_size(), Some(8));
    assert!(m.at_min() && m.at_max());
}

#[test]
fn zoom_in_from_max_is_noop() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    while m.zoom_in() {}
    let max = m.zoom_index();
    assert_eq!(max, SCALABLE_SIZES.len() - 1);
    assert!(m.at_max());
    assert!(!m.zoom_in());
    assert_eq!(m.zoom_index(), max);
    assert!(m.at_max());
    assert_eq!(m.current_size(), Some(96));

    while m.zoom_out() {}
    assert!(m.at_min());
    assert_eq!(m.zoom_index(), 0);
}

#[test]
fn zoom_reuses_precomputed_runs() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    let before = m.state().cloned();
    assert!(m.zoom_in());
    assert_eq!(m.state().cloned(), before);
    let current = m.current_sample_runs().expect("runs at zoom index");
    assert_eq!(Some(current.size_px), m.current_size());
    assert_eq!(m.current_pangram_runs().map(|r| r.size_px), m.current_size());
}

#[test]
fn failure_clears_previous_font() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    assert!(m.state().is_some());

    assert!(!m.show_font(&FontSource::file("/nonexistent/Other.ttf")));
    assert!(m.state().is_none());
    assert!(m.at_min() && m.at_max());

    // A later valid load is unaffected by the failure.
    assert!(m.show_font(&FontSource::file(&path)));
    assert!(m.last_error().is_none());
    assert_eq!(m.zoom_index(), 2);
}

#[test]
fn override_text_replaces_sample() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    let derived = m.state().map(|s| s.sample.clone()).expect("state");
    let curated = m.state().map(|s| s.curated_runs.clone());

    assert!(m.set_preview_text(Some("Zoo")));
    let state = m.state().expect("state");
    assert_eq!(state.sample, "Zoo");
    assert_eq!(state.derived, derived);
    assert_eq!(state.sample_runs[0].runs[0].text(), "Zoo");
    assert_eq!(Some(state.curated_runs.clone()), curated);

    // Empty override means "no override".
    assert!(m.set_preview_text(Some("")));
    assert_eq!(m.preview_text(), None);
    assert_eq!(m.state().map(|s| s.sample.as_str()), Some(derived.as_str()));
}

#[test]
fn override_set_before_load_is_used() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(!m.set_preview_text(Some("Hamburgefonstiv")));
    assert!(m.show_font(&FontSource::file(&path)));
    assert_eq!(m.state().map(|s| s.sample.as_str()), Some("Hamburgefonstiv"));
}

#[test]
fn small_resize_is_ignored() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(raw_walk_config());
    assert!(m.show_font(&FontSource::file(&path)));
    let before = m.state().cloned();
    assert!(!m.resize(650, 400));
    assert_eq!(m.state().cloned(), before);
    assert_eq!(m.surface_size(), (650, 400));
}

#[test]
fn large_resize_reshapes_only_the_sample() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(raw_walk_config());
    assert!(m.show_font(&FontSource::file(&path)));
    let before = m.state().cloned().expect("state");

    assert!(m.resize(200, 480));
    let after = m.state().expect("state");
    assert_eq!(after.sample_width, 200);
    assert!(after.sample.chars().count() < before.sample.chars().count());
    assert!(before.sample.starts_with(&after.sample));
    assert_eq!(after.curated_runs, before.curated_runs);
    assert_eq!(after.pangram_runs, before.pangram_runs);
    assert_ne!(after.sample_runs, before.sample_runs);
}

#[test]
fn resize_to_nothing_keeps_previous_sample() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(raw_walk_config());
    assert!(m.show_font(&FontSource::file(&path)));
    let before = m.state().map(|s| s.sample.clone());
    assert!(!m.resize(0, 0));
    assert_eq!(m.state().map(|s| s.sample.clone()), before);
}

#[test]
fn face_switching_on_single_face_file() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let mut m = model(latin_config());
    assert!(m.show_font(&FontSource::file(&path)));
    assert_eq!(m.face_count(), 1);
    assert!(!m.show_face(1));
    assert!(m.state().is_none());
    assert!(m.show_face(0));
    assert!(m.state().is_some());
}

#[test]
fn family_source_resolves_through_library() {
    let Some(path) = test_fonts::latin_sans() else {
        return;
    };
    let face = LoadedFace::open(&path, 0).expect("load");
    let Some(family) = face.family_name() else {
        return;
    };
    let dirs: Vec<PathBuf> = path.parent().map(|d| vec![d.to_path_buf()]).unwrap_or_default();
    let mut m = PreviewModel::with_library(latin_config(), FontLibrary::with_dirs(dirs));
    assert!(m.show_font(&FontSource::family(family.clone(), StyleFlags::empty())));
    assert!(m.label().is_some_and(|l| l.starts_with(&family)));
}
